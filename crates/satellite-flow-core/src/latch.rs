/// One-way boolean latch. Once triggered it stays set; there is no reset,
/// so "never goes back" is enforced by the type rather than by call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the latch. Idempotent; returns true only on the firing call.
    pub fn trigger(&mut self) -> bool {
        let first = !self.fired;
        self.fired = true;
        first
    }

    pub fn is_set(&self) -> bool {
        self.fired
    }
}
