//! Slow-deposit recovery reveal.
//!
//! While a deposit is being detected, a background poll decides when to
//! surface the external recovery tool. The decision is a pure function; the
//! one-way reveal is a [`Latch`] owned by [`RecoveryWatch`].

use crate::domain::{ChainModule, TimestampMs};
use crate::latch::Latch;
use crate::store::BridgeState;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy)]
pub struct RecoveryPollInputs {
    pub now: TimestampMs,
    pub deposit_timestamp: TimestampMs,
    /// A downstream broadcast result already exists.
    pub broadcast_seen: bool,
    /// The recovery affordance is already visible.
    pub already_revealed: bool,
    pub source_module: Option<ChainModule>,
    pub has_enough_confirmations: bool,
    pub wait_threshold_ms: u64,
}

/// Whether this poll should reveal the recovery tool.
///
/// EVM source chains additionally require the deposit to have gathered
/// enough confirmations; every other module kind reveals on elapsed time
/// alone.
pub fn should_reveal_recovery(inputs: &RecoveryPollInputs) -> bool {
    if !inputs.deposit_timestamp.is_set() || inputs.broadcast_seen || inputs.already_revealed {
        return false;
    }
    let over_wait = inputs.now.since(inputs.deposit_timestamp) > inputs.wait_threshold_ms;
    match inputs.source_module {
        Some(ChainModule::Evm) => over_wait && inputs.has_enough_confirmations,
        Some(ChainModule::Ibc) | Some(ChainModule::Terra) | None => over_wait,
    }
}

/// Rate-limited watcher around the reveal latch. `tick` may be called every
/// frame; evaluations run at most once per poll interval.
#[derive(Debug)]
pub struct RecoveryWatch {
    latch: Latch,
    wait_threshold_ms: u64,
    poll_interval_ms: u64,
    last_evaluated: Option<TimestampMs>,
}

impl RecoveryWatch {
    pub fn new(wait_threshold_ms: u64) -> Self {
        Self::with_interval(wait_threshold_ms, DEFAULT_POLL_INTERVAL_MS)
    }

    pub fn with_interval(wait_threshold_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            latch: Latch::new(),
            wait_threshold_ms,
            poll_interval_ms,
            last_evaluated: None,
        }
    }

    pub fn revealed(&self) -> bool {
        self.latch.is_set()
    }

    /// Evaluate at most once per interval; returns true on the tick that
    /// fires the latch.
    pub fn tick(&mut self, now: TimestampMs, state: &BridgeState) -> bool {
        if let Some(last) = self.last_evaluated {
            if now.since(last) < self.poll_interval_ms {
                return false;
            }
        }
        self.last_evaluated = Some(now);

        let inputs = RecoveryPollInputs {
            now,
            deposit_timestamp: state.deposit_timestamp,
            broadcast_seen: state.broadcast_result.is_some(),
            already_revealed: self.latch.is_set(),
            source_module: state.source_chain.as_ref().map(|c| c.module),
            has_enough_confirmations: state.has_enough_deposit_confirmation,
            wait_threshold_ms: self.wait_threshold_ms,
        };
        if should_reveal_recovery(&inputs) {
            return self.latch.trigger();
        }
        false
    }
}
