use satellite_flow_core::{ClockPort, PortError, TimestampMs};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockAdapter;

impl ClockPort for SystemClockAdapter {
    fn now_ms(&self) -> Result<TimestampMs, PortError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| PortError::Transport(format!("time error: {e}")))?;
        Ok(TimestampMs(now.as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::SystemClockAdapter;
    use satellite_flow_core::ClockPort;

    #[test]
    fn system_clock_is_monotone_enough() {
        let clock = SystemClockAdapter;
        let a = clock.now_ms().expect("now");
        let b = clock.now_ms().expect("now again");
        assert!(b >= a);
        // Sanity: after 2020-01-01.
        assert!(a.0 > 1_577_836_800_000);
    }
}
