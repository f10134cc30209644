use satellite_flow_core::{
    should_reveal_recovery, BridgeState, ChainInfo, ChainModule, RecoveryPollInputs,
    RecoveryWatch, TimestampMs,
};

const THRESHOLD: u64 = 150_000;

fn base_inputs(now: u64) -> RecoveryPollInputs {
    RecoveryPollInputs {
        now: TimestampMs(now),
        deposit_timestamp: TimestampMs(1_000),
        broadcast_seen: false,
        already_revealed: false,
        source_module: Some(ChainModule::Ibc),
        has_enough_confirmations: false,
        wait_threshold_ms: THRESHOLD,
    }
}

#[test]
fn no_deposit_flow_means_no_reveal() {
    let mut inputs = base_inputs(10_000_000);
    inputs.deposit_timestamp = TimestampMs(0);
    assert!(!should_reveal_recovery(&inputs));
}

#[test]
fn existing_broadcast_suppresses_reveal() {
    let mut inputs = base_inputs(10_000_000);
    inputs.broadcast_seen = true;
    assert!(!should_reveal_recovery(&inputs));
}

#[test]
fn non_evm_reveals_on_elapsed_time_alone() {
    for module in [Some(ChainModule::Ibc), Some(ChainModule::Terra), None] {
        let mut inputs = base_inputs(1_000 + THRESHOLD + 1);
        inputs.source_module = module;
        assert!(should_reveal_recovery(&inputs), "module {module:?}");

        let mut early = base_inputs(1_000 + THRESHOLD);
        early.source_module = module;
        assert!(!should_reveal_recovery(&early), "module {module:?}");
    }
}

#[test]
fn evm_requires_enough_confirmations_regardless_of_elapsed_time() {
    let mut inputs = base_inputs(u64::MAX / 2);
    inputs.source_module = Some(ChainModule::Evm);
    inputs.has_enough_confirmations = false;
    assert!(!should_reveal_recovery(&inputs));

    inputs.has_enough_confirmations = true;
    assert!(should_reveal_recovery(&inputs));
}

fn waiting_state() -> BridgeState {
    BridgeState {
        source_chain: Some(ChainInfo::new("Osmosis", "OSMO", ChainModule::Ibc)),
        deposit_timestamp: TimestampMs(1_000),
        ..BridgeState::default()
    }
}

#[test]
fn watch_rate_limits_to_its_poll_interval() {
    let mut watch = RecoveryWatch::with_interval(THRESHOLD, 3_000);
    let state = waiting_state();

    // First evaluation happens immediately but the wait is not over yet.
    assert!(!watch.tick(TimestampMs(149_000), &state));
    // Over the wait threshold now, but less than one interval since the
    // last evaluation: the tick is skipped.
    assert!(!watch.tick(TimestampMs(151_500), &state));
    assert!(!watch.revealed());
    // A full interval after the last evaluation it runs and fires.
    assert!(watch.tick(TimestampMs(152_500), &state));
    assert!(watch.revealed());
}

#[test]
fn latch_never_resets_even_if_wait_condition_clears() {
    let mut watch = RecoveryWatch::with_interval(THRESHOLD, 3_000);
    let mut state = waiting_state();

    assert!(watch.tick(TimestampMs(1_001 + THRESHOLD), &state));
    assert!(watch.revealed());

    // A later deposit restarts the clock; over_wait is now false, and ticks
    // must not clear the reveal.
    state.deposit_timestamp = TimestampMs(2_000_000);
    assert!(!watch.tick(TimestampMs(2_001_000), &state));
    assert!(watch.revealed());
}
