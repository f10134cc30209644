use std::sync::{Arc, Mutex};

use satellite_flow_core::{
    can_light_up, AssetInfo, BridgeStore, ChainInfo, ChainModule, Side, TransferStep,
};

fn lit_store() -> BridgeStore {
    let mut store = BridgeStore::new();
    store.update(|s| {
        s.source_chain = Some(ChainInfo::new("Avalanche", "AVAX", ChainModule::Evm));
        s.destination_chain = Some(ChainInfo::new("Ethereum", "ETH", ChainModule::Evm));
        s.source_asset = Some(AssetInfo {
            asset_symbol: "USDC".to_owned(),
            decimals: 6,
            common_key: "uusdc".to_owned(),
            native_chain: None,
        });
        s.destination_address = Some("0x00000000000000000000000000000000deadbeef".to_owned());
        s.destination_address_valid = true;
    });
    store
}

#[test]
fn can_light_up_requires_all_five_conditions() {
    let store = lit_store();
    assert!(can_light_up(store.state()));

    // Dropping any one condition turns it off.
    let mut missing_source = lit_store();
    missing_source.update(|s| s.source_chain = None);
    assert!(!can_light_up(missing_source.state()));

    let mut missing_dest = lit_store();
    missing_dest.update(|s| s.destination_chain = None);
    assert!(!can_light_up(missing_dest.state()));

    let mut same_chain = lit_store();
    same_chain.update(|s| {
        s.destination_chain = Some(ChainInfo::new("Avalanche", "AVAX", ChainModule::Evm));
    });
    assert!(!can_light_up(same_chain.state()));

    let mut missing_asset = lit_store();
    missing_asset.update(|s| s.source_asset = None);
    assert!(!can_light_up(missing_asset.state()));

    let mut invalid_address = lit_store();
    invalid_address.update(|s| s.destination_address_valid = false);
    assert!(!can_light_up(invalid_address.state()));
}

#[test]
fn step_advance_is_monotonic() {
    let mut store = BridgeStore::new();
    assert_eq!(
        store.advance_step(TransferStep::ConfirmingDeposit),
        TransferStep::ConfirmingDeposit
    );
    // Moving backwards is refused.
    assert_eq!(
        store.advance_step(TransferStep::AwaitingDeposit),
        TransferStep::ConfirmingDeposit
    );
    assert_eq!(
        store.advance_step(TransferStep::TransferComplete),
        TransferStep::TransferComplete
    );
}

#[test]
fn subscribers_see_every_revision_until_unsubscribed() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut store = BridgeStore::new();
    let id = store.subscribe(move |revision| {
        sink.lock().expect("sink lock").push(revision);
    });

    store.update(|s| s.show_tx_history = true);
    store.update(|s| s.is_submitting = true);
    assert_eq!(*seen.lock().expect("seen lock"), vec![1, 2]);

    store.unsubscribe(id);
    store.update(|s| s.is_submitting = false);
    assert_eq!(*seen.lock().expect("seen lock"), vec![1, 2]);
    assert_eq!(store.revision(), 3);
}

#[test]
fn selecting_a_source_chain_clears_the_asset() {
    let mut store = lit_store();
    store.select_chain(
        Side::Source,
        Some(ChainInfo::new("Fantom", "FTM", ChainModule::Evm)),
    );
    assert!(store.state().source_asset.is_none());
    assert_eq!(
        store
            .state()
            .chain_selection(Side::Source)
            .map(|c| c.chain_name.as_str()),
        Some("Fantom")
    );
}
