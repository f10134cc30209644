use satellite_flow_adapters::{DeploymentConfig, Stage};

fn mainnet() -> DeploymentConfig {
    DeploymentConfig {
        stage: Stage::Mainnet,
        ..DeploymentConfig::default()
    }
}

#[test]
fn explorer_lookup_is_case_insensitive_on_chain_name() {
    let config = mainnet();
    let lower = config.block_explorer("ethereum").expect("lower");
    let mixed = config.block_explorer("Ethereum").expect("mixed");
    assert_eq!(lower, mixed);
    assert_eq!(lower.name, "Etherscan");
    assert_eq!(lower.tx_url("0xabc"), "https://etherscan.io/tx/0xabc");
}

#[test]
fn unknown_chain_has_no_explorer_entry() {
    assert!(mainnet().block_explorer("dogechain").is_none());
}

#[test]
fn stages_resolve_distinct_downstream_services() {
    let mainnet = mainnet();
    let testnet = DeploymentConfig::default();
    assert_ne!(mainnet.recovery_tool_url(), testnet.recovery_tool_url());
    assert_ne!(
        mainnet.broadcast_tx_url_base(),
        testnet.broadcast_tx_url_base()
    );
    assert_ne!(
        mainnet.block_explorer("terra").expect("mainnet terra").base_url,
        testnet.block_explorer("terra").expect("testnet terra").base_url
    );
}

#[test]
fn token_table_is_keyed_by_chain_and_symbol() {
    let config = mainnet();
    let ust = config.token_address("Ethereum", "ust").expect("ust entry");
    assert!(ust.starts_with("0x"));
    assert!(config.token_address("Ethereum", "DOGE").is_none());
    assert!(config.token_address("Osmosis", "UST").is_none());
}
