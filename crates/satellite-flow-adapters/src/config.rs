//! Per-deployment configuration: stage and maintenance flags, wait
//! thresholds, block-explorer and token-address tables, downstream service
//! URLs. Environment variables override the stage defaults.

use satellite_flow_core::ExplorerEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    Devnet,
    #[default]
    Testnet,
    Mainnet,
}

impl Stage {
    fn parse(raw: &str) -> Option<Stage> {
        match raw.to_ascii_lowercase().as_str() {
            "devnet" => Some(Stage::Devnet),
            "testnet" => Some(Stage::Testnet),
            "mainnet" => Some(Stage::Mainnet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub stage: Stage,
    pub under_maintenance: bool,
    /// How long a deposit may go undetected before the recovery tool is
    /// offered.
    pub wait_until_recovery_ms: u64,
    /// Period of the status poll that drives the recovery latch.
    pub stepper_poll_interval_ms: u64,
    pub request_timeout_ms: u64,
    /// Captcha verifier endpoint; unset means the deterministic dev token.
    pub captcha_endpoint: Option<String>,
    /// Extension-bridge JSON-RPC proxy; unset means the deterministic wallet.
    pub wallet_proxy_url: Option<String>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            stage: Stage::default(),
            under_maintenance: false,
            wait_until_recovery_ms: 150_000,
            stepper_poll_interval_ms: 3_000,
            request_timeout_ms: 15_000,
            captcha_endpoint: None,
            wallet_proxy_url: None,
        }
    }
}

impl DeploymentConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("SATELLITE_STAGE") {
            if let Some(stage) = Stage::parse(&raw) {
                config.stage = stage;
            }
        }
        if let Ok(raw) = std::env::var("SATELLITE_UNDER_MAINTENANCE") {
            config.under_maintenance = raw == "true" || raw == "1";
        }
        if let Ok(raw) = std::env::var("SATELLITE_RECOVERY_WAIT_MS") {
            if let Ok(ms) = raw.parse() {
                config.wait_until_recovery_ms = ms;
            }
        }
        if let Ok(url) = std::env::var("SATELLITE_CAPTCHA_ENDPOINT") {
            if !url.is_empty() {
                config.captcha_endpoint = Some(url);
            }
        }
        if let Ok(url) = std::env::var("SATELLITE_WALLET_PROXY_URL") {
            if !url.is_empty() {
                config.wallet_proxy_url = Some(url);
            }
        }
        config
    }

    /// Block-explorer entry for a chain, keyed by lowercase chain name.
    pub fn block_explorer(&self, chain_name: &str) -> Option<ExplorerEntry> {
        let (name, base_url) = match (self.stage, chain_name.to_ascii_lowercase().as_str()) {
            (Stage::Mainnet, "ethereum") => ("Etherscan", "https://etherscan.io/tx/"),
            (Stage::Mainnet, "avalanche") => ("Snowtrace", "https://snowtrace.io/tx/"),
            (Stage::Mainnet, "polygon") => ("Polygonscan", "https://polygonscan.com/tx/"),
            (Stage::Mainnet, "fantom") => ("FTMScan", "https://ftmscan.com/tx/"),
            (Stage::Mainnet, "moonbeam") => ("Moonscan", "https://moonscan.io/tx/"),
            (Stage::Mainnet, "terra") => ("Terra Finder", "https://finder.terra.money/mainnet/tx/"),
            (Stage::Mainnet, "osmosis") => {
                ("Mintscan", "https://www.mintscan.io/osmosis/txs/")
            }
            (Stage::Mainnet, "cosmoshub") => {
                ("Mintscan", "https://www.mintscan.io/cosmos/txs/")
            }
            (Stage::Mainnet, "axelar") => ("Axelarscan", "https://axelarscan.io/tx/"),
            (Stage::Testnet | Stage::Devnet, "ethereum") => {
                ("Etherscan (Ropsten)", "https://ropsten.etherscan.io/tx/")
            }
            (Stage::Testnet | Stage::Devnet, "avalanche") => {
                ("Snowtrace (Fuji)", "https://testnet.snowtrace.io/tx/")
            }
            (Stage::Testnet | Stage::Devnet, "polygon") => {
                ("Polygonscan (Mumbai)", "https://mumbai.polygonscan.com/tx/")
            }
            (Stage::Testnet | Stage::Devnet, "terra") => {
                ("Terra Finder", "https://finder.terra.money/testnet/tx/")
            }
            (Stage::Testnet | Stage::Devnet, "axelar") => {
                ("Axelarscan", "https://testnet.axelarscan.io/tx/")
            }
            _ => return None,
        };
        Some(ExplorerEntry {
            name: name.to_owned(),
            base_url: base_url.to_owned(),
        })
    }

    /// Base URL for downstream confirmation transactions on the network
    /// explorer; a tx hash is appended verbatim.
    pub fn broadcast_tx_url_base(&self) -> &'static str {
        match self.stage {
            Stage::Mainnet => "https://axelarscan.io/tx/",
            Stage::Testnet | Stage::Devnet => "https://testnet.axelarscan.io/tx/",
        }
    }

    pub fn recovery_tool_url(&self) -> &'static str {
        match self.stage {
            Stage::Mainnet => "https://recovery.satellite.money",
            Stage::Testnet | Stage::Devnet => "https://testnet.recovery.satellite.money",
        }
    }

    /// Wrapped-token contract address on an EVM chain, keyed by asset
    /// symbol. Feeds the add-token wallet request.
    pub fn token_address(&self, chain_name: &str, asset_symbol: &str) -> Option<String> {
        let address = match (
            self.stage,
            chain_name.to_ascii_lowercase().as_str(),
            asset_symbol.to_ascii_uppercase().as_str(),
        ) {
            (Stage::Mainnet, "ethereum", "UST") => "0xa693B19d2931d498c5B318dF961919BB4aee87a5",
            (Stage::Mainnet, "ethereum", "LUNA") => "0x31DAB3430f3081dfF3Ccd80F17AD98583437B213",
            (Stage::Mainnet, "ethereum", "USDC") => "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            (Stage::Mainnet, "avalanche", "UST") => "0xb599c3590F42f8F995ECfa0f85D2980B76862fc1",
            (Stage::Mainnet, "avalanche", "LUNA") => "0x120AD3e5A7c796349e591F1570D9f7980F4eA9cb",
            (Stage::Mainnet, "polygon", "UST") => "0xeDDc6eDe8F3AF9B4971e1Fa9639314905458bE9F",
            (Stage::Mainnet, "fantom", "UST") => "0x2B9d3F168905067D88d93F094C938BACEe02b0cB",
            (Stage::Mainnet, "moonbeam", "UST") => "0x085416975fe14C2A731a97eC38B9bF8135231F62",
            (Stage::Testnet | Stage::Devnet, "ethereum", "UST") => {
                "0x6cA13a4ab78dd7D657226b155873A04DB929A3A4"
            }
            (Stage::Testnet | Stage::Devnet, "avalanche", "UST") => {
                "0x43F4600b552089655645f8c16D86A5a9Fa296bc3"
            }
            _ => return None,
        };
        Some(address.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{DeploymentConfig, Stage};

    #[test]
    fn stage_parse_ignores_case_and_rejects_garbage() {
        assert_eq!(Stage::parse("Mainnet"), Some(Stage::Mainnet));
        assert_eq!(Stage::parse("TESTNET"), Some(Stage::Testnet));
        assert_eq!(Stage::parse("prod"), None);
    }

    #[test]
    fn defaults_match_deployment_constants() {
        let config = DeploymentConfig::default();
        assert_eq!(config.wait_until_recovery_ms, 150_000);
        assert_eq!(config.stepper_poll_interval_ms, 3_000);
        assert!(!config.under_maintenance);
    }
}
