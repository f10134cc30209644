use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch. Zero means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    pub fn is_set(&self) -> bool {
        self.0 > 0
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    pub fn since(&self, earlier: TimestampMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Which end of the transfer a per-side slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Source,
    Destination,
}

/// Integration kind of a chain. Closed set: adding a kind must force every
/// match site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainModule {
    Evm,
    Ibc,
    Terra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain_name: String,
    pub chain_symbol: String,
    pub module: ChainModule,
}

impl ChainInfo {
    pub fn new(name: &str, symbol: &str, module: ChainModule) -> Self {
        Self {
            chain_name: name.to_owned(),
            chain_symbol: symbol.to_owned(),
            module,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub asset_symbol: String,
    pub decimals: u32,
    /// Registry key shared across chains ("uusd", "weth-wei", ...).
    pub common_key: String,
    /// Lowercase name of the chain this asset is the native token of, if any.
    pub native_chain: Option<String>,
}

impl AssetInfo {
    /// Whether this asset is the native token of `chain`. Drives the
    /// automatic-wrapping note in the deposit prompt.
    pub fn is_native_on(&self, chain: &ChainInfo) -> bool {
        self.native_chain
            .as_deref()
            .is_some_and(|native| native.eq_ignore_ascii_case(&chain.chain_name))
    }
}

/// One-time deposit address generated for a single bridging transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub address: String,
    pub asset_symbol: String,
}

/// Per-side confirmation record as reported by the upstream monitor.
/// `amount_confirmed` is the raw display string ("123.456 FOO"); parsing
/// lives in [`crate::amounts`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfirmationStatus {
    pub number_confirmations: u32,
    pub number_required: u32,
    pub amount_confirmed: Option<String>,
    pub transaction_hash: Option<String>,
}

/// Outcome of the downstream confirmation transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastResult {
    Success { tx_hash: String },
    Failure { tx_hash: String },
}

impl BroadcastResult {
    pub fn tx_hash(&self) -> &str {
        match self {
            BroadcastResult::Success { tx_hash } | BroadcastResult::Failure { tx_hash } => tx_hash,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BroadcastResult::Success { .. })
    }
}

/// Wallet families a user can be prompted to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletKind {
    /// Browser-extension EVM wallet (Metamask-style).
    Extension,
    /// IBC wallet (Keplr-style).
    Ibc,
    /// Terra Station-style wallet.
    Terra,
}

/// Payload of the add-token wallet request (`wallet_watchAsset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
}

/// A block-explorer deployment entry, per chain and stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerEntry {
    pub name: String,
    /// Base URL; a transaction hash is appended verbatim.
    pub base_url: String,
}

impl ExplorerEntry {
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}{}", self.base_url, tx_hash)
    }
}

/// A resolved, clickable link in the status list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLink {
    pub label: String,
    pub url: String,
}
