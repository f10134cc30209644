//! Status-stepper view model.
//!
//! [`build_status_list`] is a total, pure mapping from observed state to a
//! renderable description of the four-step flow. Missing upstream data maps
//! to neutral fallback variants; no branch produces an error. The shell
//! resolves deployment config (explorer tables, fee table, recovery URL)
//! before calling in, so this module stays free of I/O and lookups.

use bigdecimal::BigDecimal;

use crate::amounts;
use crate::domain::{
    AssetInfo, BroadcastResult, ChainInfo, ChainModule, ConfirmationStatus, DepositAddress,
    ExplorerEntry, ExplorerLink, TokenDetails, WalletKind,
};
use crate::step::TransferStep;

/// Everything the stepper needs for one render, with config already
/// resolved against the current selection.
#[derive(Debug, Clone, Default)]
pub struct StepperInputs<'a> {
    pub active_step: TransferStep,
    pub wallet_connected: bool,

    pub source_chain: Option<&'a ChainInfo>,
    pub destination_chain: Option<&'a ChainInfo>,
    pub source_asset: Option<&'a AssetInfo>,
    pub destination_address: Option<&'a str>,
    pub deposit_address: Option<&'a DepositAddress>,
    pub source_confirmations: Option<&'a ConfirmationStatus>,
    pub destination_confirmations: Option<&'a ConfirmationStatus>,
    pub deposit_tx_hash: Option<&'a str>,
    pub broadcast_result: Option<&'a BroadcastResult>,
    /// The slow-deposit latch has fired.
    pub recovery_revealed: bool,

    pub source_explorer: Option<&'a ExplorerEntry>,
    pub destination_explorer: Option<&'a ExplorerEntry>,
    /// Base URL for downstream broadcast transactions (network explorer).
    pub broadcast_explorer_base: Option<&'a str>,
    pub recovery_tool_url: Option<&'a str>,
    pub min_deposit_amount: Option<&'a BigDecimal>,
    /// Token resolved from the per-deployment address table, when the
    /// destination is an EVM chain that can watch it.
    pub watchable_token: Option<&'a TokenDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusListView {
    pub rows: [StatusRow; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub step: TransferStep,
    /// The flow has reached this station; earlier rows render as done.
    pub reached: bool,
    pub body: StepBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepBody {
    Generate(GenerateView),
    Deposit(DepositView),
    Confirm(ConfirmView),
    Transfer(TransferView),
}

/// Step 1: always names the asset and the (shortened) recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateView {
    pub asset_symbol: String,
    pub recipient_short: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DepositView {
    /// Below step 2: generic waiting text.
    Waiting,
    Ready {
        /// Full address, for the copy-to-clipboard affordance.
        address: String,
        address_short: String,
        follow_up: DepositFollowUp,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DepositFollowUp {
    /// Deposit transaction is visible on the source-chain explorer.
    ExplorerLink(ExplorerLink),
    /// Wallet not connected yet: offer the connect choices.
    WalletPrompt(WalletPrompt),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPrompt {
    pub lead_in: String,
    pub options: Vec<WalletOption>,
    /// Shown when the selected asset is the source chain's native token.
    pub native_wrap_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletOption {
    pub wallet: WalletKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmView {
    Confirmed {
        amount: String,
        after_fees: String,
        asset_symbol: String,
        destination_chain: String,
        eta_minutes: u8,
        broadcast_link: Option<ExplorerLink>,
    },
    RecoveryAvailable {
        tool_url: String,
    },
    BroadcastFailed {
        link: ExplorerLink,
    },
    Detecting {
        source_chain: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferView {
    Detecting {
        destination_chain: String,
    },
    Completed {
        link: ExplorerLink,
        explorer_name: String,
        add_token: Option<TokenDetails>,
    },
    /// Destination hash present but no explorer entry for the chain.
    CompletedNoExplorer,
}

/// Shorten to `keep` leading and trailing characters joined by "...".
pub fn shorten_word(word: &str, keep: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= keep * 2 {
        return word.to_owned();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}...{tail}")
}

pub fn build_status_list(inputs: &StepperInputs<'_>) -> StatusListView {
    let rows = [
        row(inputs, TransferStep::GeneratingDepositAddress, StepBody::Generate(generate_view(inputs))),
        row(inputs, TransferStep::AwaitingDeposit, StepBody::Deposit(deposit_view(inputs))),
        row(inputs, TransferStep::ConfirmingDeposit, StepBody::Confirm(confirm_view(inputs))),
        row(inputs, TransferStep::TransferComplete, StepBody::Transfer(transfer_view(inputs))),
    ];
    StatusListView { rows }
}

fn row(inputs: &StepperInputs<'_>, step: TransferStep, body: StepBody) -> StatusRow {
    StatusRow {
        step,
        reached: inputs.active_step.reached(step),
        body,
    }
}

fn generate_view(inputs: &StepperInputs<'_>) -> GenerateView {
    GenerateView {
        asset_symbol: inputs
            .source_asset
            .map(|a| a.asset_symbol.clone())
            .unwrap_or_else(|| "...".to_owned()),
        recipient_short: inputs
            .destination_address
            .map(|addr| shorten_word(addr, 5))
            .unwrap_or_else(|| "...".to_owned()),
    }
}

fn deposit_view(inputs: &StepperInputs<'_>) -> DepositView {
    if !inputs.active_step.reached(TransferStep::AwaitingDeposit) {
        return DepositView::Waiting;
    }
    let address = inputs
        .deposit_address
        .map(|d| d.address.clone())
        .unwrap_or_default();
    let follow_up = deposit_follow_up(inputs);
    DepositView::Ready {
        address_short: shorten_word(&address, 5),
        address,
        follow_up,
    }
}

fn deposit_follow_up(inputs: &StepperInputs<'_>) -> DepositFollowUp {
    // A known deposit hash at step 3 ends the connect affordance for good,
    // whether or not the source chain has an explorer entry to link to.
    if inputs.active_step.reached(TransferStep::ConfirmingDeposit) {
        if let Some(hash) = inputs.deposit_tx_hash {
            return match inputs.source_explorer {
                Some(explorer) => DepositFollowUp::ExplorerLink(ExplorerLink {
                    label: "Deposit Transaction".to_owned(),
                    url: explorer.tx_url(hash),
                }),
                None => DepositFollowUp::None,
            };
        }
    }
    if inputs.wallet_connected {
        return DepositFollowUp::None;
    }
    match wallet_prompt(inputs) {
        Some(prompt) => DepositFollowUp::WalletPrompt(prompt),
        None => DepositFollowUp::None,
    }
}

/// The Terra chain offers both IBC and Terra Station wallets; every other
/// chain offers exactly one wallet determined by its module kind.
fn wallet_prompt(inputs: &StepperInputs<'_>) -> Option<WalletPrompt> {
    let chain = inputs.source_chain?;
    match chain.module {
        ChainModule::Terra => Some(WalletPrompt {
            lead_in: "Send IBC transfer here via:".to_owned(),
            options: vec![
                WalletOption {
                    wallet: WalletKind::Ibc,
                    label: "Keplr Wallet".to_owned(),
                },
                WalletOption {
                    wallet: WalletKind::Terra,
                    label: "Terra Station".to_owned(),
                },
            ],
            native_wrap_note: None,
        }),
        ChainModule::Evm => Some(WalletPrompt {
            lead_in: "Send deposit here via:".to_owned(),
            options: vec![WalletOption {
                wallet: WalletKind::Extension,
                label: "Metamask".to_owned(),
            }],
            native_wrap_note: native_wrap_note(inputs, chain),
        }),
        ChainModule::Ibc => Some(WalletPrompt {
            lead_in: "Send IBC transfer here via:".to_owned(),
            options: vec![WalletOption {
                wallet: WalletKind::Ibc,
                label: "Keplr".to_owned(),
            }],
            native_wrap_note: native_wrap_note(inputs, chain),
        }),
    }
}

fn native_wrap_note(inputs: &StepperInputs<'_>, chain: &ChainInfo) -> Option<String> {
    let asset = inputs.source_asset?;
    if !asset.is_native_on(chain) {
        return None;
    }
    Some(format!(
        "(Satellite accepts native {sym} tokens and automatically converts them to W{sym} for the required deposit.)",
        sym = chain.chain_symbol
    ))
}

fn confirm_view(inputs: &StepperInputs<'_>) -> ConfirmView {
    if inputs.active_step.reached(TransferStep::ConfirmingDeposit) {
        return confirmed_amounts(inputs);
    }
    if inputs.recovery_revealed {
        return ConfirmView::RecoveryAvailable {
            tool_url: inputs.recovery_tool_url.unwrap_or_default().to_owned(),
        };
    }
    if let Some(result @ BroadcastResult::Failure { .. }) = inputs.broadcast_result {
        return ConfirmView::BroadcastFailed {
            link: ExplorerLink {
                label: "Confirm tx failed".to_owned(),
                url: broadcast_url(inputs, result.tx_hash()),
            },
        };
    }
    ConfirmView::Detecting {
        source_chain: chain_name_or_placeholder(inputs.source_chain),
    }
}

fn confirmed_amounts(inputs: &StepperInputs<'_>) -> ConfirmView {
    let decimals = inputs.source_asset.map(|a| a.decimals).unwrap_or(1);
    let adjusted = inputs
        .source_confirmations
        .and_then(|c| c.amount_confirmed.as_deref())
        .and_then(amounts::parse_confirmed_atomic)
        .map(|atomic| amounts::adjust_by_decimals(&atomic, decimals))
        .unwrap_or_default();
    let after_fees = match inputs.min_deposit_amount {
        Some(fee) => amounts::subtract_fee(&adjusted, fee),
        None => adjusted.clone(),
    };
    let destination = chain_name_or_placeholder(inputs.destination_chain);

    let broadcast_link = match inputs.broadcast_result {
        Some(result @ BroadcastResult::Success { .. }) => Some(ExplorerLink {
            label: "View Tx".to_owned(),
            url: broadcast_url(inputs, result.tx_hash()),
        }),
        _ => None,
    };

    ConfirmView::Confirmed {
        amount: amounts::format_amount(&adjusted),
        after_fees: amounts::format_amount(&after_fees),
        asset_symbol: inputs
            .source_asset
            .map(|a| a.asset_symbol.clone())
            .unwrap_or_default(),
        eta_minutes: amounts::eta_minutes(&destination),
        destination_chain: destination,
        broadcast_link,
    }
}

fn transfer_view(inputs: &StepperInputs<'_>) -> TransferView {
    if !inputs.active_step.reached(TransferStep::TransferComplete) {
        return TransferView::Detecting {
            destination_chain: chain_name_or_placeholder(inputs.destination_chain),
        };
    }
    let destination_hash = inputs
        .destination_confirmations
        .and_then(|c| c.transaction_hash.as_deref());
    match (destination_hash, inputs.destination_explorer) {
        (Some(hash), Some(explorer)) => {
            let add_token = match inputs.destination_chain.map(|c| c.module) {
                Some(ChainModule::Evm) => inputs.watchable_token.cloned(),
                Some(ChainModule::Ibc) | Some(ChainModule::Terra) | None => None,
            };
            TransferView::Completed {
                link: ExplorerLink {
                    label: "here".to_owned(),
                    url: explorer.tx_url(hash),
                },
                explorer_name: explorer.name.clone(),
                add_token,
            }
        }
        _ => TransferView::CompletedNoExplorer,
    }
}

fn broadcast_url(inputs: &StepperInputs<'_>, tx_hash: &str) -> String {
    match inputs.broadcast_explorer_base {
        Some(base) => format!("{base}{tx_hash}"),
        None => tx_hash.to_owned(),
    }
}

fn chain_name_or_placeholder(chain: Option<&ChainInfo>) -> String {
    chain
        .map(|c| c.chain_name.clone())
        .unwrap_or_else(|| "...".to_owned())
}
