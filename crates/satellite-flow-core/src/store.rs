//! Bridge state container.
//!
//! Every slot the flow observes lives in [`BridgeState`]; [`BridgeStore`] is
//! the single write owner. Reads go through `state()`, writes through
//! `update()`, which bumps a revision counter and notifies subscribers.
//! Renderers never mutate — they are pure functions over a snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AssetInfo, BroadcastResult, ChainInfo, ConfirmationStatus, DepositAddress, Side, TimestampMs,
};
use crate::step::TransferStep;

pub type SubscriptionId = u64;

/// A completed transfer, kept for the in-session history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub asset_symbol: String,
    pub amount: String,
    pub source_chain: String,
    pub destination_chain: String,
    pub completed_at: TimestampMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    pub source_chain: Option<ChainInfo>,
    pub destination_chain: Option<ChainInfo>,
    pub source_asset: Option<AssetInfo>,
    pub destination_address: Option<String>,
    pub destination_address_valid: bool,

    pub deposit_address: Option<DepositAddress>,
    pub deposit_timestamp: TimestampMs,
    pub source_confirmations: ConfirmationStatus,
    pub destination_confirmations: ConfirmationStatus,
    pub deposit_tx_hash: Option<String>,
    pub has_enough_deposit_confirmation: bool,
    pub broadcast_result: Option<BroadcastResult>,

    pub active_step: TransferStep,
    pub wallet_connected: bool,
    pub history: Vec<TransferRecord>,

    pub show_disclaimer: bool,
    pub show_disclaimer_from_faq: bool,
    pub show_tx_history: bool,
    pub is_submitting: bool,
}

impl Default for BridgeState {
    fn default() -> Self {
        Self {
            source_chain: None,
            destination_chain: None,
            source_asset: None,
            destination_address: None,
            destination_address_valid: false,
            deposit_address: None,
            deposit_timestamp: TimestampMs(0),
            source_confirmations: ConfirmationStatus::default(),
            destination_confirmations: ConfirmationStatus::default(),
            deposit_tx_hash: None,
            has_enough_deposit_confirmation: false,
            broadcast_result: None,
            active_step: TransferStep::GeneratingDepositAddress,
            wallet_connected: false,
            history: Vec::new(),
            show_disclaimer: true,
            show_disclaimer_from_faq: false,
            show_tx_history: false,
            is_submitting: false,
        }
    }
}

impl BridgeState {
    pub fn chain_selection(&self, side: Side) -> Option<&ChainInfo> {
        match side {
            Side::Source => self.source_chain.as_ref(),
            Side::Destination => self.destination_chain.as_ref(),
        }
    }

    pub fn confirmations(&self, side: Side) -> &ConfirmationStatus {
        match side {
            Side::Source => &self.source_confirmations,
            Side::Destination => &self.destination_confirmations,
        }
    }
}

/// The swap affordance lights up only when the whole selection is coherent:
/// both chains picked, distinct by name, an asset chosen, and a destination
/// address that passed validation.
pub fn can_light_up(state: &BridgeState) -> bool {
    let distinct_chains = match (&state.source_chain, &state.destination_chain) {
        (Some(src), Some(dst)) => src.chain_name != dst.chain_name,
        _ => false,
    };
    distinct_chains && state.source_asset.is_some() && state.destination_address_valid
}

type Subscriber = Box<dyn FnMut(u64) + Send>;

pub struct BridgeStore {
    state: BridgeState,
    revision: u64,
    next_subscription: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl Default for BridgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeStore {
    pub fn new() -> Self {
        Self {
            state: BridgeState::default(),
            revision: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a write and notify subscribers with the new revision.
    pub fn update(&mut self, f: impl FnOnce(&mut BridgeState)) {
        f(&mut self.state);
        self.revision += 1;
        let revision = self.revision;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(revision);
        }
    }

    /// Advance the step, refusing to move backwards. Returns the step in
    /// effect afterwards.
    pub fn advance_step(&mut self, step: TransferStep) -> TransferStep {
        if step > self.state.active_step {
            self.update(|s| s.active_step = step);
        }
        self.state.active_step
    }

    pub fn select_chain(&mut self, side: Side, chain: Option<ChainInfo>) {
        self.update(|s| match side {
            Side::Source => {
                s.source_chain = chain;
                // An asset belongs to the chain it was picked on.
                s.source_asset = None;
            }
            Side::Destination => s.destination_chain = chain,
        });
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(u64) + Send + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}
