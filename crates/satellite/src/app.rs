//! Main application state and update loop

use std::sync::{Arc, Mutex};

use eframe::egui;

use satellite_flow_adapters::{DeploymentConfig, Stage};
use satellite_flow_core::{
    can_light_up, BridgeStore, DepositAddress, RecoveryWatch, TimestampMs, TransferRecord,
    TransferStep,
};

use crate::chrome;
use crate::flow_bridge::{CaptchaResult, FlowBridge, WalletConnectResult};
use crate::state::{SwapFormState, WalkthroughState};
use crate::status_list;
use crate::swap::{self, SwapAction};

/// How long the demo-local deposit-address derivation takes.
const GENERATION_MS: u64 = 600;

pub struct App {
    store: BridgeStore,
    bridge: FlowBridge,
    recovery: RecoveryWatch,

    /// Captcha gate for the swap widget
    captcha_token: Option<String>,
    captcha_requested: bool,
    captcha_error: Option<String>,
    captcha_result: Arc<Mutex<Option<CaptchaResult>>>,

    /// Async wallet-connect result receiver
    wallet_result: Arc<Mutex<Option<WalletConnectResult>>>,

    form: SwapFormState,
    walkthrough: WalkthroughState,

    /// Deposit-address generation in flight since this instant
    pending_generation: Option<TimestampMs>,
    history_recorded: bool,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DeploymentConfig) -> Self {
        let recovery = RecoveryWatch::with_interval(
            config.wait_until_recovery_ms,
            config.stepper_poll_interval_ms,
        );
        let bridge = FlowBridge::new(config);
        Self {
            store: BridgeStore::new(),
            bridge,
            recovery,
            captcha_token: None,
            captcha_requested: false,
            captcha_error: None,
            captcha_result: Arc::new(Mutex::new(None)),
            wallet_result: Arc::new(Mutex::new(None)),
            form: SwapFormState::default(),
            walkthrough: WalkthroughState::default(),
            pending_generation: None,
            history_recorded: false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        if self.bridge.config().under_maintenance {
            chrome::render_landing(ctx);
            return;
        }

        self.check_captcha_result();
        self.check_wallet_result();
        self.ensure_captcha_requested(ctx);
        self.finish_pending_generation();
        self.record_completed_transfer();

        // Drive the recovery latch even when nothing repaints naturally.
        let now = self.bridge.now_ms();
        self.recovery.tick(now, self.store.state());
        ctx.request_repaint_after(std::time::Duration::from_millis(
            self.bridge.config().stepper_poll_interval_ms,
        ));

        let history_clicked = chrome::render_header(ctx, &mut self.walkthrough);
        if history_clicked {
            self.store.update(|s| s.show_tx_history = !s.show_tx_history);
        }
        chrome::render_footer(ctx);

        let state_can_light_up = can_light_up(self.store.state());
        let show_disclaimer = (self.store.state().show_disclaimer_from_faq || state_can_light_up)
            && self.store.state().show_disclaimer;
        if show_disclaimer && chrome::render_disclaimer(ctx) {
            self.store.update(|s| s.show_disclaimer = false);
        }

        if self.store.state().show_tx_history
            && chrome::render_tx_history(ctx, &self.store.state().history.clone())
        {
            self.store.update(|s| s.show_tx_history = false);
        }

        if self.bridge.config().stage == Stage::Mainnet {
            chrome::render_first_time_badge(ctx);
        }
        chrome::render_walkthrough(ctx, &mut self.walkthrough);
        chrome::render_info_widget(ctx, self.store.state());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                if self.captcha_token.is_some() {
                    let action = swap::render(ui, &mut self.store, &mut self.form);
                    if action == SwapAction::GenerateDepositAddress {
                        self.start_generation();
                    }
                    let flow_started = self.store.state().is_submitting
                        || self.store.state().deposit_timestamp.is_set()
                        || self.pending_generation.is_some();
                    if flow_started {
                        status_list::render(
                            ui,
                            ctx,
                            self.store.state(),
                            &self.bridge,
                            self.recovery.revealed(),
                            &self.wallet_result,
                        );
                    }
                } else if let Some(error) = self.captcha_error.clone() {
                    ui.label(format!("Verification unavailable: {error}"));
                    if ui.button("Retry").clicked() {
                        self.captcha_error = None;
                        self.captcha_requested = false;
                    }
                } else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Verifying your session...");
                    });
                }
                ui.add_space(20.0);
            });
        });

        if self.store.state().is_submitting {
            chrome::render_mask(ctx);
        }
    }
}

impl App {
    fn ensure_captcha_requested(&mut self, ctx: &egui::Context) {
        if self.captcha_token.is_some() || self.captcha_requested || self.captcha_error.is_some() {
            return;
        }
        self.captcha_requested = true;
        self.bridge
            .request_captcha(Arc::clone(&self.captcha_result), ctx.clone());
    }

    fn check_captcha_result(&mut self) {
        let result = {
            let mut guard = match self.captcha_result.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            guard.take()
        };
        match result {
            Some(CaptchaResult::Ready(token)) => {
                tracing::debug!("captcha token received");
                self.captcha_token = Some(token);
            }
            Some(CaptchaResult::Error(error)) => {
                tracing::warn!("captcha request failed: {error}");
                self.captcha_error = Some(error);
            }
            None => {}
        }
    }

    fn check_wallet_result(&mut self) {
        let result = {
            let mut guard = match self.wallet_result.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            guard.take()
        };
        match result {
            Some(WalletConnectResult::Connected(kind)) => {
                tracing::info!(?kind, "wallet connected");
                self.store.update(|s| s.wallet_connected = true);
            }
            Some(WalletConnectResult::Error(error)) => {
                // Absent or declined wallets degrade silently.
                tracing::debug!("wallet connect dropped: {error}");
            }
            None => {}
        }
    }

    fn start_generation(&mut self) {
        let now = self.bridge.now_ms();
        self.pending_generation = Some(now);
        self.history_recorded = false;
        self.store.update(|s| s.is_submitting = true);
    }

    fn finish_pending_generation(&mut self) {
        let Some(started) = self.pending_generation else {
            return;
        };
        let now = self.bridge.now_ms();
        if now.since(started) < GENERATION_MS {
            return;
        }
        self.pending_generation = None;

        let state = self.store.state();
        let recipient = state.destination_address.clone().unwrap_or_default();
        let asset_symbol = state
            .source_asset
            .as_ref()
            .map(|a| a.asset_symbol.clone())
            .unwrap_or_default();
        let address = derive_deposit_address(&recipient, &asset_symbol, now);

        self.store.update(|s| {
            s.deposit_address = Some(DepositAddress {
                address,
                asset_symbol: asset_symbol.clone(),
            });
            s.deposit_timestamp = now;
            s.is_submitting = false;
        });
        self.store.advance_step(TransferStep::AwaitingDeposit);
    }

    fn record_completed_transfer(&mut self) {
        if self.history_recorded
            || self.store.state().active_step != TransferStep::TransferComplete
        {
            return;
        }
        self.history_recorded = true;
        let now = self.bridge.now_ms();
        let state = self.store.state();
        let record = TransferRecord {
            asset_symbol: state
                .source_asset
                .as_ref()
                .map(|a| a.asset_symbol.clone())
                .unwrap_or_default(),
            amount: state
                .source_confirmations
                .amount_confirmed
                .clone()
                .unwrap_or_default(),
            source_chain: state
                .source_chain
                .as_ref()
                .map(|c| c.chain_name.clone())
                .unwrap_or_default(),
            destination_chain: state
                .destination_chain
                .as_ref()
                .map(|c| c.chain_name.clone())
                .unwrap_or_default(),
            completed_at: now,
        };
        self.store.update(|s| s.history.push(record));
    }
}

/// Session-local placeholder for the real derivation service: stable for
/// the same inputs, shaped like a network account.
fn derive_deposit_address(recipient: &str, asset_symbol: &str, now: TimestampMs) -> String {
    let mut acc: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in recipient
        .bytes()
        .chain(asset_symbol.bytes())
        .chain(now.0.to_be_bytes())
    {
        acc ^= u64::from(byte);
        acc = acc.wrapping_mul(0x0000_0100_0000_01b3);
    }
    format!("axelar1{acc:016x}deposit")
}
