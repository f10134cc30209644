//! Bridge between the egui shell and the flow workspace crates.
//! This must remain the only shell-facing boundary for adapter calls.

use std::sync::{Arc, Mutex};

use satellite_flow_adapters::{
    DeploymentConfig, Eip1193WalletAdapter, RecaptchaAdapter, SystemClockAdapter,
};
use satellite_flow_core::{
    CaptchaPort, ClockPort, TimestampMs, TokenDetails, WalletBridgePort, WalletKind,
};

/// Result from the async captcha fetch
#[derive(Clone)]
pub enum CaptchaResult {
    Ready(String),
    Error(String),
}

/// Result from an async wallet-connect attempt
#[derive(Clone)]
pub enum WalletConnectResult {
    Connected(WalletKind),
    Error(String),
}

pub struct FlowBridge {
    config: DeploymentConfig,
    clock: SystemClockAdapter,
    wallet: Eip1193WalletAdapter,
    captcha: RecaptchaAdapter,
}

impl FlowBridge {
    pub fn new(config: DeploymentConfig) -> Self {
        let wallet = Eip1193WalletAdapter::with_config(&config);
        let captcha = RecaptchaAdapter::with_config(&config);
        Self {
            config,
            clock: SystemClockAdapter,
            wallet,
            captcha,
        }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn now_ms(&self) -> TimestampMs {
        match self.clock.now_ms() {
            Ok(now) => now,
            Err(e) => {
                tracing::warn!("system clock unavailable: {e}");
                TimestampMs(0)
            }
        }
    }

    /// Fetch a captcha token off the UI thread; the result lands in the
    /// mailbox and the context is woken up.
    pub fn request_captcha(
        &self,
        mailbox: Arc<Mutex<Option<CaptchaResult>>>,
        ctx: egui::Context,
    ) {
        let captcha = self.captcha.clone();
        std::thread::spawn(move || {
            let result = match captcha.request_token() {
                Ok(token) => CaptchaResult::Ready(token),
                Err(e) => CaptchaResult::Error(format!("{e}")),
            };
            if let Ok(mut guard) = mailbox.lock() {
                *guard = Some(result);
            }
            ctx.request_repaint();
        });
    }

    /// Connect the requested wallet. Only the extension wallet goes through
    /// the EIP-1193 bridge; the IBC and Terra wallets are session-local.
    pub fn connect_wallet(
        &self,
        kind: WalletKind,
        mailbox: Arc<Mutex<Option<WalletConnectResult>>>,
        ctx: egui::Context,
    ) {
        let wallet = self.wallet.clone();
        std::thread::spawn(move || {
            let result = match kind {
                WalletKind::Extension => match wallet.request_accounts() {
                    Ok(accounts) if !accounts.is_empty() => {
                        WalletConnectResult::Connected(kind)
                    }
                    Ok(_) => WalletConnectResult::Error("no wallet account exposed".to_owned()),
                    Err(e) => WalletConnectResult::Error(format!("{e}")),
                },
                WalletKind::Ibc | WalletKind::Terra => WalletConnectResult::Connected(kind),
            };
            if let Ok(mut guard) = mailbox.lock() {
                *guard = Some(result);
            }
            ctx.request_repaint();
        });
    }

    /// Fire-and-forget add-token request. Rejection and transport errors
    /// are logged, never surfaced or retried.
    pub fn add_token_to_wallet(&self, token: TokenDetails) {
        let wallet = self.wallet.clone();
        std::thread::spawn(move || match wallet.watch_asset(&token) {
            Ok(accepted) => {
                tracing::debug!(symbol = %token.symbol, accepted, "watch_asset answered");
            }
            Err(e) => {
                tracing::debug!(symbol = %token.symbol, "watch_asset dropped: {e}");
            }
        });
    }
}
