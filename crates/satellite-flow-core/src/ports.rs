use thiserror::Error;

use crate::domain::{TimestampMs, TokenDetails};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("rejected by wallet: {0}")]
    Rejected(String),
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<TimestampMs, PortError>;
}

/// Capability surface of the browser-extension wallet bridge. The add-token
/// request is fire-and-forget at the call sites: a `Rejected` error is logged
/// and dropped, never retried or surfaced.
pub trait WalletBridgePort {
    fn request_accounts(&self) -> Result<Vec<String>, PortError>;
    fn watch_asset(&self, token: &TokenDetails) -> Result<bool, PortError>;
}

pub trait CaptchaPort {
    fn request_token(&self) -> Result<String, PortError>;
}
