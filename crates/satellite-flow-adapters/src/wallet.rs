//! EIP-1193 wallet bridge.
//!
//! Two runtimes: `Proxy` speaks JSON-RPC 2.0 to a local extension-bridge
//! endpoint over HTTP, `Deterministic` is the offline development fallback
//! with a built-in account that auto-approves watch requests. A user
//! declining in the wallet maps to [`PortError::Rejected`]; callers treat
//! the add-token request as fire-and-forget and only log that.

use std::sync::{Arc, Mutex};

use alloy::primitives::Address;
use serde_json::{json, Value};

use satellite_flow_core::{PortError, TokenDetails, WalletBridgePort};

use crate::config::DeploymentConfig;

/// EIP-1193 "user rejected request" error code.
const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone)]
pub struct Eip1193WalletAdapter {
    mode: WalletMode,
    state: Arc<Mutex<WalletState>>,
}

#[derive(Debug, Clone)]
enum WalletMode {
    Proxy(ProxyRuntime),
    Deterministic,
}

#[derive(Debug, Clone)]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Default)]
struct WalletState {
    request_id: u64,
    watched: Vec<TokenDetails>,
}

impl Default for Eip1193WalletAdapter {
    fn default() -> Self {
        Self::with_config(&DeploymentConfig::default())
    }
}

impl Eip1193WalletAdapter {
    pub fn with_config(config: &DeploymentConfig) -> Self {
        let mode = match &config.wallet_proxy_url {
            Some(base_url) => {
                let timeout = std::time::Duration::from_millis(config.request_timeout_ms);
                match reqwest::blocking::Client::builder().timeout(timeout).build() {
                    Ok(client) => WalletMode::Proxy(ProxyRuntime {
                        base_url: base_url.clone(),
                        client,
                    }),
                    Err(e) => {
                        tracing::warn!("wallet proxy client failed to initialize: {e}");
                        WalletMode::Deterministic
                    }
                }
            }
            None => WalletMode::Deterministic,
        };
        Self {
            mode,
            state: Arc::new(Mutex::new(WalletState::default())),
        }
    }

    /// Tokens the deterministic wallet has accepted. Test hook.
    pub fn watched_assets(&self) -> Result<Vec<TokenDetails>, PortError> {
        let state = self
            .state
            .lock()
            .map_err(|_| PortError::Transport("wallet state poisoned".to_owned()))?;
        Ok(state.watched.clone())
    }

    fn next_request_id(&self) -> Result<u64, PortError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| PortError::Transport("wallet state poisoned".to_owned()))?;
        state.request_id += 1;
        Ok(state.request_id)
    }

    fn rpc(&self, runtime: &ProxyRuntime, method: &str, params: Value) -> Result<Value, PortError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_request_id()?,
            "method": method,
            "params": params,
        });
        let response = runtime
            .client
            .post(&runtime.base_url)
            .json(&body)
            .send()
            .map_err(|e| PortError::Transport(format!("wallet proxy request failed: {e}")))?;
        let payload: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("wallet proxy bad response: {e}")))?;

        if let Some(error) = payload.get("error") {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown wallet error")
                .to_owned();
            if code == USER_REJECTED_CODE {
                return Err(PortError::Rejected(message));
            }
            return Err(PortError::Transport(format!("wallet error {code}: {message}")));
        }
        payload
            .get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("wallet response missing result".to_owned()))
    }
}

impl WalletBridgePort for Eip1193WalletAdapter {
    fn request_accounts(&self) -> Result<Vec<String>, PortError> {
        match &self.mode {
            WalletMode::Deterministic => {
                Ok(vec!["0x1000000000000000000000000000000000000001".to_owned()])
            }
            WalletMode::Proxy(runtime) => {
                let result = self.rpc(runtime, "eth_requestAccounts", json!([]))?;
                let accounts = result
                    .as_array()
                    .ok_or_else(|| {
                        PortError::Transport("eth_requestAccounts result not an array".to_owned())
                    })?
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect();
                Ok(accounts)
            }
        }
    }

    fn watch_asset(&self, token: &TokenDetails) -> Result<bool, PortError> {
        token.address.parse::<Address>().map_err(|e| {
            PortError::Validation(format!("token address {}: {e}", token.address))
        })?;

        match &self.mode {
            WalletMode::Deterministic => {
                let mut state = self
                    .state
                    .lock()
                    .map_err(|_| PortError::Transport("wallet state poisoned".to_owned()))?;
                state.watched.push(token.clone());
                Ok(true)
            }
            WalletMode::Proxy(runtime) => {
                let params = json!({
                    "type": "ERC20",
                    "options": {
                        "address": token.address,
                        "symbol": token.symbol,
                        "decimals": token.decimals,
                        "image": "",
                    },
                });
                let result = self.rpc(runtime, "wallet_watchAsset", params)?;
                Ok(result.as_bool().unwrap_or(false))
            }
        }
    }
}
