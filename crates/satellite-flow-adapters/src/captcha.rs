//! Captcha token fetcher gating the swap widget.

use serde_json::Value;

use satellite_flow_core::{CaptchaPort, PortError};

use crate::config::DeploymentConfig;

/// Static token handed out when no verifier endpoint is configured.
const DEV_TOKEN: &str = "dev-captcha-token";

#[derive(Debug, Clone)]
pub struct RecaptchaAdapter {
    runtime: CaptchaRuntime,
}

#[derive(Debug, Clone)]
enum CaptchaRuntime {
    Http {
        endpoint: String,
        client: reqwest::blocking::Client,
    },
    Deterministic,
}

impl Default for RecaptchaAdapter {
    fn default() -> Self {
        Self::with_config(&DeploymentConfig::default())
    }
}

impl RecaptchaAdapter {
    pub fn with_config(config: &DeploymentConfig) -> Self {
        let runtime = match &config.captcha_endpoint {
            Some(endpoint) => {
                let timeout = std::time::Duration::from_millis(config.request_timeout_ms);
                match reqwest::blocking::Client::builder().timeout(timeout).build() {
                    Ok(client) => CaptchaRuntime::Http {
                        endpoint: endpoint.clone(),
                        client,
                    },
                    Err(e) => {
                        tracing::warn!("captcha client failed to initialize: {e}");
                        CaptchaRuntime::Deterministic
                    }
                }
            }
            None => CaptchaRuntime::Deterministic,
        };
        Self { runtime }
    }
}

impl CaptchaPort for RecaptchaAdapter {
    fn request_token(&self) -> Result<String, PortError> {
        match &self.runtime {
            CaptchaRuntime::Deterministic => Ok(DEV_TOKEN.to_owned()),
            CaptchaRuntime::Http { endpoint, client } => {
                let response = client
                    .post(endpoint)
                    .json(&serde_json::json!({ "action": "swap" }))
                    .send()
                    .map_err(|e| PortError::Transport(format!("captcha request failed: {e}")))?;
                let payload: Value = response
                    .json()
                    .map_err(|e| PortError::Transport(format!("captcha bad response: {e}")))?;
                payload
                    .get("token")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        PortError::Validation("captcha response missing token".to_owned())
                    })
            }
        }
    }
}
