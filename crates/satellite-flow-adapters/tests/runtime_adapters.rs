use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};
use tiny_http::{Response, Server, StatusCode};

use satellite_flow_adapters::{DeploymentConfig, Eip1193WalletAdapter, RecaptchaAdapter};
use satellite_flow_core::{CaptchaPort, PortError, TokenDetails, WalletBridgePort};

fn sample_token() -> TokenDetails {
    TokenDetails {
        address: "0xa693B19d2931d498c5B318dF961919BB4aee87a5".to_owned(),
        symbol: "UST".to_owned(),
        decimals: 6,
    }
}

#[test]
fn deterministic_wallet_accepts_watch_requests() {
    let adapter = Eip1193WalletAdapter::default();

    let accounts = adapter.request_accounts().expect("accounts");
    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].starts_with("0x"));

    assert!(adapter.watch_asset(&sample_token()).expect("watch"));
    let watched = adapter.watched_assets().expect("watched");
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0].symbol, "UST");
}

#[test]
fn watch_asset_validates_the_token_address() {
    let adapter = Eip1193WalletAdapter::default();
    let bad = TokenDetails {
        address: "not-an-address".to_owned(),
        symbol: "UST".to_owned(),
        decimals: 6,
    };
    let err = adapter.watch_asset(&bad).expect_err("must fail");
    assert!(matches!(err, PortError::Validation(_)));
    assert!(adapter.watched_assets().expect("watched").is_empty());
}

#[test]
fn proxy_wallet_round_trips_watch_asset_and_rejection() {
    let methods = Arc::new(Mutex::new(Vec::<String>::new()));
    let (base_url, _join) = spawn_wallet_proxy(Arc::clone(&methods));

    let config = DeploymentConfig {
        wallet_proxy_url: Some(base_url),
        ..DeploymentConfig::default()
    };
    let adapter = Eip1193WalletAdapter::with_config(&config);

    let accounts = adapter.request_accounts().expect("accounts");
    assert_eq!(
        accounts,
        vec!["0x2000000000000000000000000000000000000002".to_owned()]
    );

    assert!(adapter.watch_asset(&sample_token()).expect("watch"));

    // The proxy rejects the second watch request with EIP-1193 code 4001.
    let err = adapter.watch_asset(&sample_token()).expect_err("rejected");
    assert!(matches!(err, PortError::Rejected(_)));

    let seen = methods.lock().expect("methods lock");
    assert_eq!(
        *seen,
        vec![
            "eth_requestAccounts".to_owned(),
            "wallet_watchAsset".to_owned(),
            "wallet_watchAsset".to_owned(),
        ]
    );
}

#[test]
fn captcha_falls_back_to_dev_token_without_endpoint() {
    let adapter = RecaptchaAdapter::default();
    assert_eq!(adapter.request_token().expect("token"), "dev-captcha-token");
}

#[test]
fn captcha_http_runtime_extracts_the_token() {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let base_url = format!("http://{}", server.server_addr());
    let join = thread::spawn(move || {
        if let Ok(req) = server.recv() {
            let response = Response::from_string(json!({"token": "tok-123"}).to_string())
                .with_status_code(StatusCode(200));
            let _ = req.respond(response);
        }
    });

    let config = DeploymentConfig {
        captcha_endpoint: Some(base_url),
        ..DeploymentConfig::default()
    };
    let adapter = RecaptchaAdapter::with_config(&config);
    assert_eq!(adapter.request_token().expect("token"), "tok-123");
    join.join().expect("server thread");
}

fn spawn_wallet_proxy(
    methods: Arc<Mutex<Vec<String>>>,
) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let base_url = format!("http://{}", server.server_addr());

    let join = thread::spawn(move || {
        let mut watch_calls = 0;
        for _ in 0..8 {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = std::io::Read::read_to_string(req.as_reader(), &mut body);
            let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let method = payload
                .get("method")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            if let Ok(mut g) = methods.lock() {
                g.push(method.clone());
            }

            let reply = match method.as_str() {
                "eth_requestAccounts" => {
                    json!({"jsonrpc": "2.0", "id": 1, "result": ["0x2000000000000000000000000000000000000002"]})
                }
                "wallet_watchAsset" => {
                    watch_calls += 1;
                    if watch_calls == 1 {
                        json!({"jsonrpc": "2.0", "id": 2, "result": true})
                    } else {
                        json!({
                            "jsonrpc": "2.0",
                            "id": 3,
                            "error": {"code": 4001, "message": "User rejected the request."}
                        })
                    }
                }
                _ => json!({"jsonrpc": "2.0", "id": 0, "error": {"code": -32601, "message": "unknown method"}}),
            };
            let response =
                Response::from_string(reply.to_string()).with_status_code(StatusCode(200));
            let _ = req.respond(response);

            if watch_calls >= 2 {
                break;
            }
        }
    });

    (base_url, join)
}
