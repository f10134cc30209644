pub mod captcha;
pub mod clock;
pub mod config;
pub mod registry;
pub mod wallet;

pub use captcha::RecaptchaAdapter;
pub use clock::SystemClockAdapter;
pub use config::{DeploymentConfig, Stage};
pub use wallet::Eip1193WalletAdapter;
