pub mod amounts;
pub mod domain;
pub mod latch;
pub mod ports;
pub mod recovery;
pub mod step;
pub mod stepper;
pub mod store;

pub use domain::{
    AssetInfo, BroadcastResult, ChainInfo, ChainModule, ConfirmationStatus, DepositAddress,
    ExplorerEntry, ExplorerLink, Side, TimestampMs, TokenDetails, WalletKind,
};
pub use latch::Latch;
pub use ports::{CaptchaPort, ClockPort, PortError, WalletBridgePort};
pub use recovery::{should_reveal_recovery, RecoveryPollInputs, RecoveryWatch};
pub use step::TransferStep;
pub use stepper::{
    build_status_list, shorten_word, ConfirmView, DepositFollowUp, DepositView, GenerateView,
    StatusListView, StatusRow, StepBody, StepperInputs, TransferView, WalletOption, WalletPrompt,
};
pub use store::{can_light_up, BridgeState, BridgeStore, SubscriptionId, TransferRecord};
