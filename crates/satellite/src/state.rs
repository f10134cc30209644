//! Shell-side UI state: form inputs and chrome toggles. The authoritative
//! flow state lives in `satellite_flow_core::BridgeStore`.

use satellite_flow_core::{ChainInfo, ChainModule};

/// Swap-widget form inputs before they are committed to the store.
#[derive(Debug, Default)]
pub struct SwapFormState {
    pub destination_address_input: String,
}

/// Walkthrough overlay state.
#[derive(Debug)]
pub struct WalkthroughState {
    pub open: bool,
    pub page: usize,
}

impl Default for WalkthroughState {
    fn default() -> Self {
        Self {
            open: false,
            page: 0,
        }
    }
}

pub const WALKTHROUGH_PAGES: &[&str] = &[
    "Pick a source chain, a destination chain and the asset you want to move.",
    "Enter the recipient address on the destination chain, then generate your one-time deposit address.",
    "Send your deposit to the generated address from your own wallet, or connect one here.",
    "Track confirmation and transfer progress in the status window; links to block explorers appear as the transfer lands.",
];

/// Destination-address plausibility check, per chain module kind. This is a
/// lighting-up gate, not a signature-grade validation.
pub fn validate_destination_address(chain: Option<&ChainInfo>, input: &str) -> bool {
    let Some(chain) = chain else {
        return false;
    };
    let input = input.trim();
    match chain.module {
        ChainModule::Evm => {
            input.len() == 42
                && input.starts_with("0x")
                && input[2..].chars().all(|c| c.is_ascii_hexdigit())
        }
        ChainModule::Ibc | ChainModule::Terra => {
            // bech32 shape: hrp, separator, data part.
            let Some((hrp, data)) = input.rsplit_once('1') else {
                return false;
            };
            !hrp.is_empty()
                && data.len() >= 6
                && input
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satellite_flow_core::{ChainInfo, ChainModule};

    fn chain(module: ChainModule) -> ChainInfo {
        ChainInfo::new("X", "X", module)
    }

    #[test]
    fn evm_addresses_need_full_hex_shape() {
        let evm = chain(ChainModule::Evm);
        assert!(validate_destination_address(
            Some(&evm),
            "0x00000000000000000000000000000000deadbeef"
        ));
        assert!(!validate_destination_address(Some(&evm), "0xdeadbeef"));
        assert!(!validate_destination_address(
            Some(&evm),
            "0x00000000000000000000000000000000deadbeeg"
        ));
    }

    #[test]
    fn bech32_shape_is_required_for_cosmos_chains() {
        let terra = chain(ChainModule::Terra);
        assert!(validate_destination_address(
            Some(&terra),
            "terra1qy3md5y0qnql26rmyycnqeqwzqsptt6r2jk5dc"
        ));
        assert!(!validate_destination_address(Some(&terra), "TERRA1UPPER"));
        assert!(!validate_destination_address(Some(&terra), "noseparator"));
    }

    #[test]
    fn no_chain_selected_never_validates() {
        assert!(!validate_destination_address(
            None,
            "0x00000000000000000000000000000000deadbeef"
        ));
    }
}
