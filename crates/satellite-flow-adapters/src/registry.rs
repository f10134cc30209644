//! Chain and asset registry.
//!
//! Stand-in for the hosted chain SDK: the chains the bridge spans, the
//! assets depositable from each, and the minimum-deposit fee schedule.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use satellite_flow_core::{AssetInfo, ChainInfo, ChainModule};

pub fn supported_chains() -> Vec<ChainInfo> {
    vec![
        ChainInfo::new("Ethereum", "ETH", ChainModule::Evm),
        ChainInfo::new("Avalanche", "AVAX", ChainModule::Evm),
        ChainInfo::new("Polygon", "MATIC", ChainModule::Evm),
        ChainInfo::new("Fantom", "FTM", ChainModule::Evm),
        ChainInfo::new("Moonbeam", "GLMR", ChainModule::Evm),
        ChainInfo::new("Axelar", "AXL", ChainModule::Ibc),
        ChainInfo::new("Cosmoshub", "ATOM", ChainModule::Ibc),
        ChainInfo::new("Osmosis", "OSMO", ChainModule::Ibc),
        ChainInfo::new("Terra", "LUNA", ChainModule::Terra),
    ]
}

fn asset(symbol: &str, decimals: u32, common_key: &str, native_chain: Option<&str>) -> AssetInfo {
    AssetInfo {
        asset_symbol: symbol.to_owned(),
        decimals,
        common_key: common_key.to_owned(),
        native_chain: native_chain.map(str::to_owned),
    }
}

fn ust() -> AssetInfo {
    asset("UST", 6, "uusd", Some("terra"))
}

fn luna() -> AssetInfo {
    asset("LUNA", 6, "uluna", Some("terra"))
}

fn usdc() -> AssetInfo {
    asset("USDC", 6, "uusdc", None)
}

/// Assets depositable from a chain. EVM chains additionally accept their
/// native token (wrapped automatically on deposit).
pub fn assets_for_chain(chain: &ChainInfo) -> Vec<AssetInfo> {
    let mut assets = vec![ust(), usdc()];
    match chain.module {
        ChainModule::Evm => {
            let key = format!("{}-wei", chain.chain_symbol.to_lowercase());
            assets.push(asset(
                &chain.chain_symbol,
                18,
                &key,
                Some(&chain.chain_name.to_lowercase()),
            ));
        }
        ChainModule::Ibc => {
            let key = format!("u{}", chain.chain_symbol.to_lowercase());
            assets.push(asset(
                &chain.chain_symbol,
                6,
                &key,
                Some(&chain.chain_name.to_lowercase()),
            ));
        }
        ChainModule::Terra => {
            assets.push(luna());
        }
    }
    assets
}

pub fn find_asset(chain: &ChainInfo, asset_symbol: &str) -> Option<AssetInfo> {
    assets_for_chain(chain)
        .into_iter()
        .find(|a| a.asset_symbol.eq_ignore_ascii_case(asset_symbol))
}

/// Minimum deposit the bridge keeps as its fee. EVM destinations cost an
/// order of magnitude more than Cosmos-side ones.
pub fn min_deposit_amount(
    asset: &AssetInfo,
    _source: &ChainInfo,
    destination: &ChainInfo,
) -> Option<BigDecimal> {
    // (digits, scale): value = digits * 10^-scale.
    let (digits, scale): (i64, i64) = match asset.common_key.as_str() {
        "uusd" => (5, 1),                            // 0.5 UST
        "uluna" => (2, 1),                           // 0.2 LUNA
        "uusdc" => (1, 0),                           // 1 USDC
        "uaxl" => (1, 1),                            // 0.1 AXL
        "uatom" => (5, 2),                           // 0.05 ATOM
        "uosmo" => (5, 1),                           // 0.5 OSMO
        key if key.ends_with("-wei") => (1, 2),      // 0.01 native EVM token
        _ => return None,
    };
    let base = BigDecimal::new(BigInt::from(digits), scale);
    let multiplier = match destination.module {
        ChainModule::Evm => BigDecimal::from(10),
        ChainModule::Ibc | ChainModule::Terra => BigDecimal::from(1),
    };
    Some(base * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn chain(name: &str, module: ChainModule) -> ChainInfo {
        ChainInfo::new(name, "SYM", module)
    }

    #[test]
    fn every_chain_offers_ust() {
        for chain in supported_chains() {
            assert!(
                find_asset(&chain, "UST").is_some(),
                "UST missing on {}",
                chain.chain_name
            );
        }
    }

    #[test]
    fn evm_chains_list_their_native_token() {
        let avalanche = ChainInfo::new("Avalanche", "AVAX", ChainModule::Evm);
        let native = find_asset(&avalanche, "AVAX").expect("native asset");
        assert_eq!(native.decimals, 18);
        assert!(native.is_native_on(&avalanche));
    }

    #[test]
    fn evm_destination_multiplies_the_fee() {
        let terra = ChainInfo::new("Terra", "LUNA", ChainModule::Terra);
        let to_evm = min_deposit_amount(&ust(), &terra, &chain("Ethereum", ChainModule::Evm))
            .expect("fee");
        let to_ibc = min_deposit_amount(&ust(), &terra, &chain("Osmosis", ChainModule::Ibc))
            .expect("fee");
        assert_eq!(to_evm, BigDecimal::from_str("5").expect("five"));
        assert_eq!(to_ibc, BigDecimal::from_str("0.5").expect("half"));
    }

    #[test]
    fn unknown_asset_has_no_fee_entry() {
        let mystery = AssetInfo {
            asset_symbol: "WAT".to_owned(),
            decimals: 6,
            common_key: "uwat".to_owned(),
            native_chain: None,
        };
        let terra = ChainInfo::new("Terra", "LUNA", ChainModule::Terra);
        assert!(min_deposit_amount(&mystery, &terra, &terra).is_none());
    }
}
