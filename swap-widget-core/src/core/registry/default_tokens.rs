//! Built-in token lists
//!
//! Every chain gets its native currency and wrapped-native entry; Ethereum
//! and BitTorrent Chain additionally carry curated default tables.

use crate::domain::entities::{Chain, TokenInfo};

fn token(chain: Chain, address: &str, symbol: &str, name: &str, decimals: u8, logo_uri: &str) -> TokenInfo {
    TokenInfo {
        chain_id: chain.chain_id(),
        address: address.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals,
        logo_uri: logo_uri.to_string(),
        is_import: false,
    }
}

fn wrapped_native(chain: Chain) -> TokenInfo {
    token(
        chain,
        chain.wrapped_native_address(),
        &format!("W{}", chain.native_symbol()),
        &format!("Wrapped {}", chain.native_name()),
        18,
        "",
    )
}

/// The built-in list for a chain, native entry first
pub fn default_tokens(chain: Chain) -> Vec<TokenInfo> {
    let mut tokens = vec![chain.native_token(), wrapped_native(chain)];
    match chain {
        Chain::Ethereum => tokens.extend(ethereum_tokens()),
        Chain::BitTorrent => tokens.extend(bittorrent_tokens()),
        _ => {}
    }
    tokens
}

fn ethereum_tokens() -> Vec<TokenInfo> {
    let chain = Chain::Ethereum;
    vec![
        token(
            chain,
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            "USDT",
            "Tether USD",
            6,
            "https://coin.top/production/logo/usdtlogo.png",
        ),
        token(
            chain,
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "USDC",
            "USD Coin",
            6,
            "https://coin.top/production/upload/logo/TEkxiTehnzSmSe2XqrBj4w32RUN966rdz81.png",
        ),
        token(
            chain,
            "0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "DAI",
            "Dai Stablecoin",
            18,
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/smartchain/assets/0x1AF3F329e8BE154074D8769D1FFa4eE058B1DBc3/logo.png",
        ),
        token(
            chain,
            "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
            "WBTC",
            "Wrapped BTC",
            8,
            "https://assets.coingecko.com/coins/images/7598/large/wrapped_bitcoin_wbtc.png",
        ),
        token(
            chain,
            "0xdeFA4e8a7bcBA345F687a2f1456F5Edd9CE97202",
            "KNC",
            "Kyber Network Crystal v2",
            18,
            "https://raw.githubusercontent.com/KyberNetwork/dmm-interface/main/src/assets/images/KNC.svg",
        ),
    ]
}

fn bittorrent_tokens() -> Vec<TokenInfo> {
    let chain = Chain::BitTorrent;
    vec![
        token(
            chain,
            "0xCa424b845497f7204D9301bd13Ff87C0E2e86FCF",
            "USDC_b",
            "USD Coin_BSC",
            18,
            "https://coin.top/production/upload/logo/TEkxiTehnzSmSe2XqrBj4w32RUN966rdz81.png",
        ),
        token(
            chain,
            "0x9B5F27f6ea9bBD753ce3793a07CbA3C74644330d",
            "USDT_b",
            "Tether USD_BSC",
            18,
            "https://coin.top/production/logo/usdtlogo.png",
        ),
        token(
            chain,
            "0xE887512ab8BC60BcC9224e1c3b5Be68E26048B8B",
            "USDT_e",
            "Tether USD_Ethereum",
            6,
            "https://coin.top/production/logo/usdtlogo.png",
        ),
        token(
            chain,
            "0xdB28719F7f938507dBfe4f0eAe55668903D34a15",
            "USDT_t",
            "Tether USD_TRON",
            6,
            "https://coin.top/production/logo/usdtlogo.png",
        ),
        token(
            chain,
            "0x935faA2FCec6Ab81265B301a30467Bbc804b43d3",
            "USDC_t",
            "USD Coin_TRON",
            6,
            "https://bttcscan.com/token/images/usdcbttc_32.png",
        ),
        token(
            chain,
            "0xAE17940943BA9440540940DB0F1877f101D39e8b",
            "USDC_e",
            "USD Coin_Ethereum",
            6,
            "https://coin.top/production/upload/logo/TEkxiTehnzSmSe2XqrBj4w32RUN966rdz81.png",
        ),
        token(
            chain,
            "0xe7dC549AE8DB61BDE71F22097BEcc8dB542cA100",
            "DAI_e",
            "Dai Stablecoin_Ethereum",
            18,
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/smartchain/assets/0x1AF3F329e8BE154074D8769D1FFa4eE058B1DBc3/logo.png",
        ),
        token(
            chain,
            "0xA20dfb01DCa223c0E52B0D4991D4aFA7E08e3a50",
            "ETH_b",
            "Ethereum Token_BSC",
            18,
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/smartchain/assets/0x2170Ed0880ac9A755fd29B2688956BD959F933F8/logo.png",
        ),
        token(
            chain,
            "0xEdf53026aeA60f8F75FcA25f8830b7e2d6200662",
            "TRX",
            "TRON",
            6,
            "https://coin.top/production/upload/logo/TNUC9Qb1rRpS5CbWLmNMxXBjyFoydXjWFR.png",
        ),
        token(
            chain,
            "0xcBb9EDF6775e39748Ea6483A7fa6a385Cd7E9a4E",
            "BTT_b",
            "BitTorrent_BSC",
            18,
            "https://coin.top/production/logo/1002000.png",
        ),
        token(
            chain,
            "0x17F235FD5974318E4E2a5e37919a209f7c37A6d1",
            "USDD_t",
            "Decentralized USD_TRON",
            18,
            "https://raw.githubusercontent.com/KyberNetwork/ks-assets/main/img/token/USDD.svg",
        ),
        token(
            chain,
            "0x9888221fE6B5A2ad4cE7266c7826D2AD74D40CcF",
            "WBTC_e",
            "Wrapped BTC_Ethereum",
            8,
            "https://assets.coingecko.com/coins/images/7598/large/wrapped_bitcoin_wbtc.png",
        ),
        token(
            chain,
            "0xE467F79E9869757DD818DfB8535068120F6BcB97",
            "KNC_e",
            "Kyber Network Crystal v2 - Ethereum",
            18,
            "https://raw.githubusercontent.com/KyberNetwork/dmm-interface/main/src/assets/images/KNC.svg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_entry_comes_first() {
        for chain in Chain::all() {
            let tokens = default_tokens(*chain);
            assert!(tokens.len() >= 2, "{} list too small", chain.name());
            assert_eq!(tokens[0].symbol, chain.native_symbol());
            assert!(tokens[1].has_address(chain.wrapped_native_address()));
        }
    }

    #[test]
    fn test_no_duplicate_addresses() {
        for chain in Chain::all() {
            let tokens = default_tokens(*chain);
            for (i, a) in tokens.iter().enumerate() {
                for b in tokens.iter().skip(i + 1) {
                    assert!(
                        !a.same_token(b),
                        "duplicate {} in {} defaults",
                        a.address,
                        chain.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_chain_id_matches_chain() {
        let tokens = default_tokens(Chain::BitTorrent);
        assert!(tokens.iter().all(|t| t.chain_id == 199));
    }
}
