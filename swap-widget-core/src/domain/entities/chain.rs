//! Chain entity for the widget core
//!
//! Static per-network tables: aggregator route path, block explorer,
//! wrapped-native contract, and the native currency entry.

use crate::domain::entities::token::TokenInfo;
use crate::shared::constants::NATIVE_TOKEN_ADDRESS;
use crate::shared::error::WidgetError;
use crate::shared::utils::same_address;
use ethers::types::H256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Polygon,
    Bsc,
    Avalanche,
    Fantom,
    Cronos,
    Arbitrum,
    BitTorrent,
    Velas,
    Aurora,
    Oasis,
    Optimism,
}

impl Chain {
    pub fn all() -> &'static [Chain] {
        &[
            Chain::Ethereum,
            Chain::Polygon,
            Chain::Bsc,
            Chain::Avalanche,
            Chain::Fantom,
            Chain::Cronos,
            Chain::Arbitrum,
            Chain::BitTorrent,
            Chain::Velas,
            Chain::Aurora,
            Chain::Oasis,
            Chain::Optimism,
        ]
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Polygon => 137,
            Chain::Bsc => 56,
            Chain::Avalanche => 43114,
            Chain::Fantom => 250,
            Chain::Cronos => 25,
            Chain::Arbitrum => 42161,
            Chain::BitTorrent => 199,
            Chain::Velas => 106,
            Chain::Aurora => 1313161554,
            Chain::Oasis => 42262,
            Chain::Optimism => 10,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Chain> {
        Chain::all().iter().copied().find(|c| c.chain_id() == chain_id)
    }

    /// Resolve a chain id, failing for networks the widget does not support
    pub fn require(chain_id: u64) -> Result<Chain, WidgetError> {
        Chain::from_chain_id(chain_id).ok_or(WidgetError::UnsupportedChain(chain_id))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon",
            Chain::Bsc => "BNB Smart Chain",
            Chain::Avalanche => "Avalanche",
            Chain::Fantom => "Fantom",
            Chain::Cronos => "Cronos",
            Chain::Arbitrum => "Arbitrum",
            Chain::BitTorrent => "BitTorrent Chain",
            Chain::Velas => "Velas",
            Chain::Aurora => "Aurora",
            Chain::Oasis => "Oasis Emerald",
            Chain::Optimism => "Optimism",
        }
    }

    /// Path segment the aggregator API uses for this network
    pub fn aggregator_path(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Polygon => "polygon",
            Chain::Bsc => "bsc",
            Chain::Avalanche => "avalanche",
            Chain::Fantom => "fantom",
            Chain::Cronos => "cronos",
            Chain::Arbitrum => "arbitrum",
            Chain::BitTorrent => "bttc",
            Chain::Velas => "velas",
            Chain::Aurora => "aurora",
            Chain::Oasis => "oasis",
            Chain::Optimism => "optimism",
        }
    }

    pub fn scan_url(&self) -> &'static str {
        match self {
            Chain::Ethereum => "https://etherscan.io",
            Chain::Polygon => "https://polygonscan.com",
            Chain::Bsc => "https://bscscan.com",
            Chain::Avalanche => "https://snowtrace.io",
            Chain::Fantom => "https://ftmscan.com",
            Chain::Cronos => "https://cronoscan.com",
            Chain::Arbitrum => "https://arbiscan.io",
            Chain::BitTorrent => "https://bttcscan.com",
            Chain::Velas => "https://evmexplorer.velas.com",
            Chain::Aurora => "https://aurorascan.dev",
            Chain::Oasis => "https://explorer.emerald.oasis.dev",
            Chain::Optimism => "https://optimistic.etherscan.io",
        }
    }

    /// User-facing block-explorer link for a transaction
    pub fn tx_url(&self, hash: H256) -> String {
        format!("{}/tx/{:#x}", self.scan_url(), hash)
    }

    pub fn wrapped_native_address(&self) -> &'static str {
        match self {
            Chain::Ethereum => "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            Chain::Polygon => "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270",
            Chain::Bsc => "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c",
            Chain::Avalanche => "0xb31f66aa3c1e785363f0875a1b74e27b85fd66c7",
            Chain::Fantom => "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83",
            Chain::Cronos => "0x5c7f8a570d578ed84e63fdfa7b1ee72deae1ae23",
            Chain::Arbitrum => "0x82af49447d8a07e3bd95bd0d56f35241523fbab1",
            Chain::BitTorrent => "0x8d193c6efa90bcff940a98785d1ce9d093d3dc8a",
            Chain::Velas => "0xc579d1f3cf86749e05cd06f7ade17856c2ce3126",
            Chain::Aurora => "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d",
            Chain::Oasis => "0x21c718c22d52d0f3a789b752d4c2fd5908a8a733",
            Chain::Optimism => "0x4200000000000000000000000000000000000006",
        }
    }

    pub fn native_symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum | Chain::Arbitrum | Chain::Aurora | Chain::Optimism => "ETH",
            Chain::Polygon => "MATIC",
            Chain::Bsc => "BNB",
            Chain::Avalanche => "AVAX",
            Chain::Fantom => "FTM",
            Chain::Cronos => "CRO",
            Chain::BitTorrent => "BTT",
            Chain::Velas => "VLX",
            Chain::Oasis => "ROSE",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Chain::Ethereum | Chain::Arbitrum | Chain::Aurora | Chain::Optimism => "Ether",
            Chain::Polygon => "Matic",
            Chain::Bsc => "BNB",
            Chain::Avalanche => "Avalanche",
            Chain::Fantom => "Fantom",
            Chain::Cronos => "Cronos",
            Chain::BitTorrent => "BitTorrent",
            Chain::Velas => "Velas",
            Chain::Oasis => "Rose",
        }
    }

    /// The native currency under the aggregator's sentinel address
    pub fn native_token(&self) -> TokenInfo {
        TokenInfo {
            chain_id: self.chain_id(),
            address: NATIVE_TOKEN_ADDRESS.to_string(),
            symbol: self.native_symbol().to_string(),
            name: self.native_name().to_string(),
            decimals: 18,
            logo_uri: String::new(),
            is_import: false,
        }
    }

    pub fn is_native_sentinel(&self, address: &str) -> bool {
        same_address(address, NATIVE_TOKEN_ADDRESS)
    }

    /// True for the native sentinel and the wrapped-native contract alike
    pub fn is_native_or_wrapped(&self, address: &str) -> bool {
        self.is_native_sentinel(address) || same_address(address, self.wrapped_native_address())
    }

    /// Token equality that treats native and wrapped-native as one currency
    pub fn same_token(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if self.is_native_or_wrapped(a) && self.is_native_or_wrapped(b) {
            return true;
        }
        same_address(a, b)
    }
}
