//! Token entity for the widget core

use crate::shared::utils::same_address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: String,
    #[serde(default)]
    pub is_import: bool,
}

impl TokenInfo {
    /// Identity is (chain id, address), address case-insensitive
    pub fn same_token(&self, other: &TokenInfo) -> bool {
        self.chain_id == other.chain_id && same_address(&self.address, &other.address)
    }

    pub fn has_address(&self, address: &str) -> bool {
        same_address(&self.address, address)
    }

    pub fn as_imported(mut self) -> Self {
        self.is_import = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> TokenInfo {
        TokenInfo {
            chain_id: 1,
            address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            decimals: 6,
            logo_uri: String::new(),
            is_import: false,
        }
    }

    #[test]
    fn test_identity_is_case_insensitive() {
        let a = usdc();
        let mut b = usdc();
        b.address = b.address.to_lowercase();
        assert!(a.same_token(&b));

        let mut other_chain = usdc();
        other_chain.chain_id = 137;
        assert!(!a.same_token(&other_chain));
    }

    #[test]
    fn test_serde_uses_original_field_names() {
        let json = serde_json::to_value(usdc()).expect("Failed to serialize token");
        assert!(json.get("chainId").is_some());
        assert!(json.get("logoURI").is_some());

        // isImport is optional on stored data
        let parsed: TokenInfo = serde_json::from_str(
            r#"{"chainId":199,"address":"0xEdf53026aeA60f8F75FcA25f8830b7e2d6200662","symbol":"TRX","name":"TRON","decimals":6,"logoURI":""}"#,
        )
        .expect("Failed to deserialize token");
        assert!(!parsed.is_import);
        assert_eq!(parsed.decimals, 6);
    }

    #[test]
    fn test_as_imported() {
        assert!(usdc().as_imported().is_import);
    }
}
