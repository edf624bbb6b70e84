use ethers::types::{H256, U256};
use serde::{Deserialize, Serialize};

// Basic types for widget operations
pub type TokenAddress = String;
pub type TransactionHash = H256;
pub type Wei = U256;
pub type Bps = u32;

/// A transaction accepted by the signer, before confirmation is known
#[derive(Debug, Clone)]
pub struct SubmittedTransaction {
    pub hash: H256,
    /// Raw provider response, passed through to the submission observer
    pub raw: serde_json::Value,
}

/// Minimal receipt view the submission flow needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub transaction_hash: H256,
    pub succeeded: bool,
    pub block_number: Option<u64>,
}

/// Display amounts frozen at submission time so a concurrent quote refresh
/// cannot change what the confirmation view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountSnapshot {
    pub amount_in: String,
    pub amount_out: String,
}

// Result type for better error handling
pub type WidgetResult<T> = Result<T, crate::shared::error::WidgetError>;
