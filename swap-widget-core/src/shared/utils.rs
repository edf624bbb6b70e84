//! Utility functions for the widget core
//!
//! This module contains common utility functions used throughout the widget core.

use crate::shared::error::WidgetError;
use ethers::types::{Address, U256};
use ethers::utils::{format_units, parse_units, to_checksum, ParseUnits};
use std::time::{SystemTime, UNIX_EPOCH};

/// Get current timestamp in seconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs()
}

/// Returns the checksummed address if the input is a valid address
pub fn is_address(value: &str) -> Option<String> {
    value
        .parse::<Address>()
        .ok()
        .map(|addr| to_checksum(&addr, None))
}

/// Case-insensitive address equality
pub fn same_address(a: &str, b: &str) -> bool {
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// Shorten an address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }

    let start = &address[..6];
    let end = &address[address.len() - 4..];

    format!("{}...{}", start, end)
}

/// Convert a human-readable amount to the token's smallest unit
pub fn amount_to_wei(amount: &str, decimals: u8) -> Result<U256, WidgetError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(WidgetError::validation("Amount cannot be empty"));
    }

    match parse_units(trimmed, decimals as u32) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(WidgetError::validation("Amount cannot be negative")),
        Err(e) => Err(WidgetError::validation(format!("Invalid amount: {}", e))),
    }
}

/// Convert a smallest-unit amount to a human-readable decimal string
pub fn wei_to_amount(amount: U256, decimals: u8) -> Result<String, WidgetError> {
    format_units(amount, decimals as u32)
        .map_err(|e| WidgetError::validation(format!("Invalid amount: {}", e)))
}

/// Parse a smallest-unit decimal string into a U256
pub fn parse_wei(amount: &str) -> Result<U256, WidgetError> {
    U256::from_dec_str(amount)
        .map_err(|e| WidgetError::validation(format!("Invalid wei amount: {}", e)))
}
