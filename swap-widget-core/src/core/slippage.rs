//! Slippage-tolerance input validation
//!
//! Free text in, verdict out. The checks run in a fixed order and the first
//! matching band wins, so a value that is both tiny and malformed resolves
//! to whichever boundary triggers first.

use crate::shared::constants::{
    HIGH_SLIPPAGE_WARNING_BPS, LOW_SLIPPAGE_WARNING_BPS, MAX_SLIPPAGE_IN_BPS,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SLIPPAGE_INPUT_RE: Regex =
        Regex::new(r"^\s*([0-9]+)(\.[0-9]+)?\s*$").expect("invalid slippage pattern");
}

const INVALID_MESSAGE: &str = "Enter a valid slippage percentage";
const TOO_LARGE_MESSAGE: &str = "Enter a smaller slippage percentage";
const MAY_FAIL_MESSAGE: &str = "Your transaction may fail";
const MAY_BE_FRONTRUN_MESSAGE: &str = "Your transaction may be frontrun";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlippageValidation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl SlippageValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn valid_with(message: &str) -> Self {
        Self {
            is_valid: true,
            message: Some(message.to_string()),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Parse a percentage string into basis points, rounded to the nearest point
pub fn parse_slippage_input(input: &str) -> Option<i64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|pct| pct.is_finite())
        .map(|pct| (pct * 100.0).round() as i64)
}

/// Validate a free-text slippage percentage
pub fn validate_slippage_input(input: &str) -> SlippageValidation {
    if input.is_empty() {
        return SlippageValidation::valid();
    }

    if !SLIPPAGE_INPUT_RE.is_match(input) {
        return SlippageValidation::invalid(INVALID_MESSAGE);
    }

    let raw_slippage = match parse_slippage_input(input) {
        Some(bps) => bps,
        None => return SlippageValidation::invalid(INVALID_MESSAGE),
    };

    if raw_slippage < 0 {
        SlippageValidation::invalid(INVALID_MESSAGE)
    } else if raw_slippage < LOW_SLIPPAGE_WARNING_BPS as i64 {
        SlippageValidation::valid_with(MAY_FAIL_MESSAGE)
    } else if raw_slippage > MAX_SLIPPAGE_IN_BPS as i64 {
        SlippageValidation::invalid(TOO_LARGE_MESSAGE)
    } else if raw_slippage > HIGH_SLIPPAGE_WARNING_BPS as i64 {
        SlippageValidation::valid_with(MAY_BE_FRONTRUN_MESSAGE)
    } else {
        SlippageValidation::valid()
    }
}
