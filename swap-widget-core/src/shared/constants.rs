//! Constants for the widget core
//!
//! This module contains all constants used throughout the widget core.

// Sentinel address the aggregator uses for a chain's native currency
pub const NATIVE_TOKEN_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

// Basis points
pub const BPS: u32 = 10_000;

// Slippage constants
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;
pub const MAX_SLIPPAGE_IN_BPS: u32 = 2_000;
pub const LOW_SLIPPAGE_WARNING_BPS: u32 = 50;
pub const HIGH_SLIPPAGE_WARNING_BPS: u32 = 500;

// Transaction constants
pub const DEFAULT_DEADLINE_MINUTES: i64 = 20;
pub const GAS_MARGIN_BPS: u64 = 2_000;
pub const DEFAULT_GAS_LIMIT_MARGIN: u64 = 20_000;
pub const RECEIPT_POLL_INTERVAL_SECS: u64 = 10;

// Amount-entry constants
pub const MAX_INPUT_FRACTION_DIGITS: usize = 18;

// Aggregator constants
pub const DEFAULT_AGGREGATOR_URL: &str = "https://aggregator-api.kyberswap.com";
pub const ROUTE_PATH: &str = "api/v1/routes";
pub const ROUTE_BUILD_PATH: &str = "api/v1/route/build";

// Storage constants
pub const IMPORTED_TOKENS_KEY: &str = "imported_tokens";
pub const STORAGE_DIR_NAME: &str = "swap-widget";

// Environment variable names
pub const ENV_AGGREGATOR_URL: &str = "SWAP_WIDGET_AGGREGATOR_URL";
pub const ENV_CLIENT_ID: &str = "SWAP_WIDGET_CLIENT_ID";
pub const ENV_SLIPPAGE_BPS: &str = "SWAP_WIDGET_SLIPPAGE_BPS";
pub const ENV_DEADLINE_MINUTES: &str = "SWAP_WIDGET_DEADLINE_MINUTES";

// Default client identifier sent to the aggregator as `source`
pub const DEFAULT_CLIENT_ID: &str = "swap-widget";

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
