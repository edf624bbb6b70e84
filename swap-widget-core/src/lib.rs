//! Swap Widget Core
//!
//! Headless, embeddable token-swap widget for EVM chains. Handles token
//! selection, aggregator quoting, and transaction submission; rendering is
//! left to the host application.
//!
//! ## Architecture
//!
//! This library follows a layered architecture:
//!
//! - **Core**: token registry, submission flow, slippage validation,
//!   display formatting, and the headless widget controller
//! - **Domain**: entities (chains, tokens, routes) and the persistence seam
//! - **Infrastructure**: aggregator HTTP client, `ethers` wallet provider,
//!   storage implementations
//! - **Shared**: common types, constants, and utilities
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use ethers::providers::{Http, Provider};
//! use ethers::types::Address;
//! use swap_widget_core::{
//!     AggregatorClient, Chain, EthersWalletProvider, FileStorage, SwapWidget, WidgetConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let rpc = Arc::new(Provider::<Http>::try_from("https://eth.llamarpc.com")?);
//! let account: Address = "0x1111111111111111111111111111111111111111".parse()?;
//! let provider = Arc::new(EthersWalletProvider::new(rpc, account, Chain::Ethereum));
//!
//! let mut widget = SwapWidget::new(
//!     provider,
//!     AggregatorClient::default(),
//!     FileStorage::new()?,
//!     WidgetConfig::default(),
//! );
//! widget.set_token_out("0xdAC17F958D2ee523a2206206994597C13D831ec7");
//! widget.set_input_amount("1.5");
//!
//! let trade = widget.refresh_rate().await?;
//! println!("amount out: {}", trade.route_summary.amount_out);
//!
//! let mut confirmation = widget.review()?;
//! confirmation.submit().await;
//! # Ok(())
//! # }
//! ```

use dotenv::dotenv;
use std::env;
use std::sync::Arc;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::infrastructure::provider::WalletProvider;
use crate::shared::constants::{
    DEFAULT_AGGREGATOR_URL, DEFAULT_CLIENT_ID, DEFAULT_DEADLINE_MINUTES, DEFAULT_SLIPPAGE_BPS,
    ENV_AGGREGATOR_URL, ENV_CLIENT_ID, ENV_DEADLINE_MINUTES, ENV_SLIPPAGE_BPS,
};

// Re-export main components
pub use crate::core::{
    calculate_gas_margin, cancellation_pair, classify_swap, default_tokens, format_number,
    parse_slippage_input, validate_slippage_input, CancelHandle, CompactStyle,
    ConfirmationRequest, FormatOptions, SlippageValidation, SubmissionState, SubmitObserver,
    SwapConfirmation, SwapKind, SwapWidget, TokenRegistry, WidgetConfig, ZeroRunStyle,
};
pub use crate::domain::entities::{Chain, RouteSummary, TokenInfo, Trade};
pub use crate::domain::repositories::StorageRepository;
pub use crate::infrastructure::aggregator::{
    AggregatorClient, BuildRouteRequest, BuiltRoute, RouteBuilder,
};
pub use crate::infrastructure::provider::EthersWalletProvider;
pub use crate::infrastructure::storage::{FileStorage, InMemoryStorage};
pub use crate::shared::error::WidgetError;
pub use crate::shared::types::{AmountSnapshot, ReceiptSummary, SubmittedTransaction, WidgetResult};

/// Initialize logging for hosts that do not configure their own
pub fn init() {
    let _ = env_logger::try_init();
}

/// Environment-derived widget settings, with a `.env` file honored
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub aggregator_url: String,
    pub client_id: String,
    pub slippage_bps: u32,
    pub deadline_minutes: i64,
}

impl WidgetSettings {
    /// Read settings from the environment, falling back to safe defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let aggregator_url =
            env::var(ENV_AGGREGATOR_URL).unwrap_or_else(|_| DEFAULT_AGGREGATOR_URL.to_string());
        let client_id = env::var(ENV_CLIENT_ID).unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());
        let slippage_bps = env::var(ENV_SLIPPAGE_BPS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SLIPPAGE_BPS);
        let deadline_minutes = env::var(ENV_DEADLINE_MINUTES)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DEADLINE_MINUTES);

        Self {
            aggregator_url,
            client_id,
            slippage_bps,
            deadline_minutes,
        }
    }

    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            client_id: self.client_id.clone(),
            slippage_bps: self.slippage_bps,
            deadline_minutes: self.deadline_minutes,
            ..WidgetConfig::default()
        }
    }
}

/// Initialize a widget over the given provider with file-backed storage
/// and environment-derived settings
pub fn init_swap_widget<P: WalletProvider>(
    provider: Arc<P>,
) -> Result<SwapWidget<P, FileStorage>, WidgetError> {
    let settings = WidgetSettings::from_env();
    let aggregator = AggregatorClient::new(settings.aggregator_url.clone());
    let storage = FileStorage::new()?;

    Ok(SwapWidget::new(
        provider,
        aggregator,
        storage,
        settings.widget_config(),
    ))
}
