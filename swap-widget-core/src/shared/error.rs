//! Error handling for the widget core
//!
//! This module defines the error types used throughout the widget core.

use thiserror::Error;

/// Widget error type
#[derive(Error, Debug, Clone)]
pub enum WidgetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Quote error: {0}")]
    Quote(String),

    #[error("Route build failed: {0}")]
    BuildRoute(String),

    #[error("Gas estimation failed: {0}")]
    Estimation(String),

    #[error("Transaction submission failed: {0}")]
    Submission(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unsupported chain id: {0}")]
    UnsupportedChain(u64),
}

impl WidgetError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a quote error
    pub fn quote(message: impl Into<String>) -> Self {
        Self::Quote(message.into())
    }

    /// Create a route-build error
    pub fn build_route(message: impl Into<String>) -> Self {
        Self::BuildRoute(message.into())
    }

    /// Create a gas-estimation error
    pub fn estimation(message: impl Into<String>) -> Self {
        Self::Estimation(message.into())
    }

    /// Create a submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// True for errors raised before a transaction hash exists
    pub fn is_pre_submission(&self) -> bool {
        matches!(
            self,
            Self::Quote(_) | Self::BuildRoute(_) | Self::Estimation(_) | Self::Submission(_)
        )
    }
}

// Standard library error conversions
impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

impl From<hex::FromHexError> for WidgetError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}
