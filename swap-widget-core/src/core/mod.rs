//! Core widget functionality
//!
//! This module contains the widget's business logic: the token registry,
//! the swap submission flow, slippage validation, display formatting, and
//! the headless controller that ties them together.

pub mod format;
pub mod registry;
pub mod slippage;
pub mod swap;
pub mod widget;

pub use format::{format_number, CompactStyle, FormatOptions, ZeroRunStyle};
pub use registry::{default_tokens, TokenRegistry};
pub use slippage::{parse_slippage_input, validate_slippage_input, SlippageValidation};
pub use swap::{
    calculate_gas_margin, cancellation_pair, classify_swap, CancelHandle, ConfirmationRequest,
    SubmissionState, SubmitObserver, SwapConfirmation, SwapKind,
};
pub use widget::{SwapWidget, WidgetConfig};
