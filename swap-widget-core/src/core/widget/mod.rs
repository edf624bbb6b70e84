//! Headless widget controller
//!
//! Owns the swap-entry state a visual shell renders: token pair, amount,
//! slippage, excluded liquidity sources, and the current priced route.
//! Rendering stays with the host; this type only orchestrates.

use crate::core::registry::TokenRegistry;
use crate::core::slippage::{parse_slippage_input, validate_slippage_input, SlippageValidation};
use crate::core::swap::{ConfirmationRequest, SwapConfirmation};
use crate::domain::entities::{Chain, TokenInfo, Trade};
use crate::domain::repositories::StorageRepository;
use crate::infrastructure::aggregator::AggregatorClient;
use crate::infrastructure::provider::WalletProvider;
use crate::shared::constants::{
    BPS, DEFAULT_CLIENT_ID, DEFAULT_DEADLINE_MINUTES, DEFAULT_SLIPPAGE_BPS,
    MAX_INPUT_FRACTION_DIGITS, NATIVE_TOKEN_ADDRESS,
};
use crate::shared::error::WidgetError;
use crate::shared::types::WidgetResult;
use crate::shared::utils::{amount_to_wei, same_address, wei_to_amount};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::Arc;

lazy_static! {
    static ref AMOUNT_INPUT_RE: Regex =
        Regex::new(r"^[0-9]*\.?[0-9]*$").expect("invalid amount pattern");
}

/// Host-supplied widget configuration
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Client identifier forwarded to the aggregator as `source`
    pub client_id: String,
    pub slippage_bps: u32,
    pub deadline_minutes: i64,
    pub default_token_in: Option<String>,
    pub default_token_out: Option<String>,
    /// Caller-supplied token list; the chain defaults apply when empty
    pub token_list: Vec<TokenInfo>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_minutes: DEFAULT_DEADLINE_MINUTES,
            default_token_in: None,
            default_token_out: None,
            token_list: Vec::new(),
        }
    }
}

pub struct SwapWidget<P: WalletProvider, S: StorageRepository> {
    provider: Arc<P>,
    aggregator: AggregatorClient,
    registry: TokenRegistry<S>,
    client_id: String,
    deadline_minutes: i64,
    slippage_bps: u32,
    token_in: String,
    token_out: String,
    input_amount: String,
    excluded_sources: BTreeSet<String>,
    trade: Option<Trade>,
}

impl<P: WalletProvider, S: StorageRepository> SwapWidget<P, S> {
    pub fn new(provider: Arc<P>, aggregator: AggregatorClient, storage: S, config: WidgetConfig) -> Self {
        let chain = provider.chain();
        let registry = TokenRegistry::new(chain, config.token_list, storage);

        let token_in = config
            .default_token_in
            .map(|addr| remap_wrapped_default(chain, addr))
            .unwrap_or_else(|| NATIVE_TOKEN_ADDRESS.to_string());
        let token_out = config
            .default_token_out
            .map(|addr| remap_wrapped_default(chain, addr))
            .unwrap_or_default();

        Self {
            provider,
            aggregator,
            registry,
            client_id: config.client_id,
            deadline_minutes: config.deadline_minutes,
            slippage_bps: config.slippage_bps,
            token_in,
            token_out,
            input_amount: String::new(),
            excluded_sources: BTreeSet::new(),
            trade: None,
        }
    }

    pub fn chain(&self) -> Chain {
        self.provider.chain()
    }

    pub fn tokens(&self) -> Vec<TokenInfo> {
        self.registry.tokens()
    }

    pub fn registry(&self) -> &TokenRegistry<S> {
        &self.registry
    }

    /// Mutable registry access for import/remove flows
    pub fn registry_mut(&mut self) -> &mut TokenRegistry<S> {
        &mut self.registry
    }

    pub fn token_in(&self) -> &str {
        &self.token_in
    }

    pub fn token_out(&self) -> &str {
        &self.token_out
    }

    /// Select the input token; picking the current output swaps the pair
    pub fn set_token_in(&mut self, address: &str) {
        if same_address(address, &self.token_out) {
            self.token_out = std::mem::take(&mut self.token_in);
        }
        self.token_in = address.to_string();
        self.trade = None;
    }

    pub fn set_token_out(&mut self, address: &str) {
        if same_address(address, &self.token_in) {
            self.token_in = std::mem::take(&mut self.token_out);
        }
        self.token_out = address.to_string();
        self.trade = None;
    }

    pub fn switch_tokens(&mut self) {
        std::mem::swap(&mut self.token_in, &mut self.token_out);
        self.trade = None;
    }

    pub fn input_amount(&self) -> &str {
        &self.input_amount
    }

    /// Accepts decimal text, commas treated as dots, fraction clamped to 18
    /// digits. Invalid input is rejected and the current amount kept.
    pub fn set_input_amount(&mut self, raw: &str) -> bool {
        let mut value = raw.replace(',', ".");
        if !AMOUNT_INPUT_RE.is_match(&value) {
            return false;
        }

        if let Some(dot) = value.find('.') {
            let fraction_len = value.len() - dot - 1;
            if fraction_len > MAX_INPUT_FRACTION_DIGITS {
                value.truncate(dot + 1 + MAX_INPUT_FRACTION_DIGITS);
            }
        }

        self.input_amount = value;
        self.trade = None;
        true
    }

    pub fn slippage_bps(&self) -> u32 {
        self.slippage_bps
    }

    /// Set slippage from a preset, in basis points
    pub fn set_slippage_bps(&mut self, bps: u32) {
        self.slippage_bps = bps;
    }

    /// Validate free text and apply it when acceptable
    pub fn set_slippage_text(&mut self, text: &str) -> SlippageValidation {
        let validation = validate_slippage_input(text);
        if validation.is_valid {
            if let Some(bps) = parse_slippage_input(text) {
                if bps >= 0 {
                    self.slippage_bps = bps as u32;
                }
            }
        }
        validation
    }

    pub fn excluded_sources(&self) -> &BTreeSet<String> {
        &self.excluded_sources
    }

    pub fn set_excluded_sources(&mut self, sources: BTreeSet<String>) {
        self.excluded_sources = sources;
        self.trade = None;
    }

    pub fn trade(&self) -> Option<&Trade> {
        self.trade.as_ref()
    }

    /// Replace or invalidate the current route
    pub fn set_trade(&mut self, trade: Option<Trade>) {
        self.trade = trade;
    }

    /// Fetch a fresh route for the current pair and amount
    pub async fn refresh_rate(&mut self) -> WidgetResult<&Trade> {
        if self.token_out.is_empty() {
            return Err(WidgetError::validation("Select an output token first"));
        }
        let token_in = self.resolve_token(&self.token_in)?;
        let amount_in = amount_to_wei(&self.input_amount, token_in.decimals)?;

        debug!(
            "Refreshing rate: {} {} -> {}",
            self.input_amount, token_in.symbol, self.token_out
        );

        let trade = self
            .aggregator
            .fetch_route(
                self.chain(),
                &self.token_in,
                &self.token_out,
                amount_in,
                &self.excluded_sources,
            )
            .await?;

        Ok(&*self.trade.insert(trade))
    }

    /// Output amount in human units, derived from the current route
    pub fn amount_out(&self) -> Option<String> {
        let trade = self.trade.as_ref()?;
        let decimals = self
            .resolve_token(&self.token_out)
            .map(|t| t.decimals)
            .unwrap_or(18);
        let wei = trade.amount_out_wei().ok()?;
        wei_to_amount(wei, decimals).ok()
    }

    /// Output per one unit of input
    pub fn rate(&self) -> Option<f64> {
        let amount_in = self.input_amount.parse::<f64>().ok().filter(|v| *v > 0.0)?;
        let amount_out = self.amount_out()?.parse::<f64>().ok()?;
        Some(amount_out / amount_in)
    }

    pub fn inverse_rate(&self) -> Option<f64> {
        self.rate().filter(|r| *r > 0.0).map(|r| 1.0 / r)
    }

    /// Least acceptable output after slippage, in human units
    pub fn min_amount_out(&self) -> Option<f64> {
        let amount_out = self.amount_out()?.parse::<f64>().ok()?;
        Some(amount_out * (1.0 - self.slippage_bps as f64 / BPS as f64))
    }

    /// Estimated price impact as a percentage of the input value
    pub fn price_impact(&self) -> Option<f64> {
        let trade = self.trade.as_ref()?;
        let amount_in_usd = trade.amount_in_usd().filter(|v| *v > 0.0)?;
        let amount_out_usd = trade.amount_out_usd().filter(|v| *v > 0.0)?;
        Some((amount_in_usd - amount_out_usd) / amount_in_usd * 100.0)
    }

    pub fn gas_usd(&self) -> Option<f64> {
        self.trade.as_ref().and_then(|t| t.gas_usd())
    }

    /// Freeze the current route into a confirmation flow
    pub fn review(&self) -> WidgetResult<SwapConfirmation<P, AggregatorClient>> {
        let trade = self
            .trade
            .as_ref()
            .ok_or_else(|| WidgetError::validation("No priced route to confirm"))?;
        let token_in = self.resolve_token(&self.token_in)?;
        let token_out = self.resolve_token(&self.token_out)?;
        let amount_out = self.amount_out().unwrap_or_default();

        let request = ConfirmationRequest {
            trade: trade.clone(),
            token_in,
            token_out,
            amount_in: self.input_amount.clone(),
            amount_out,
            slippage_bps: self.slippage_bps,
            deadline_minutes: self.deadline_minutes,
            client_id: self.client_id.clone(),
        };

        Ok(SwapConfirmation::new(
            self.provider.clone(),
            Arc::new(self.aggregator.clone()),
            request,
        ))
    }

    fn resolve_token(&self, address: &str) -> WidgetResult<TokenInfo> {
        self.registry
            .find(address)
            .ok_or_else(|| WidgetError::validation(format!("Unknown token: {}", address)))
    }
}

/// Hosts sometimes pass the wrapped-native contract as a default; the pair
/// selector works in terms of the native sentinel instead
fn remap_wrapped_default(chain: Chain, address: String) -> String {
    if same_address(&address, chain.wrapped_native_address()) {
        NATIVE_TOKEN_ADDRESS.to_string()
    } else {
        address
    }
}
