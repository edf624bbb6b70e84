//! Trade entity: one priced swap route returned by the aggregator
//!
//! Amounts here are smallest-unit decimal strings exactly as the API returns
//! them. Fields the widget does not interpret are kept in a passthrough map
//! so the summary round-trips unchanged into the route-build request.

use crate::shared::error::WidgetError;
use crate::shared::utils::parse_wei;
use ethers::types::U256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub token_in: String,
    pub amount_in: String,
    #[serde(default)]
    pub amount_in_usd: String,
    pub token_out: String,
    pub amount_out: String,
    #[serde(default)]
    pub amount_out_usd: String,
    #[serde(default)]
    pub gas: String,
    #[serde(default)]
    pub gas_usd: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub route_summary: RouteSummary,
    pub router_address: String,
}

impl Trade {
    pub fn amount_in_wei(&self) -> Result<U256, WidgetError> {
        parse_wei(&self.route_summary.amount_in)
    }

    pub fn amount_out_wei(&self) -> Result<U256, WidgetError> {
        parse_wei(&self.route_summary.amount_out)
    }

    pub fn amount_in_usd(&self) -> Option<f64> {
        self.route_summary.amount_in_usd.parse::<f64>().ok()
    }

    pub fn amount_out_usd(&self) -> Option<f64> {
        self.route_summary.amount_out_usd.parse::<f64>().ok()
    }

    pub fn gas_usd(&self) -> Option<f64> {
        self.route_summary.gas_usd.parse::<f64>().ok()
    }
}
