//! HTTP client for the swap-aggregation API
//!
//! Two endpoints: `GET {base}/{chain}/api/v1/routes` prices a swap and
//! returns a route summary; `POST {base}/{chain}/api/v1/route/build` turns
//! an accepted summary into transaction calldata.

use crate::domain::entities::{Chain, RouteSummary, Trade};
use crate::shared::constants::{DEFAULT_AGGREGATOR_URL, ROUTE_BUILD_PATH, ROUTE_PATH};
use crate::shared::error::WidgetError;
use crate::shared::types::WidgetResult;
use async_trait::async_trait;
use ethers::types::U256;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Route-build request body, echoing the priced summary back to the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRouteRequest {
    pub route_summary: RouteSummary,
    /// Absolute deadline in epoch seconds
    pub deadline: u64,
    /// Slippage tolerance in basis points
    pub slippage_tolerance: u32,
    pub sender: String,
    pub recipient: String,
    /// Client identifier for attribution
    pub source: String,
}

/// Successful route-build payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltRoute {
    /// Calldata hex for the router contract
    pub data: String,
    #[serde(default)]
    pub router_address: Option<String>,
    #[serde(default)]
    pub gas: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuildRouteResponse {
    data: Option<BuiltRoute>,
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    data: Option<Trade>,
    #[serde(default)]
    message: Option<String>,
}

/// Seam for the calldata-build step so the submission flow can be exercised
/// without a network
#[async_trait]
pub trait RouteBuilder: Send + Sync {
    async fn build_route(&self, chain: Chain, request: &BuildRouteRequest) -> WidgetResult<BuiltRoute>;
}

/// Client for the aggregator HTTP API
#[derive(Debug, Clone)]
pub struct AggregatorClient {
    http: Client,
    base_url: String,
}

impl AggregatorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a priced route for the given pair and input amount
    pub async fn fetch_route(
        &self,
        chain: Chain,
        token_in: &str,
        token_out: &str,
        amount_in: U256,
        excluded_sources: &BTreeSet<String>,
    ) -> WidgetResult<Trade> {
        let url = format!("{}/{}/{}", self.base_url, chain.aggregator_path(), ROUTE_PATH);
        let amount = amount_in.to_string();

        let mut query: Vec<(&str, &str)> = vec![
            ("tokenIn", token_in),
            ("tokenOut", token_out),
            ("amountIn", &amount),
            ("gasInclude", "1"),
        ];
        let excluded = excluded_sources.iter().cloned().collect::<Vec<_>>().join(",");
        if !excluded.is_empty() {
            query.push(("excludedSources", &excluded));
        }

        debug!("Fetching route {} -> {} on {}", token_in, token_out, chain.name());

        let response = self.http.get(&url).query(&query).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WidgetError::quote(format!(
                "Aggregator returned {}: {}",
                status, body
            )));
        }

        let parsed: RouteResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::quote(format!("Invalid route response: {}", e)))?;

        let trade = parsed.data.ok_or_else(|| {
            WidgetError::quote(
                parsed
                    .message
                    .unwrap_or_else(|| "Route response carried no data".to_string()),
            )
        })?;

        info!(
            "Route received: amountIn={} amountOut={}",
            trade.route_summary.amount_in, trade.route_summary.amount_out
        );

        Ok(trade)
    }

    fn parse_build_response(parsed: BuildRouteResponse) -> WidgetResult<BuiltRoute> {
        match parsed.data {
            Some(built) => Ok(built),
            None => {
                let details = parsed
                    .details
                    .map(|d| d.to_string())
                    .or(parsed.message)
                    .unwrap_or_else(|| "no details".to_string());
                Err(WidgetError::build_route(details))
            }
        }
    }
}

impl Default for AggregatorClient {
    fn default() -> Self {
        Self::new(DEFAULT_AGGREGATOR_URL)
    }
}

#[async_trait]
impl RouteBuilder for AggregatorClient {
    async fn build_route(&self, chain: Chain, request: &BuildRouteRequest) -> WidgetResult<BuiltRoute> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            chain.aggregator_path(),
            ROUTE_BUILD_PATH
        );

        debug!("Building route calldata on {}", chain.name());

        let response = self.http.post(&url).json(request).send().await?;
        let parsed: BuildRouteResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::build_route(format!("Invalid build response: {}", e)))?;

        Self::parse_build_response(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_response_with_data() {
        let parsed: BuildRouteResponse = serde_json::from_str(
            r#"{"data":{"data":"0xe21fd0e9","routerAddress":"0x6131B5fae19EA4f9D964eAc0408E4408b66337b5"}}"#,
        )
        .expect("Failed to parse build response");
        let built = AggregatorClient::parse_build_response(parsed).expect("Expected data");
        assert_eq!(built.data, "0xe21fd0e9");
        assert_eq!(
            built.router_address.as_deref(),
            Some("0x6131B5fae19EA4f9D964eAc0408E4408b66337b5")
        );
    }

    #[test]
    fn test_build_response_without_data_carries_details() {
        let parsed: BuildRouteResponse = serde_json::from_str(
            r#"{"details":{"code":4008,"reason":"route expired"},"message":"failed"}"#,
        )
        .expect("Failed to parse build response");
        let err = AggregatorClient::parse_build_response(parsed).expect_err("Expected failure");
        match err {
            WidgetError::BuildRoute(details) => {
                assert!(details.contains("route expired"));
            }
            other => panic!("Unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_build_request_serializes_camel_case() {
        let request = BuildRouteRequest {
            route_summary: serde_json::from_str(
                r#"{"tokenIn":"0xa","amountIn":"1","tokenOut":"0xb","amountOut":"2"}"#,
            )
            .expect("bad summary literal"),
            deadline: 1_700_000_000,
            slippage_tolerance: 50,
            sender: "0xsender".to_string(),
            recipient: "0xsender".to_string(),
            source: "swap-widget".to_string(),
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize request");
        assert_eq!(json["slippageTolerance"], 50);
        assert_eq!(json["routeSummary"]["tokenIn"], "0xa");
        assert_eq!(json["source"], "swap-widget");
    }

    #[test]
    fn test_default_base_url() {
        let client = AggregatorClient::default();
        assert_eq!(client.base_url(), DEFAULT_AGGREGATOR_URL);
    }
}
