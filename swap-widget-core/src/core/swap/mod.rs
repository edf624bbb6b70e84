//! Swap confirmation and submission flow
//!
//! Drives one confirmed trade to a terminal outcome: classify the operation
//! (wrap, unwrap, or aggregated swap), assemble the call, estimate gas with
//! a safety margin, submit through the connected signer, then poll for the
//! receipt. Each confirmation owns its own state machine and poll loop;
//! retrying means building a fresh confirmation.

use crate::domain::entities::{Chain, TokenInfo, Trade};
use crate::infrastructure::aggregator::{BuildRouteRequest, RouteBuilder};
use crate::infrastructure::provider::WalletProvider;
use crate::shared::constants::{
    BPS, DEFAULT_CLIENT_ID, DEFAULT_DEADLINE_MINUTES, DEFAULT_GAS_LIMIT_MARGIN,
    DEFAULT_SLIPPAGE_BPS, GAS_MARGIN_BPS, RECEIPT_POLL_INTERVAL_SECS,
};
use crate::shared::error::WidgetError;
use crate::shared::types::{AmountSnapshot, SubmittedTransaction, WidgetResult};
use crate::shared::utils::same_address;
use chrono::{Duration as ChronoDuration, Utc};
use ethers::types::{Address, Bytes, TransactionRequest, H256, U256};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};

// deposit() / withdraw(uint256) on the canonical wrapped-native contract
const WRAPPED_DEPOSIT_SELECTOR: [u8; 4] = [0xd0, 0xe3, 0x0d, 0xb0];
const WRAPPED_WITHDRAW_SELECTOR: [u8; 4] = [0x2e, 0x1a, 0x7d, 0x4d];

/// How a confirmed trade executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    /// Native currency into its wrapped form, no aggregator involved
    Wrap,
    /// Wrapped form back into native currency
    Unwrap,
    /// Everything else goes through the aggregator's router
    Aggregated,
}

/// Classify a route by its endpoints against the chain's native sentinel
/// and wrapped-native contract
pub fn classify_swap(chain: Chain, token_in: &str, token_out: &str) -> SwapKind {
    let wrapped = chain.wrapped_native_address();
    if chain.is_native_sentinel(token_in) && same_address(token_out, wrapped) {
        SwapKind::Wrap
    } else if chain.is_native_sentinel(token_out) && same_address(token_in, wrapped) {
        SwapKind::Unwrap
    } else {
        SwapKind::Aggregated
    }
}

/// Add headroom to a gas estimate: 20% with a 20k floor
pub fn calculate_gas_margin(estimate: U256) -> U256 {
    let margin = estimate * U256::from(GAS_MARGIN_BPS) / U256::from(BPS);
    let floor = U256::from(DEFAULT_GAS_LIMIT_MARGIN);
    if margin >= floor {
        estimate + margin
    } else {
        estimate + floor
    }
}

fn deposit_calldata() -> Bytes {
    Bytes::from(WRAPPED_DEPOSIT_SELECTOR.to_vec())
}

fn withdraw_calldata(amount: U256) -> Bytes {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&WRAPPED_WITHDRAW_SELECTOR);
    let mut buf = [0u8; 32];
    amount.to_big_endian(&mut buf);
    data.extend_from_slice(&buf);
    Bytes::from(data)
}

fn parse_address(value: &str) -> WidgetResult<Address> {
    value
        .parse::<Address>()
        .map_err(|e| WidgetError::validation(format!("Invalid address {}: {}", value, e)))
}

fn parse_calldata(value: &str) -> WidgetResult<Bytes> {
    Ok(Bytes::from(hex::decode(value.trim_start_matches("0x"))?))
}

/// State of one submission attempt
#[derive(Debug, Clone)]
pub enum SubmissionState {
    Idle,
    Preparing,
    AwaitingSignature,
    Submitted { hash: H256 },
    Confirmed { hash: H256 },
    Reverted { hash: H256 },
    Errored { error: WidgetError },
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Confirmed { .. }
                | SubmissionState::Reverted { .. }
                | SubmissionState::Errored { .. }
        )
    }

    /// The hash survives into `Reverted` so the explorer link stays usable
    pub fn tx_hash(&self) -> Option<H256> {
        match self {
            SubmissionState::Submitted { hash }
            | SubmissionState::Confirmed { hash }
            | SubmissionState::Reverted { hash } => Some(*hash),
            _ => None,
        }
    }
}

/// Everything the flow needs for one confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationRequest {
    pub trade: Trade,
    pub token_in: TokenInfo,
    pub token_out: TokenInfo,
    /// Human-unit amounts as shown to the user at review time
    pub amount_in: String,
    pub amount_out: String,
    pub slippage_bps: u32,
    pub deadline_minutes: i64,
    /// Client identifier forwarded to the aggregator as `source`
    pub client_id: String,
}

impl ConfirmationRequest {
    pub fn new(trade: Trade, token_in: TokenInfo, token_out: TokenInfo) -> Self {
        Self {
            trade,
            token_in,
            token_out,
            amount_in: String::new(),
            amount_out: String::new(),
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_minutes: DEFAULT_DEADLINE_MINUTES,
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

/// Callback invoked once per accepted submission, before confirmation
pub type SubmitObserver = Box<dyn Fn(H256, &serde_json::Value) + Send + Sync>;

/// Handle that stops an in-flight receipt poll; dropping it cancels too
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a cancel handle and the receiver `track_confirmation` listens on
pub fn cancellation_pair() -> (CancelHandle, watch::Receiver<bool>) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, rx)
}

/// One confirmation-dialog lifetime
pub struct SwapConfirmation<P, B> {
    provider: Arc<P>,
    route_builder: Arc<B>,
    request: ConfirmationRequest,
    state: SubmissionState,
    snapshot: Option<AmountSnapshot>,
    on_submit: Option<SubmitObserver>,
    attempt_id: String,
}

impl<P: WalletProvider, B: RouteBuilder> SwapConfirmation<P, B> {
    pub fn new(provider: Arc<P>, route_builder: Arc<B>, request: ConfirmationRequest) -> Self {
        Self {
            provider,
            route_builder,
            request,
            state: SubmissionState::Idle,
            snapshot: None,
            on_submit: None,
            attempt_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_submit_observer(mut self, observer: SubmitObserver) -> Self {
        self.on_submit = Some(observer);
        self
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Amounts frozen at submission; what the confirmation view displays
    pub fn snapshot(&self) -> Option<&AmountSnapshot> {
        self.snapshot.as_ref()
    }

    /// Block-explorer link once a hash exists
    pub fn tx_url(&self) -> Option<String> {
        self.state
            .tx_hash()
            .map(|hash| self.provider.chain().tx_url(hash))
    }

    /// Run the submission. Acts only from `Idle`; a repeated call is a
    /// logged no-op so re-entrant callers cannot double-submit.
    pub async fn submit(&mut self) -> &SubmissionState {
        if !matches!(self.state, SubmissionState::Idle) {
            warn!("[{}] submit called again, ignoring", self.attempt_id);
            return &self.state;
        }

        self.snapshot = Some(AmountSnapshot {
            amount_in: self.request.amount_in.clone(),
            amount_out: self.request.amount_out.clone(),
        });
        self.state = SubmissionState::Preparing;

        match self.drive_submission().await {
            Ok(submitted) => {
                info!("[{}] transaction accepted: {:#x}", self.attempt_id, submitted.hash);
                if let Some(observer) = &self.on_submit {
                    observer(submitted.hash, &submitted.raw);
                }
                self.state = SubmissionState::Submitted { hash: submitted.hash };
            }
            Err(error) => {
                warn!("[{}] submission failed: {}", self.attempt_id, error);
                self.state = SubmissionState::Errored { error };
            }
        }

        &self.state
    }

    async fn drive_submission(&mut self) -> WidgetResult<SubmittedTransaction> {
        let chain = self.provider.chain();
        let account = self.provider.account();
        let summary = self.request.trade.route_summary.clone();
        let amount_in = self.request.trade.amount_in_wei()?;
        let kind = classify_swap(chain, &summary.token_in, &summary.token_out);

        debug!("[{}] operation classified as {:?}", self.attempt_id, kind);

        let call = match kind {
            SwapKind::Wrap => {
                let wrapped = parse_address(chain.wrapped_native_address())?;
                TransactionRequest::new()
                    .from(account)
                    .to(wrapped)
                    .value(amount_in)
                    .data(deposit_calldata())
            }
            SwapKind::Unwrap => {
                let wrapped = parse_address(chain.wrapped_native_address())?;
                TransactionRequest::new()
                    .from(account)
                    .to(wrapped)
                    .data(withdraw_calldata(amount_in))
            }
            SwapKind::Aggregated => {
                let minutes = if self.request.deadline_minutes > 0 {
                    self.request.deadline_minutes
                } else {
                    DEFAULT_DEADLINE_MINUTES
                };
                let deadline = (Utc::now() + ChronoDuration::minutes(minutes)).timestamp() as u64;

                let build_request = BuildRouteRequest {
                    route_summary: summary,
                    deadline,
                    slippage_tolerance: self.request.slippage_bps,
                    sender: format!("{:#x}", account),
                    recipient: format!("{:#x}", account),
                    source: self.request.client_id.clone(),
                };
                let built = self.route_builder.build_route(chain, &build_request).await?;

                let router = parse_address(&self.request.trade.router_address)?;
                let value = if chain.is_native_sentinel(&self.request.token_in.address) {
                    amount_in
                } else {
                    U256::zero()
                };
                TransactionRequest::new()
                    .from(account)
                    .to(router)
                    .value(value)
                    .data(parse_calldata(&built.data)?)
            }
        };

        let estimate = self.provider.estimate_gas(&call).await?;
        let gas_limit = calculate_gas_margin(estimate);
        debug!(
            "[{}] gas estimate {} padded to {}",
            self.attempt_id, estimate, gas_limit
        );

        self.state = SubmissionState::AwaitingSignature;
        self.provider.send_transaction(call.gas(gas_limit)).await
    }

    /// Poll for the receipt on a fixed interval until a terminal state or
    /// cancellation. Transient fetch errors keep the poll alive.
    pub async fn track_confirmation(&mut self, cancel: &mut watch::Receiver<bool>) -> &SubmissionState {
        let hash = match self.state {
            SubmissionState::Submitted { hash } => hash,
            _ => return &self.state,
        };

        let mut ticker = interval(Duration::from_secs(RECEIPT_POLL_INTERVAL_SECS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The interval's first tick resolves immediately; consume it so the
        // first receipt fetch happens one full interval after submission
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.provider.transaction_receipt(hash).await {
                        Ok(Some(receipt)) => {
                            self.state = if receipt.succeeded {
                                SubmissionState::Confirmed { hash }
                            } else {
                                SubmissionState::Reverted { hash }
                            };
                            info!("[{}] terminal receipt: {:?}", self.attempt_id, self.state);
                            break;
                        }
                        Ok(None) => {
                            debug!("[{}] no receipt yet", self.attempt_id);
                        }
                        Err(e) => {
                            warn!("[{}] receipt poll failed: {}", self.attempt_id, e);
                        }
                    }
                }
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        debug!("[{}] receipt polling cancelled", self.attempt_id);
                        break;
                    }
                }
            }
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RouteSummary;
    use crate::infrastructure::aggregator::BuiltRoute;
    use crate::shared::constants::NATIVE_TOKEN_ADDRESS;
    use crate::shared::types::ReceiptSummary;
    use async_trait::async_trait;
    use ethers::types::NameOrAddress;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
    const ROUTER: &str = "0x6131B5fae19EA4f9D964eAc0408E4408b66337b5";

    struct ScriptedProvider {
        estimate: WidgetResult<U256>,
        send_error: Option<WidgetError>,
        receipts: Mutex<VecDeque<WidgetResult<Option<ReceiptSummary>>>>,
        estimate_calls: AtomicUsize,
        send_calls: AtomicUsize,
        receipt_calls: AtomicUsize,
        last_call: Mutex<Option<TransactionRequest>>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                estimate: Ok(U256::from(100_000u64)),
                send_error: None,
                receipts: Mutex::new(VecDeque::new()),
                estimate_calls: AtomicUsize::new(0),
                send_calls: AtomicUsize::new(0),
                receipt_calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            }
        }

        fn with_receipts(self, receipts: Vec<WidgetResult<Option<ReceiptSummary>>>) -> Self {
            *self.receipts.lock().unwrap() = receipts.into();
            self
        }

        fn sent_call(&self) -> TransactionRequest {
            self.last_call.lock().unwrap().clone().expect("nothing was sent")
        }
    }

    fn receipt(succeeded: bool) -> ReceiptSummary {
        ReceiptSummary {
            transaction_hash: H256::repeat_byte(0xaa),
            succeeded,
            block_number: Some(1),
        }
    }

    #[async_trait]
    impl WalletProvider for ScriptedProvider {
        fn account(&self) -> Address {
            Address::repeat_byte(0x11)
        }

        fn chain(&self) -> Chain {
            Chain::Ethereum
        }

        async fn estimate_gas(&self, _call: &TransactionRequest) -> WidgetResult<U256> {
            self.estimate_calls.fetch_add(1, Ordering::SeqCst);
            self.estimate.clone()
        }

        async fn send_transaction(&self, call: TransactionRequest) -> WidgetResult<SubmittedTransaction> {
            self.send_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = &self.send_error {
                return Err(error.clone());
            }
            *self.last_call.lock().unwrap() = Some(call);
            Ok(SubmittedTransaction {
                hash: H256::repeat_byte(0xaa),
                raw: serde_json::json!({"hash": "0xaa"}),
            })
        }

        async fn transaction_receipt(&self, _hash: H256) -> WidgetResult<Option<ReceiptSummary>> {
            self.receipt_calls.fetch_add(1, Ordering::SeqCst);
            self.receipts
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(None))
        }
    }

    struct FixedBuilder {
        result: WidgetResult<BuiltRoute>,
        requests: Mutex<Vec<BuildRouteRequest>>,
    }

    impl FixedBuilder {
        fn returning(result: WidgetResult<BuiltRoute>) -> Self {
            Self {
                result,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RouteBuilder for FixedBuilder {
        async fn build_route(&self, _chain: Chain, request: &BuildRouteRequest) -> WidgetResult<BuiltRoute> {
            self.requests.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    fn summary(token_in: &str, token_out: &str, amount_in: &str) -> RouteSummary {
        RouteSummary {
            token_in: token_in.to_string(),
            amount_in: amount_in.to_string(),
            amount_in_usd: "100.0".to_string(),
            token_out: token_out.to_string(),
            amount_out: "99000000".to_string(),
            amount_out_usd: "99.0".to_string(),
            gas: "253000".to_string(),
            gas_usd: "9.4".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    fn trade(token_in: &str, token_out: &str) -> Trade {
        Trade {
            route_summary: summary(token_in, token_out, "1000000000000000000"),
            router_address: ROUTER.to_string(),
        }
    }

    fn token(address: &str, symbol: &str) -> TokenInfo {
        TokenInfo {
            chain_id: 1,
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            decimals: 18,
            logo_uri: String::new(),
            is_import: false,
        }
    }

    fn request(token_in: &str, token_out: &str) -> ConfirmationRequest {
        let mut request = ConfirmationRequest::new(
            trade(token_in, token_out),
            token(token_in, "IN"),
            token(token_out, "OUT"),
        );
        request.amount_in = "1.0".to_string();
        request.amount_out = "0.99".to_string();
        request
    }

    fn confirmation(
        provider: ScriptedProvider,
        builder: FixedBuilder,
        req: ConfirmationRequest,
    ) -> (
        SwapConfirmation<ScriptedProvider, FixedBuilder>,
        Arc<ScriptedProvider>,
        Arc<FixedBuilder>,
    ) {
        let provider = Arc::new(provider);
        let builder = Arc::new(builder);
        let flow = SwapConfirmation::new(provider.clone(), builder.clone(), req);
        (flow, provider, builder)
    }

    fn ok_builder() -> FixedBuilder {
        FixedBuilder::returning(Ok(BuiltRoute {
            data: "0xe21fd0e90001".to_string(),
            router_address: Some(ROUTER.to_string()),
            gas: None,
        }))
    }

    #[test]
    fn test_gas_margin_policy() {
        // 20% of 100k clears the floor
        assert_eq!(
            calculate_gas_margin(U256::from(100_000u64)),
            U256::from(120_000u64)
        );
        // 20% of 10k does not; the 20k floor applies
        assert_eq!(
            calculate_gas_margin(U256::from(10_000u64)),
            U256::from(30_000u64)
        );
        assert_eq!(calculate_gas_margin(U256::zero()), U256::from(20_000u64));
    }

    #[test]
    fn test_classify_swap() {
        let chain = Chain::Ethereum;
        assert_eq!(classify_swap(chain, NATIVE_TOKEN_ADDRESS, WETH), SwapKind::Wrap);
        assert_eq!(classify_swap(chain, WETH, NATIVE_TOKEN_ADDRESS), SwapKind::Unwrap);
        assert_eq!(classify_swap(chain, NATIVE_TOKEN_ADDRESS, USDT), SwapKind::Aggregated);
        assert_eq!(classify_swap(chain, USDT, WETH), SwapKind::Aggregated);

        // Case must not matter
        assert_eq!(
            classify_swap(
                chain,
                &NATIVE_TOKEN_ADDRESS.to_uppercase().replace("0X", "0x"),
                &WETH.to_uppercase().replace("0X", "0x")
            ),
            SwapKind::Wrap
        );
    }

    #[test]
    fn test_withdraw_calldata_layout() {
        let data = withdraw_calldata(U256::from(5u64));
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &WRAPPED_WITHDRAW_SELECTOR);
        assert_eq!(data[35], 5);
    }

    #[tokio::test]
    async fn test_wrap_path_skips_aggregator() {
        let (mut flow, provider, builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, WETH),
        );

        let state = flow.submit().await;
        assert!(matches!(state, SubmissionState::Submitted { .. }));
        assert!(builder.requests.lock().unwrap().is_empty());

        let call = provider.sent_call();
        assert_eq!(
            call.to,
            Some(NameOrAddress::Address(WETH.parse().expect("bad WETH literal")))
        );
        assert_eq!(
            call.value,
            Some(U256::from_dec_str("1000000000000000000").expect("bad literal"))
        );
        let data = call.data.expect("wrap call carries calldata");
        assert_eq!(&data[..], &WRAPPED_DEPOSIT_SELECTOR);
        // Estimate 100k -> 120k limit
        assert_eq!(call.gas, Some(U256::from(120_000u64)));
    }

    #[tokio::test]
    async fn test_unwrap_path_calls_withdraw() {
        let (mut flow, provider, builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(WETH, NATIVE_TOKEN_ADDRESS),
        );

        let state = flow.submit().await;
        assert!(matches!(state, SubmissionState::Submitted { .. }));
        assert!(builder.requests.lock().unwrap().is_empty());

        let call = provider.sent_call();
        assert_eq!(call.value, None);
        let data = call.data.expect("unwrap call carries calldata");
        assert_eq!(&data[..4], &WRAPPED_WITHDRAW_SELECTOR);
        assert_eq!(data.len(), 36);
    }

    #[tokio::test]
    async fn test_aggregated_path_builds_route() {
        let (mut flow, provider, builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(USDT, WETH),
        );

        let before = Utc::now().timestamp() as u64;
        let state = flow.submit().await;
        assert!(matches!(state, SubmissionState::Submitted { .. }));

        let requests = builder.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let build = &requests[0];
        assert_eq!(build.slippage_tolerance, DEFAULT_SLIPPAGE_BPS);
        assert_eq!(build.sender, build.recipient);
        assert_eq!(build.source, DEFAULT_CLIENT_ID);
        // Deadline is absolute, about twenty minutes out
        assert!(build.deadline >= before + 19 * 60);
        assert!(build.deadline <= before + 21 * 60);

        let call = provider.sent_call();
        assert_eq!(
            call.to,
            Some(NameOrAddress::Address(ROUTER.parse().expect("bad router literal")))
        );
        // Non-native input carries no value
        assert_eq!(call.value, Some(U256::zero()));
        let data = call.data.expect("swap call carries calldata");
        assert_eq!(&data[..4], &[0xe2, 0x1f, 0xd0, 0xe9]);
    }

    #[tokio::test]
    async fn test_aggregated_native_input_carries_value() {
        let (mut flow, provider, _builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, USDT),
        );

        flow.submit().await;
        let call = provider.sent_call();
        assert_eq!(
            call.value,
            Some(U256::from_dec_str("1000000000000000000").expect("bad literal"))
        );
    }

    #[tokio::test]
    async fn test_build_failure_errors_without_hash() {
        let observed = Arc::new(AtomicUsize::new(0));
        let observed_in_flow = observed.clone();

        let (flow, provider, _builder) = confirmation(
            ScriptedProvider::new(),
            FixedBuilder::returning(Err(WidgetError::build_route(r#"{"code":4008}"#))),
            request(USDT, WETH),
        );
        let mut flow = flow.with_submit_observer(Box::new(move |_, _| {
            observed_in_flow.fetch_add(1, Ordering::SeqCst);
        }));

        let state = flow.submit().await;
        match state {
            SubmissionState::Errored { error } => {
                assert!(matches!(error, WidgetError::BuildRoute(_)));
            }
            other => panic!("Unexpected state: {:?}", other),
        }
        assert!(flow.state().tx_hash().is_none());
        assert!(flow.tx_url().is_none());
        assert_eq!(provider.send_calls.load(Ordering::SeqCst), 0);
        assert_eq!(observed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_estimation_failure_errors() {
        let mut provider = ScriptedProvider::new();
        provider.estimate = Err(WidgetError::estimation("execution reverted"));
        let (mut flow, provider, _builder) =
            confirmation(provider, ok_builder(), request(NATIVE_TOKEN_ADDRESS, WETH));

        let state = flow.submit().await;
        assert!(matches!(state, SubmissionState::Errored { .. }));
        assert_eq!(provider.send_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signer_rejection_errors() {
        let mut provider = ScriptedProvider::new();
        provider.send_error = Some(WidgetError::submission("user rejected"));
        let (mut flow, _provider, _builder) =
            confirmation(provider, ok_builder(), request(NATIVE_TOKEN_ADDRESS, WETH));

        let state = flow.submit().await;
        match state {
            SubmissionState::Errored { error } => {
                assert!(format!("{}", error).contains("user rejected"));
            }
            other => panic!("Unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_is_guarded_against_reentry() {
        let (mut flow, provider, _builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, WETH),
        );

        flow.submit().await;
        flow.submit().await;
        flow.submit().await;

        assert_eq!(provider.send_calls.load(Ordering::SeqCst), 1);
        assert!(matches!(flow.state(), SubmissionState::Submitted { .. }));
    }

    #[tokio::test]
    async fn test_snapshot_freezes_display_amounts() {
        let (mut flow, _provider, _builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, WETH),
        );

        assert!(flow.snapshot().is_none());
        flow.submit().await;
        let snapshot = flow.snapshot().expect("snapshot missing after submit");
        assert_eq!(snapshot.amount_in, "1.0");
        assert_eq!(snapshot.amount_out, "0.99");
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_reaches_confirmed_and_stops() {
        let provider = ScriptedProvider::new()
            .with_receipts(vec![Ok(None), Ok(Some(receipt(true)))]);
        let (mut flow, provider, _builder) =
            confirmation(provider, ok_builder(), request(NATIVE_TOKEN_ADDRESS, WETH));

        flow.submit().await;
        let (_handle, mut cancel) = cancellation_pair();
        let state = flow.track_confirmation(&mut cancel).await;

        assert!(matches!(state, SubmissionState::Confirmed { .. }));
        // Exactly two fetches: one pending, one terminal, then the loop ends
        assert_eq!(provider.receipt_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_reports_revert_and_keeps_hash() {
        let provider = ScriptedProvider::new().with_receipts(vec![Ok(Some(receipt(false)))]);
        let (mut flow, _provider, _builder) =
            confirmation(provider, ok_builder(), request(NATIVE_TOKEN_ADDRESS, WETH));

        flow.submit().await;
        let (_handle, mut cancel) = cancellation_pair();
        let state = flow.track_confirmation(&mut cancel).await;

        assert!(matches!(state, SubmissionState::Reverted { .. }));
        assert_eq!(state.tx_hash(), Some(H256::repeat_byte(0xaa)));
        assert!(flow.tx_url().expect("explorer link missing").contains("etherscan.io/tx/"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_survives_transient_errors() {
        let provider = ScriptedProvider::new().with_receipts(vec![
            Err(WidgetError::provider("rpc hiccup")),
            Ok(Some(receipt(true))),
        ]);
        let (mut flow, _provider, _builder) =
            confirmation(provider, ok_builder(), request(NATIVE_TOKEN_ADDRESS, WETH));

        flow.submit().await;
        let (_handle, mut cancel) = cancellation_pair();
        let state = flow.track_confirmation(&mut cancel).await;

        assert!(matches!(state, SubmissionState::Confirmed { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_stops_polling_without_terminal_state() {
        let (mut flow, _provider, _builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, WETH),
        );

        flow.submit().await;
        let (handle, mut cancel) = cancellation_pair();
        handle.cancel();
        let state = flow.track_confirmation(&mut cancel).await;

        // The view was torn down; the transaction stays merely submitted
        assert!(matches!(state, SubmissionState::Submitted { .. }));
        assert!(!state.is_terminal());
    }

    #[tokio::test]
    async fn test_tracking_before_submission_is_a_no_op() {
        let (mut flow, provider, _builder) = confirmation(
            ScriptedProvider::new(),
            ok_builder(),
            request(NATIVE_TOKEN_ADDRESS, WETH),
        );

        let (_handle, mut cancel) = cancellation_pair();
        let state = flow.track_confirmation(&mut cancel).await;
        assert!(matches!(state, SubmissionState::Idle));
        assert_eq!(provider.receipt_calls.load(Ordering::SeqCst), 0);
    }
}
