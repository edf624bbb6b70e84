//! Wallet/provider seam
//!
//! The widget never holds keys. Everything that needs a signer or an RPC
//! node goes through `WalletProvider`; the shipped implementation delegates
//! to any `ethers` middleware (typically a provider wrapped with a signer).

use crate::domain::entities::Chain;
use crate::shared::error::WidgetError;
use crate::shared::types::{ReceiptSummary, SubmittedTransaction, WidgetResult};
use async_trait::async_trait;
use ethers::middleware::Middleware;
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest, H256, U256, U64};
use std::sync::Arc;

/// Wallet provider trait
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Connected account, used as sender and recipient
    fn account(&self) -> Address;

    /// Network the provider is connected to
    fn chain(&self) -> Chain;

    /// Estimate gas for a call envelope
    async fn estimate_gas(&self, call: &TransactionRequest) -> WidgetResult<U256>;

    /// Sign and broadcast; resolves once the signer accepted the transaction
    async fn send_transaction(&self, call: TransactionRequest) -> WidgetResult<SubmittedTransaction>;

    /// Fetch the receipt for a hash, `None` while the transaction is pending
    async fn transaction_receipt(&self, hash: H256) -> WidgetResult<Option<ReceiptSummary>>;
}

/// `ethers`-backed wallet provider
pub struct EthersWalletProvider<M> {
    inner: Arc<M>,
    account: Address,
    chain: Chain,
}

impl<M: Middleware> EthersWalletProvider<M> {
    pub fn new(inner: Arc<M>, account: Address, chain: Chain) -> Self {
        Self { inner, account, chain }
    }
}

#[async_trait]
impl<M: Middleware + 'static> WalletProvider for EthersWalletProvider<M> {
    fn account(&self) -> Address {
        self.account
    }

    fn chain(&self) -> Chain {
        self.chain
    }

    async fn estimate_gas(&self, call: &TransactionRequest) -> WidgetResult<U256> {
        let typed: TypedTransaction = call.clone().into();
        self.inner
            .estimate_gas(&typed, None)
            .await
            .map_err(|e| WidgetError::estimation(e.to_string()))
    }

    async fn send_transaction(&self, call: TransactionRequest) -> WidgetResult<SubmittedTransaction> {
        let pending = self
            .inner
            .send_transaction(call, None)
            .await
            .map_err(|e| WidgetError::submission(e.to_string()))?;
        let hash = pending.tx_hash();

        Ok(SubmittedTransaction {
            hash,
            raw: serde_json::json!({ "hash": format!("{:#x}", hash) }),
        })
    }

    async fn transaction_receipt(&self, hash: H256) -> WidgetResult<Option<ReceiptSummary>> {
        let receipt = self
            .inner
            .get_transaction_receipt(hash)
            .await
            .map_err(|e| WidgetError::provider(e.to_string()))?;

        Ok(receipt.map(|r| ReceiptSummary {
            transaction_hash: r.transaction_hash,
            succeeded: r.status == Some(U64::from(1)),
            block_number: r.block_number.map(|b| b.as_u64()),
        }))
    }
}
