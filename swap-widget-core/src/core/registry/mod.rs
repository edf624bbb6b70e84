//! Token registry
//!
//! Merges the user's imported tokens, an optional caller-supplied list, and
//! the chain's built-in defaults into one deduplicated list. The imported
//! set is persisted behind the storage repository; a corrupt or missing
//! stored list degrades to empty rather than failing.

pub mod default_tokens;

pub use default_tokens::default_tokens;

use crate::domain::entities::{Chain, TokenInfo};
use crate::domain::repositories::StorageRepository;
use crate::shared::constants::IMPORTED_TOKENS_KEY;
use log::{debug, warn};
use std::collections::HashSet;

pub struct TokenRegistry<S: StorageRepository> {
    chain: Chain,
    caller_list: Vec<TokenInfo>,
    imported: Vec<TokenInfo>,
    storage: S,
}

impl<S: StorageRepository> TokenRegistry<S> {
    pub fn new(chain: Chain, caller_list: Vec<TokenInfo>, storage: S) -> Self {
        let imported = load_imported(&storage);
        debug!(
            "Token registry for {}: {} imported, {} caller-supplied",
            chain.name(),
            imported.len(),
            caller_list.len()
        );
        Self {
            chain,
            caller_list,
            imported,
            storage,
        }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// The merged list: imported tokens for the current chain first, then
    /// the caller list (or the chain defaults), with duplicate addresses
    /// removed - first occurrence wins
    pub fn tokens(&self) -> Vec<TokenInfo> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut merged: Vec<TokenInfo> = Vec::new();

        for token in self
            .imported
            .iter()
            .filter(|t| t.chain_id == self.chain.chain_id())
        {
            push_unique(&mut merged, &mut seen, token.clone().as_imported());
        }

        let defaults;
        let base: &[TokenInfo] = if self.caller_list.is_empty() {
            defaults = default_tokens(self.chain);
            &defaults
        } else {
            &self.caller_list
        };
        for token in base {
            push_unique(&mut merged, &mut seen, token.clone());
        }

        merged
    }

    pub fn imported_tokens(&self) -> &[TokenInfo] {
        &self.imported
    }

    /// Insert or replace by address in the imported set and persist
    pub fn add_token(&mut self, token: TokenInfo) {
        self.imported.retain(|t| !t.has_address(&token.address));
        self.imported.push(token);
        self.persist();
    }

    /// Remove by (address case-insensitive, chain id) and persist
    pub fn remove_token(&mut self, token: &TokenInfo) {
        self.imported
            .retain(|t| !(t.has_address(&token.address) && t.chain_id == token.chain_id));
        self.persist();
    }

    /// Resolve an address (including the native sentinel) on the current chain
    pub fn find(&self, address: &str) -> Option<TokenInfo> {
        if self.chain.is_native_sentinel(address) {
            return Some(self.chain.native_token());
        }
        self.tokens().into_iter().find(|t| t.has_address(address))
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.imported) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize imported tokens: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.store(IMPORTED_TOKENS_KEY, &bytes) {
            warn!("Failed to persist imported tokens: {}", e);
        }
    }
}

fn push_unique(merged: &mut Vec<TokenInfo>, seen: &mut HashSet<String>, token: TokenInfo) {
    if seen.insert(token.address.to_lowercase()) {
        merged.push(token);
    }
}

fn load_imported<S: StorageRepository>(storage: &S) -> Vec<TokenInfo> {
    let bytes = match storage.retrieve(IMPORTED_TOKENS_KEY) {
        Ok(bytes) => bytes,
        // Absent data is the common first-run case
        Err(_) => return Vec::new(),
    };

    match serde_json::from_slice(&bytes) {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!("Ignoring corrupt imported token list: {}", e);
            Vec::new()
        }
    }
}
