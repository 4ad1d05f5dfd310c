use alloy::primitives::Address;
use chain::ledger::TokenReader;
use eyre::{Result, WrapErr};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use store::token::{model::TokenInfo, store::TokenFile};
use store::utils::multiplier_for_decimals;
use tokio::sync::RwLock;

/// Decimals assumed when a token does not answer `decimals()`.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Token symbol/multiplier cache, filled on first use and persisted between runs.
pub struct MetadataCache {
    tokens: RwLock<HashMap<Address, TokenInfo>>,
    reader: Arc<dyn TokenReader>,
}

impl MetadataCache {
    pub fn new(reader: Arc<dyn TokenReader>) -> Self {
        Self { tokens: RwLock::new(HashMap::new()), reader }
    }

    /// Merges the entries persisted at `path`. A missing file is fine, a malformed one is not.
    pub async fn load(&self, path: &Path) -> Result<usize> {
        let infos = TokenFile::new(path).load()?;
        let loaded = infos.len();

        let mut tokens = self.tokens.write().await;
        for info in infos {
            tokens.insert(info.address, info);
        }

        tracing::info!("Loaded {loaded} token(s) from {}", path.display());
        Ok(loaded)
    }

    /// Returns the cached entry, reading it from chain on a miss.
    ///
    /// A failing `symbol()` fails the lookup; a failing `decimals()` falls
    /// back to [`DEFAULT_DECIMALS`].
    pub async fn lookup(&self, token: Address) -> Result<TokenInfo> {
        if let Some(info) = self.tokens.read().await.get(&token) {
            return Ok(info.clone());
        }

        let mut tokens = self.tokens.write().await;
        // Another writer may have filled it while we waited for the lock
        if let Some(info) = tokens.get(&token) {
            return Ok(info.clone());
        }

        let info = self.fetch(token).await?;
        tracing::info!("Resolved token {info}");
        tokens.insert(token, info.clone());

        Ok(info)
    }

    async fn fetch(&self, token: Address) -> Result<TokenInfo> {
        let symbol =
            self.reader.symbol(token).await.wrap_err_with(|| format!("get token symbol {token}"))?;

        let decimals = match self.reader.decimals(token).await {
            Ok(decimals) => decimals,
            Err(e) => {
                tracing::warn!(
                    %token,
                    "get token decimals failed, using {DEFAULT_DECIMALS}: {e:#}"
                );
                DEFAULT_DECIMALS
            }
        };

        let multiplier = match multiplier_for_decimals(decimals) {
            Some(multiplier) => multiplier,
            None => {
                tracing::warn!(%token, "{decimals} decimals overflow, using {DEFAULT_DECIMALS}");
                10u128.pow(DEFAULT_DECIMALS as u32)
            }
        };

        Ok(TokenInfo { address: token, symbol, multiplier })
    }

    /// Overwrites `path` with every cached entry.
    pub async fn save(&self, path: &Path) -> Result<usize> {
        let infos: Vec<TokenInfo> = self.tokens.read().await.values().cloned().collect();
        TokenFile::new(path).save(&infos)?;
        Ok(infos.len())
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}
