use alloy::eips::BlockNumberOrTag;
use alloy::network::Ethereum;
use alloy::primitives::{Address, BlockNumber};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::{Filter, Log};
use alloy::transports::http::reqwest::Url;
use eyre::{Result, WrapErr};

use crate::erc20::IERC20;
use crate::ledger::{Ledger, LedgerBlock, TokenReader};

#[derive(Clone)]
pub struct NodeClient {
    provider: RootProvider<Ethereum>,
    chain_id: u64,
}

impl NodeClient {
    /// Builds an HTTP provider and checks the endpoint answers before handing it out.
    pub async fn connect(rpc_url: Url) -> Result<Self> {
        let provider = RootProvider::<Ethereum>::new_http(rpc_url.clone());
        let chain_id =
            provider.get_chain_id().await.wrap_err_with(|| format!("dial eth client {rpc_url}"))?;

        tracing::debug!("Node at {rpc_url} answered with chain id {chain_id}");

        Ok(Self { provider, chain_id })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

#[async_trait::async_trait]
impl Ledger for NodeClient {
    async fn latest_block_number(&self) -> Result<BlockNumber> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn block_with_transactions(&self, number: BlockNumber) -> Result<Option<LedgerBlock>> {
        let Some(block) =
            self.provider.get_block_by_number(BlockNumberOrTag::Number(number)).full().await?
        else {
            return Ok(None);
        };

        let transactions =
            block.transactions.into_transactions().map(|tx| tx.inner.into_inner()).collect();

        Ok(Some(LedgerBlock {
            number: block.header.number,
            timestamp: block.header.timestamp,
            transactions,
        }))
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        Ok(self.provider.get_logs(filter).await?)
    }
}

#[async_trait::async_trait]
impl TokenReader for NodeClient {
    async fn symbol(&self, token: Address) -> Result<String> {
        let symbol = IERC20::new(token, &self.provider)
            .symbol()
            .call()
            .await
            .wrap_err_with(|| format!("call symbol() on {token}"))?;
        Ok(symbol)
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        let decimals = IERC20::new(token, &self.provider)
            .decimals()
            .call()
            .await
            .wrap_err_with(|| format!("call decimals() on {token}"))?;
        Ok(decimals)
    }
}
