use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::TransactionRequest,
    transports::TransportError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// EIP-1559 fee suggestion returned by the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

/// The parent chain node the SDK reads from and prepares transactions against.
///
/// Every method maps to a single JSON-RPC request; implementations neither
/// cache nor retry.
#[async_trait]
pub trait ParentChain: Send + Sync {
    /// Chain id of the connected chain, if it has been resolved.
    fn chain_id(&self) -> Option<u64>;

    /// `eth_call`
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, TransportError>;

    /// `eth_estimateGas`
    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, TransportError>;

    /// `eth_gasPrice`
    async fn gas_price(&self) -> Result<u128, TransportError>;

    /// `eth_getTransactionCount` at the latest block.
    async fn transaction_count(&self, address: Address) -> Result<u64, TransportError>;

    async fn estimate_eip1559_fees(&self) -> Result<FeeEstimate, TransportError>;
}

/// [`ParentChain`] backed by an alloy provider.
#[derive(Debug, Clone)]
pub struct NodeClient<P> {
    provider: P,
    chain_id: Option<u64>,
}

impl<P: Provider> NodeClient<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            chain_id: None,
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Ask the node for its chain id and pin it.
    pub async fn with_chain_id_from_node(self) -> Result<Self, TransportError> {
        let chain_id = self.provider.get_chain_id().await?;
        Ok(self.with_chain_id(chain_id))
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> ParentChain for NodeClient<P> {
    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, TransportError> {
        self.provider.call(tx).await
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, TransportError> {
        self.provider.estimate_gas(tx).await
    }

    async fn gas_price(&self) -> Result<u128, TransportError> {
        self.provider.get_gas_price().await
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, TransportError> {
        self.provider.get_transaction_count(address).await
    }

    async fn estimate_eip1559_fees(&self) -> Result<FeeEstimate, TransportError> {
        let estimate = self.provider.estimate_eip1559_fees().await?;
        Ok(FeeEstimate {
            max_fee_per_gas: estimate.max_fee_per_gas,
            max_priority_fee_per_gas: estimate.max_priority_fee_per_gas,
        })
    }
}
