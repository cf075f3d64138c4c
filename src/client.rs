use crate::{
    chain::ParentChain,
    config::{FeeConfig, OrbitConfig},
    error::{Error, Result},
    registry::AddressRegistry,
};
use alloy::{
    primitives::{Address, Bytes},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use tracing::debug;

/// Entry point of the SDK: a parent chain connection plus the addresses and
/// fee constants the operations need.
#[derive(Debug, Clone)]
pub struct OrbitClient<C> {
    pub(crate) chain: C,
    pub(crate) registry: AddressRegistry,
    pub(crate) fees: FeeConfig,
    rollup_creator: Option<Address>,
}

impl<C: ParentChain> OrbitClient<C> {
    pub fn new(chain: C) -> Self {
        Self {
            chain,
            registry: AddressRegistry::default(),
            fees: FeeConfig::default(),
            rollup_creator: None,
        }
    }

    pub fn from_config(chain: C, config: &OrbitConfig) -> Self {
        Self::new(chain)
            .with_registry(config.registry())
            .with_fee_config(config.fees)
    }

    pub fn with_registry(mut self, registry: AddressRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_fee_config(mut self, fees: FeeConfig) -> Self {
        self.fees = fees;
        self
    }

    /// Use this RollupCreator regardless of what the registry says.
    pub fn with_rollup_creator(mut self, address: Address) -> Self {
        self.rollup_creator = Some(address);
        self
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn fees(&self) -> &FeeConfig {
        &self.fees
    }

    pub fn chain_id(&self) -> Result<u64> {
        self.chain.chain_id().ok_or_else(|| {
            Error::Configuration("chain id of the parent chain is not resolved".to_string())
        })
    }

    pub fn rollup_creator_address(&self) -> Result<Address> {
        match self.rollup_creator {
            Some(address) => Ok(address),
            None => self.registry.rollup_creator(self.chain_id()?),
        }
    }

    /// `eth_call` a view function and decode its return value.
    pub async fn read_contract<T: SolCall + Send>(&self, to: Address, call: T) -> Result<T::Return> {
        debug!(%to, function = T::SIGNATURE, "reading contract");
        let request = TransactionRequest::default()
            .to(to)
            .input(Bytes::from(call.abi_encode()).into());
        let output = self.chain.call(request).await?;
        Ok(T::abi_decode_returns(&output)?)
    }
}
