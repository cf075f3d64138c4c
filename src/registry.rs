use crate::{
    contracts::{ARB_OWNER_ADDRESS, ARB_OWNER_PUBLIC_ADDRESS},
    error::{Error, Result},
};
use alloy::primitives::Address;
use std::collections::HashMap;

/// Well-known contract addresses, per parent chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRegistry {
    rollup_creators: HashMap<u64, Address>,
}

impl AddressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rollup_creator(mut self, chain_id: u64, address: Address) -> Self {
        self.rollup_creators.insert(chain_id, address);
        self
    }

    pub fn rollup_creator(&self, chain_id: u64) -> Result<Address> {
        self.rollup_creators.get(&chain_id).copied().ok_or_else(|| {
            Error::Configuration(format!(
                "no RollupCreator registered for chain id {chain_id}"
            ))
        })
    }

    // Precompiles live at the same address on every Arbitrum chain.

    pub fn arb_owner(&self) -> Address {
        ARB_OWNER_ADDRESS
    }

    pub fn arb_owner_public(&self) -> Address {
        ARB_OWNER_PUBLIC_ADDRESS
    }
}
