use crate::{
    error::{Error, Result},
    registry::AddressRegistry,
};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// 0.1 gwei
pub const DEFAULT_MAX_FEE_PER_GAS_FOR_RETRYABLES: u128 = 100_000_000;
/// 0.125 ether, used when the retryables fees cannot be fetched.
pub const DEFAULT_RETRYABLES_FEES: U256 = U256::from_limbs([125_000_000_000_000_000, 0, 0, 0]);
/// 0.1248 ether. Retryables on custom gas token chains don't scale with the parent base fee.
pub const CUSTOM_GAS_TOKEN_RETRYABLES_FEES: U256 =
    U256::from_limbs([124_800_000_000_000_000, 0, 0, 0]);
/// Headroom on the parent base fee and on estimated gas limits.
pub const DEFAULT_GAS_BUFFER_PERCENT: u64 = 30;
/// Headroom on the deployment cost of ETH-based chains.
pub const DEFAULT_ETH_FEE_BUFFER_PERCENT: u64 = 3;

/// Numeric constants used by the fee estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeeConfig {
    pub max_fee_per_gas_for_retryables: u128,
    pub default_retryables_fees: U256,
    pub custom_gas_token_retryables_fees: U256,
    pub gas_buffer_percent: u64,
    pub eth_fee_buffer_percent: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            max_fee_per_gas_for_retryables: DEFAULT_MAX_FEE_PER_GAS_FOR_RETRYABLES,
            default_retryables_fees: DEFAULT_RETRYABLES_FEES,
            custom_gas_token_retryables_fees: CUSTOM_GAS_TOKEN_RETRYABLES_FEES,
            gas_buffer_percent: DEFAULT_GAS_BUFFER_PERCENT,
            eth_fee_buffer_percent: DEFAULT_ETH_FEE_BUFFER_PERCENT,
        }
    }
}

/// Contents of the JSON configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitConfig {
    /// Pins the chain id instead of asking the node for it.
    pub chain_id: Option<u64>,
    pub fees: FeeConfig,
    /// RollupCreator deployments keyed by parent chain id.
    pub rollup_creators: BTreeMap<u64, Address>,
}

impl OrbitConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::Configuration(format!("invalid configuration: {e}")))
    }

    pub fn registry(&self) -> AddressRegistry {
        self.rollup_creators
            .iter()
            .fold(AddressRegistry::new(), |registry, (chain_id, address)| {
                registry.with_rollup_creator(*chain_id, *address)
            })
    }
}
