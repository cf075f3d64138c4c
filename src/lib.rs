//! Prepare ArbOwner transactions and estimate `createRollup` retryables fees
//! for Arbitrum Orbit chains.

mod arb_owner_public;
pub mod call_data;
pub mod chain;
pub mod client;
pub mod config;
pub mod contracts;
pub mod error;
pub mod registry;
pub mod retryables;
pub mod rpc_server;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use call_data::{
    arb_owner_encode_function_data, arb_owner_prepare_function_data,
    arb_owner_prepare_function_data_by_name, upgrade_executor_encode_function_data,
    ArbOwnerCallData, Authority,
};
pub use chain::{FeeEstimate, NodeClient, ParentChain};
pub use client::OrbitClient;
pub use config::{FeeConfig, OrbitConfig};
pub use error::{Error, Result};
pub use registry::AddressRegistry;
pub use retryables::{RetryablesFeesParams, TemplateAddresses};
pub use utils::apply_percent_increase;
