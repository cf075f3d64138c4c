use crate::{
    chain::ParentChain,
    client::OrbitClient,
    contracts::{ArbOwner, UpgradeExecutor, ARB_OWNER_ADDRESS},
    error::{Error, Result},
};
use alloy::{
    dyn_abi::{JsonAbiExt, Specifier},
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
    sol_types::SolInterface,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who is allowed to call ArbOwner on the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// The account itself is a chain owner and calls ArbOwner directly.
    Direct,
    /// Ownership was handed to an upgrade executor, which relays the call.
    Delegated(Address),
}

impl Authority {
    pub fn upgrade_executor(&self) -> Option<Address> {
        match self {
            Self::Direct => None,
            Self::Delegated(executor) => Some(*executor),
        }
    }
}

impl From<Option<Address>> for Authority {
    fn from(upgrade_executor: Option<Address>) -> Self {
        match upgrade_executor {
            Some(executor) if !executor.is_zero() => Self::Delegated(executor),
            _ => Self::Direct,
        }
    }
}

/// `to`, `data` and `value` of a call to ArbOwner, possibly routed through an upgrade executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbOwnerCallData {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

impl ArbOwnerCallData {
    pub fn into_transaction_request(self, from: Address) -> TransactionRequest {
        TransactionRequest::default()
            .from(from)
            .to(self.to)
            .input(self.data.into())
            .value(self.value)
    }
}

/// Encode an ArbOwner call given its function name and string arguments.
///
/// Overloads are resolved by arity and each argument is coerced to the
/// declared parameter type (`"0x.."` for addresses, decimal or hex for
/// integers, `true`/`false` for booleans).
pub fn arb_owner_encode_function_data(function_name: &str, args: &[String]) -> Result<Bytes> {
    let abi = ArbOwner::abi::contract();
    let overloads = abi.function(function_name).ok_or_else(|| {
        Error::Encoding(format!(
            "function `{function_name}` is not part of the ArbOwner interface"
        ))
    })?;
    let function = overloads
        .iter()
        .find(|function| function.inputs.len() == args.len())
        .ok_or_else(|| {
            Error::Encoding(format!(
                "`{function_name}` does not take {} argument(s)",
                args.len()
            ))
        })?;

    let values = function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param
                .resolve()
                .map_err(|e| Error::Encoding(format!("parameter `{}`: {e}", param.name)))?;
            ty.coerce_str(arg).map_err(|e| {
                Error::Encoding(format!("argument `{}` of `{function_name}`: {e}", param.name))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let data = function
        .abi_encode_input(&values)
        .map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(data.into())
}

pub fn upgrade_executor_encode_function_data(
    call: impl Into<UpgradeExecutor::UpgradeExecutorCalls>,
) -> Bytes {
    call.into().abi_encode().into()
}

/// Build the call data for an ArbOwner call.
pub fn arb_owner_prepare_function_data(
    call: impl Into<ArbOwner::ArbOwnerCalls>,
    authority: Authority,
) -> ArbOwnerCallData {
    wrap_for_authority(call.into().abi_encode().into(), authority)
}

/// Same as [`arb_owner_prepare_function_data`], for a call known only by name.
pub fn arb_owner_prepare_function_data_by_name(
    function_name: &str,
    args: &[String],
    authority: Authority,
) -> Result<ArbOwnerCallData> {
    let data = arb_owner_encode_function_data(function_name, args)?;
    Ok(wrap_for_authority(data, authority))
}

fn wrap_for_authority(arb_owner_data: Bytes, authority: Authority) -> ArbOwnerCallData {
    match authority {
        Authority::Direct => ArbOwnerCallData {
            to: ARB_OWNER_ADDRESS,
            data: arb_owner_data,
            value: U256::ZERO,
        },
        Authority::Delegated(upgrade_executor) => ArbOwnerCallData {
            to: upgrade_executor,
            data: upgrade_executor_encode_function_data(UpgradeExecutor::executeCallCall {
                target: ARB_OWNER_ADDRESS,
                targetCallData: arb_owner_data,
            }),
            value: U256::ZERO,
        },
    }
}

impl<C: ParentChain> OrbitClient<C> {
    /// Prepare a transaction calling ArbOwner from `account`.
    pub async fn arb_owner_prepare_transaction_request(
        &self,
        call: impl Into<ArbOwner::ArbOwnerCalls>,
        authority: Authority,
        account: Address,
    ) -> Result<TransactionRequest> {
        // fail before encoding anything if we can't sign for a known chain
        self.chain_id()?;
        let call_data = arb_owner_prepare_function_data(call, authority);
        self.prepare_transaction_request(call_data, account).await
    }

    /// Fill nonce, fees and gas limit of `call_data` sent from `account`.
    #[instrument(skip(self, call_data), fields(to = %call_data.to))]
    pub async fn prepare_transaction_request(
        &self,
        call_data: ArbOwnerCallData,
        account: Address,
    ) -> Result<TransactionRequest> {
        let chain_id = self.chain_id()?;
        let request = call_data.into_transaction_request(account);

        let (nonce, fees) = tokio::try_join!(
            self.chain.transaction_count(account),
            self.chain.estimate_eip1559_fees(),
        )?;
        let gas = self.chain.estimate_gas(request.clone()).await?;
        debug!(nonce, gas, max_fee_per_gas = fees.max_fee_per_gas, "filled transaction request");

        let mut request = request
            .nonce(nonce)
            .gas_limit(gas)
            .max_fee_per_gas(fees.max_fee_per_gas)
            .max_priority_fee_per_gas(fees.max_priority_fee_per_gas);
        request.chain_id = Some(chain_id);
        Ok(request)
    }
}
