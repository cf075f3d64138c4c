use crate::{
    chain::ParentChain,
    client::OrbitClient,
    contracts::{BridgeCreator, DeployHelper, RollupCreator},
    error::Result,
    utils::{apply_percent_increase, is_non_zero_address},
};
use alloy::{
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Inputs of the retryables fee estimation for `createRollup`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryablesFeesParams {
    /// Account deploying the rollup.
    pub account: Address,
    /// Native token of the rollup. `None` or the zero address means ETH.
    #[serde(default)]
    pub native_token: Option<Address>,
    /// `maxFeePerGas` of the retryables, defaults to 0.1 gwei.
    #[serde(default)]
    pub max_fee_per_gas_for_retryables: Option<u128>,
}

impl RetryablesFeesParams {
    pub fn new(account: Address) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    pub fn with_native_token(mut self, native_token: Address) -> Self {
        self.native_token = Some(native_token);
        self
    }

    pub fn with_max_fee_per_gas_for_retryables(mut self, max_fee_per_gas: u128) -> Self {
        self.max_fee_per_gas_for_retryables = Some(max_fee_per_gas);
        self
    }

    pub fn is_custom_gas_token(&self) -> bool {
        is_non_zero_address(self.native_token)
    }
}

/// Template contracts the bridge creator clones for every new chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateAddresses {
    pub bridge: Address,
    pub sequencer_inbox: Address,
    pub delay_bufferable_sequencer_inbox: Address,
    pub inbox: Address,
    pub rollup_event_inbox: Address,
    pub outbox: Address,
}

impl From<BridgeCreator::BridgeTemplates> for TemplateAddresses {
    fn from(templates: BridgeCreator::BridgeTemplates) -> Self {
        Self {
            bridge: templates.bridge,
            sequencer_inbox: templates.sequencerInbox,
            delay_bufferable_sequencer_inbox: templates.delayBufferableSequencerInbox,
            inbox: templates.inbox,
            rollup_event_inbox: templates.rollupEventInbox,
            outbox: templates.outbox,
        }
    }
}

/// Inbox template the deployment will clone: the ERC20 one for custom gas token chains.
pub fn select_inbox(
    eth_based: &TemplateAddresses,
    erc20_based: &TemplateAddresses,
    is_custom_gas_token: bool,
) -> Address {
    if is_custom_gas_token {
        erc20_based.inbox
    } else {
        eth_based.inbox
    }
}

impl<C: ParentChain> OrbitClient<C> {
    /// Read the ETH-based and ERC20-based templates from the bridge creator.
    pub async fn bridge_templates(
        &self,
        bridge_creator: Address,
    ) -> Result<(TemplateAddresses, TemplateAddresses)> {
        let (eth_based, erc20_based) = tokio::try_join!(
            self.read_contract(bridge_creator, BridgeCreator::ethBasedTemplatesCall {}),
            self.read_contract(bridge_creator, BridgeCreator::erc20BasedTemplatesCall {}),
        )?;
        Ok((eth_based.into(), erc20_based.into()))
    }

    /// Estimate the retryables fees `createRollup` needs to be funded with.
    #[instrument(skip(self))]
    pub async fn create_rollup_get_retryables_fees(
        &self,
        params: RetryablesFeesParams,
    ) -> Result<U256> {
        let rollup_creator = self.rollup_creator_address()?;
        let (deploy_helper, bridge_creator) = tokio::try_join!(
            self.read_contract(rollup_creator, RollupCreator::l2FactoriesDeployerCall {}),
            self.read_contract(rollup_creator, RollupCreator::bridgeCreatorCall {}),
        )?;
        let (eth_based, erc20_based) = self.bridge_templates(bridge_creator).await?;

        let is_custom_gas_token = params.is_custom_gas_token();
        let inbox = select_inbox(&eth_based, &erc20_based, is_custom_gas_token);
        let max_fee_per_gas = params
            .max_fee_per_gas_for_retryables
            .unwrap_or(self.fees.max_fee_per_gas_for_retryables);

        // in case of a spike
        let base_fee_with_buffer = apply_percent_increase(
            U256::from(self.chain.gas_price().await?),
            self.fees.gas_buffer_percent,
        );

        let call = DeployHelper::getDeploymentTotalCostCall {
            inbox,
            maxFeePerGas: U256::from(max_fee_per_gas),
        };
        let request = TransactionRequest::default()
            .from(params.account)
            .to(deploy_helper)
            .input(Bytes::from(call.abi_encode()).into())
            .max_fee_per_gas(base_fee_with_buffer.saturating_to());

        // without an explicit limit the node inflates the gas of the call and it fails
        let gas_with_buffer = apply_percent_increase(
            U256::from(self.chain.estimate_gas(request.clone()).await?),
            self.fees.gas_buffer_percent,
        )
        .saturating_to::<u64>();

        let output = self.chain.call(request.gas_limit(gas_with_buffer)).await?;
        let total_cost = DeployHelper::getDeploymentTotalCostCall::abi_decode_returns(&output)?;
        debug!(%inbox, %total_cost, gas = gas_with_buffer, "fetched deployment total cost");

        if is_custom_gas_token {
            // Constant for custom gas token chains, slightly above the on-chain
            // value because the contract rounds up each component separately.
            Ok(self.fees.custom_gas_token_retryables_fees)
        } else {
            Ok(apply_percent_increase(
                total_cost,
                self.fees.eth_fee_buffer_percent,
            ))
        }
    }

    /// Like [`Self::create_rollup_get_retryables_fees`], falling back to the
    /// configured default fees when the estimation fails.
    pub async fn create_rollup_get_retryables_fees_with_defaults(
        &self,
        params: RetryablesFeesParams,
    ) -> U256 {
        match self.create_rollup_get_retryables_fees(params).await {
            Ok(fees) => fees,
            Err(e) => {
                error!(
                    error = %e,
                    fallback = %self.fees.default_retryables_fees,
                    "failed to fetch retryables fees, falling back to defaults"
                );
                self.fees.default_retryables_fees
            }
        }
    }
}
