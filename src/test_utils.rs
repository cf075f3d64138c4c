use crate::chain::{FeeEstimate, ParentChain};
use alloy::{
    primitives::{Address, Bytes},
    rpc::types::TransactionRequest,
    transports::{TransportError, TransportErrorKind},
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};

/// In-memory parent chain answering `eth_call` from canned responses keyed by
/// target address and function selector.
#[derive(Debug)]
pub struct MockParentChain {
    chain_id: Option<u64>,
    gas_price: u128,
    gas_estimate: u64,
    nonce: u64,
    failing: bool,
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    requests: Mutex<Vec<TransactionRequest>>,
}

impl MockParentChain {
    pub const FEES: FeeEstimate = FeeEstimate {
        max_fee_per_gas: 2_000_000_000,
        max_priority_fee_per_gas: 100_000_000,
    };

    pub fn new() -> Self {
        Self {
            chain_id: None,
            // 1 gwei
            gas_price: 1_000_000_000,
            gas_estimate: 100_000,
            nonce: 0,
            failing: false,
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_gas_estimate(mut self, gas: u64) -> Self {
        self.gas_estimate = gas;
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_response(mut self, to: Address, selector: [u8; 4], output: Bytes) -> Self {
        self.responses.insert((to, selector), output);
        self
    }

    /// Every request fails as if the node was unreachable.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Requests passed to `eth_call` and `eth_estimateGas`, in order.
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn check_reachable(&self) -> Result<(), TransportError> {
        if self.failing {
            return Err(TransportErrorKind::custom_str("connection refused"));
        }
        Ok(())
    }

    fn record(&self, tx: &TransactionRequest) {
        self.requests.lock().unwrap().push(tx.clone());
    }
}

impl Default for MockParentChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParentChain for MockParentChain {
    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, TransportError> {
        self.record(&tx);
        self.check_reachable()?;

        let to = tx.to.and_then(|kind| kind.to().copied()).unwrap_or_default();
        let input = tx.input.input().cloned().unwrap_or_default();
        let selector: [u8; 4] = input
            .get(..4)
            .and_then(|selector| selector.try_into().ok())
            .unwrap_or_default();

        self.responses
            .get(&(to, selector))
            .cloned()
            .ok_or_else(|| TransportErrorKind::custom_str("execution reverted"))
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, TransportError> {
        self.record(&tx);
        self.check_reachable()?;
        Ok(self.gas_estimate)
    }

    async fn gas_price(&self) -> Result<u128, TransportError> {
        self.check_reachable()?;
        Ok(self.gas_price)
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64, TransportError> {
        self.check_reachable()?;
        Ok(self.nonce)
    }

    async fn estimate_eip1559_fees(&self) -> Result<FeeEstimate, TransportError> {
        self.check_reachable()?;
        Ok(Self::FEES)
    }
}

pub mod fixtures {
    use super::MockParentChain;
    use crate::{
        contracts::{ArbOwnerPublic, BridgeCreator, DeployHelper, RollupCreator},
        registry::AddressRegistry,
        retryables::TemplateAddresses,
    };
    use alloy::{
        primitives::{address, Address, Bytes, U256},
        sol_types::{SolCall, SolValue},
    };

    pub const CHAIN_ID: u64 = 1337;
    pub const ROLLUP_CREATOR: Address = address!("0x1000000000000000000000000000000000000001");
    pub const DEPLOY_HELPER: Address = address!("0x1000000000000000000000000000000000000002");
    pub const BRIDGE_CREATOR: Address = address!("0x1000000000000000000000000000000000000003");
    pub const ETH_INBOX: Address = address!("0x2000000000000000000000000000000000000003");
    pub const ERC20_INBOX: Address = address!("0x3000000000000000000000000000000000000003");

    pub fn registry() -> AddressRegistry {
        registry_for(CHAIN_ID)
    }

    pub fn registry_for(chain_id: u64) -> AddressRegistry {
        AddressRegistry::new().with_rollup_creator(chain_id, ROLLUP_CREATOR)
    }

    /// Templates whose addresses only differ from each other by their last byte.
    pub fn templates(inbox: Address) -> TemplateAddresses {
        let mut base = inbox.into_array();
        let mut with_last = |last: u8| {
            base[19] = last;
            Address::from(base)
        };
        TemplateAddresses {
            bridge: with_last(0x01),
            sequencer_inbox: with_last(0x02),
            delay_bufferable_sequencer_inbox: with_last(0x04),
            inbox,
            rollup_event_inbox: with_last(0x05),
            outbox: with_last(0x06),
        }
    }

    fn encode_templates(templates: TemplateAddresses) -> Bytes {
        BridgeCreator::BridgeTemplates {
            bridge: templates.bridge,
            sequencerInbox: templates.sequencer_inbox,
            delayBufferableSequencerInbox: templates.delay_bufferable_sequencer_inbox,
            inbox: templates.inbox,
            rollupEventInbox: templates.rollup_event_inbox,
            outbox: templates.outbox,
        }
        .abi_encode()
        .into()
    }

    /// A parent chain with a RollupCreator whose deploy helper reports `total_cost`.
    pub fn rollup_deployment(total_cost: U256) -> MockParentChain {
        MockParentChain::new()
            .with_chain_id(CHAIN_ID)
            .with_response(
                ROLLUP_CREATOR,
                RollupCreator::l2FactoriesDeployerCall::SELECTOR,
                DEPLOY_HELPER.abi_encode().into(),
            )
            .with_response(
                ROLLUP_CREATOR,
                RollupCreator::bridgeCreatorCall::SELECTOR,
                BRIDGE_CREATOR.abi_encode().into(),
            )
            .with_response(
                BRIDGE_CREATOR,
                BridgeCreator::ethBasedTemplatesCall::SELECTOR,
                encode_templates(templates(ETH_INBOX)),
            )
            .with_response(
                BRIDGE_CREATOR,
                BridgeCreator::erc20BasedTemplatesCall::SELECTOR,
                encode_templates(templates(ERC20_INBOX)),
            )
            .with_response(
                DEPLOY_HELPER,
                DeployHelper::getDeploymentTotalCostCall::SELECTOR,
                total_cost.abi_encode().into(),
            )
    }

    /// A chain whose ArbOwnerPublic precompile reports `owners`.
    pub fn chain_owners(owners: Vec<Address>, network_fee_account: Address) -> MockParentChain {
        let precompile = crate::contracts::ARB_OWNER_PUBLIC_ADDRESS;
        MockParentChain::new()
            .with_response(
                precompile,
                ArbOwnerPublic::getAllChainOwnersCall::SELECTOR,
                owners.abi_encode().into(),
            )
            .with_response(
                precompile,
                ArbOwnerPublic::isChainOwnerCall::SELECTOR,
                true.abi_encode().into(),
            )
            .with_response(
                precompile,
                ArbOwnerPublic::getNetworkFeeAccountCall::SELECTOR,
                network_fee_account.abi_encode().into(),
            )
            .with_response(
                precompile,
                ArbOwnerPublic::getInfraFeeAccountCall::SELECTOR,
                network_fee_account.abi_encode().into(),
            )
    }
}
