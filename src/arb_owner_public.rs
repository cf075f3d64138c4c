use crate::{chain::ParentChain, client::OrbitClient, contracts::ArbOwnerPublic, error::Result};
use alloy::primitives::Address;

impl<C: ParentChain> OrbitClient<C> {
    pub async fn is_chain_owner(&self, address: Address) -> Result<bool> {
        self.read_contract(
            self.registry.arb_owner_public(),
            ArbOwnerPublic::isChainOwnerCall { addr: address },
        )
        .await
    }

    pub async fn get_all_chain_owners(&self) -> Result<Vec<Address>> {
        self.read_contract(
            self.registry.arb_owner_public(),
            ArbOwnerPublic::getAllChainOwnersCall {},
        )
        .await
    }

    /// Account collecting the network fees of the chain.
    pub async fn get_network_fee_account(&self) -> Result<Address> {
        self.read_contract(
            self.registry.arb_owner_public(),
            ArbOwnerPublic::getNetworkFeeAccountCall {},
        )
        .await
    }

    pub async fn get_infra_fee_account(&self) -> Result<Address> {
        self.read_contract(
            self.registry.arb_owner_public(),
            ArbOwnerPublic::getInfraFeeAccountCall {},
        )
        .await
    }
}
