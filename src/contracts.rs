//! Solidity interfaces of the contracts the SDK talks to.

use alloy::{
    primitives::{address, Address},
    sol,
};

/// Precompile that exists on every Arbitrum chain.
pub const ARB_OWNER_ADDRESS: Address = address!("0x0000000000000000000000000000000000000070");
pub const ARB_OWNER_PUBLIC_ADDRESS: Address =
    address!("0x000000000000000000000000000000000000006b");

sol! {
    /// Owner-only tools for managing the chain. Calls by non-owners always revert.
    #[sol(abi, all_derives, extra_methods)]
    interface ArbOwner {
        function addChainOwner(address newOwner) external;
        function removeChainOwner(address ownerToRemove) external;
        function isChainOwner(address addr) external view returns (bool);
        function getAllChainOwners() external view returns (address[] memory);

        /// Available in ArbOS version 41
        function setNativeTokenManagementFrom(uint64 timestamp) external;
        function addNativeTokenOwner(address newOwner) external;
        function removeNativeTokenOwner(address ownerToRemove) external;

        function setL1BaseFeeEstimateInertia(uint64 inertia) external;
        function setL2BaseFee(uint256 priceInWei) external;
        function setMinimumL2BaseFee(uint256 priceInWei) external;
        function setSpeedLimit(uint64 limit) external;
        function setMaxTxGasLimit(uint64 limit) external;
        function setL2GasPricingInertia(uint64 sec) external;
        function setL2GasBacklogTolerance(uint64 sec) external;

        function getNetworkFeeAccount() external view returns (address);
        function getInfraFeeAccount() external view returns (address);
        function setNetworkFeeAccount(address newNetworkFeeAccount) external;
        function setInfraFeeAccount(address newInfraFeeAccount) external;

        function scheduleArbOSUpgrade(uint64 newVersion, uint64 timestamp) external;

        function setL1PricingEquilibrationUnits(uint256 equilibrationUnits) external;
        function setL1PricingInertia(uint64 inertia) external;
        function setL1PricingRewardRecipient(address recipient) external;
        function setL1PricingRewardRate(uint64 weiPerUnit) external;
        function setL1PricePerUnit(uint256 pricePerUnit) external;
        function setPerBatchGasCharge(int64 cost) external;
        function setBrotliCompressionLevel(uint64 level) external;
        function setAmortizedCostCapBips(uint64 cap) external;
        function releaseL1PricerSurplusFunds(uint256 maxWeiToRelease) external returns (uint256);

        function setInkPrice(uint32 price) external;
        function setWasmMaxStackDepth(uint32 depth) external;
        function setWasmFreePages(uint16 pages) external;
        function setWasmPageGas(uint16 gas) external;
        function setWasmPageLimit(uint16 limit) external;
        function setWasmMinInitGas(uint8 gas, uint16 cached) external;
        function setWasmInitCostScalar(uint64 percent) external;
        function setWasmExpiryDays(uint16 _days) external;
        function setWasmKeepaliveDays(uint16 _days) external;
        function setWasmBlockCacheSize(uint16 count) external;
        function addWasmCacheManager(address manager) external;
        function removeWasmCacheManager(address manager) external;

        function setChainConfig(string calldata chainConfig) external;
        function setCalldataPriceIncrease(bool enable) external;
    }

    /// Read-only view of the chain owner state, callable by anyone.
    #[sol(all_derives)]
    interface ArbOwnerPublic {
        function isChainOwner(address addr) external view returns (bool);
        function getAllChainOwners() external view returns (address[] memory);
        function getNetworkFeeAccount() external view returns (address);
        function getInfraFeeAccount() external view returns (address);
    }

    #[sol(all_derives, extra_methods)]
    interface UpgradeExecutor {
        function execute(address upgrade, bytes calldata upgradeCallData) external payable;
        function executeCall(address target, bytes calldata targetCallData) external payable;
    }

    #[sol(all_derives)]
    interface RollupCreator {
        function bridgeCreator() external view returns (address);
        function l2FactoriesDeployer() external view returns (address);
    }

    #[sol(all_derives)]
    interface BridgeCreator {
        struct BridgeTemplates {
            address bridge;
            address sequencerInbox;
            address delayBufferableSequencerInbox;
            address inbox;
            address rollupEventInbox;
            address outbox;
        }

        function ethBasedTemplates() external view returns (BridgeTemplates memory);
        function erc20BasedTemplates() external view returns (BridgeTemplates memory);
    }

    #[sol(all_derives)]
    interface DeployHelper {
        function getDeploymentTotalCost(address inbox, uint256 maxFeePerGas) external view returns (uint256);
    }
}
