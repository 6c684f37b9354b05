//! Snapshots of the bridges' on-chain wiring.

use alloy_primitives::{b256, Address, B256, U256};
use alloy_provider::Provider;
use binding::{L1UsdcBridge, L2UsdcBridge};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `bytes32(uint256(keccak256("eip1967.proxy.implementation")) - 1)`
pub const IMPLEMENTATION_SLOT: B256 =
    b256!("0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// `bytes32(uint256(keccak256("eip1967.proxy.admin")) - 1)`
pub const ADMIN_SLOT: B256 =
    b256!("0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// View functions of `L1UsdcBridge`, read through its proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1BridgeState {
    pub messenger: Address,
    pub other_bridge: Address,
    pub l1_usdc: Address,
    pub l2_usdc: Address,
    pub l2_token_bridge: Address,
}

/// View functions of `L2UsdcBridge`, read through its proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2BridgeState {
    pub messenger: Address,
    pub other_bridge: Address,
    pub l1_usdc: Address,
    pub l2_usdc: Address,
    pub l2_usdc_master_minter: Address,
}

/// ERC-1967 proxy slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyState {
    pub implementation: Address,
    /// Admin slot, exposed by the bridge proxies as `owner()`
    pub owner: Address,
    /// Whether code is deployed at `implementation`
    pub implementation_has_code: bool,
}

pub struct BridgeStateReader<P> {
    provider: P,
}

impl<P> BridgeStateReader<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn l1_bridge(&self, bridge: Address) -> eyre::Result<L1BridgeState> {
        let contract = L1UsdcBridge::new(bridge, &self.provider);

        let state = L1BridgeState {
            messenger: contract.messenger().call().await?,
            other_bridge: contract.otherBridge().call().await?,
            l1_usdc: contract.l1Usdc().call().await?,
            l2_usdc: contract.l2Usdc().call().await?,
            l2_token_bridge: contract.l2TokenBridge().call().await?,
        };
        debug!(%bridge, ?state, "Read L1 bridge state");

        Ok(state)
    }

    pub async fn l2_bridge(&self, bridge: Address) -> eyre::Result<L2BridgeState> {
        let contract = L2UsdcBridge::new(bridge, &self.provider);

        let state = L2BridgeState {
            messenger: contract.messenger().call().await?,
            other_bridge: contract.otherBridge().call().await?,
            l1_usdc: contract.l1Usdc().call().await?,
            l2_usdc: contract.l2Usdc().call().await?,
            l2_usdc_master_minter: contract.l2UsdcMasterMinter().call().await?,
        };
        debug!(%bridge, ?state, "Read L2 bridge state");

        Ok(state)
    }

    /// Read the implementation and admin of an ERC-1967 proxy from storage.
    ///
    /// Works for both bridge proxies without going through their admin
    /// restricted getters.
    pub async fn proxy(&self, proxy: Address) -> eyre::Result<ProxyState> {
        let implementation = self.slot_address(proxy, IMPLEMENTATION_SLOT).await?;
        let owner = self.slot_address(proxy, ADMIN_SLOT).await?;

        let implementation_has_code = if implementation.is_zero() {
            false
        } else {
            !self.provider.get_code_at(implementation).await?.is_empty()
        };

        Ok(ProxyState { implementation, owner, implementation_has_code })
    }

    /// Amount of `l1_token` locked in the L1 bridge against `l2_token`.
    pub async fn deposits(
        &self,
        bridge: Address,
        l1_token: Address,
        l2_token: Address,
    ) -> eyre::Result<U256> {
        let contract = L1UsdcBridge::new(bridge, &self.provider);
        Ok(contract.deposits(l1_token, l2_token).call().await?)
    }

    async fn slot_address(&self, address: Address, slot: B256) -> eyre::Result<Address> {
        let value = self.provider.get_storage_at(address, U256::from_be_bytes(slot.0)).await?;
        Ok(slot_to_address(value))
    }
}

/// Addresses are stored right-aligned in a storage word.
pub(crate) fn slot_to_address(value: U256) -> Address {
    Address::from_word(B256::from(value.to_be_bytes::<32>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, keccak256};

    #[test]
    fn test_slot_to_address() {
        let addr = address!("0x4200000000000000000000000000000000000775");
        let word = U256::from_be_bytes(addr.into_word().0);
        assert_eq!(slot_to_address(word), addr);
        assert_eq!(slot_to_address(U256::ZERO), Address::ZERO);
    }

    #[test]
    fn test_eip1967_slots() {
        let slot = |label: &str| {
            B256::from((U256::from_be_bytes(keccak256(label).0) - U256::from(1u64)).to_be_bytes::<32>())
        };
        assert_eq!(slot("eip1967.proxy.implementation"), IMPLEMENTATION_SLOT);
        assert_eq!(slot("eip1967.proxy.admin"), ADMIN_SLOT);
    }
}
