//! Wiring checks for the bridge contracts.
//!
//! Each check returns the first violation found. The L2 rules follow the
//! predeploy layout: the bridge must talk to the `L2CrossDomainMessenger`
//! predeploy and mint `FiatTokenV2_2` through the `MasterMinter` predeploy.

use alloy_primitives::Address;
use binding::predeploys;
use config::NetworkConfig;
use thiserror::Error;
use tracing::info;

use crate::{L1BridgeState, L2BridgeState, ProxyState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("otherBridge should not be address(0)")]
    OtherBridgeNotSet,

    #[error("otherBridge should be {expected}, got {actual}")]
    OtherBridgeMismatch { expected: Address, actual: Address },

    #[error("messenger should not be address(0)")]
    MessengerNotSet,

    #[error("messenger should be {expected}, got {actual}")]
    MessengerMismatch { expected: Address, actual: Address },

    #[error("l1Usdc should not be address(0)")]
    L1UsdcNotSet,

    #[error("l1Usdc should be {expected}, got {actual}")]
    L1UsdcMismatch { expected: Address, actual: Address },

    #[error("l2Usdc should be {expected}, got {actual}")]
    L2UsdcMismatch { expected: Address, actual: Address },

    #[error("l2UsdcMasterMinter should be {expected}, got {actual}")]
    MasterMinterMismatch { expected: Address, actual: Address },

    #[error("proxy implementation is not set")]
    ImplementationNotSet,

    #[error("proxy implementation {0} has no code")]
    ImplementationHasNoCode(Address),
}

/// Addresses the L2 bridge is expected to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedL2Wiring {
    pub messenger: Address,
    pub l2_usdc: Address,
    pub master_minter: Address,
}

impl Default for ExpectedL2Wiring {
    fn default() -> Self {
        Self {
            messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
            l2_usdc: predeploys::FIAT_TOKEN_V2_2,
            master_minter: predeploys::MASTER_MINTER,
        }
    }
}

impl From<&NetworkConfig> for ExpectedL2Wiring {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            messenger: config.l2.messenger,
            l2_usdc: config.l2.usdc,
            master_minter: config.l2.master_minter,
        }
    }
}

/// Addresses the L1 bridge is expected to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedL1Wiring {
    pub l2_bridge: Address,
    pub l1_usdc: Address,
    pub l2_usdc: Address,
}

impl From<&NetworkConfig> for ExpectedL1Wiring {
    fn from(config: &NetworkConfig) -> Self {
        Self { l2_bridge: config.l2.bridge, l1_usdc: config.l1.usdc, l2_usdc: config.l2.usdc }
    }
}

pub fn verify_l2_bridge(
    state: &L2BridgeState,
    expected: &ExpectedL2Wiring,
) -> Result<(), CheckError> {
    if state.other_bridge.is_zero() {
        return Err(CheckError::OtherBridgeNotSet);
    }
    info!(other_bridge = %state.other_bridge, "L2UsdcBridge");

    if state.messenger != expected.messenger {
        return Err(CheckError::MessengerMismatch {
            expected: expected.messenger,
            actual: state.messenger,
        });
    }

    if state.l1_usdc.is_zero() {
        return Err(CheckError::L1UsdcNotSet);
    }
    info!(l1_usdc = %state.l1_usdc, "L2UsdcBridge");

    if state.l2_usdc != expected.l2_usdc {
        return Err(CheckError::L2UsdcMismatch { expected: expected.l2_usdc, actual: state.l2_usdc });
    }

    if state.l2_usdc_master_minter != expected.master_minter {
        return Err(CheckError::MasterMinterMismatch {
            expected: expected.master_minter,
            actual: state.l2_usdc_master_minter,
        });
    }

    Ok(())
}

pub fn verify_l1_bridge(
    state: &L1BridgeState,
    expected: &ExpectedL1Wiring,
) -> Result<(), CheckError> {
    if state.messenger.is_zero() {
        return Err(CheckError::MessengerNotSet);
    }

    if state.other_bridge != expected.l2_bridge {
        return Err(CheckError::OtherBridgeMismatch {
            expected: expected.l2_bridge,
            actual: state.other_bridge,
        });
    }

    if state.l1_usdc != expected.l1_usdc {
        return Err(CheckError::L1UsdcMismatch { expected: expected.l1_usdc, actual: state.l1_usdc });
    }

    if state.l2_usdc != expected.l2_usdc {
        return Err(CheckError::L2UsdcMismatch { expected: expected.l2_usdc, actual: state.l2_usdc });
    }

    Ok(())
}

/// A proxy must point at deployed code.
pub fn verify_proxy(state: &ProxyState) -> Result<(), CheckError> {
    if state.implementation.is_zero() {
        return Err(CheckError::ImplementationNotSet);
    }
    if !state.implementation_has_code {
        return Err(CheckError::ImplementationHasNoCode(state.implementation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const L1_USDC: Address = address!("0x1111111111111111111111111111111111111111");

    fn healthy_l2() -> L2BridgeState {
        L2BridgeState {
            messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
            other_bridge: Address::repeat_byte(0xb1),
            l1_usdc: L1_USDC,
            l2_usdc: predeploys::FIAT_TOKEN_V2_2,
            l2_usdc_master_minter: predeploys::MASTER_MINTER,
        }
    }

    fn healthy_l1() -> L1BridgeState {
        L1BridgeState {
            messenger: Address::repeat_byte(0xcd),
            other_bridge: predeploys::L2_USDC_BRIDGE,
            l1_usdc: L1_USDC,
            l2_usdc: predeploys::FIAT_TOKEN_V2_2,
            l2_token_bridge: predeploys::L2_USDC_BRIDGE,
        }
    }

    fn expected_l1() -> ExpectedL1Wiring {
        ExpectedL1Wiring {
            l2_bridge: predeploys::L2_USDC_BRIDGE,
            l1_usdc: L1_USDC,
            l2_usdc: predeploys::FIAT_TOKEN_V2_2,
        }
    }

    #[test]
    fn test_healthy_l2_bridge() {
        assert_eq!(verify_l2_bridge(&healthy_l2(), &ExpectedL2Wiring::default()), Ok(()));
    }

    #[test]
    fn test_l2_other_bridge_unset() {
        let state = L2BridgeState { other_bridge: Address::ZERO, ..healthy_l2() };
        assert_eq!(
            verify_l2_bridge(&state, &ExpectedL2Wiring::default()),
            Err(CheckError::OtherBridgeNotSet)
        );
    }

    #[test]
    fn test_l2_wrong_messenger() {
        let state = L2BridgeState { messenger: predeploys::L2_STANDARD_BRIDGE, ..healthy_l2() };
        assert_eq!(
            verify_l2_bridge(&state, &ExpectedL2Wiring::default()),
            Err(CheckError::MessengerMismatch {
                expected: predeploys::L2_CROSS_DOMAIN_MESSENGER,
                actual: predeploys::L2_STANDARD_BRIDGE,
            })
        );
    }

    #[test]
    fn test_l2_violations_are_reported_in_order() {
        // both l1Usdc and the master minter are wrong; l1Usdc is checked first
        let state = L2BridgeState {
            l1_usdc: Address::ZERO,
            l2_usdc_master_minter: Address::ZERO,
            ..healthy_l2()
        };
        assert_eq!(
            verify_l2_bridge(&state, &ExpectedL2Wiring::default()),
            Err(CheckError::L1UsdcNotSet)
        );

        let state = L2BridgeState { l2_usdc_master_minter: Address::ZERO, ..healthy_l2() };
        assert!(matches!(
            verify_l2_bridge(&state, &ExpectedL2Wiring::default()),
            Err(CheckError::MasterMinterMismatch { .. })
        ));
    }

    #[test]
    fn test_l1_bridge() {
        assert_eq!(verify_l1_bridge(&healthy_l1(), &expected_l1()), Ok(()));

        let state = L1BridgeState { other_bridge: Address::ZERO, ..healthy_l1() };
        assert!(matches!(
            verify_l1_bridge(&state, &expected_l1()),
            Err(CheckError::OtherBridgeMismatch { .. })
        ));

        let state = L1BridgeState { messenger: Address::ZERO, ..healthy_l1() };
        assert_eq!(verify_l1_bridge(&state, &expected_l1()), Err(CheckError::MessengerNotSet));
    }

    #[test]
    fn test_expected_wiring_from_devnet_config() {
        let config = NetworkConfig::devnet();
        assert_eq!(ExpectedL2Wiring::from(&config), ExpectedL2Wiring::default());
        assert_eq!(ExpectedL1Wiring::from(&config).l2_bridge, predeploys::L2_USDC_BRIDGE);
    }

    #[test]
    fn test_proxy() {
        let implementation = Address::repeat_byte(0x01);
        let state = ProxyState { implementation, owner: Address::ZERO, implementation_has_code: true };
        assert_eq!(verify_proxy(&state), Ok(()));

        let state = ProxyState { implementation_has_code: false, ..state };
        assert_eq!(verify_proxy(&state), Err(CheckError::ImplementationHasNoCode(implementation)));

        let state = ProxyState { implementation: Address::ZERO, ..state };
        assert_eq!(verify_proxy(&state), Err(CheckError::ImplementationNotSet));
    }
}
