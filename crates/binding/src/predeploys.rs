//! L2 predeploy addresses used by the USDC bridge.
//!
//! These contracts are placed in the L2 genesis state at fixed addresses.

use alloy_primitives::{address, Address};

pub const L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("0x4200000000000000000000000000000000000007");
pub const L2_STANDARD_BRIDGE: Address = address!("0x4200000000000000000000000000000000000010");
/// `L2UsdcBridgeProxy` sits at this address.
pub const L2_USDC_BRIDGE: Address = address!("0x4200000000000000000000000000000000000775");
pub const MASTER_MINTER: Address = address!("0x4200000000000000000000000000000000000777");
/// Native L2 USDC.
pub const FIAT_TOKEN_V2_2: Address = address!("0x4200000000000000000000000000000000000778");

/// Predeploys by contract name.
pub const PREDEPLOYS: [(&str, Address); 5] = [
    ("L2CrossDomainMessenger", L2_CROSS_DOMAIN_MESSENGER),
    ("L2StandardBridge", L2_STANDARD_BRIDGE),
    ("L2UsdcBridge", L2_USDC_BRIDGE),
    ("MasterMinter", MASTER_MINTER),
    ("FiatTokenV2_2", FIAT_TOKEN_V2_2),
];

/// Look up a predeploy address by its contract name.
pub fn by_name(name: &str) -> Option<Address> {
    PREDEPLOYS.iter().find(|(n, _)| *n == name).map(|(_, addr)| *addr)
}

/// Whether the predeploy at `addr` sits behind a proxy.
///
/// The master minter is deployed directly.
pub fn is_proxied(addr: Address) -> bool {
    addr != MASTER_MINTER
}
