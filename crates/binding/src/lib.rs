//! Contract bindings for the USDC bridge.
//!
//! Generated bindings, one module per contract:
//! - `L1UsdcBridge` and its ERC-1967 proxy `L1UsdcBridgeProxy`
//! - `L2UsdcBridge` and its ERC-1967 proxy `L2UsdcBridgeProxy` (L2 predeploy)
//! - `LegacyERC20NativeToken`
//!
//! Each module exposes the compiler ABI as `ABI` and a `sol!` generated
//! contract carrying the creation bytecode, typed calls, events and errors.
//!
//! Also includes the ERC20 interface of the bridged tokens, the L2 predeploy
//! address book and a by-name artifact registry.

pub mod l1_usdc_bridge;
pub mod l1_usdc_bridge_proxy;
pub mod l2_usdc_bridge;
pub mod l2_usdc_bridge_proxy;
pub mod legacy_erc20_native_token;
pub mod predeploys;
pub mod registry;
pub mod token;

pub use l1_usdc_bridge::L1UsdcBridge;
pub use l1_usdc_bridge_proxy::L1UsdcBridgeProxy;
pub use l2_usdc_bridge::L2UsdcBridge;
pub use l2_usdc_bridge_proxy::L2UsdcBridgeProxy;
pub use legacy_erc20_native_token::LegacyERC20NativeToken;
