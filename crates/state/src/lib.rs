//! Bridge state inspection.
//!
//! This crate reads the on-chain wiring of the USDC bridges and the token
//! balances around them:
//! - [`BridgeStateReader`] snapshots the bridges' view functions and the
//!   ERC-1967 slots of their proxies
//! - [`check`] verifies the snapshots against the expected wiring
//! - [`BalanceMonitor`] answers balance queries

pub mod check;
pub mod monitor;
pub mod reader;

pub use check::{verify_l1_bridge, verify_l2_bridge, verify_proxy, CheckError};
pub use monitor::BalanceMonitor;
pub use reader::{BridgeStateReader, L1BridgeState, L2BridgeState, ProxyState};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Represents a blockchain balance at a specific point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The address holding the balance
    pub holder: Address,
    /// The asset address (zero address for native token)
    pub asset: Address,
    /// The balance amount
    pub amount: U256,
}

/// Type of balance query to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceQuery {
    /// Query ERC20 token balance for an EOA or contract
    Erc20Balance {
        /// Token contract address
        token: Address,
        /// Holder address
        holder: Address,
    },
    /// Query native ETH balance
    NativeBalance {
        /// Account address
        address: Address,
    },
    /// Query the amount locked in the L1 bridge for a token pair
    ///
    /// Calls `L1UsdcBridge.deposits(l1Token, l2Token)`
    BridgeDeposits {
        /// L1 bridge (proxy) address
        bridge: Address,
        l1_token: Address,
        l2_token: Address,
    },
}

/// Trait for monitoring balances on a blockchain.
pub trait Monitor: Send + Sync {
    /// Query a single balance.
    fn query_balance(
        &self,
        query: BalanceQuery,
    ) -> impl Future<Output = eyre::Result<Balance>> + Send;
}
