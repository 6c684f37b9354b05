//! Executable bridge actions.
//!
//! - [`deposit::DepositAction`]: lock L1 USDC in the L1 bridge
//! - [`withdraw::WithdrawAction`]: burn L2 USDC through the L2 bridge
//! - [`proxy`]: admin operations on the bridge proxies
//! - [`deploy`]: deploy a bridge implementation behind a fresh proxy

pub mod allowance;
pub mod deploy;
pub mod deposit;
pub mod proxy;
pub mod units;
pub mod withdraw;

use alloy_primitives::{TxHash, U256};
use alloy_rpc_types_eth::TransactionReceipt;
use alloy_sol_types::SolEvent;
use std::future::Future;

/// Minimum gas for relaying the bridge message on the other layer.
pub const DEFAULT_MIN_GAS_LIMIT: u32 = 200_000;

/// Trait for executable onchain actions.
pub trait Action: Send + Sync {
    /// Check to see if the action is ready to be executed.
    ///
    /// Returns true if all preconditions are met.
    fn is_ready(&self) -> impl Future<Output = eyre::Result<bool>> + Send;

    /// Check if the action has already been completed.
    ///
    /// Returns true if the action was already executed successfully.
    fn is_completed(&self) -> impl Future<Output = eyre::Result<bool>> + Send;

    /// Execute the action.
    fn execute(&mut self) -> impl Future<Output = eyre::Result<ActionResult>> + Send;

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Result of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: Option<U256>,
}

impl ActionResult {
    /// Fail on a reverted receipt.
    pub fn from_receipt(receipt: &TransactionReceipt) -> eyre::Result<Self> {
        if !receipt.status() {
            eyre::bail!("Transaction {} reverted", receipt.transaction_hash);
        }

        Ok(Self {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: Some(U256::from(receipt.gas_used)),
        })
    }
}

/// First `E` emitted in `receipt`.
pub fn find_event<E: SolEvent>(receipt: &TransactionReceipt) -> Option<E> {
    receipt
        .inner
        .logs()
        .iter()
        .find_map(|log| E::decode_log(&log.inner).ok())
        .map(|log| log.data)
}
