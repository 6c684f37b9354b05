//! Bridge event tracking.
//!
//! This crate scans the USDC bridges for their deposit and withdrawal events,
//! streams new ones as they appear, and pairs initiations with finalizations
//! to find transfers that are still in flight.

pub mod inflight;
pub mod reconcile;
pub mod scanner;
pub mod types;
pub mod watch;

pub use inflight::{lookback_start, total_amount, InFlightTracker};
pub use reconcile::reconcile;
pub use scanner::{EventScanner, CHUNK_SIZE};
pub use types::{BridgeEvent, BridgeTransfer, Direction, Stage, TransferKey};
pub use watch::{watch, watch_transfers};

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::types::{BridgeTransfer, Direction, Stage};
    use alloy_primitives::{b256, Address, Bytes, Log as PrimitiveLog, U256};
    use alloy_rpc_types_eth::Log;
    use alloy_sol_types::SolEvent;

    /// RPC log carrying `event` at `block_number`.
    pub(crate) fn rpc_log<E: SolEvent>(event: &E, block_number: u64) -> Log {
        Log {
            inner: PrimitiveLog { address: Address::repeat_byte(0xaa), data: event.encode_log_data() },
            block_number: Some(block_number),
            transaction_hash: Some(b256!(
                "0x1111111111111111111111111111111111111111111111111111111111111111"
            )),
            ..Default::default()
        }
    }

    /// A deposit of `amount` between two fixed accounts.
    pub(crate) fn transfer(stage: Stage, amount: u64, block_number: u64) -> BridgeTransfer {
        BridgeTransfer {
            direction: Direction::Deposit,
            stage,
            l1_token: Address::repeat_byte(0x01),
            l2_token: Address::repeat_byte(0x02),
            from: Address::repeat_byte(0x03),
            to: Address::repeat_byte(0x03),
            amount: U256::from(amount),
            extra_data: Bytes::new(),
            block_number,
            tx_hash: None,
        }
    }
}
