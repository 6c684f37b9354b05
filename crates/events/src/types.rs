use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use binding::{L1UsdcBridge, L2UsdcBridge};
use serde::{Deserialize, Serialize};

/// Which way the funds move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// L1 -> L2
    Deposit,
    /// L2 -> L1
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Emitted on the source chain
    Initiated,
    /// Emitted on the destination chain once the message is relayed
    Finalized,
}

/// A decoded bridge event from either chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeTransfer {
    pub direction: Direction,
    pub stage: Stage,
    pub l1_token: Address,
    pub l2_token: Address,
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub extra_data: Bytes,
    pub block_number: u64,
    pub tx_hash: Option<TxHash>,
}

/// Fields shared by both ends of a transfer. The bridges emit no nonce, so
/// identical transfers only differ by multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferKey {
    pub l1_token: Address,
    pub l2_token: Address,
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub extra_data: Bytes,
}

impl BridgeTransfer {
    pub fn key(&self) -> TransferKey {
        TransferKey {
            l1_token: self.l1_token,
            l2_token: self.l2_token,
            from: self.from,
            to: self.to,
            amount: self.amount,
            extra_data: self.extra_data.clone(),
        }
    }

    /// Build a transfer from a typed event and the log it was decoded from.
    pub fn from_event<E: BridgeEvent>(event: E, log: &Log) -> Self {
        let fields = event.into_fields();
        Self {
            direction: E::DIRECTION,
            stage: E::STAGE,
            l1_token: fields.l1_token,
            l2_token: fields.l2_token,
            from: fields.from,
            to: fields.to,
            amount: fields.amount,
            extra_data: fields.extra_data,
            block_number: log.block_number.unwrap_or_default(),
            tx_hash: log.transaction_hash,
        }
    }

    /// Decode a raw RPC log as `E`.
    pub fn from_log<E: BridgeEvent>(log: &Log) -> eyre::Result<Self> {
        let decoded = E::decode_log(&log.inner)?;
        Ok(Self::from_event(decoded.data, log))
    }
}

/// One of the four bridge events. They all carry the same six fields.
pub trait BridgeEvent: SolEvent {
    const DIRECTION: Direction;
    const STAGE: Stage;

    fn into_fields(self) -> TransferKey;
}

macro_rules! bridge_event {
    ($event:ty, $direction:ident, $stage:ident) => {
        impl BridgeEvent for $event {
            const DIRECTION: Direction = Direction::$direction;
            const STAGE: Stage = Stage::$stage;

            fn into_fields(self) -> TransferKey {
                TransferKey {
                    l1_token: self.l1Token,
                    l2_token: self.l2Token,
                    from: self.from,
                    to: self.to,
                    amount: self.amount,
                    extra_data: self.extraData,
                }
            }
        }
    };
}

bridge_event!(L1UsdcBridge::ERC20DepositInitiated, Deposit, Initiated);
bridge_event!(L2UsdcBridge::DepositFinalized, Deposit, Finalized);
bridge_event!(L2UsdcBridge::WithdrawalInitiated, Withdrawal, Initiated);
bridge_event!(L1UsdcBridge::ERC20WithdrawalFinalized, Withdrawal, Finalized);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::rpc_log;

    #[test]
    fn test_from_deposit_log() {
        let event = L1UsdcBridge::ERC20DepositInitiated {
            l1Token: Address::repeat_byte(0x01),
            l2Token: Address::repeat_byte(0x02),
            from: Address::repeat_byte(0x03),
            to: Address::repeat_byte(0x04),
            amount: U256::from(1_000_000u64),
            extraData: Bytes::new(),
        };

        let transfer =
            BridgeTransfer::from_log::<L1UsdcBridge::ERC20DepositInitiated>(&rpc_log(&event, 17))
                .unwrap();
        assert_eq!(transfer.direction, Direction::Deposit);
        assert_eq!(transfer.stage, Stage::Initiated);
        assert_eq!(transfer.from, Address::repeat_byte(0x03));
        assert_eq!(transfer.amount, U256::from(1_000_000u64));
        assert_eq!(transfer.block_number, 17);
        assert!(transfer.tx_hash.is_some());
    }

    #[test]
    fn test_wrong_event_is_rejected() {
        let event = L2UsdcBridge::WithdrawalInitiated {
            l1Token: Address::repeat_byte(0x01),
            l2Token: Address::repeat_byte(0x02),
            from: Address::repeat_byte(0x03),
            to: Address::repeat_byte(0x03),
            amount: U256::from(5u64),
            extraData: Bytes::new(),
        };
        let log = rpc_log(&event, 1);
        assert!(BridgeTransfer::from_log::<L2UsdcBridge::DepositFinalized>(&log).is_err());
        assert!(BridgeTransfer::from_log::<L2UsdcBridge::WithdrawalInitiated>(&log).is_ok());
    }

    #[test]
    fn test_key_ignores_location() {
        let event = L2UsdcBridge::DepositFinalized {
            l1Token: Address::repeat_byte(0x01),
            l2Token: Address::repeat_byte(0x02),
            from: Address::repeat_byte(0x03),
            to: Address::repeat_byte(0x04),
            amount: U256::from(9u64),
            extraData: Bytes::from_static(b"x"),
        };
        let a = BridgeTransfer::from_event(event.clone(), &rpc_log(&event, 1));
        let b = BridgeTransfer::from_event(event.clone(), &rpc_log(&event, 99));
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());
    }
}
