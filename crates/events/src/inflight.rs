//! In-flight transfer tracking.
//!
//! A transfer is in flight when it was initiated on one chain and its
//! finalization has not been observed on the other chain yet.

use crate::{reconcile::reconcile, scanner::EventScanner, types::BridgeTransfer};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use config::NetworkConfig;
use tracing::debug;

/// First block of a lookback window ending at `current_block`.
pub fn lookback_start(current_block: u64, lookback_secs: u64, block_time_secs: u64) -> u64 {
    let lookback_blocks = lookback_secs / block_time_secs.max(1);
    current_block.saturating_sub(lookback_blocks)
}

pub struct InFlightTracker<P1, P2> {
    l1: EventScanner<P1>,
    l2: EventScanner<P2>,
    l1_bridge: Address,
    l2_bridge: Address,
    l1_block_time_secs: u64,
    l2_block_time_secs: u64,
}

impl<P1, P2> InFlightTracker<P1, P2>
where
    P1: Provider + Clone,
    P2: Provider + Clone,
{
    pub fn new(l1_provider: P1, l2_provider: P2, network: &NetworkConfig) -> Self {
        Self {
            l1: EventScanner::new(l1_provider),
            l2: EventScanner::new(l2_provider),
            l1_bridge: network.l1.bridge,
            l2_bridge: network.l2.bridge,
            l1_block_time_secs: network.l1.block_time_secs,
            l2_block_time_secs: network.l2.block_time_secs,
        }
    }

    /// Deposits initiated on L1 within the lookback window that have not
    /// been finalized on L2.
    ///
    /// # Arguments
    /// * `sender` - Only consider transfers from this address
    /// * `lookback_secs` - How far back to scan (in seconds)
    pub async fn inflight_deposits(
        &self,
        sender: Option<Address>,
        lookback_secs: u64,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        let (l1_from, l1_to, l2_from, l2_to) = self.windows(lookback_secs).await?;

        debug!(l1_from, l1_to, l2_from, l2_to, lookback_secs, "Scanning for in-flight deposits");

        let initiated = self
            .l1
            .deposits_initiated(self.l1_bridge, sender, l1_from.into(), l1_to.into())
            .await?;
        if initiated.is_empty() {
            debug!("No L1 deposits found in range");
            return Ok(vec![]);
        }

        let finalized = self
            .l2
            .deposits_finalized(self.l2_bridge, sender, l2_from.into(), l2_to.into())
            .await?;

        debug!(
            initiated = initiated.len(),
            finalized = finalized.len(),
            "Reconciling deposits"
        );

        Ok(reconcile(initiated, &finalized))
    }

    /// Withdrawals initiated on L2 within the lookback window that have not
    /// been finalized on L1.
    pub async fn inflight_withdrawals(
        &self,
        sender: Option<Address>,
        lookback_secs: u64,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        let (l1_from, l1_to, l2_from, l2_to) = self.windows(lookback_secs).await?;

        debug!(l1_from, l1_to, l2_from, l2_to, lookback_secs, "Scanning for in-flight withdrawals");

        let initiated = self
            .l2
            .withdrawals_initiated(self.l2_bridge, sender, l2_from.into(), l2_to.into())
            .await?;
        if initiated.is_empty() {
            debug!("No L2 withdrawals found in range");
            return Ok(vec![]);
        }

        let finalized = self
            .l1
            .withdrawals_finalized(self.l1_bridge, sender, l1_from.into(), l1_to.into())
            .await?;

        debug!(
            initiated = initiated.len(),
            finalized = finalized.len(),
            "Reconciling withdrawals"
        );

        Ok(reconcile(initiated, &finalized))
    }

    /// Resolve the lookback window on both chains against the current heads.
    async fn windows(&self, lookback_secs: u64) -> eyre::Result<(u64, u64, u64, u64)> {
        let l1_current = self.l1.latest_block().await?;
        let l2_current = self.l2.latest_block().await?;

        Ok((
            lookback_start(l1_current, lookback_secs, self.l1_block_time_secs),
            l1_current,
            lookback_start(l2_current, lookback_secs, self.l2_block_time_secs),
            l2_current,
        ))
    }
}

/// Sum of the amounts of `transfers`.
pub fn total_amount(transfers: &[BridgeTransfer]) -> U256 {
    transfers.iter().fold(U256::ZERO, |acc, t| acc.saturating_add(t.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::transfer, types::Stage};

    #[test]
    fn test_lookback_start() {
        // one hour on a 12s chain is 300 blocks
        assert_eq!(lookback_start(1_000, 3_600, 12), 700);
        // one hour on a 2s chain is 1800 blocks
        assert_eq!(lookback_start(10_000, 3_600, 2), 8_200);
        // saturates at genesis
        assert_eq!(lookback_start(100, 3_600, 2), 0);
        // a zero block time does not divide by zero
        assert_eq!(lookback_start(100, 10, 0), 90);
    }

    #[test]
    fn test_total_amount() {
        let transfers = vec![transfer(Stage::Initiated, 100, 1), transfer(Stage::Initiated, 250, 2)];
        assert_eq!(total_amount(&transfers), U256::from(350u64));
        assert_eq!(total_amount(&[]), U256::ZERO);
    }
}
