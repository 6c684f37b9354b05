//! Chunked, retried log scanning.

use crate::types::{BridgeEvent, BridgeTransfer};
use alloy_contract::Event;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, Filter, Log};
use alloy_sol_types::SolEvent;
use binding::{L1UsdcBridge, L2UsdcBridge};
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, warn};

/// Use 9,500 block chunks (500 block safety margin for RPC limits)
pub const CHUNK_SIZE: u64 = 9_500;

/// Split `[from, to]` into inclusive ranges of at most `size` blocks.
///
/// A `size` of zero is treated as one.
pub fn chunk_ranges(from: u64, to: u64, size: u64) -> Vec<(u64, u64)> {
    let size = size.max(1);
    let mut ranges = Vec::new();
    let mut current = from;
    while current <= to {
        let end = current.saturating_add(size - 1).min(to);
        ranges.push((current, end));
        if end == u64::MAX {
            break;
        }
        current = end + 1;
    }
    ranges
}

/// Scans one chain for typed events.
pub struct EventScanner<P> {
    provider: P,
}

impl<P> EventScanner<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn latest_block(&self) -> eyre::Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    /// Query every `E` emitted by `address` in the block range.
    ///
    /// Tags are resolved to block numbers once, before the first request, so
    /// every chunk sees the same snapshot.
    pub async fn scan<E: SolEvent>(
        &self,
        address: Address,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<(E, Log)>> {
        self.scan_filtered(address, None, from_block, to_block).await
    }

    /// Like [`Self::scan`], optionally narrowed to a sender in the third
    /// indexed topic (`from` in the bridge events).
    pub async fn scan_filtered<E: SolEvent>(
        &self,
        address: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<(E, Log)>> {
        let from_block_num = self.resolve_block_number(from_block).await?;
        let to_block_num = self.resolve_block_number(to_block).await?;

        if from_block_num > to_block_num {
            return Err(eyre::eyre!(
                "from_block ({}) must be <= to_block ({})",
                from_block_num,
                to_block_num
            ));
        }

        debug!(
            event = E::SIGNATURE,
            %address,
            from = from_block_num,
            to = to_block_num,
            "Scanning for events"
        );

        let mut events = Vec::new();
        for (from, to) in chunk_ranges(from_block_num, to_block_num, CHUNK_SIZE) {
            let chunk = self.scan_chunk_with_retry::<E>(address, sender, from, to).await?;
            events.extend(chunk);
        }

        Ok(events)
    }

    /// Scan a bridge event and convert the matches into transfers.
    pub async fn transfers<E: BridgeEvent>(
        &self,
        bridge: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        let events = self.scan_filtered::<E>(bridge, sender, from_block, to_block).await?;
        Ok(events
            .into_iter()
            .map(|(event, log)| BridgeTransfer::from_event(event, &log))
            .collect())
    }

    /// `ERC20DepositInitiated` on the L1 bridge.
    pub async fn deposits_initiated(
        &self,
        l1_bridge: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        self.transfers::<L1UsdcBridge::ERC20DepositInitiated>(l1_bridge, sender, from_block, to_block)
            .await
    }

    /// `DepositFinalized` on the L2 bridge.
    pub async fn deposits_finalized(
        &self,
        l2_bridge: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        self.transfers::<L2UsdcBridge::DepositFinalized>(l2_bridge, sender, from_block, to_block)
            .await
    }

    /// `WithdrawalInitiated` on the L2 bridge.
    pub async fn withdrawals_initiated(
        &self,
        l2_bridge: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        self.transfers::<L2UsdcBridge::WithdrawalInitiated>(l2_bridge, sender, from_block, to_block)
            .await
    }

    /// `ERC20WithdrawalFinalized` on the L1 bridge.
    pub async fn withdrawals_finalized(
        &self,
        l1_bridge: Address,
        sender: Option<Address>,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<BridgeTransfer>> {
        self.transfers::<L1UsdcBridge::ERC20WithdrawalFinalized>(
            l1_bridge, sender, from_block, to_block,
        )
        .await
    }

    /// Resolve BlockNumberOrTag to a concrete block number.
    async fn resolve_block_number(&self, block: BlockNumberOrTag) -> eyre::Result<u64> {
        match block {
            BlockNumberOrTag::Number(n) => Ok(n),
            BlockNumberOrTag::Earliest => Ok(0),
            BlockNumberOrTag::Latest => Ok(self.provider.get_block_number().await?),
            tag => {
                let block = self
                    .provider
                    .get_block_by_number(tag)
                    .await?
                    .ok_or_else(|| eyre::eyre!("Block {tag} not found"))?;
                Ok(block.header.number)
            }
        }
    }

    /// Scan a single chunk with retry and exponential backoff.
    async fn scan_chunk_with_retry<E: SolEvent>(
        &self,
        address: Address,
        sender: Option<Address>,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<(E, Log)>> {
        // 100ms, 200ms, 400ms, 800ms, 1.6s between attempts (5 retries)
        let retry_strategy = ExponentialBackoff::from_millis(2).factor(50).take(5);

        Retry::spawn(retry_strategy, || async {
            self.scan_chunk::<E>(address, sender, from_block, to_block)
                .await
                .map_err(|e| {
                    warn!(
                        from = from_block,
                        to = to_block,
                        error = %e,
                        "Chunk scan failed, will retry"
                    );
                    e
                })
        })
        .await
    }

    /// Scan a single chunk of blocks (no retry logic).
    async fn scan_chunk<E: SolEvent>(
        &self,
        address: Address,
        sender: Option<Address>,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<(E, Log)>> {
        let filter = event_filter::<E>(address, sender).from_block(from_block).to_block(to_block);
        let events = Event::<_, E>::new(&self.provider, filter).query().await?;

        debug!(from = from_block, to = to_block, count = events.len(), "Scanned chunk");

        Ok(events)
    }
}

/// Log filter for `E` emitted by `address`, without a block range.
pub fn event_filter<E: SolEvent>(address: Address, sender: Option<Address>) -> Filter {
    let filter = Filter::new().address(address).event_signature(E::SIGNATURE_HASH);
    match sender {
        Some(sender) => filter.topic3(sender.into_word()),
        None => filter,
    }
}
