//! Streaming of new events by log polling.

use crate::{
    scanner::event_filter,
    types::{BridgeEvent, BridgeTransfer},
};
use alloy_contract::Event;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::{Filter, Log};
use alloy_sol_types::SolEvent;
use futures::{Stream, StreamExt};
use tracing::debug;

/// Filter for new `E` logs of `address`, narrowed to `sender` when given.
fn watch_filter<E: SolEvent>(address: Address, sender: Option<Address>) -> Filter {
    event_filter::<E>(address, sender)
}

/// Stream every new `E` emitted by `address`, optionally only those whose
/// indexed `from` is `sender`.
///
/// The provider polls for new logs in the background; dropping the stream
/// stops polling.
pub async fn watch<P, E>(
    provider: P,
    address: Address,
    sender: Option<Address>,
) -> eyre::Result<impl Stream<Item = eyre::Result<(E, Log)>>>
where
    P: Provider + Clone,
    E: SolEvent + 'static,
{
    debug!(event = E::SIGNATURE, %address, ?sender, "Watching for events");

    let poller = Event::<_, E>::new(provider, watch_filter::<E>(address, sender)).watch().await?;
    Ok(poller.into_stream().map(|item| item.map_err(eyre::Report::from)))
}

/// Stream new bridge events as transfers.
pub async fn watch_transfers<P, E>(
    provider: P,
    bridge: Address,
    sender: Option<Address>,
) -> eyre::Result<impl Stream<Item = eyre::Result<BridgeTransfer>>>
where
    P: Provider + Clone,
    E: BridgeEvent + 'static,
{
    let stream = watch::<P, E>(provider, bridge, sender).await?;
    Ok(stream.map(|item| item.map(|(event, log)| BridgeTransfer::from_event(event, &log))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use binding::{L1UsdcBridge::ERC20DepositInitiated, L2UsdcBridge::WithdrawalInitiated};

    #[test]
    fn test_watch_filter_narrows_to_sender() {
        let bridge = Address::repeat_byte(0xbb);
        let sender = Address::repeat_byte(0x33);

        let filter = watch_filter::<ERC20DepositInitiated>(bridge, Some(sender));
        assert!(filter.address.matches(&bridge));
        assert!(filter.topics[0].matches(&ERC20DepositInitiated::SIGNATURE_HASH));
        assert!(filter.topics[3].matches(&sender.into_word()));
        assert!(!filter.topics[3].matches(&Address::repeat_byte(0x44).into_word()));
    }

    #[test]
    fn test_watch_filter_without_sender() {
        let filter = watch_filter::<WithdrawalInitiated>(Address::repeat_byte(0xbb), None);
        assert!(filter.topics[3].is_empty());
    }
}
