//! Integration tests for bridge event scanning and in-flight tracking.

use crate::setup::{load_network_config, load_test_config, setup_provider};
use events::{EventScanner, InFlightTracker, Stage};


#[tokio::test]
#[ignore = "requires a running devnet"]
async fn test_scan_withdrawals_across_chunks() {
    let config = load_test_config();
    let network = load_network_config();
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let scanner = EventScanner::new(l2_provider);
    let latest = scanner.latest_block().await.unwrap();
    // More than one chunk
    let from = latest.saturating_sub(20_000);

    let withdrawals = scanner
        .withdrawals_initiated(network.l2.bridge, None, from.into(), latest.into())
        .await
        .unwrap();

    println!("Found {} withdrawals in blocks {from}..={latest}", withdrawals.len());
    assert!(withdrawals.iter().all(|w| w.stage == Stage::Initiated));
    assert!(withdrawals.windows(2).all(|w| w[0].block_number <= w[1].block_number));
}

#[tokio::test]
#[ignore = "requires a running devnet"]
async fn test_scan_rejects_inverted_range() {
    let config = load_test_config();
    let network = load_network_config();
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let result = EventScanner::new(l2_provider)
        .deposits_finalized(network.l2.bridge, None, 10u64.into(), 5u64.into())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires a running devnet with the L1 bridge configured"]
async fn test_inflight_transfers() {
    let config = load_test_config();
    let network = load_network_config();
    let l1_provider = setup_provider(&config.l1_rpc_url).await;
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let tracker = InFlightTracker::new(l1_provider, l2_provider, &network);
    let deposits = tracker.inflight_deposits(None, 3_600).await.unwrap();
    let withdrawals = tracker.inflight_withdrawals(None, 3_600).await.unwrap();

    println!("{} deposits and {} withdrawals in flight", deposits.len(), withdrawals.len());
    assert!(deposits.iter().all(|d| d.l1_token == network.l1.usdc));
}
