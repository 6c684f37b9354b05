//! Integration tests for reading and checking the bridge wiring.
//!
//! Run against a devnet with the bridges deployed:
//! `cargo test -p usdc-bridge --test state -- --ignored`

use crate::setup::{load_network_config, load_test_config, setup_provider};
use action::units::format_usdc;
use binding::predeploys;
use state::{BalanceMonitor, BalanceQuery, BridgeStateReader};


#[tokio::test]
#[ignore = "requires a running devnet"]
async fn test_read_l2_bridge_state() {
    let config = load_test_config();
    let network = load_network_config();
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let reader = BridgeStateReader::new(l2_provider);
    let bridge = reader.l2_bridge(network.l2.bridge).await.unwrap();
    let proxy = reader.proxy(network.l2.bridge).await.unwrap();

    println!("L2 bridge: {bridge:?}");
    println!("L2 proxy: {proxy:?}");

    assert_eq!(bridge.messenger, predeploys::L2_CROSS_DOMAIN_MESSENGER);
    assert!(proxy.implementation_has_code);
}

#[tokio::test]
#[ignore = "requires a running devnet"]
async fn test_inspect_and_check() {
    let config = load_test_config();
    let network = load_network_config();
    let l1_provider = setup_provider(&config.l1_rpc_url).await;
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let report = usdc_bridge::inspect(l1_provider, l2_provider, &network).await.unwrap();
    assert_eq!(report.l1_bridge.is_some(), !network.l1.bridge.is_zero());

    for outcome in usdc_bridge::run_checks(&report, &network) {
        assert!(outcome.result.is_ok(), "{} failed: {:?}", outcome.name, outcome.result);
    }
}

#[tokio::test]
#[ignore = "requires a running devnet"]
async fn test_l2_bridge_balances() {
    let config = load_test_config();
    let network = load_network_config();
    let l2_provider = setup_provider(&config.l2_rpc_url).await;

    let monitor = BalanceMonitor::new(l2_provider);
    let balances = monitor
        .query_all(vec![
            BalanceQuery::Erc20Balance { token: network.l2.usdc, holder: network.l2.bridge },
            BalanceQuery::NativeBalance { address: network.l2.bridge },
        ])
        .await
        .unwrap();

    assert_eq!(balances.len(), 2);
    let balance = &balances[0];
    assert_eq!(balance.holder, network.l2.bridge);
    println!("L2 bridge holds {} USDC", format_usdc(balance.amount));
}
