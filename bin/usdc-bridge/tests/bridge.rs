//! Integration tests that send transactions.
//!
//! Need a funded key (PRIVATE_KEY or tests/test-config.local.toml) and the
//! bridges deployed and wired on the devnet.

use crate::setup::{load_network_config, load_test_config, setup_provider, setup_wallet_provider};
use action::{deploy::deploy_bridge, units::parse_usdc, DEFAULT_MIN_GAS_LIMIT};
use alloy_provider::Provider;
use config::Layer;
use state::BridgeStateReader;


#[tokio::test]
#[ignore = "requires a running devnet and a funded key"]
async fn test_deploy_l2_bridge_behind_proxy() {
    let config = load_test_config();
    let (provider, owner) = setup_wallet_provider(&config.l2_rpc_url);

    let deployment = deploy_bridge(provider.clone(), Layer::L2, owner).await.unwrap();

    let proxy = BridgeStateReader::new(provider.clone()).proxy(deployment.proxy).await.unwrap();
    assert_eq!(proxy.implementation, deployment.implementation);
    assert_eq!(proxy.owner, owner);
    assert!(proxy.implementation_has_code);

    let code = provider.get_code_at(deployment.implementation).await.unwrap();
    assert!(!code.is_empty());
}

#[tokio::test]
#[ignore = "requires a running devnet and a funded key"]
async fn test_deposit_to_self() {
    let config = load_test_config();
    let network = load_network_config();
    let (provider, from) = setup_wallet_provider(&config.l1_rpc_url);

    let result = usdc_bridge::deposit(
        provider,
        &network,
        from,
        None,
        parse_usdc("0.01").unwrap(),
        DEFAULT_MIN_GAS_LIMIT,
    )
    .await
    .unwrap()
    .expect("a fresh deposit always executes");

    println!("Deposit tx: {}", result.tx_hash);
    assert!(result.block_number.is_some());
}

#[tokio::test]
#[ignore = "requires a running devnet and a funded key"]
async fn test_withdraw_to_self() {
    let config = load_test_config();
    let network = load_network_config();
    let (provider, from) = setup_wallet_provider(&config.l2_rpc_url);

    let result = usdc_bridge::withdraw(
        provider,
        &network,
        from,
        parse_usdc("0.01").unwrap(),
        DEFAULT_MIN_GAS_LIMIT,
    )
    .await
    .unwrap()
    .expect("a fresh withdrawal always executes");

    println!("Withdrawal tx: {}", result.tx_hash);

    let l2_provider = setup_provider(&config.l2_rpc_url).await;
    let receipt = l2_provider.get_transaction_receipt(result.tx_hash).await.unwrap();
    assert!(receipt.is_some());
}
