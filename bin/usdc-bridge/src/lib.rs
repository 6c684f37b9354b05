pub mod config;

use action::{
    deposit::{DepositAction, DepositConfig},
    proxy::{
        ChangeOwner, ChangeOwnerAction, SetAddressAction, SetL1BridgeAddresses,
        SetL2BridgeAddresses, Upgrade, UpgradeAction,
    },
    units::format_usdc,
    withdraw::{WithdrawAction, WithdrawConfig},
    Action, ActionResult,
};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use ::config::{Layer, NetworkConfig};
use events::{total_amount, watch_transfers, BridgeTransfer, InFlightTracker};
use futures::Stream;
use serde::Serialize;
use state::{
    check::{ExpectedL1Wiring, ExpectedL2Wiring},
    verify_l1_bridge, verify_l2_bridge, verify_proxy, BridgeStateReader, CheckError,
    L1BridgeState, L2BridgeState, ProxyState,
};
use tracing::{info, warn};

/// On-chain state of both bridges and their proxies.
///
/// The L1 side is absent when no L1 bridge address is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeReport {
    pub l1_bridge: Option<L1BridgeState>,
    pub l1_proxy: Option<ProxyState>,
    pub l2_bridge: L2BridgeState,
    pub l2_proxy: ProxyState,
}

pub async fn inspect<P1, P2>(
    l1_provider: P1,
    l2_provider: P2,
    network: &NetworkConfig,
) -> eyre::Result<BridgeReport>
where
    P1: Provider + Clone,
    P2: Provider + Clone,
{
    let l2 = BridgeStateReader::new(l2_provider);
    let l2_bridge = l2.l2_bridge(network.l2.bridge).await?;
    let l2_proxy = l2.proxy(network.l2.bridge).await?;

    let (l1_bridge, l1_proxy) = if network.l1.bridge.is_zero() {
        warn!("No L1 bridge configured, skipping L1 state");
        (None, None)
    } else {
        let l1 = BridgeStateReader::new(l1_provider);
        (Some(l1.l1_bridge(network.l1.bridge).await?), Some(l1.proxy(network.l1.bridge).await?))
    };

    Ok(BridgeReport { l1_bridge, l1_proxy, l2_bridge, l2_proxy })
}

/// Outcome of a single wiring check.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<(), CheckError>,
}

/// Run every applicable wiring check against `report`.
pub fn run_checks(report: &BridgeReport, network: &NetworkConfig) -> Vec<CheckOutcome> {
    let mut outcomes = vec![
        CheckOutcome { name: "l2 proxy", result: verify_proxy(&report.l2_proxy) },
        CheckOutcome {
            name: "l2 bridge",
            result: verify_l2_bridge(&report.l2_bridge, &ExpectedL2Wiring::from(network)),
        },
    ];

    if let Some(proxy) = &report.l1_proxy {
        outcomes.push(CheckOutcome { name: "l1 proxy", result: verify_proxy(proxy) });
    }
    if let Some(bridge) = &report.l1_bridge {
        outcomes.push(CheckOutcome {
            name: "l1 bridge",
            result: verify_l1_bridge(bridge, &ExpectedL1Wiring::from(network)),
        });
    }

    outcomes
}

/// Run `action` unless it already completed.
///
/// Returns `None` when there was nothing to do.
pub async fn run_action<A: Action>(action: &mut A) -> eyre::Result<Option<ActionResult>> {
    let description = action.description();

    if action.is_completed().await? {
        info!("Already done: {description}");
        return Ok(None);
    }
    if !action.is_ready().await? {
        eyre::bail!("Preconditions not met: {description}");
    }

    info!("Executing: {description}");
    let result = action.execute().await?;
    info!(
        tx_hash = %result.tx_hash,
        block_number = ?result.block_number,
        gas_used = ?result.gas_used,
        "Transaction confirmed"
    );

    Ok(Some(result))
}

/// Deposit `amount` of L1 USDC from `from` to `to` on L2.
pub async fn deposit<P>(
    l1_provider: P,
    network: &NetworkConfig,
    from: Address,
    to: Option<Address>,
    amount: U256,
    min_gas_limit: u32,
) -> eyre::Result<Option<ActionResult>>
where
    P: Provider + Clone,
{
    network.validate()?;

    let config = DepositConfig {
        bridge: network.l1.bridge,
        l1_token: network.l1.usdc,
        l2_token: network.l2.usdc,
        from,
        to: to.unwrap_or(from),
        amount,
        min_gas_limit,
        extra_data: Bytes::new(),
    };

    run_action(&mut DepositAction::new(l1_provider, config)).await
}

/// Withdraw `amount` of L2 USDC back to `from` on L1.
pub async fn withdraw<P>(
    l2_provider: P,
    network: &NetworkConfig,
    from: Address,
    amount: U256,
    min_gas_limit: u32,
) -> eyre::Result<Option<ActionResult>>
where
    P: Provider + Clone,
{
    let config = WithdrawConfig {
        bridge: network.l2.bridge,
        l2_token: network.l2.usdc,
        from,
        amount,
        min_gas_limit,
        extra_data: Bytes::new(),
    };

    run_action(&mut WithdrawAction::new(l2_provider, config)).await
}

/// Transfers still waiting for their finalization.
#[derive(Debug, Clone, Serialize)]
pub struct InFlightReport {
    pub deposits: Vec<BridgeTransfer>,
    pub withdrawals: Vec<BridgeTransfer>,
}

impl InFlightReport {
    pub fn log_summary(&self) {
        info!(
            count = self.deposits.len(),
            amount = %format_usdc(total_amount(&self.deposits)),
            "In-flight deposits"
        );
        info!(
            count = self.withdrawals.len(),
            amount = %format_usdc(total_amount(&self.withdrawals)),
            "In-flight withdrawals"
        );
    }
}

pub async fn inflight<P1, P2>(
    l1_provider: P1,
    l2_provider: P2,
    network: &NetworkConfig,
    sender: Option<Address>,
    lookback_secs: u64,
) -> eyre::Result<InFlightReport>
where
    P1: Provider + Clone,
    P2: Provider + Clone,
{
    network.validate()?;

    let tracker = InFlightTracker::new(l1_provider, l2_provider, network);
    let deposits = tracker.inflight_deposits(sender, lookback_secs).await?;
    let withdrawals = tracker.inflight_withdrawals(sender, lookback_secs).await?;

    Ok(InFlightReport { deposits, withdrawals })
}

/// New deposits on L1 and new withdrawals on L2, as they are emitted,
/// optionally only those sent by `sender`.
pub async fn follow<P1, P2>(
    l1_provider: P1,
    l2_provider: P2,
    network: &NetworkConfig,
    sender: Option<Address>,
) -> eyre::Result<impl Stream<Item = eyre::Result<BridgeTransfer>>>
where
    P1: Provider + Clone,
    P2: Provider + Clone,
{
    network.validate()?;

    let deposits = watch_transfers::<_, binding::L1UsdcBridge::ERC20DepositInitiated>(
        l1_provider,
        network.l1.bridge,
        sender,
    )
    .await?;
    let withdrawals = watch_transfers::<_, binding::L2UsdcBridge::WithdrawalInitiated>(
        l2_provider,
        network.l2.bridge,
        sender,
    )
    .await?;

    Ok(futures::stream::select(deposits, withdrawals))
}

pub async fn upgrade<P>(
    provider: P,
    network: &NetworkConfig,
    layer: Layer,
    admin: Address,
    new_implementation: Address,
) -> eyre::Result<Option<ActionResult>>
where
    P: Provider + Clone,
{
    let upgrade = Upgrade {
        layer,
        proxy: bridge_proxy(network, layer)?,
        admin,
        new_implementation,
        call_data: None,
    };

    run_action(&mut UpgradeAction::new(provider, upgrade)).await
}

pub async fn change_owner<P>(
    provider: P,
    network: &NetworkConfig,
    layer: Layer,
    admin: Address,
    new_owner: Address,
) -> eyre::Result<Option<ActionResult>>
where
    P: Provider + Clone,
{
    let change = ChangeOwner { layer, proxy: bridge_proxy(network, layer)?, admin, new_owner };

    run_action(&mut ChangeOwnerAction::new(provider, change)).await
}

/// Point the bridge of `layer` at its counterpart and tokens.
///
/// The L1 messenger is not part of the network config and must be given;
/// on L2 it defaults to the configured messenger predeploy.
pub async fn wire<P>(
    provider: P,
    network: &NetworkConfig,
    layer: Layer,
    admin: Address,
    messenger: Option<Address>,
) -> eyre::Result<Option<ActionResult>>
where
    P: Provider + Clone,
{
    network.validate()?;

    match layer {
        Layer::L1 => {
            let messenger = messenger
                .ok_or_else(|| eyre::eyre!("The L1 cross domain messenger must be given"))?;
            let config = SetL1BridgeAddresses {
                proxy: network.l1.bridge,
                admin,
                messenger,
                other_bridge: network.l2.bridge,
                l1_usdc: network.l1.usdc,
                l2_usdc: network.l2.usdc,
            };
            run_action(&mut SetAddressAction::new(provider, config)).await
        }
        Layer::L2 => {
            let config = SetL2BridgeAddresses {
                proxy: network.l2.bridge,
                admin,
                messenger: messenger.unwrap_or(network.l2.messenger),
                other_bridge: network.l1.bridge,
                l1_usdc: network.l1.usdc,
                l2_usdc: network.l2.usdc,
                master_minter: network.l2.master_minter,
            };
            run_action(&mut SetAddressAction::new(provider, config)).await
        }
    }
}

fn bridge_proxy(network: &NetworkConfig, layer: Layer) -> eyre::Result<Address> {
    let proxy = network.bridge(layer);
    if proxy.is_zero() {
        eyre::bail!("No {layer} bridge address configured");
    }
    Ok(proxy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::NetworkConfigBuilder;
    use alloy_primitives::address;
    use binding::predeploys;

    const L1_USDC: Address = address!("0x1111111111111111111111111111111111111111");
    const L1_BRIDGE: Address = address!("0x2222222222222222222222222222222222222222");
    const L2_IMPL: Address = address!("0x3333333333333333333333333333333333333333");

    fn network() -> NetworkConfig {
        NetworkConfigBuilder::devnet().l1_usdc(L1_USDC).l1_bridge(L1_BRIDGE).build()
    }

    fn healthy_report() -> BridgeReport {
        let proxy = ProxyState {
            implementation: L2_IMPL,
            owner: address!("0x4444444444444444444444444444444444444444"),
            implementation_has_code: true,
        };
        BridgeReport {
            l1_bridge: Some(L1BridgeState {
                messenger: address!("0x5555555555555555555555555555555555555555"),
                other_bridge: predeploys::L2_USDC_BRIDGE,
                l1_usdc: L1_USDC,
                l2_usdc: predeploys::FIAT_TOKEN_V2_2,
                l2_token_bridge: predeploys::L2_USDC_BRIDGE,
            }),
            l1_proxy: Some(proxy.clone()),
            l2_bridge: L2BridgeState {
                messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
                other_bridge: L1_BRIDGE,
                l1_usdc: L1_USDC,
                l2_usdc: predeploys::FIAT_TOKEN_V2_2,
                l2_usdc_master_minter: predeploys::MASTER_MINTER,
            },
            l2_proxy: proxy,
        }
    }

    #[test]
    fn test_healthy_report_passes_all_checks() {
        let outcomes = run_checks(&healthy_report(), &network());
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn test_l1_checks_skipped_without_l1_bridge() {
        let report = BridgeReport { l1_bridge: None, l1_proxy: None, ..healthy_report() };
        let names: Vec<_> = run_checks(&report, &network()).iter().map(|o| o.name).collect();
        assert_eq!(names, ["l2 proxy", "l2 bridge"]);
    }

    #[test]
    fn test_failures_are_reported_per_check() {
        let mut report = healthy_report();
        report.l2_bridge.l2_usdc_master_minter = Address::ZERO;
        report.l2_proxy.implementation_has_code = false;

        let outcomes = run_checks(&report, &network());
        assert_eq!(outcomes[0].result, Err(CheckError::ImplementationHasNoCode(L2_IMPL)));
        assert_eq!(
            outcomes[1].result,
            Err(CheckError::MasterMinterMismatch {
                expected: predeploys::MASTER_MINTER,
                actual: Address::ZERO,
            })
        );
        assert!(outcomes[2].result.is_ok());
        assert!(outcomes[3].result.is_ok());
    }

    #[test]
    fn test_bridge_proxy_requires_address() {
        let devnet = NetworkConfig::devnet();
        assert!(bridge_proxy(&devnet, Layer::L1).is_err());
        assert_eq!(bridge_proxy(&devnet, Layer::L2).unwrap(), predeploys::L2_USDC_BRIDGE);
    }
}
