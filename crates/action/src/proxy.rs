//! Admin operations on the bridge proxies.
//!
//! All of them must be sent by the proxy owner. Completion is detected by
//! reading the proxy or bridge state back.

use crate::ActionResult;
use alloy_primitives::{Address, Bytes};
use alloy_provider::{network::Ethereum, PendingTransactionBuilder, Provider};
use binding::{L1UsdcBridgeProxy, L2UsdcBridgeProxy};
use config::Layer;
use state::BridgeStateReader;
use tracing::{debug, info};

/// Whether `admin` owns `proxy`.
async fn is_owner<P>(provider: &P, proxy: Address, admin: Address) -> eyre::Result<bool>
where
    P: Provider + Clone,
{
    let owner = BridgeStateReader::new(provider.clone()).proxy(proxy).await?.owner;
    if owner != admin {
        debug!(%proxy, %owner, %admin, "Sender is not the proxy owner");
    }
    Ok(owner == admin)
}

async fn confirm(pending: PendingTransactionBuilder<Ethereum>) -> eyre::Result<ActionResult> {
    let receipt = pending.get_receipt().await?;
    ActionResult::from_receipt(&receipt)
}

/// Point a bridge proxy at a new implementation, optionally calling into it.
#[derive(Debug, Clone)]
pub struct Upgrade {
    pub layer: Layer,
    pub proxy: Address,
    /// Proxy owner sending the upgrade
    pub admin: Address,
    pub new_implementation: Address,
    /// Calldata for `upgradeToAndCall`; `upgradeTo` when `None`
    pub call_data: Option<Bytes>,
}

pub struct UpgradeAction<P> {
    provider: P,
    config: Upgrade,
}

impl<P> UpgradeAction<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, config: Upgrade) -> Self {
        Self { provider, config }
    }
}

impl<P> crate::Action for UpgradeAction<P>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        if self.config.proxy.is_zero() || self.config.new_implementation.is_zero() {
            return Ok(false);
        }

        let code = self.provider.get_code_at(self.config.new_implementation).await?;
        if code.is_empty() {
            debug!(implementation = %self.config.new_implementation, "No code at new implementation");
            return Ok(false);
        }

        is_owner(&self.provider, self.config.proxy, self.config.admin).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        let state = BridgeStateReader::new(self.provider.clone()).proxy(self.config.proxy).await?;
        Ok(state.implementation == self.config.new_implementation)
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        let Upgrade { layer, proxy, admin, new_implementation, .. } = self.config;

        let pending = match (layer, self.config.call_data.clone()) {
            (Layer::L1, None) => {
                let contract = L1UsdcBridgeProxy::new(proxy, &self.provider);
                contract.upgradeTo(new_implementation).from(admin).send().await?
            }
            (Layer::L1, Some(data)) => {
                let contract = L1UsdcBridgeProxy::new(proxy, &self.provider);
                contract.upgradeToAndCall(new_implementation, data).from(admin).send().await?
            }
            (Layer::L2, None) => {
                let contract = L2UsdcBridgeProxy::new(proxy, &self.provider);
                contract.upgradeTo(new_implementation).from(admin).send().await?
            }
            (Layer::L2, Some(data)) => {
                let contract = L2UsdcBridgeProxy::new(proxy, &self.provider);
                contract.upgradeToAndCall(new_implementation, data).from(admin).send().await?
            }
        };

        let result = confirm(pending).await?;
        info!(%layer, %proxy, implementation = %new_implementation, tx_hash = %result.tx_hash, "Proxy upgraded");
        Ok(result)
    }

    fn description(&self) -> String {
        format!(
            "Upgrade {} bridge proxy {} to {}",
            self.config.layer, self.config.proxy, self.config.new_implementation
        )
    }
}

/// Hand a bridge proxy over to a new owner.
#[derive(Debug, Clone)]
pub struct ChangeOwner {
    pub layer: Layer,
    pub proxy: Address,
    pub admin: Address,
    pub new_owner: Address,
}

pub struct ChangeOwnerAction<P> {
    provider: P,
    config: ChangeOwner,
}

impl<P> ChangeOwnerAction<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, config: ChangeOwner) -> Self {
        Self { provider, config }
    }
}

impl<P> crate::Action for ChangeOwnerAction<P>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        // ERC1967InvalidAdmin
        if self.config.new_owner.is_zero() {
            return Ok(false);
        }
        is_owner(&self.provider, self.config.proxy, self.config.admin).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        let state = BridgeStateReader::new(self.provider.clone()).proxy(self.config.proxy).await?;
        Ok(state.owner == self.config.new_owner)
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        let ChangeOwner { layer, proxy, admin, new_owner } = self.config;

        let pending = match layer {
            Layer::L1 => {
                L1UsdcBridgeProxy::new(proxy, &self.provider)
                    .proxyChangeOwner(new_owner)
                    .from(admin)
                    .send()
                    .await?
            }
            Layer::L2 => {
                L2UsdcBridgeProxy::new(proxy, &self.provider)
                    .proxyChangeOwner(new_owner)
                    .from(admin)
                    .send()
                    .await?
            }
        };

        let result = confirm(pending).await?;
        info!(%layer, %proxy, %new_owner, tx_hash = %result.tx_hash, "Proxy owner changed");
        Ok(result)
    }

    fn description(&self) -> String {
        format!(
            "Change owner of {} bridge proxy {} to {}",
            self.config.layer, self.config.proxy, self.config.new_owner
        )
    }
}

/// Wiring of the L1 bridge behind its proxy.
#[derive(Debug, Clone)]
pub struct SetL1BridgeAddresses {
    pub proxy: Address,
    pub admin: Address,
    pub messenger: Address,
    /// L2 bridge proxy
    pub other_bridge: Address,
    pub l1_usdc: Address,
    pub l2_usdc: Address,
}

impl SetL1BridgeAddresses {
    fn addresses(&self) -> [(&'static str, Address); 4] {
        [
            ("messenger", self.messenger),
            ("otherBridge", self.other_bridge),
            ("l1Usdc", self.l1_usdc),
            ("l2Usdc", self.l2_usdc),
        ]
    }
}

/// Wiring of the L2 bridge behind its proxy.
#[derive(Debug, Clone)]
pub struct SetL2BridgeAddresses {
    pub proxy: Address,
    pub admin: Address,
    pub messenger: Address,
    /// L1 bridge proxy
    pub other_bridge: Address,
    pub l1_usdc: Address,
    pub l2_usdc: Address,
    pub master_minter: Address,
}

impl SetL2BridgeAddresses {
    fn addresses(&self) -> [(&'static str, Address); 5] {
        [
            ("messenger", self.messenger),
            ("otherBridge", self.other_bridge),
            ("l1Usdc", self.l1_usdc),
            ("l2Usdc", self.l2_usdc),
            ("l2UsdcMasterMinter", self.master_minter),
        ]
    }
}

fn ensure_all_set(addresses: &[(&'static str, Address)]) -> eyre::Result<()> {
    if let Some((name, _)) = addresses.iter().find(|(_, address)| address.is_zero()) {
        eyre::bail!("{name} address is zero");
    }
    Ok(())
}

/// `setAddress` on one of the bridge proxies.
pub struct SetAddressAction<P, C> {
    provider: P,
    config: C,
}

impl<P, C> SetAddressAction<P, C> {
    pub const fn new(provider: P, config: C) -> Self {
        Self { provider, config }
    }
}

impl<P> crate::Action for SetAddressAction<P, SetL1BridgeAddresses>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        if ensure_all_set(&self.config.addresses()).is_err() {
            return Ok(false);
        }
        is_owner(&self.provider, self.config.proxy, self.config.admin).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        let state = BridgeStateReader::new(self.provider.clone()).l1_bridge(self.config.proxy).await?;
        Ok(state.messenger == self.config.messenger
            && state.other_bridge == self.config.other_bridge
            && state.l1_usdc == self.config.l1_usdc
            && state.l2_usdc == self.config.l2_usdc)
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        ensure_all_set(&self.config.addresses())?;

        let c = &self.config;
        let pending = L1UsdcBridgeProxy::new(c.proxy, &self.provider)
            .setAddress(c.messenger, c.other_bridge, c.l1_usdc, c.l2_usdc)
            .from(c.admin)
            .send()
            .await?;

        let result = confirm(pending).await?;
        info!(proxy = %c.proxy, tx_hash = %result.tx_hash, "L1 bridge addresses set");
        Ok(result)
    }

    fn description(&self) -> String {
        format!("Set addresses of L1 bridge proxy {}", self.config.proxy)
    }
}

impl<P> crate::Action for SetAddressAction<P, SetL2BridgeAddresses>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        if ensure_all_set(&self.config.addresses()).is_err() {
            return Ok(false);
        }
        is_owner(&self.provider, self.config.proxy, self.config.admin).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        let state = BridgeStateReader::new(self.provider.clone()).l2_bridge(self.config.proxy).await?;
        Ok(state.messenger == self.config.messenger
            && state.other_bridge == self.config.other_bridge
            && state.l1_usdc == self.config.l1_usdc
            && state.l2_usdc == self.config.l2_usdc
            && state.l2_usdc_master_minter == self.config.master_minter)
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        ensure_all_set(&self.config.addresses())?;

        let c = &self.config;
        let pending = L2UsdcBridgeProxy::new(c.proxy, &self.provider)
            .setAddress(c.messenger, c.other_bridge, c.l1_usdc, c.l2_usdc, c.master_minter)
            .from(c.admin)
            .send()
            .await?;

        let result = confirm(pending).await?;
        info!(proxy = %c.proxy, tx_hash = %result.tx_hash, "L2 bridge addresses set");
        Ok(result)
    }

    fn description(&self) -> String {
        format!("Set addresses of L2 bridge proxy {}", self.config.proxy)
    }
}
