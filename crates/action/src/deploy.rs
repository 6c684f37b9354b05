//! Deployment of a bridge implementation behind a fresh ERC-1967 proxy.
//!
//! The proxy is created without initialization calldata; wire it afterwards
//! with `setAddress` (see [`crate::proxy`]).

use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use binding::{L1UsdcBridge, L1UsdcBridgeProxy, L2UsdcBridge, L2UsdcBridgeProxy};
use config::Layer;
use tracing::info;

/// Addresses of a deployed bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub implementation: Address,
    pub proxy: Address,
}

pub async fn deploy_l1_bridge<P>(provider: P, owner: Address) -> eyre::Result<Deployment>
where
    P: Provider + Clone,
{
    ensure_owner(owner)?;

    let implementation = *L1UsdcBridge::deploy(provider.clone()).await?.address();
    info!(%implementation, "Deployed L1UsdcBridge");

    let proxy = *L1UsdcBridgeProxy::deploy(provider, implementation, owner, Bytes::new())
        .await?
        .address();
    info!(%proxy, %owner, "Deployed L1UsdcBridgeProxy");

    Ok(Deployment { implementation, proxy })
}

pub async fn deploy_l2_bridge<P>(provider: P, owner: Address) -> eyre::Result<Deployment>
where
    P: Provider + Clone,
{
    ensure_owner(owner)?;

    let implementation = *L2UsdcBridge::deploy(provider.clone()).await?.address();
    info!(%implementation, "Deployed L2UsdcBridge");

    let proxy = *L2UsdcBridgeProxy::deploy(provider, implementation, owner, Bytes::new())
        .await?
        .address();
    info!(%proxy, %owner, "Deployed L2UsdcBridgeProxy");

    Ok(Deployment { implementation, proxy })
}

/// Deploy the bridge of `layer`.
pub async fn deploy_bridge<P>(provider: P, layer: Layer, owner: Address) -> eyre::Result<Deployment>
where
    P: Provider + Clone,
{
    match layer {
        Layer::L1 => deploy_l1_bridge(provider, owner).await,
        Layer::L2 => deploy_l2_bridge(provider, owner).await,
    }
}

/// The proxy constructor reverts with `ERC1967InvalidAdmin` on a zero owner.
fn ensure_owner(owner: Address) -> eyre::Result<()> {
    if owner.is_zero() {
        eyre::bail!("Proxy owner address is zero");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockProvider;

    #[tokio::test]
    async fn test_zero_owner_rejected_before_sending() {
        let err = deploy_bridge(MockProvider {}, Layer::L1, Address::ZERO).await.unwrap_err();
        assert!(err.to_string().contains("owner"));

        let err = deploy_l2_bridge(MockProvider {}, Address::ZERO).await.unwrap_err();
        assert!(err.to_string().contains("owner"));
    }
}
