use crate::{Balance, BalanceQuery, Monitor};
use alloy_primitives::Address;
use alloy_provider::Provider;
use binding::{token::IERC20, L1UsdcBridge};
use tracing::debug;

/// [`Monitor`] backed by plain `eth_call` / `eth_getBalance` requests.
pub struct BalanceMonitor<P> {
    provider: P,
}

impl<P> BalanceMonitor<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Run several queries in order, stopping at the first failure.
    pub async fn query_all(&self, queries: Vec<BalanceQuery>) -> eyre::Result<Vec<Balance>> {
        let mut balances = Vec::with_capacity(queries.len());
        for query in queries {
            balances.push(self.query_balance(query).await?);
        }
        Ok(balances)
    }
}

impl<P> Monitor for BalanceMonitor<P>
where
    P: Provider + Clone,
{
    async fn query_balance(&self, query: BalanceQuery) -> eyre::Result<Balance> {
        debug!(?query, "Querying balance");

        let balance = match query {
            BalanceQuery::Erc20Balance { token, holder } => Balance {
                holder,
                asset: token,
                amount: IERC20::new(token, &self.provider).balanceOf(holder).call().await?,
            },
            BalanceQuery::NativeBalance { address } => Balance {
                holder: address,
                asset: Address::ZERO,
                amount: self.provider.get_balance(address).await?,
            },
            // Locked USDC is accounted per token pair, not by the token's balanceOf
            BalanceQuery::BridgeDeposits { bridge, l1_token, l2_token } => Balance {
                holder: bridge,
                asset: l1_token,
                amount: L1UsdcBridge::new(bridge, &self.provider)
                    .deposits(l1_token, l2_token)
                    .call()
                    .await?,
            },
        };

        debug!(holder = %balance.holder, asset = %balance.asset, amount = %balance.amount, "Balance");
        Ok(balance)
    }
}
