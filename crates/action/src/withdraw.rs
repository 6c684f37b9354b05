use crate::{
    allowance::{ensure_allowance, has_balance},
    find_event,
    units::format_usdc,
    ActionResult,
};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use binding::L2UsdcBridge::{self, WithdrawalInitiated};
use tracing::info;

/// Configuration for a withdrawal action.
///
/// The L2 bridge has no `withdrawTo`: funds are released to the sender on L1.
#[derive(Debug, Clone)]
pub struct WithdrawConfig {
    /// `L2UsdcBridgeProxy` predeploy address
    pub bridge: Address,
    /// USDC on L2
    pub l2_token: Address,
    /// Account burning its L2 USDC
    pub from: Address,
    /// Amount in USDC base units
    pub amount: U256,
    /// Gas for relaying the withdrawal on L1
    pub min_gas_limit: u32,
    pub extra_data: Bytes,
}

/// Burn L2 USDC through the L2 bridge for release on L1.
///
/// Proving and finalizing the withdrawal on L1 is left to the rollup's
/// withdrawal tooling.
pub struct WithdrawAction<P> {
    provider: P,
    config: WithdrawConfig,
    tx_hash: Option<TxHash>,
}

impl<P> WithdrawAction<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, config: WithdrawConfig) -> Self {
        Self { provider, config, tx_hash: None }
    }

    pub const fn tx_hash(&self) -> Option<TxHash> {
        self.tx_hash
    }

    fn validate_config(&self) -> eyre::Result<()> {
        if self.config.bridge == Address::ZERO {
            eyre::bail!("Bridge address is zero");
        }

        if self.config.l2_token == Address::ZERO {
            eyre::bail!("Token address is zero");
        }

        if self.config.from == Address::ZERO {
            eyre::bail!("Sender address is zero");
        }

        if self.config.amount == U256::ZERO {
            eyre::bail!("Withdrawal amount is zero");
        }

        Ok(())
    }

    fn matches(&self, event: &WithdrawalInitiated) -> bool {
        event.l2Token == self.config.l2_token
            && event.from == self.config.from
            && event.to == self.config.from
            && event.amount == self.config.amount
    }
}

impl<P> crate::Action for WithdrawAction<P>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        if self.validate_config().is_err() {
            return Ok(false);
        }
        has_balance(&self.provider, self.config.l2_token, self.config.from, self.config.amount).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        Ok(self.tx_hash.is_some())
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        self.validate_config()?;

        // the bridge pulls the tokens before burning them
        ensure_allowance(
            &self.provider,
            self.config.l2_token,
            self.config.from,
            self.config.bridge,
            self.config.amount,
        )
        .await?;

        let contract = L2UsdcBridge::new(self.config.bridge, &self.provider);
        let receipt = contract
            .withdraw(
                self.config.l2_token,
                self.config.amount,
                self.config.min_gas_limit,
                self.config.extra_data.clone(),
            )
            .from(self.config.from)
            .send()
            .await?
            .get_receipt()
            .await?;
        let result = ActionResult::from_receipt(&receipt)?;

        match find_event::<WithdrawalInitiated>(&receipt) {
            Some(event) if self.matches(&event) => {}
            _ => eyre::bail!("No matching WithdrawalInitiated in {}", result.tx_hash),
        }

        info!(tx_hash = %result.tx_hash, amount = %format_usdc(self.config.amount), "Withdrawal initiated");
        self.tx_hash = Some(result.tx_hash);

        Ok(result)
    }

    fn description(&self) -> String {
        format!("Withdraw {} USDC from {} to L1", format_usdc(self.config.amount), self.config.from)
    }
}
