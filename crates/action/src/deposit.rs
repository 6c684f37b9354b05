use crate::{
    allowance::{ensure_allowance, has_balance},
    find_event,
    units::format_usdc,
    ActionResult,
};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use binding::L1UsdcBridge::{self, ERC20DepositInitiated};
use tracing::info;

/// Configuration for a deposit action.
#[derive(Debug, Clone)]
pub struct DepositConfig {
    /// `L1UsdcBridgeProxy` address
    pub bridge: Address,
    /// USDC on L1
    pub l1_token: Address,
    /// USDC on L2 (`FiatTokenV2_2` predeploy)
    pub l2_token: Address,
    /// Depositor address (who initiates the deposit)
    pub from: Address,
    /// Recipient on L2
    pub to: Address,
    /// Amount in USDC base units
    pub amount: U256,
    /// Gas for relaying the deposit on L2
    pub min_gas_limit: u32,
    /// Opaque data forwarded to L2
    pub extra_data: Bytes,
}

/// Deposit L1 USDC into the L1 bridge for minting on L2.
pub struct DepositAction<P> {
    provider: P,
    config: DepositConfig,
    tx_hash: Option<TxHash>,
}

impl<P> DepositAction<P>
where
    P: Provider + Clone,
{
    /// Create a new deposit action.
    pub const fn new(provider: P, config: DepositConfig) -> Self {
        Self { provider, config, tx_hash: None }
    }

    /// Transaction that emitted the deposit, once executed.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        self.tx_hash
    }

    /// Validate the deposit configuration.
    fn validate_config(&self) -> eyre::Result<()> {
        if self.config.bridge == Address::ZERO {
            eyre::bail!("Bridge address is zero");
        }

        if self.config.l1_token == Address::ZERO || self.config.l2_token == Address::ZERO {
            eyre::bail!("Token address is zero");
        }

        if self.config.to == Address::ZERO {
            eyre::bail!("Recipient address is zero");
        }

        if self.config.amount == U256::ZERO {
            eyre::bail!("Deposit amount is zero");
        }

        Ok(())
    }

    /// Whether the event matches this deposit.
    fn matches(&self, event: &ERC20DepositInitiated) -> bool {
        event.l1Token == self.config.l1_token
            && event.l2Token == self.config.l2_token
            && event.from == self.config.from
            && event.to == self.config.to
            && event.amount == self.config.amount
    }
}

impl<P> crate::Action for DepositAction<P>
where
    P: Provider + Clone,
{
    async fn is_ready(&self) -> eyre::Result<bool> {
        if self.validate_config().is_err() {
            return Ok(false);
        }
        has_balance(&self.provider, self.config.l1_token, self.config.from, self.config.amount).await
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        Ok(self.tx_hash.is_some())
    }

    async fn execute(&mut self) -> eyre::Result<ActionResult> {
        // Validate before executing
        self.validate_config()?;

        ensure_allowance(
            &self.provider,
            self.config.l1_token,
            self.config.from,
            self.config.bridge,
            self.config.amount,
        )
        .await?;

        let contract = L1UsdcBridge::new(self.config.bridge, &self.provider);

        // depositERC20 credits the sender, depositERC20To anyone else
        let pending = if self.config.to == self.config.from {
            contract
                .depositERC20(
                    self.config.l1_token,
                    self.config.l2_token,
                    self.config.amount,
                    self.config.min_gas_limit,
                    self.config.extra_data.clone(),
                )
                .from(self.config.from)
                .send()
                .await?
        } else {
            contract
                .depositERC20To(
                    self.config.l1_token,
                    self.config.l2_token,
                    self.config.to,
                    self.config.amount,
                    self.config.min_gas_limit,
                    self.config.extra_data.clone(),
                )
                .from(self.config.from)
                .send()
                .await?
        };

        let receipt = pending.get_receipt().await?;
        let result = ActionResult::from_receipt(&receipt)?;

        match find_event::<ERC20DepositInitiated>(&receipt) {
            Some(event) if self.matches(&event) => {}
            _ => eyre::bail!("No matching ERC20DepositInitiated in {}", result.tx_hash),
        }

        info!(tx_hash = %result.tx_hash, amount = %format_usdc(self.config.amount), "Deposit initiated");
        self.tx_hash = Some(result.tx_hash);

        Ok(result)
    }

    fn description(&self) -> String {
        format!(
            "Deposit {} USDC from {} to {} on L2",
            format_usdc(self.config.amount),
            self.config.from,
            self.config.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::MockProvider, Action, DEFAULT_MIN_GAS_LIMIT};

    fn mock_config() -> DepositConfig {
        DepositConfig {
            bridge: Address::from([1u8; 20]),
            l1_token: Address::from([2u8; 20]),
            l2_token: Address::from([3u8; 20]),
            from: Address::from([4u8; 20]),
            to: Address::from([4u8; 20]),
            amount: U256::from(1_000_000),
            min_gas_limit: DEFAULT_MIN_GAS_LIMIT,
            extra_data: Bytes::new(),
        }
    }

    fn event_for(config: &DepositConfig) -> ERC20DepositInitiated {
        ERC20DepositInitiated {
            l1Token: config.l1_token,
            l2Token: config.l2_token,
            from: config.from,
            to: config.to,
            amount: config.amount,
            extraData: config.extra_data.clone(),
        }
    }

    #[test]
    fn test_validate_config_success() {
        let action = DepositAction::new(MockProvider {}, mock_config());
        assert!(action.validate_config().is_ok());
    }

    #[test]
    fn test_validate_config_zero_bridge() {
        let mut config = mock_config();
        config.bridge = Address::ZERO;
        let action = DepositAction::new(MockProvider {}, config);

        let result = action.validate_config();
        assert!(result.unwrap_err().to_string().contains("Bridge"));
    }

    #[test]
    fn test_validate_config_zero_token() {
        let mut config = mock_config();
        config.l2_token = Address::ZERO;
        let action = DepositAction::new(MockProvider {}, config);

        assert!(action.validate_config().unwrap_err().to_string().contains("Token"));
    }

    #[test]
    fn test_validate_config_zero_recipient() {
        let mut config = mock_config();
        config.to = Address::ZERO;
        let action = DepositAction::new(MockProvider {}, config);

        assert!(action.validate_config().unwrap_err().to_string().contains("Recipient"));
    }

    #[test]
    fn test_validate_config_zero_amount() {
        let mut config = mock_config();
        config.amount = U256::ZERO;
        let action = DepositAction::new(MockProvider {}, config);

        assert!(action.validate_config().unwrap_err().to_string().contains("amount is zero"));
    }

    #[tokio::test]
    async fn test_not_ready_without_touching_provider() {
        let mut config = mock_config();
        config.amount = U256::ZERO;
        let action = DepositAction::new(MockProvider {}, config);

        // invalid configs short-circuit before any RPC
        assert!(!action.is_ready().await.unwrap());
    }

    #[tokio::test]
    async fn test_not_completed_before_execute() {
        let action = DepositAction::new(MockProvider {}, mock_config());
        assert!(!action.is_completed().await.unwrap());
        assert_eq!(action.tx_hash(), None);
    }

    #[test]
    fn test_matches_event() {
        let config = mock_config();
        let action = DepositAction::new(MockProvider {}, config.clone());
        assert!(action.matches(&event_for(&config)));

        let mut other = event_for(&config);
        other.amount = U256::from(1);
        assert!(!action.matches(&other));
    }

    #[test]
    fn test_description() {
        let action = DepositAction::new(MockProvider {}, mock_config());

        let desc = action.description();
        assert!(desc.contains("Deposit 1.000000 USDC"));
        assert!(desc.contains("L2"));
    }
}
