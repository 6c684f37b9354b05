//! ERC20 allowance handling shared by deposits and withdrawals.

use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use tracing::{debug, info};

/// Approve `spender` for `amount` when the current allowance is short.
///
/// Returns the approval transaction hash if one was sent.
pub async fn ensure_allowance<P>(
    provider: &P,
    token: Address,
    owner: Address,
    spender: Address,
    amount: U256,
) -> eyre::Result<Option<TxHash>>
where
    P: Provider + Clone,
{
    let erc20 = IERC20::new(token, provider);
    let allowance = erc20.allowance(owner, spender).call().await?;

    if allowance >= amount {
        debug!(%token, %spender, %allowance, "Allowance sufficient");
        return Ok(None);
    }

    info!(%token, %spender, %allowance, %amount, "Approving bridge");
    let receipt = erc20.approve(spender, amount).from(owner).send().await?.get_receipt().await?;
    if !receipt.status() {
        eyre::bail!("Approval of {} on {} reverted", spender, token);
    }

    Ok(Some(receipt.transaction_hash))
}

/// Whether `owner` holds at least `amount` of `token`.
pub async fn has_balance<P>(
    provider: &P,
    token: Address,
    owner: Address,
    amount: U256,
) -> eyre::Result<bool>
where
    P: Provider + Clone,
{
    let balance = IERC20::new(token, provider).balanceOf(owner).call().await?;
    if balance < amount {
        debug!(%token, %owner, %balance, %amount, "Insufficient token balance");
    }
    Ok(balance >= amount)
}
