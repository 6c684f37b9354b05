//! ERC20 interface of the bridged USDC tokens.
//!
//! Used for the FiatToken proxy on L1 and the `FiatTokenV2_2` predeploy on L2.

use alloy_sol_types::sol;

sol! {
    /// Standard ERC20 token interface
    #[sol(rpc)]
    #[derive(Debug)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);

        /// Approve `spender`, typically the bridge, to pull `amount`
        function approve(address spender, uint256 amount) external returns (bool);

        function transfer(address recipient, uint256 amount) external returns (bool);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::IERC20;
    use alloy_primitives::hex;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_shares_selectors_with_legacy_token() {
        use crate::legacy_erc20_native_token::LegacyERC20NativeToken as Legacy;

        assert_eq!(IERC20::balanceOfCall::SELECTOR, Legacy::balanceOfCall::SELECTOR);
        assert_eq!(IERC20::allowanceCall::SELECTOR, Legacy::allowanceCall::SELECTOR);
        assert_eq!(IERC20::approveCall::SELECTOR, hex!("095ea7b3"));
    }
}
