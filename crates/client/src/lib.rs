//! Provider construction for the L1 and L2 RPC endpoints.

use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Convenience function to create an ethereum rpc provider from url.
pub async fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create a provider with wallet signing capability from a private key.
pub fn create_wallet_provider(
    rpc_url: &str,
    private_key: &str,
) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;

    let wallet = EthereumWallet::from(parse_signer(private_key)?);
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(provider)
}

/// Address controlled by `private_key` (hex, with or without `0x`).
pub fn signer_address(private_key: &str) -> Result<Address, ClientError> {
    Ok(parse_signer(private_key)?.address())
}

/// Check that the endpoint answers and serves `expected_chain_id`.
pub async fn ensure_chain_id<P: Provider>(
    provider: &P,
    expected_chain_id: u64,
) -> Result<(), ClientError> {
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(e.to_string()))?;
    if chain_id != expected_chain_id {
        return Err(ClientError::Connection(format!(
            "expected chain id {expected_chain_id}, endpoint reports {chain_id}"
        )));
    }
    Ok(())
}

fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, ClientError> {
    private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    // Well-known anvil/hardhat dev account #0.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn test_invalid_url() {
        let result = create_provider("not a url").await;
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_signer_address() {
        assert_eq!(
            signer_address(DEV_KEY).unwrap(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        // prefix is optional
        assert_eq!(signer_address(&DEV_KEY[2..]).unwrap(), signer_address(DEV_KEY).unwrap());
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            create_wallet_provider("http://localhost:8545", "0x1234"),
            Err(ClientError::InvalidPrivateKey(_))
        ));
    }
}
