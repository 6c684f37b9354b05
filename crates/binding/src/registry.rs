//! Lookup of the generated contract artifacts by contract name.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use thiserror::Error;

use crate::{
    l1_usdc_bridge, l1_usdc_bridge_proxy, l2_usdc_bridge, l2_usdc_bridge_proxy,
    legacy_erc20_native_token,
};

/// Errors returned by artifact lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no artifact named {0}")]
    NotFound(String),

    #[error("artifact {0} has no bytecode")]
    EmptyBytecode(String),

    #[error("invalid ABI for {name}: {source}")]
    InvalidAbi {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// ABI and creation bytecode of one contract.
#[derive(Debug, Clone, Copy)]
pub struct ContractArtifact {
    pub name: &'static str,
    pub abi: &'static str,
    pub bytecode: &'static Bytes,
}

impl ContractArtifact {
    /// Parse the embedded ABI JSON.
    pub fn parse_abi(&self) -> Result<JsonAbi, RegistryError> {
        serde_json::from_str(self.abi).map_err(|source| RegistryError::InvalidAbi {
            name: self.name.to_string(),
            source,
        })
    }
}

/// All artifacts, in a stable order.
pub fn artifacts() -> [ContractArtifact; 5] {
    [
        ContractArtifact {
            name: "L1UsdcBridge",
            abi: l1_usdc_bridge::ABI,
            bytecode: &l1_usdc_bridge::L1UsdcBridge::BYTECODE,
        },
        ContractArtifact {
            name: "L1UsdcBridgeProxy",
            abi: l1_usdc_bridge_proxy::ABI,
            bytecode: &l1_usdc_bridge_proxy::L1UsdcBridgeProxy::BYTECODE,
        },
        ContractArtifact {
            name: "L2UsdcBridge",
            abi: l2_usdc_bridge::ABI,
            bytecode: &l2_usdc_bridge::L2UsdcBridge::BYTECODE,
        },
        ContractArtifact {
            name: "L2UsdcBridgeProxy",
            abi: l2_usdc_bridge_proxy::ABI,
            bytecode: &l2_usdc_bridge_proxy::L2UsdcBridgeProxy::BYTECODE,
        },
        ContractArtifact {
            name: "LegacyERC20NativeToken",
            abi: legacy_erc20_native_token::ABI,
            bytecode: &legacy_erc20_native_token::LegacyERC20NativeToken::BYTECODE,
        },
    ]
}

/// Find an artifact by its exact contract name.
pub fn artifact(name: &str) -> Result<ContractArtifact, RegistryError> {
    artifacts()
        .into_iter()
        .find(|a| a.name == name)
        .ok_or_else(|| RegistryError::NotFound(name.to_string()))
}

/// Creation bytecode of the named contract.
pub fn bytecode(name: &str) -> Result<&'static Bytes, RegistryError> {
    let artifact = artifact(name)?;
    if artifact.bytecode.is_empty() {
        return Err(RegistryError::EmptyBytecode(name.to_string()));
    }
    Ok(artifact.bytecode)
}

/// Parsed ABI of the named contract.
pub fn abi(name: &str) -> Result<JsonAbi, RegistryError> {
    artifact(name)?.parse_abi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifacts_order() {
        let names: Vec<_> = artifacts().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            [
                "L1UsdcBridge",
                "L1UsdcBridgeProxy",
                "L2UsdcBridge",
                "L2UsdcBridgeProxy",
                "LegacyERC20NativeToken"
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(artifact("L2UsdcBridge").is_ok());
        assert!(matches!(artifact("l2usdcbridge"), Err(RegistryError::NotFound(_))));
        assert!(matches!(bytecode("Unknown"), Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_every_artifact_is_usable() {
        for artifact in artifacts() {
            let code = bytecode(artifact.name).unwrap();
            // solc creation code starts with the free memory pointer setup
            assert_eq!(code[0], 0x60, "{}", artifact.name);
            assert_eq!(&code[2..5], &[0x60, 0x40, 0x52], "{}", artifact.name);

            let abi = abi(artifact.name).unwrap();
            assert!(abi.functions().count() > 0, "{}", artifact.name);
        }
    }

    #[test]
    fn test_proxies_have_constructor() {
        assert!(abi("L1UsdcBridgeProxy").unwrap().constructor.is_some());
        assert!(abi("L2UsdcBridgeProxy").unwrap().constructor.is_some());
        assert!(abi("L2UsdcBridge").unwrap().constructor.is_none());
    }

    #[test]
    fn test_invalid_abi_reports_name() {
        static EMPTY: Bytes = Bytes::new();
        let broken = ContractArtifact { name: "Broken", abi: "{not json", bytecode: &EMPTY };
        match broken.parse_abi() {
            Err(RegistryError::InvalidAbi { name, .. }) => assert_eq!(name, "Broken"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
