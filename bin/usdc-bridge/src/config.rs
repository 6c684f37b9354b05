use alloy_primitives::Address;
use ::config::{NetworkConfig, NetworkConfigBuilder, NetworkType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// L1 RPC endpoint url
    pub l1_rpc_url: String,

    /// L2 RPC endpoint url
    pub l2_rpc_url: String,

    /// Network defaults to start from
    #[serde(default = "default_network")]
    pub network: NetworkType,

    /// Per-deployment addresses and chain ids
    #[serde(default)]
    pub overrides: Overrides,
}

/// Optional overrides on top of the network defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overrides {
    pub l1_chain_id: Option<u64>,
    pub l2_chain_id: Option<u64>,
    pub l1_usdc: Option<Address>,
    pub l1_bridge: Option<Address>,
    pub l2_usdc: Option<Address>,
    pub l2_bridge: Option<Address>,
    pub l2_master_minter: Option<Address>,
    pub l2_messenger: Option<Address>,
}

const fn default_network() -> NetworkType {
    NetworkType::Devnet
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Network defaults with the overrides applied.
    pub fn network_config(&self) -> NetworkConfig {
        let o = &self.overrides;
        let mut builder = NetworkConfigBuilder::from_network_type(self.network);

        if let Some(chain_id) = o.l1_chain_id {
            builder = builder.l1_chain_id(chain_id);
        }
        if let Some(chain_id) = o.l2_chain_id {
            builder = builder.l2_chain_id(chain_id);
        }
        if let Some(address) = o.l1_usdc {
            builder = builder.l1_usdc(address);
        }
        if let Some(address) = o.l1_bridge {
            builder = builder.l1_bridge(address);
        }
        if let Some(address) = o.l2_usdc {
            builder = builder.l2_usdc(address);
        }
        if let Some(address) = o.l2_bridge {
            builder = builder.l2_bridge(address);
        }
        if let Some(address) = o.l2_master_minter {
            builder = builder.l2_master_minter(address);
        }
        if let Some(address) = o.l2_messenger {
            builder = builder.l2_messenger(address);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use binding::predeploys;

    #[test]
    fn test_minimal_config_defaults_to_devnet() {
        let config: Config = toml::from_str(
            r#"
            l1_rpc_url = "http://localhost:8545"
            l2_rpc_url = "http://localhost:9545"
            "#,
        )
        .unwrap();

        assert_eq!(config.network, NetworkType::Devnet);
        let network = config.network_config();
        assert_eq!(network.l1.chain_id, 900);
        assert_eq!(network.l2.bridge, predeploys::L2_USDC_BRIDGE);
        assert!(network.l1.bridge.is_zero());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config: Config = toml::from_str(
            r#"
            l1_rpc_url = "http://localhost:8545"
            l2_rpc_url = "http://localhost:9545"
            network = "custom"

            [overrides]
            l1_chain_id = 11155111
            l2_chain_id = 111551119090
            l1_usdc = "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"
            l1_bridge = "0x2222222222222222222222222222222222222222"
            "#,
        )
        .unwrap();

        let network = config.network_config();
        assert_eq!(network.network_type, NetworkType::Custom);
        assert_eq!(network.l1.chain_id, 11155111);
        assert_eq!(network.l1.usdc, address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"));
        assert_eq!(network.l2.usdc, predeploys::FIAT_TOKEN_V2_2);
        assert!(network.validate().is_ok());
    }
}
