//! Network configuration for the USDC bridge.
//!
//! L2 addresses default to the predeploys. L1 addresses are deployment
//! specific and must be supplied through the builder.

use alloy_primitives::Address;
use binding::predeploys;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Local devnet (L1 chain 900, L2 chain 901)
    Devnet,
    /// Any other deployment; chain ids and L1 addresses come from overrides
    Custom,
}

/// Side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    L1,
    L2,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L1 => f.write_str("l1"),
            Self::L2 => f.write_str("l2"),
        }
    }
}

impl std::str::FromStr for Layer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            _ => Err(ConfigError::UnknownLayer(s.to_string())),
        }
    }
}

/// L1 configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L1Config {
    /// Chain ID
    pub chain_id: u64,
    /// L1 USDC (FiatToken proxy) address
    pub usdc: Address,
    /// `L1UsdcBridgeProxy` address
    pub bridge: Address,
    /// Block time in seconds
    pub block_time_secs: u64,
}

impl L1Config {
    /// Devnet L1 configuration. Addresses are only known after deployment.
    pub const fn devnet() -> Self {
        Self { chain_id: 900, usdc: Address::ZERO, bridge: Address::ZERO, block_time_secs: 12 }
    }

    const fn custom() -> Self {
        Self { chain_id: 0, usdc: Address::ZERO, bridge: Address::ZERO, block_time_secs: 12 }
    }
}

/// L2 configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L2Config {
    /// Chain ID
    pub chain_id: u64,
    /// L2 USDC (`FiatTokenV2_2` predeploy)
    pub usdc: Address,
    /// `L2UsdcBridgeProxy` predeploy
    pub bridge: Address,
    /// USDC master minter predeploy
    pub master_minter: Address,
    /// `L2CrossDomainMessenger` predeploy
    pub messenger: Address,
    /// Block time in seconds
    pub block_time_secs: u64,
}

impl L2Config {
    /// L2 configuration with the predeploy addresses.
    pub const fn predeploys(chain_id: u64) -> Self {
        Self {
            chain_id,
            usdc: predeploys::FIAT_TOKEN_V2_2,
            bridge: predeploys::L2_USDC_BRIDGE,
            master_minter: predeploys::MASTER_MINTER,
            messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
            block_time_secs: 2,
        }
    }

    /// Devnet L2 configuration.
    pub const fn devnet() -> Self {
        Self::predeploys(901)
    }
}

/// Complete network configuration for both layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network_type: NetworkType,
    pub l1: L1Config,
    pub l2: L2Config,
}

impl NetworkConfig {
    /// Create devnet configuration.
    pub const fn devnet() -> Self {
        Self { network_type: NetworkType::Devnet, l1: L1Config::devnet(), l2: L2Config::devnet() }
    }

    /// Create an empty custom configuration with the L2 predeploys filled in.
    pub const fn custom() -> Self {
        Self {
            network_type: NetworkType::Custom,
            l1: L1Config::custom(),
            l2: L2Config::predeploys(0),
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Devnet => Self::devnet(),
            NetworkType::Custom => Self::custom(),
        }
    }

    /// Bridge proxy address on `layer`.
    pub const fn bridge(&self, layer: Layer) -> Address {
        match layer {
            Layer::L1 => self.l1.bridge,
            Layer::L2 => self.l2.bridge,
        }
    }

    /// Block time of `layer` in seconds.
    pub const fn block_time_secs(&self, layer: Layer) -> u64 {
        match layer {
            Layer::L1 => self.l1.block_time_secs,
            Layer::L2 => self.l2.block_time_secs,
        }
    }

    /// Check that every address is set and the chains are distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.l1.chain_id == 0 {
            return Err(ConfigError::MissingChainId("l1.chain_id"));
        }
        if self.l2.chain_id == 0 {
            return Err(ConfigError::MissingChainId("l2.chain_id"));
        }
        if self.l1.chain_id == self.l2.chain_id {
            return Err(ConfigError::SameChainId(self.l1.chain_id));
        }

        let addresses = [
            ("l1.usdc", self.l1.usdc),
            ("l1.bridge", self.l1.bridge),
            ("l2.usdc", self.l2.usdc),
            ("l2.bridge", self.l2.bridge),
            ("l2.master_minter", self.l2.master_minter),
            ("l2.messenger", self.l2.messenger),
        ];
        for (field, address) in addresses {
            if address.is_zero() {
                return Err(ConfigError::MissingAddress(field));
            }
        }

        Ok(())
    }
}

/// Builder for network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with devnet defaults.
    pub const fn devnet() -> Self {
        Self { config: NetworkConfig::devnet() }
    }

    /// Start with an empty custom configuration.
    pub const fn custom() -> Self {
        Self { config: NetworkConfig::custom() }
    }

    /// Start from the defaults of `network_type`.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        Self { config: NetworkConfig::from_network_type(network_type) }
    }

    pub const fn l1_chain_id(mut self, chain_id: u64) -> Self {
        self.config.l1.chain_id = chain_id;
        self
    }

    pub const fn l2_chain_id(mut self, chain_id: u64) -> Self {
        self.config.l2.chain_id = chain_id;
        self
    }

    /// Override L1 USDC address.
    pub const fn l1_usdc(mut self, address: Address) -> Self {
        self.config.l1.usdc = address;
        self
    }

    /// Override L1 bridge proxy address.
    pub const fn l1_bridge(mut self, address: Address) -> Self {
        self.config.l1.bridge = address;
        self
    }

    /// Override L2 USDC address.
    pub const fn l2_usdc(mut self, address: Address) -> Self {
        self.config.l2.usdc = address;
        self
    }

    /// Override L2 bridge proxy address.
    pub const fn l2_bridge(mut self, address: Address) -> Self {
        self.config.l2.bridge = address;
        self
    }

    pub const fn l2_master_minter(mut self, address: Address) -> Self {
        self.config.l2.master_minter = address;
        self
    }

    pub const fn l2_messenger(mut self, address: Address) -> Self {
        self.config.l2.messenger = address;
        self
    }

    /// Build the network configuration.
    pub const fn build(self) -> NetworkConfig {
        self.config
    }
}
