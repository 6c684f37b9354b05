//! Configuration types for the USDC bridge tooling.
//!
//! This crate provides:
//! - Network configurations (devnet, custom deployments)
//! - Bridge and token addresses for both layers
//! - Configuration validation

pub mod network;

pub use network::{L1Config, L2Config, Layer, NetworkConfig, NetworkConfigBuilder, NetworkType};

use thiserror::Error;

/// Invalid network configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("address {0} is not set")]
    MissingAddress(&'static str),

    #[error("chain id {0} is not set")]
    MissingChainId(&'static str),

    #[error("L1 and L2 share chain id {0}")]
    SameChainId(u64),

    #[error("unknown layer {0:?}, expected l1 or l2")]
    UnknownLayer(String),
}
