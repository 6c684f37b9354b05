//! Command line client for the USDC bridge.
//!
//! - `artifacts`: embedded ABIs and bytecode
//! - `inspect` / `check`: read and verify the bridges' wiring
//! - `deposit` / `withdraw`: move USDC across the bridge
//! - `events`: in-flight transfers, or a live feed with `--follow`
//! - `deploy` / `upgrade` / `change-owner` / `wire`: proxy administration

use action::{deploy::deploy_bridge, units::parse_usdc, ActionResult, DEFAULT_MIN_GAS_LIMIT};
use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use config::Layer;
use futures::StreamExt;
use tracing::{error, info};
use usdc_bridge::config::Config;

#[derive(Parser)]
#[command(name = "usdc-bridge")]
#[command(about = "Inspect, operate and administer the USDC bridge")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embedded contract artifacts
    Artifacts {
        #[command(subcommand)]
        command: ArtifactsCommand,
    },

    #[command(flatten)]
    Network(NetworkCommand),
}

/// Commands talking to the L1 and L2 endpoints.
#[derive(Subcommand)]
enum NetworkCommand {
    /// Print the L1/L2 bridge and proxy state
    Inspect,

    /// Verify the bridge wiring, failing if any check does not pass
    Check,

    /// Deposit L1 USDC to L2
    Deposit {
        /// Amount in USDC, e.g. 12.5
        #[arg(long)]
        amount: String,

        /// Recipient on L2, defaults to the sender
        #[arg(long)]
        to: Option<Address>,

        #[arg(long, default_value_t = DEFAULT_MIN_GAS_LIMIT)]
        min_gas_limit: u32,
    },

    /// Withdraw L2 USDC to the sender on L1
    Withdraw {
        /// Amount in USDC, e.g. 12.5
        #[arg(long)]
        amount: String,

        #[arg(long, default_value_t = DEFAULT_MIN_GAS_LIMIT)]
        min_gas_limit: u32,
    },

    /// List in-flight transfers
    Events {
        /// How far back to scan, in seconds
        #[arg(long, default_value_t = 86_400)]
        lookback: u64,

        /// Only transfers sent by this address
        #[arg(long)]
        from: Option<Address>,

        /// Keep running and print new transfers as they are initiated
        #[arg(long)]
        follow: bool,
    },

    /// Deploy a bridge implementation behind a new proxy
    Deploy {
        #[arg(long)]
        layer: Layer,

        /// Proxy owner
        #[arg(long)]
        owner: Address,
    },

    /// Point the configured bridge proxy at a new implementation
    Upgrade {
        #[arg(long)]
        layer: Layer,

        #[arg(long)]
        implementation: Address,
    },

    /// Transfer ownership of the configured bridge proxy
    ChangeOwner {
        #[arg(long)]
        layer: Layer,

        #[arg(long)]
        new_owner: Address,
    },

    /// Set the messenger, counterpart bridge and token addresses of a bridge
    Wire {
        #[arg(long)]
        layer: Layer,

        /// Cross domain messenger, required on L1
        #[arg(long)]
        messenger: Option<Address>,
    },
}

#[derive(Subcommand)]
enum ArtifactsCommand {
    /// List the embedded contracts
    List,

    /// Print the ABI JSON of a contract
    Abi { name: String },

    /// Print the creation bytecode of a contract
    Bytecode { name: String },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Artifacts are embedded, no config needed
    let command = match cli.command {
        Command::Artifacts { command } => return artifacts(&command),
        Command::Network(command) => command,
    };

    let config = Config::from_file(&cli.config)?;
    let network = config.network_config();

    info!("Loaded config:");
    info!("  Network: {:?}", config.network);
    info!("  L1 bridge: {}", network.l1.bridge);
    info!("  L2 bridge: {}", network.l2.bridge);

    match command {
        NetworkCommand::Inspect => {
            let l1_provider = client::create_provider(&config.l1_rpc_url).await?;
            let l2_provider = client::create_provider(&config.l2_rpc_url).await?;

            let report = usdc_bridge::inspect(l1_provider, l2_provider, &network).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        NetworkCommand::Check => {
            let l1_provider = client::create_provider(&config.l1_rpc_url).await?;
            let l2_provider = client::create_provider(&config.l2_rpc_url).await?;

            let report = usdc_bridge::inspect(l1_provider, l2_provider, &network).await?;
            let outcomes = usdc_bridge::run_checks(&report, &network);

            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(()) => info!(check = outcome.name, "ok"),
                    Err(e) => {
                        error!(check = outcome.name, "{e}");
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                eyre::bail!("{failed} of {} checks failed", outcomes.len());
            }
            info!("All {} checks passed", outcomes.len());
        }
        NetworkCommand::Deposit { amount, to, min_gas_limit } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let from = client::signer_address(private_key)?;
            let l1_provider = client::create_wallet_provider(&config.l1_rpc_url, private_key)?;
            client::ensure_chain_id(&l1_provider, network.l1.chain_id).await?;

            let result =
                usdc_bridge::deposit(l1_provider, &network, from, to, parse_usdc(&amount)?, min_gas_limit)
                    .await?;
            report_result(result);
        }
        NetworkCommand::Withdraw { amount, min_gas_limit } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let from = client::signer_address(private_key)?;
            let l2_provider = client::create_wallet_provider(&config.l2_rpc_url, private_key)?;
            client::ensure_chain_id(&l2_provider, network.l2.chain_id).await?;

            let result =
                usdc_bridge::withdraw(l2_provider, &network, from, parse_usdc(&amount)?, min_gas_limit)
                    .await?;
            report_result(result);
        }
        NetworkCommand::Events { lookback, from, follow } => {
            let l1_provider = client::create_provider(&config.l1_rpc_url).await?;
            let l2_provider = client::create_provider(&config.l2_rpc_url).await?;

            if follow {
                let stream = usdc_bridge::follow(l1_provider, l2_provider, &network, from).await?;
                let mut stream = std::pin::pin!(stream);
                info!("Waiting for new transfers, press ctrl-c to stop");
                while let Some(transfer) = stream.next().await {
                    println!("{}", serde_json::to_string(&transfer?)?);
                }
            } else {
                let report =
                    usdc_bridge::inflight(l1_provider, l2_provider, &network, from, lookback).await?;
                report.log_summary();
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        NetworkCommand::Deploy { layer, owner } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let provider = client::create_wallet_provider(rpc_url(&config, layer), private_key)?;

            let deployment = deploy_bridge(provider, layer, owner).await?;
            info!(
                implementation = %deployment.implementation,
                proxy = %deployment.proxy,
                "Deployed {layer} bridge"
            );
        }
        NetworkCommand::Upgrade { layer, implementation } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let admin = client::signer_address(private_key)?;
            let provider = client::create_wallet_provider(rpc_url(&config, layer), private_key)?;

            let result = usdc_bridge::upgrade(provider, &network, layer, admin, implementation).await?;
            report_result(result);
        }
        NetworkCommand::ChangeOwner { layer, new_owner } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let admin = client::signer_address(private_key)?;
            let provider = client::create_wallet_provider(rpc_url(&config, layer), private_key)?;

            let result = usdc_bridge::change_owner(provider, &network, layer, admin, new_owner).await?;
            report_result(result);
        }
        NetworkCommand::Wire { layer, messenger } => {
            let private_key = require_key(cli.private_key.as_deref())?;
            let admin = client::signer_address(private_key)?;
            let provider = client::create_wallet_provider(rpc_url(&config, layer), private_key)?;

            let result = usdc_bridge::wire(provider, &network, layer, admin, messenger).await?;
            report_result(result);
        }
    }

    Ok(())
}

fn artifacts(command: &ArtifactsCommand) -> eyre::Result<()> {
    match command {
        ArtifactsCommand::List => {
            for artifact in binding::registry::artifacts() {
                println!("{}", artifact.name);
            }
        }
        ArtifactsCommand::Abi { name } => {
            println!("{}", binding::registry::artifact(name)?.abi);
        }
        ArtifactsCommand::Bytecode { name } => {
            println!("{}", binding::registry::bytecode(name)?);
        }
    }
    Ok(())
}

fn require_key(private_key: Option<&str>) -> eyre::Result<&str> {
    private_key.ok_or_else(|| eyre::eyre!("A private key is required, pass --private-key or set PRIVATE_KEY"))
}

fn rpc_url(config: &Config, layer: Layer) -> &str {
    match layer {
        Layer::L1 => &config.l1_rpc_url,
        Layer::L2 => &config.l2_rpc_url,
    }
}

fn report_result(result: Option<ActionResult>) {
    match result {
        Some(result) => info!(tx_hash = %result.tx_hash, "Step completed"),
        None => info!("Nothing to do"),
    }
}
