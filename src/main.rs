use alloy::{primitives::Address, providers::ProviderBuilder};
use clap::Parser;
use orbit_sdk::{rpc_server::RpcServer, NodeClient, OrbitClient, OrbitConfig};
use std::{net::SocketAddr, path::PathBuf};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "orbit-sdk", about = "JSON-RPC service for Orbit chain owner transactions and rollup fees")]
struct Args {
    /// Parent chain RPC endpoint.
    #[arg(long, env = "ETH_RPC_URL", default_value = "http://localhost:8545")]
    rpc_url: String,

    #[arg(long, env = "ORBIT_SDK_BIND", default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// JSON file with fee overrides and RollupCreator addresses.
    #[arg(long, env = "ORBIT_SDK_CONFIG")]
    config: Option<PathBuf>,

    /// RollupCreator to estimate retryables fees against, overrides the config file.
    #[arg(long, env = "ORBIT_SDK_ROLLUP_CREATOR")]
    rollup_creator: Option<Address>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => OrbitConfig::load(path)?,
        None => OrbitConfig::default(),
    };

    info!(rpc_url = %args.rpc_url, "connecting to parent chain");
    let provider = ProviderBuilder::new().connect(&args.rpc_url).await?;
    let node = NodeClient::new(provider);
    let node = match config.chain_id {
        Some(chain_id) => node.with_chain_id(chain_id),
        None => node.with_chain_id_from_node().await.map_err(|e| {
            warn!(error = %e, "could not resolve the parent chain id, check the RPC URL");
            e
        })?,
    };

    let mut client = OrbitClient::from_config(node, &config);
    if let Some(rollup_creator) = args.rollup_creator {
        client = client.with_rollup_creator(rollup_creator);
    }
    match client.rollup_creator_address() {
        Ok(rollup_creator) => info!(chain_id = ?client.chain_id().ok(), %rollup_creator, "connected"),
        Err(e) => error!(
            error = %e,
            fallback = %client.fees().default_retryables_fees,
            "retryables fee estimation is disabled: orbit_estimateRetryablesFees will fail and \
             orbit_estimateRetryablesFeesWithDefaults always returns the fallback fee; \
             set --rollup-creator or rollupCreators in --config"
        ),
    }

    let server = RpcServer::new(args.bind, client).await?;
    info!(address = %format!("http://{}", server.local_addr()), "Orbit SDK JSON-RPC server is running");

    signal::ctrl_c().await?;
    info!("shutting down server");
    server.stop().await?;

    Ok(())
}
