mod config;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match snapshot_kodiak().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Per-contract failures are already logged by the snapshotter and don't
/// affect the exit code.
async fn snapshot_kodiak() -> anyhow::Result<()> {
    let config = config::kodiak_berachain();
    info!(
        rpc_url = %config.rpc_url,
        contracts = config.contracts.len(),
        "Fetching contract bytecode"
    );

    let report = bytecode_snapshots::run(&config).await?;

    info!(
        saved = report.saved_count(),
        failed = report.failed_count(),
        "Finished fetching contract bytecode"
    );

    Ok(())
}
