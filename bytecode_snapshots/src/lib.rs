pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod snapshotter;
pub mod types;
pub mod utils;

use config::SnapshotConfig;
use report::SnapshotReport;
use snapshotter::ContractSnapshotter;

/// Snapshot every contract in `config` over HTTP.
///
/// Returns `Err` only when the run cannot start (bad endpoint, bad table).
/// Per-contract failures are reported in the returned [`SnapshotReport`].
pub async fn run(config: &SnapshotConfig) -> anyhow::Result<SnapshotReport> {
    config.validate()?;

    let client = client::get_read_only_ethers_client(&config.rpc_url)?;
    let snapshotter = ContractSnapshotter::new(client, config.output_dir.clone());

    Ok(snapshotter.run(&config.contracts).await)
}

#[cfg(test)]
mod tests {
    use crate::{config::SnapshotConfig, error::SnapshotError, types::input::ContractEntry};

    #[tokio::test]
    async fn test_run_rejects_invalid_table_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let config = SnapshotConfig::new(
            "http://127.0.0.1:1",
            vec![
                ContractEntry::new("Foo", "0x0000000000000000000000000000000000000001"),
                ContractEntry::new("Foo", "0x0000000000000000000000000000000000000002"),
            ],
        )
        .with_output_dir(dir.path());

        assert!(super::run(&config).await.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_with_malformed_endpoint_fails() {
        let config = SnapshotConfig::new(
            "not a url",
            vec![ContractEntry::new("Foo", "0x0000000000000000000000000000000000000001")],
        );

        assert!(super::run(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_run_with_unreachable_endpoint_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        // nothing listens on port 1
        let config = SnapshotConfig::new(
            "http://127.0.0.1:1",
            vec![
                ContractEntry::new("Foo", "0x0000000000000000000000000000000000000001"),
                ContractEntry::new("Bar", "0x0000000000000000000000000000000000000002"),
            ],
        )
        .with_output_dir(dir.path());

        let report = super::run(&config).await.unwrap();

        assert_eq!(report.failed_count(), 2);
        assert!(report
            .outcomes
            .iter()
            .all(|o| matches!(o.result, Err(SnapshotError::Rpc(_)))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
