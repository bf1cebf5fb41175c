use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use ethers::providers::Middleware;
use tracing::{debug, error, info};

use crate::{
    error::SnapshotError,
    report::{SnapshotOutcome, SnapshotReport},
    types::{input::ContractEntry, output::SnapshotResult},
    utils::{bytecode_to_hex, parse_contract_address},
};

/// Fetches deployed bytecode for a contract table and writes one
/// `<name>.json` per contract into `output_dir`.
pub struct ContractSnapshotter<M> {
    client: Arc<M>,
    output_dir: PathBuf,
}

impl<M> ContractSnapshotter<M>
where
    M: Middleware,
{
    pub fn new(client: Arc<M>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Snapshot every entry, one at a time and in table order.
    ///
    /// A failing entry is logged and recorded in the report; it never stops
    /// the remaining entries from being processed.
    pub async fn run(&self, contracts: &[ContractEntry]) -> SnapshotReport {
        let mut outcomes = Vec::with_capacity(contracts.len());

        for entry in contracts {
            let result = self.snapshot(entry).await;
            match &result {
                Ok(path) => info!(path = %path.display(), "Saved {} contract code", entry.name),
                Err(e) => error!(address = %entry.address, "Error fetching {}: {}", entry.name, e),
            }
            outcomes.push(SnapshotOutcome::new(entry, result));
        }

        SnapshotReport::new(outcomes)
    }

    /// Fetch and persist a single contract. Nothing is written unless the
    /// fetch succeeded.
    pub async fn snapshot(&self, entry: &ContractEntry) -> Result<PathBuf, SnapshotError> {
        let bytecode = self.fetch_bytecode(&entry.address).await?;

        let snapshot = SnapshotResult {
            name: entry.name.clone(),
            address: entry.address.clone(),
            bytecode,
        };

        snapshot.write_to_dir(&self.output_dir)
    }

    /// `eth_getCode` at the latest block, as `0x` prefixed hex.
    pub async fn fetch_bytecode(&self, address: &str) -> Result<String, SnapshotError> {
        let at = parse_contract_address(address)?;

        let code = self
            .client
            .get_code(at, None)
            .await
            .map_err(|e| SnapshotError::Rpc(e.to_string()))?;

        debug!(%address, len = code.len(), "fetched bytecode");

        Ok(bytecode_to_hex(&code))
    }
}
