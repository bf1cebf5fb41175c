use std::{collections::HashSet, path::PathBuf};

use anyhow::{anyhow, bail, Context};
use url::Url;

use crate::types::input::ContractEntry;

/// Everything a snapshot run needs. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotConfig {
    pub rpc_url: String,
    /// snapshotted in this order
    pub contracts: Vec<ContractEntry>,
    pub output_dir: PathBuf,
}

impl SnapshotConfig {
    /// Config writing snapshots into the current working directory.
    pub fn new(rpc_url: impl Into<String>, contracts: Vec<ContractEntry>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contracts,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.rpc_url)
            .with_context(|| format!("invalid RPC endpoint: {}", self.rpc_url))?;

        if self.contracts.is_empty() {
            bail!("contract table is empty");
        }

        let mut names = HashSet::new();
        for entry in &self.contracts {
            if entry.name.is_empty() {
                return Err(anyhow!("contract with address {} has no name", entry.address));
            }
            if !names.insert(entry.name.as_str()) {
                bail!("duplicate contract name in table: {}", entry.name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotConfig;
    use crate::types::input::ContractEntry;

    const RPC_URL: &str = "http://localhost:8545";

    #[test]
    fn test_defaults_to_working_dir() {
        let config = SnapshotConfig::new(RPC_URL, vec![]);
        assert_eq!(config.output_dir, std::path::PathBuf::from("."));
    }

    #[test]
    fn test_validate_accepts_mixed_case_addresses() {
        let config = SnapshotConfig::new(
            RPC_URL,
            vec![
                ContractEntry::new("UniswapV2Factory", "0x5e705e184d233ff2a7cb1553793464a9d0c3028f"),
                ContractEntry::new("Multicall3", "0xcA11bde05977b3631167028862bE2a173976CA11"),
            ],
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = SnapshotConfig::new(
            "rpc.berachain.com",
            vec![ContractEntry::new("Foo", "0x0000000000000000000000000000000000000001")],
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid RPC endpoint"));
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let config = SnapshotConfig::new(RPC_URL, vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let config = SnapshotConfig::new(
            RPC_URL,
            vec![
                ContractEntry::new("Foo", "0x0000000000000000000000000000000000000001"),
                ContractEntry::new("Foo", "0x0000000000000000000000000000000000000002"),
            ],
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate contract name"));
    }

    #[test]
    fn test_validate_rejects_unnamed_entry() {
        let config = SnapshotConfig::new(
            RPC_URL,
            vec![ContractEntry::new("", "0x0000000000000000000000000000000000000001")],
        );
        assert!(config.validate().is_err());
    }
}
