use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{error::SnapshotError, utils::snapshot_file_path};

/// The persisted artifact for one contract: `<name>.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResult {
    pub name: String,
    pub address: String,
    /// `0x` prefixed hex, `"0x"` when nothing is deployed at `address`
    pub bytecode: String,
}

impl SnapshotResult {
    /// Write the snapshot as pretty JSON into `dir`, replacing any previous
    /// snapshot of the same contract.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, SnapshotError> {
        let path = snapshot_file_path(dir, &self.name);
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&path, json).map_err(|source| SnapshotError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
