use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a single contract could not be snapshotted.
///
/// These never abort a batch; they end up in the entry's outcome.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid contract address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("eth_getCode request failed: {0}")]
    Rpc(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
