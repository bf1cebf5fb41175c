use std::path::{Path, PathBuf};

use ethers::types::{Address, Bytes};

use crate::error::SnapshotError;

/// Parse a table address. Any case is accepted and the `0x` prefix is
/// optional; the EIP-55 checksum is not checked.
pub fn parse_contract_address(address: &str) -> Result<Address, SnapshotError> {
    address
        .parse::<Address>()
        .map_err(|e| SnapshotError::InvalidAddress {
            address: address.to_owned(),
            reason: e.to_string(),
        })
}

pub fn bytecode_to_hex(code: &Bytes) -> String {
    format!("0x{}", hex::encode(code))
}

pub fn snapshot_file_path(dir: &Path, contract_name: &str) -> PathBuf {
    dir.join(format!("{contract_name}.json"))
}
