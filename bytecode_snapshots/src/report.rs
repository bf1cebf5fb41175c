use std::path::PathBuf;

use crate::{error::SnapshotError, types::input::ContractEntry};

/// What happened to one contract table entry.
#[derive(Debug)]
pub struct SnapshotOutcome {
    pub name: String,
    pub address: String,
    /// path of the written snapshot on success
    pub result: Result<PathBuf, SnapshotError>,
}

impl SnapshotOutcome {
    pub fn new(entry: &ContractEntry, result: Result<PathBuf, SnapshotError>) -> Self {
        Self {
            name: entry.name.clone(),
            address: entry.address.clone(),
            result,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run, in contract table order.
#[derive(Debug, Default)]
pub struct SnapshotReport {
    pub outcomes: Vec<SnapshotOutcome>,
}

impl SnapshotReport {
    pub fn new(outcomes: Vec<SnapshotOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &SnapshotOutcome> {
        self.outcomes.iter().filter(|o| o.is_saved())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SnapshotOutcome> {
        self.outcomes.iter().filter(|o| !o.is_saved())
    }

    pub fn saved_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn outcome(&self, name: &str) -> Option<&SnapshotOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
