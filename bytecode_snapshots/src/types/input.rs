/// A contract to snapshot, as declared in a contract table.
///
/// `address` is kept exactly as written in the table; it is only parsed when
/// the bytecode is requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractEntry {
    pub name: String,
    pub address: String,
}

impl ContractEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl<N: Into<String>, A: Into<String>> From<(N, A)> for ContractEntry {
    fn from((name, address): (N, A)) -> Self {
        Self::new(name, address)
    }
}
