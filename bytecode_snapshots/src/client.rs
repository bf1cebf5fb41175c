use std::sync::Arc;

use anyhow::Context;
use ethers::providers::{Http, Provider};
use url::Url;

/// Read-only HTTP provider for `rpc_url`. No signer is attached; snapshots
/// only ever read chain state.
pub fn get_read_only_ethers_client(rpc_url: &str) -> anyhow::Result<Arc<Provider<Http>>> {
    let url = Url::parse(rpc_url).with_context(|| format!("invalid RPC endpoint: {rpc_url}"))?;
    Ok(Arc::new(Provider::new(Http::new(url))))
}
