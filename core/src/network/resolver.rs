use std::net::IpAddr;

use astu_common::error::{ProbeError, Result};
use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

/// Maps a hostname to the addresses that should be probed.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns every address of `host`, in resolver order and without duplicates.
    ///
    /// An empty list is not an error, it simply means there is nothing to probe.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>>;
}

/// Platform name resolution (A and AAAA). No caching, every call hits the resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        // The port is irrelevant for the lookup, it only satisfies the API.
        let addrs = lookup_host((host, 0))
            .await
            .map_err(|source| ProbeError::ResolutionFailed {
                host: host.to_owned(),
                source,
            })?;

        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in addrs {
            if !ips.contains(&addr.ip()) {
                ips.push(addr.ip());
            }
        }

        debug!("{host} resolved to {} address(es)", ips.len());
        Ok(ips)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
