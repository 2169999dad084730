//! The concurrent multi-address **prober**.
//!
//! A [`Prober`] takes a [`ProbeRequest`] through three stages:
//! 1. **Parse** the raw endpoint into host, port and scheme.
//! 2. **Resolve** the host through the [`Resolver`] port.
//! 3. **Probe** every address at once with [`probe_all`].
//!
//! Stages 1 and 2 are the only ones that can fail the request. From stage 3 on, every
//! address produces exactly one [`ProbeReport`] and nothing is propagated upward.
//!
//! **Concurrency:** one task per address, each bounded by its own timeout. Tasks share
//! nothing but a channel sender. The caller is the only consumer of that channel and hands
//! reports to the [`OutcomeSink`] one at a time, so sinks never see concurrent writes.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use astu_common::error::Result;
use astu_common::network::address::{self, AddressClass};
use astu_common::network::endpoint::{self, Scheme};
use astu_common::network::outcome::{ProbeOutcome, ProbeReport};
use astu_common::network::request::ProbeRequest;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::network::dialer::{Dialer, SocketDialer, Transport};
use crate::network::resolver::{Resolver, SystemResolver};

/// Receives reports in completion order.
pub trait OutcomeSink: Send {
    fn report(&mut self, report: &ProbeReport);
}

impl OutcomeSink for Vec<ProbeReport> {
    fn report(&mut self, report: &ProbeReport) {
        self.push(report.clone());
    }
}

/// Everything a single probe needs besides the address itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeSettings {
    pub port: u16,
    pub scheme: Scheme,
    pub timeout: Duration,
    pub allow_ipv6: bool,
}

/// Resolves and probes endpoints through its two ports.
pub struct Prober {
    resolver: Box<dyn Resolver>,
    dialer: Arc<dyn Dialer>,
}

impl Prober {
    pub fn new(resolver: Box<dyn Resolver>, dialer: Arc<dyn Dialer>) -> Self {
        Self { resolver, dialer }
    }

    /// A prober backed by the platform resolver and real sockets.
    pub fn system() -> Self {
        Self::new(Box::new(SystemResolver), Arc::new(SocketDialer))
    }

    /// Parses, resolves and probes `request`, reporting every address to `sink`.
    ///
    /// Returns an error only when the endpoint is unusable or resolution fails. In that
    /// case no probe has been started and `sink` received nothing.
    pub async fn ping(&self, request: &ProbeRequest, sink: &mut dyn OutcomeSink) -> Result<()> {
        let endpoint = endpoint::parse(&request.raw_endpoint, request.scheme_override.clone())?;
        let addresses: Vec<IpAddr> = self.resolver.resolve(&endpoint.host).await?;

        if addresses.is_empty() {
            warn!("{} resolved to no addresses", endpoint.host);
        }

        let settings = ProbeSettings {
            port: endpoint.port,
            scheme: endpoint.scheme,
            timeout: request.timeout,
            allow_ipv6: request.allow_ipv6,
        };
        probe_all(Arc::clone(&self.dialer), &addresses, &settings, sink).await;
        Ok(())
    }
}

/// Probes every address concurrently and reports each outcome as soon as it is known.
///
/// Returns once every address has been reported.
pub async fn probe_all(
    dialer: Arc<dyn Dialer>,
    addresses: &[IpAddr],
    settings: &ProbeSettings,
    sink: &mut dyn OutcomeSink,
) {
    let (tx, mut rx) = mpsc::unbounded_channel::<ProbeReport>();
    let mut handles = Vec::with_capacity(addresses.len());

    for &ip in addresses {
        let tx = tx.clone();
        let dialer = Arc::clone(&dialer);
        let settings = settings.clone();

        let handle = tokio::spawn(async move {
            let report = check_address(dialer.as_ref(), ip, &settings).await;
            let _ = tx.send(report);
        });
        handles.push((ip, handle));
    }
    drop(tx);

    debug!("dispatched {} probe(s)", handles.len());

    while let Some(report) = rx.recv().await {
        trace!("{report}");
        sink.report(&report);
    }

    // The channel only closes once every task is gone, so these joins never wait long.
    // A task that died before sending still owes its address a report.
    for (ip, handle) in handles {
        if let Err(err) = handle.await {
            warn!("probe task for {ip} ended without a result: {err}");
            let outcome = ProbeOutcome::ConnectionFailed(format!("probe aborted: {err}"));
            sink.report(&ProbeReport::new(ip, None, outcome));
        }
    }
}

/// Classifies `ip`, then dials it if the classification allows.
async fn check_address(dialer: &dyn Dialer, ip: IpAddr, settings: &ProbeSettings) -> ProbeReport {
    let target = match address::classify(ip, settings.port, settings.allow_ipv6) {
        AddressClass::Usable(target) => target,
        AddressClass::Ipv6Disallowed => {
            return ProbeReport::new(ip, None, ProbeOutcome::SkippedIpv6);
        }
        AddressClass::Invalid => {
            return ProbeReport::new(ip, None, ProbeOutcome::InvalidAddress);
        }
    };

    let transport = match &settings.scheme {
        Scheme::Tcp => Transport::Tcp,
        Scheme::Udp => Transport::Udp,
        Scheme::Unsupported(name) => {
            let outcome = ProbeOutcome::UnsupportedScheme(name.clone());
            return ProbeReport::new(ip, Some(target), outcome);
        }
    };

    let outcome = match timeout(settings.timeout, dialer.dial(transport, target)).await {
        Ok(Ok(())) => ProbeOutcome::Open,
        Ok(Err(err)) => ProbeOutcome::ConnectionFailed(format!("dial {transport} {target}: {err}")),
        Err(_elapsed) => {
            ProbeOutcome::ConnectionFailed(format!("dial {transport} {target}: i/o timeout"))
        }
    };

    ProbeReport::new(ip, Some(target), outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
