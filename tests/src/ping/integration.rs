#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use astu_common::error::ProbeError;
use astu_common::network::endpoint::Scheme;
use astu_common::network::outcome::{ProbeOutcome, ProbeReport};
use astu_common::network::request::ProbeRequest;
use astu_core::network::resolver::{Resolver, SystemResolver};
use astu_core::prober::Prober;
use tokio::net::TcpListener;

async fn ping(request: ProbeRequest) -> Result<Vec<ProbeReport>, ProbeError> {
    let mut reports: Vec<ProbeReport> = Vec::new();
    Prober::system().ping(&request, &mut reports).await?;
    Ok(reports)
}

/// A loopback port that nothing listens on.
async fn closed_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}

#[tokio::test]
async fn open_tcp_port_is_reported_open() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();

    let reports = ping(ProbeRequest::new(format!("127.0.0.1:{port}"))).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, ProbeOutcome::Open);
    assert_eq!(reports[0].address(), format!("127.0.0.1:{port}"));
    Ok(())
}

#[tokio::test]
async fn closed_tcp_port_reports_the_dial_error() -> anyhow::Result<()> {
    let port = closed_port().await?;

    let reports = ping(ProbeRequest::new(format!("tcp://127.0.0.1:{port}"))).await?;

    assert_eq!(reports.len(), 1);
    match &reports[0].outcome {
        ProbeOutcome::ConnectionFailed(detail) => {
            assert!(
                detail.starts_with(&format!("dial tcp 127.0.0.1:{port}: ")),
                "unexpected detail: {detail}"
            );
        }
        other => panic!("expected ConnectionFailed, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn forced_udp_connects_a_datagram_socket() -> anyhow::Result<()> {
    let request = ProbeRequest::new("127.0.0.1:9").with_scheme(Some(Scheme::Udp));

    let reports = ping(request).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, ProbeOutcome::Open);
    Ok(())
}

#[tokio::test]
async fn ipv6_literal_is_skipped_by_default() -> anyhow::Result<()> {
    let reports = ping(ProbeRequest::new("[::1]:80")).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, ProbeOutcome::SkippedIpv6);
    assert_eq!(reports[0].address(), "::1");
    Ok(())
}

#[tokio::test]
async fn unspecified_ipv4_address_is_dialed() -> anyhow::Result<()> {
    let port = closed_port().await?;
    let reports = ping(ProbeRequest::new(format!("0.0.0.0:{port}"))).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(
        reports[0].target,
        Some(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
    );
    assert_ne!(reports[0].outcome, ProbeOutcome::InvalidAddress);
    Ok(())
}

#[tokio::test]
async fn every_localhost_address_reports_once() -> anyhow::Result<()> {
    let port = closed_port().await?;
    let resolved: Vec<IpAddr> = SystemResolver.resolve("localhost").await?;

    let reports = ping(ProbeRequest::new(format!("localhost:{port}")).allow_ipv6(true)).await?;

    assert_eq!(reports.len(), resolved.len());
    for ip in &resolved {
        assert_eq!(
            reports.iter().filter(|r| r.ip == *ip).count(),
            1,
            "{ip} should be reported exactly once"
        );
    }
    Ok(())
}

#[tokio::test]
async fn unroutable_address_finishes_within_its_timeout() -> anyhow::Result<()> {
    let request = ProbeRequest::new("192.0.2.1:65535").with_timeout(Duration::from_millis(300));

    let start = Instant::now();
    let reports = ping(request).await?;
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].ip, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));
    assert!(matches!(
        reports[0].outcome,
        ProbeOutcome::ConnectionFailed(_)
    ));
    Ok(())
}

#[tokio::test]
async fn bare_host_fails_without_probing() {
    let result = ping(ProbeRequest::new("justahost")).await;
    assert!(matches!(result, Err(ProbeError::MissingPort { .. })));
}

#[tokio::test]
async fn unknown_host_fails_resolution() {
    let result = ping(ProbeRequest::new("astu-should-not-exist.invalid:80")).await;
    assert!(matches!(result, Err(ProbeError::ResolutionFailed { .. })));
}
