use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Result of probing a single address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// The connection was established within the timeout.
    Open,
    /// The dial failed or timed out, with the transport error detail.
    ConnectionFailed(String),
    /// IPv6 address while IPv6 probing is disabled. Never dialed.
    SkippedIpv6,
    /// The address cannot be a connection target. Never dialed.
    InvalidAddress,
    /// The requested transport is neither TCP nor UDP. Never dialed.
    UnsupportedScheme(String),
}

/// How an outcome should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Good,
    Bad,
    Neutral,
}

impl ProbeOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            ProbeOutcome::Open => Verdict::Good,
            ProbeOutcome::SkippedIpv6 => Verdict::Neutral,
            ProbeOutcome::ConnectionFailed(_)
            | ProbeOutcome::InvalidAddress
            | ProbeOutcome::UnsupportedScheme(_) => Verdict::Bad,
        }
    }

    /// Human readable status, the right-hand side of a status line.
    pub fn status(&self) -> String {
        match self {
            ProbeOutcome::Open => "Open".to_string(),
            ProbeOutcome::ConnectionFailed(detail) => detail.clone(),
            ProbeOutcome::SkippedIpv6 => "Skipped".to_string(),
            ProbeOutcome::InvalidAddress => "Not a valid IP address".to_string(),
            ProbeOutcome::UnsupportedScheme(scheme) => format!("Unsupported scheme: {scheme}"),
        }
    }
}

/// One outcome, tied to the address that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    pub ip: IpAddr,
    /// The socket address that was (or would have been) dialed. `None` when the
    /// address was rejected before a target could be formed.
    pub target: Option<SocketAddr>,
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    pub fn new(ip: IpAddr, target: Option<SocketAddr>, outcome: ProbeOutcome) -> Self {
        Self {
            ip,
            target,
            outcome,
        }
    }

    /// `host:port` / `[host]:port` for usable addresses, the bare IP otherwise.
    pub fn address(&self) -> String {
        match self.target {
            Some(target) => target.to_string(),
            None => self.ip.to_string(),
        }
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.address(), self.outcome.status())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_match_outcome_kinds() {
        assert_eq!(ProbeOutcome::Open.verdict(), Verdict::Good);
        assert_eq!(ProbeOutcome::SkippedIpv6.verdict(), Verdict::Neutral);
        assert_eq!(ProbeOutcome::InvalidAddress.verdict(), Verdict::Bad);
        assert_eq!(
            ProbeOutcome::ConnectionFailed("refused".into()).verdict(),
            Verdict::Bad
        );
        assert_eq!(
            ProbeOutcome::UnsupportedScheme("sctp".into()).verdict(),
            Verdict::Bad
        );
    }

    #[test]
    fn report_uses_target_when_present() {
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let report = ProbeReport::new(ip, Some(SocketAddr::new(ip, 80)), ProbeOutcome::Open);
        assert_eq!(report.to_string(), "10.0.0.1:80 → Open");
    }

    #[test]
    fn report_falls_back_to_bare_ip() {
        let ip: IpAddr = "fe80::1".parse().unwrap();
        let report = ProbeReport::new(ip, None, ProbeOutcome::SkippedIpv6);
        assert_eq!(report.to_string(), "fe80::1 → Skipped");

        let ip: IpAddr = "0.0.0.0".parse().unwrap();
        let report = ProbeReport::new(ip, None, ProbeOutcome::InvalidAddress);
        assert_eq!(report.to_string(), "0.0.0.0 → Not a valid IP address");
    }
}
