use std::time::Duration;

use crate::network::endpoint::Scheme;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for a single `ping` run. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Raw endpoint reference, parsed by the prober.
    pub raw_endpoint: String,
    /// Replaces the scheme found in `raw_endpoint` when set.
    pub scheme_override: Option<Scheme>,
    /// Time limit of each individual connection attempt.
    pub timeout: Duration,
    /// Dial IPv6 addresses instead of skipping them.
    pub allow_ipv6: bool,
}

impl ProbeRequest {
    pub fn new(raw_endpoint: impl Into<String>) -> Self {
        Self {
            raw_endpoint: raw_endpoint.into(),
            scheme_override: None,
            timeout: DEFAULT_TIMEOUT,
            allow_ipv6: false,
        }
    }

    pub fn with_scheme(mut self, scheme: Option<Scheme>) -> Self {
        self.scheme_override = scheme;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn allow_ipv6(mut self, allow_ipv6: bool) -> Self {
        self.allow_ipv6 = allow_ipv6;
        self
    }
}
