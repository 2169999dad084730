//! # Endpoint references
//!
//! Parses the raw reference handed to `astu ping` into a [`ResolvedEndpoint`].
//!
//! Supported formats:
//! * **Host and port**: `example.com:443`, `10.0.0.1:22`, `[::1]:8080`.
//! * **With scheme**: `tcp://example.com:443`, `udp://[2001:db8::1]:53`.
//!
//! A reference without `://` is read as if it started with `tcp://`. Any scheme is accepted
//! syntactically, `http://host:80` keeps its port, and only `tcp`/`udp` survive without an
//! override.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use url::{Host, Url};

use crate::error::{ProbeError, Result};

const DEFAULT_SCHEME: &str = "tcp";

/// Transport requested for a probe.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    Tcp,
    Udp,
    /// Anything else. Only reaches the prober through an override or a direct caller.
    Unsupported(String),
}

impl FromStr for Scheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "tcp" => Scheme::Tcp,
            "udp" => Scheme::Udp,
            other => Scheme::Unsupported(other.to_string()),
        })
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Tcp => f.write_str("tcp"),
            Scheme::Udp => f.write_str("udp"),
            Scheme::Unsupported(name) => f.write_str(name),
        }
    }
}

/// Host, port and scheme extracted from a raw endpoint reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    /// Hostname or IP literal, IPv6 without brackets.
    pub host: String,
    pub port: u16,
    pub scheme: Scheme,
}

/// Parses `raw` into a [`ResolvedEndpoint`].
///
/// `scheme_override` replaces whatever scheme the reference carries, without validating it.
pub fn parse(raw: &str, scheme_override: Option<Scheme>) -> Result<ResolvedEndpoint> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(malformed(raw, url::ParseError::EmptyHost));
    }

    // A bare IP literal would otherwise trip the port parser on its own colons.
    if trimmed.parse::<IpAddr>().is_ok() {
        return Err(ProbeError::MissingPort {
            endpoint: raw.to_string(),
        });
    }

    // `url` drops a port equal to a special scheme's default (`http://host:80`), so only the
    // default scheme ever reaches it and the scheme text is kept apart.
    let (scheme_name, authority) = match trimmed.split_once("://") {
        Some(("", _)) => return Err(malformed(raw, url::ParseError::RelativeUrlWithoutBase)),
        Some((scheme_name, authority)) => (scheme_name, authority),
        None => (DEFAULT_SCHEME, trimmed),
    };

    let url = Url::parse(&format!("{DEFAULT_SCHEME}://{authority}"))
        .map_err(|e| malformed(raw, e))?;

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(ipv4_addr)) => ipv4_addr.to_string(),
        Some(Host::Ipv6(ipv6_addr)) => ipv6_addr.to_string(),
        _ => return Err(malformed(raw, url::ParseError::EmptyHost)),
    };

    let Some(port) = url.port() else {
        return Err(ProbeError::MissingPort {
            endpoint: raw.to_string(),
        });
    };

    let scheme = match scheme_override {
        Some(scheme) => scheme,
        None => parse_scheme(raw, scheme_name)?,
    };

    Ok(ResolvedEndpoint { host, port, scheme })
}

fn parse_scheme(raw: &str, name: &str) -> Result<Scheme> {
    match Scheme::from_str(name) {
        Ok(Scheme::Unsupported(scheme)) => Err(ProbeError::UnsupportedScheme {
            endpoint: raw.to_string(),
            scheme,
        }),
        Ok(scheme) => Ok(scheme),
        Err(never) => match never {},
    }
}

fn malformed(raw: &str, source: url::ParseError) -> ProbeError {
    ProbeError::MalformedEndpoint {
        endpoint: raw.to_string(),
        source,
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
