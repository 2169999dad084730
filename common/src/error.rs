use std::io;

use thiserror::Error;

/// Errors that abort a whole probe request.
///
/// Per-address problems are never reported through this type, see
/// [`ProbeOutcome`](crate::network::outcome::ProbeOutcome). Underlying causes are kept as
/// `source` rather than folded into the message.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("malformed endpoint '{endpoint}'")]
    MalformedEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("malformed endpoint '{endpoint}': unsupported scheme '{scheme}'")]
    UnsupportedScheme { endpoint: String, scheme: String },

    #[error("no port found: {endpoint}")]
    MissingPort { endpoint: String },

    #[error("couldn't resolve host {host}")]
    ResolutionFailed {
        host: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProbeError>;
