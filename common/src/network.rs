//! # Network model
//!
//! Everything the prober needs to know about a target, without doing any IO.
//!
//! * [`endpoint`]: turns a raw reference like `tcp://host:80` into host, port and scheme.
//! * [`address`]: decides whether a resolved address may be dialed.
//! * [`outcome`]: the per-address result reported by a probe.
//! * [`request`]: the caller-supplied probe options.

pub mod address;
pub mod endpoint;
pub mod outcome;
pub mod request;
