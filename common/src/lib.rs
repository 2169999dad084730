//! # astu common
//!
//! Shared domain types for the `astu` workspace.
//!
//! * **[`network`]**: endpoint parsing, address classification and probe outcomes.
//! * **[`error`]**: the fatal error taxonomy of a probe request.
//! * **[`config`]**: process-wide settings built once from the command line.

pub mod config;
pub mod error;
pub mod network;
