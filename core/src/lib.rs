//! # astu core
//!
//! The connectivity prober behind `astu ping`.
//!
//! * **[`network`]**: the IO ports (resolving names, dialing sockets) and their system adapters.
//! * **[`prober`]**: the concurrent fan-out over every resolved address.

pub mod network;
pub mod prober;
