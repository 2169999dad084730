//! IO boundaries of the prober.
//!
//! Both ports are traits so the prober can be driven by mocks in tests. The `System*`/`Socket*`
//! types are the real adapters used by the CLI.

pub mod dialer;
pub mod resolver;
