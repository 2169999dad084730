//! End-to-end tests of the prober against real loopback sockets and the system resolver.

#[cfg(test)]
mod ping;
