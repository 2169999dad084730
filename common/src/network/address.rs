use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// What a probe may do with a resolved address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressClass {
    /// Dial this socket address.
    Usable(SocketAddr),
    /// IPv6 while IPv6 is not allowed.
    Ipv6Disallowed,
    /// Neither an IPv4 nor an IPv6 form. Typed addresses never land here.
    Invalid,
}

/// Classifies `ip` before any socket is opened for it.
///
/// Every IPv4 address is usable, including unspecified and broadcast ones: the platform
/// decides what a dial to them means. IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count
/// as IPv4 and are dialed as such.
pub fn classify(ip: IpAddr, port: u16, allow_ipv6: bool) -> AddressClass {
    match ip {
        IpAddr::V4(ipv4_addr) => usable_v4(ipv4_addr, port),
        IpAddr::V6(ipv6_addr) => match ipv6_addr.to_ipv4_mapped() {
            Some(ipv4_addr) => usable_v4(ipv4_addr, port),
            None if allow_ipv6 => {
                AddressClass::Usable(SocketAddr::new(IpAddr::V6(ipv6_addr), port))
            }
            None => AddressClass::Ipv6Disallowed,
        },
    }
}

fn usable_v4(ipv4_addr: Ipv4Addr, port: u16) -> AddressClass {
    AddressClass::Usable(SocketAddr::new(IpAddr::V4(ipv4_addr), port))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
