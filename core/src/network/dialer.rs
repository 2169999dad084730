use std::fmt;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use async_trait::async_trait;
use tokio::net::{TcpStream, UdpSocket};

/// Transports the dialer knows how to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transport {
    Tcp,
    Udp,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Tcp => f.write_str("tcp"),
            Transport::Udp => f.write_str("udp"),
        }
    }
}

/// A single connection attempt.
///
/// Implementations do not need to enforce a timeout: the prober bounds every call itself.
#[async_trait]
pub trait Dialer: Send + Sync {
    async fn dial(&self, transport: Transport, target: SocketAddr) -> io::Result<()>;
}

/// Dials with real sockets.
///
/// TCP completes a handshake. UDP only binds and connects a datagram socket, no packet
/// is sent, so it succeeds whenever a local route exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct SocketDialer;

#[async_trait]
impl Dialer for SocketDialer {
    async fn dial(&self, transport: Transport, target: SocketAddr) -> io::Result<()> {
        match transport {
            Transport::Tcp => {
                let _stream = TcpStream::connect(target).await?;
                Ok(())
            }
            Transport::Udp => {
                let socket = UdpSocket::bind(unspecified_for(&target)).await?;
                socket.connect(target).await
            }
        }
    }
}

fn unspecified_for(target: &SocketAddr) -> SocketAddr {
    let ip = match target {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };
    SocketAddr::new(ip, 0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
