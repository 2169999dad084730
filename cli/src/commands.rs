pub mod ping;
pub mod version;

use astu_common::network::endpoint::Scheme;
use astu_common::network::request::ProbeRequest;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "astu")]
#[command(about = "All-Seeing Trace Utility.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colorized output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Less decorative output, repeat to also silence info logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output, repeat for trace level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check connectivity to a target
    #[command(alias = "p")]
    Ping(PingArgs),
    /// Version and build info for this program
    Version,
}

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Endpoint to probe, e.g. `example.com:443` or `udp://[::1]:53`
    pub endpoint: String,

    /// Connection time limit
    #[arg(short = 'w', long, default_value = "5s")]
    pub timeout: humantime::Duration,

    /// Force use TCP
    #[arg(short, long)]
    pub tcp: bool,

    /// Force use UDP
    #[arg(short, long)]
    pub udp: bool,

    /// Allow IPv6 addresses
    #[arg(short = '6', long = "ipv6")]
    pub ipv6: bool,
}

impl PingArgs {
    /// `--tcp` is checked first, so it wins when both transports are forced.
    pub fn scheme_override(&self) -> Option<Scheme> {
        if self.tcp {
            Some(Scheme::Tcp)
        } else if self.udp {
            Some(Scheme::Udp)
        } else {
            None
        }
    }

    pub fn to_request(&self) -> ProbeRequest {
        ProbeRequest::new(self.endpoint.as_str())
            .with_scheme(self.scheme_override())
            .with_timeout(*self.timeout)
            .allow_ipv6(self.ipv6)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
