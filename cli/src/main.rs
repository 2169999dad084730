mod commands;
mod terminal;

use std::io;

use astu_common::config::Config;
use commands::{CommandLine, Commands, ping, version};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };

    if cfg.no_color {
        colored::control::set_override(false);
    }

    let stdout = logging::init_logging(&cfg);

    match commands.command {
        Commands::Ping(args) => {
            print::header("checking connectivity", cfg.quiet);
            ping::ping(args, stdout, &cfg).await
        }
        Commands::Version => Ok(version::version(&mut io::stdout().lock())?),
    }
}
