use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use astu_common::config::Config;
use astu_core::prober::Prober;
use colored::*;
use tracing::Instrument;

use crate::commands::PingArgs;
use crate::mprint;
use crate::terminal::{colors, print, spinner, status::TerminalSink};

pub async fn ping<W: Write + Send>(args: PingArgs, out: W, cfg: &Config) -> anyhow::Result<()> {
    let request = args.to_request();
    let prober = Prober::system();
    let mut sink = TerminalSink::new(out);

    let start_time: Instant = Instant::now();
    prober
        .ping(&request, &mut sink)
        .instrument(spinner::probing_span(&request.raw_endpoint))
        .await
        .with_context(|| format!("ping {} failed", request.raw_endpoint))?;

    print_summary(sink.reported(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(reported: usize, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let unit: &str = if reported == 1 { "address" } else { "addresses" };
    let count: ColoredString = format!("{reported} {unit}").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Ping complete: {count} reported in {total_time}").color(colors::TEXT_DEFAULT);

    mprint!();
    print::fat_separator();
    print::centerln(&output.to_string());
}
