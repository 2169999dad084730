use astu_common::network::outcome::{ProbeReport, Verdict};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const PRINT_TARGET: &str = "astu::print";
pub const RAW_FIELD: &str = "raw_msg";
pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Decorative output. Travels through tracing so it lands above the spinner on stderr.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn status_marker(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Good => "✔".color(colors::GOOD),
        Verdict::Bad => "✗".color(colors::BAD),
        Verdict::Neutral => "•".color(colors::NEUTRAL),
    }
}

/// `<marker> <address> → <status>`
pub fn status_line(report: &ProbeReport) -> String {
    format!("{} {}", status_marker(report.outcome.verdict()), report)
}
