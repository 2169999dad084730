use std::io::{self, Write};

const UNKNOWN: &str = "unknown";

/// Build metadata baked in at compile time.
pub struct VersionInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
    pub built_by: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("ASTU_COMMIT").unwrap_or(UNKNOWN),
            date: option_env!("ASTU_BUILD_DATE").unwrap_or(UNKNOWN),
            built_by: option_env!("ASTU_BUILT_BY").unwrap_or(UNKNOWN),
        }
    }
}

pub fn version<W: Write>(out: &mut W) -> io::Result<()> {
    write_info(out, &VersionInfo::current())
}

fn write_info<W: Write>(out: &mut W, info: &VersionInfo) -> io::Result<()> {
    writeln!(out, "version: {}", info.version)?;
    writeln!(out, "commit: {}", info.commit)?;
    writeln!(out, "date: {}", info.date)?;
    writeln!(out, "builtBy: {}", info.built_by)?;
    out.flush()
}
