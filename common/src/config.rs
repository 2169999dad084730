/// Process-wide settings, built once in `main` and passed to every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Reduces decorative output.
    ///
    /// `1` drops headers and the summary, `2` and above also silences info logs.
    /// Status lines are always printed.
    pub quiet: u8,
    /// Raises the log level, one step per flag occurrence.
    pub verbose: u8,
    /// Disables ANSI colors in every writer.
    pub no_color: bool,
}
