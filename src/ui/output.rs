//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including captured command output.
    Verbose,
    /// Show every check line.
    #[default]
    Normal,
    /// Show problems and the final tally only.
    Quiet,
    /// Show nothing on stdout.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows captured command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-check detail lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows warnings, errors and the summary.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
