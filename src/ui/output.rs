//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also print one line per checked tool.
    Verbose,
    /// Progress, status, and the echoed report.
    #[default]
    Normal,
    /// Nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--quiet`/`--verbose` flags. Quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode prints a line per checked tool.
    pub fn shows_entries(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the progress spinner.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages and the report echo.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
