//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every result plus a pass/fail tally.
    Verbose,
    /// Show every result and the verdict.
    #[default]
    Normal,
    /// Show only problems and the verdict.
    Quiet,
}

impl OutputMode {
    /// Check if this mode prints passing requirements.
    pub fn shows_passes(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows the progress spinner.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode prints the pass/fail tally.
    pub fn shows_tally(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_passes_and_spinner() {
        assert!(!OutputMode::Quiet.shows_passes());
        assert!(!OutputMode::Quiet.shows_spinners());
        assert!(OutputMode::Normal.shows_passes());
    }

    #[test]
    fn only_verbose_shows_tally() {
        assert!(OutputMode::Verbose.shows_tally());
        assert!(!OutputMode::Normal.shows_tally());
        assert!(!OutputMode::Quiet.shows_tally());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
