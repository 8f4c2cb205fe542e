//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including option details.
    Verbose,
    /// Show options, prompts and status.
    #[default]
    Normal,
    /// Show minimal output (final confirmation only).
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<crate::config::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::OutputMode) -> Self {
        match config_mode {
            crate::config::OutputMode::Verbose => Self::Verbose,
            crate::config::OutputMode::Normal => Self::Normal,
            crate::config::OutputMode::Quiet => Self::Quiet,
            crate::config::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows per-option details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode paints the option list and affordance changes.
    pub fn shows_options(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("loud".parse::<OutputMode>().is_err());
    }

    #[test]
    fn converts_from_config_mode() {
        assert_eq!(
            OutputMode::from(crate::config::OutputMode::Silent),
            OutputMode::Silent
        );
    }

    #[test]
    fn mode_capabilities() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(OutputMode::Normal.shows_options());
        assert!(!OutputMode::Quiet.shows_options());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }
}
