//! Platform probes for install-hint decisions.
//!
//! A [`PlatformProbe`] answers questions about the running engine (user
//! agent, display mode). [`PlatformSignal`] is derived from it on demand and
//! never stored, since an install or display-mode change can happen between
//! two lifecycle checkpoints.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Handheld Apple devices, which lack a native install event.
static HANDHELD_APPLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)iphone|ipad|ipod").expect("HANDHELD_APPLE_REGEX must compile")
});

/// Environment variable carrying the user agent.
pub const USER_AGENT_ENV: &str = "PICKAPP_USER_AGENT";
/// Environment variable carrying the display mode.
pub const DISPLAY_MODE_ENV: &str = "PICKAPP_DISPLAY_MODE";
/// Environment variable carrying the engine's standalone flag.
pub const STANDALONE_ENV: &str = "PICKAPP_STANDALONE";

/// Display mode the page is running in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Regular browser tab.
    #[default]
    Browser,
    /// Installed application window.
    Standalone,
    /// Installed, minimal browser chrome.
    MinimalUi,
    /// Installed, full screen.
    Fullscreen,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "browser" => Ok(Self::Browser),
            "standalone" => Ok(Self::Standalone),
            "minimal-ui" | "minimal_ui" => Ok(Self::MinimalUi),
            "fullscreen" => Ok(Self::Fullscreen),
            _ => Err(format!("unknown display mode: {}", s)),
        }
    }
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Fullscreen => "fullscreen",
        }
    }
}

/// Environment probes exposed by the hosting platform.
pub trait PlatformProbe {
    /// The engine's user agent string.
    fn user_agent(&self) -> String;

    /// The engine's own standalone flag, where it has one.
    fn standalone_flag(&self) -> Option<bool>;

    /// The current display mode.
    fn display_mode(&self) -> DisplayMode;
}

/// Signals derived from the platform probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSignal {
    pub is_handheld_apple_device: bool,
    pub is_running_standalone: bool,
}

impl PlatformSignal {
    /// Probe the platform now.
    pub fn probe(platform: &dyn PlatformProbe) -> Self {
        Self {
            is_handheld_apple_device: is_handheld_apple_device(&platform.user_agent()),
            is_running_standalone: platform.standalone_flag() == Some(true)
                || platform.display_mode() == DisplayMode::Standalone,
        }
    }
}

/// Whether the user agent belongs to an iPhone, iPad or iPod.
pub fn is_handheld_apple_device(user_agent: &str) -> bool {
    HANDHELD_APPLE_REGEX.is_match(user_agent)
}

/// Platform probe backed by environment variables, with explicit overrides.
///
/// Values are read on every call, so a change between checkpoints is seen.
///
/// # Example
///
/// ```
/// use pickapp::install::{EnvPlatform, PlatformProbe};
///
/// let platform = EnvPlatform::new().with_user_agent("Mozilla/5.0 (iPhone)");
/// assert_eq!(platform.user_agent(), "Mozilla/5.0 (iPhone)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvPlatform {
    user_agent: Option<String>,
    display_mode: Option<DisplayMode>,
    standalone: Option<bool>,
    env_fn: Option<fn(&str) -> Option<String>>,
}

impl EnvPlatform {
    /// Create a probe reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with a custom env var lookup (for testing).
    pub fn with_env(env_fn: fn(&str) -> Option<String>) -> Self {
        Self {
            env_fn: Some(env_fn),
            ..Self::default()
        }
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Override the display mode.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = Some(mode);
        self
    }

    /// Override the standalone flag.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    fn env(&self, key: &str) -> Option<String> {
        match self.env_fn {
            Some(f) => f(key),
            None => std::env::var(key).ok(),
        }
    }
}

impl PlatformProbe for EnvPlatform {
    fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .or_else(|| self.env(USER_AGENT_ENV))
            .unwrap_or_default()
    }

    fn standalone_flag(&self) -> Option<bool> {
        self.standalone.or_else(|| {
            self.env(STANDALONE_ENV)
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        })
    }

    fn display_mode(&self) -> DisplayMode {
        if let Some(mode) = self.display_mode {
            return mode;
        }
        match self.env(DISPLAY_MODE_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; assuming browser", e);
                DisplayMode::Browser
            }),
            None => DisplayMode::Browser,
        }
    }
}
