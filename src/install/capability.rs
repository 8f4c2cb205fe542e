//! Native install capability.
//!
//! An [`InstallCapability`] is the platform's pending offer to install the
//! page. It is usable at most once: the orchestrator takes it out of its slot
//! before prompting and drops it afterwards, whatever the user decided.

use anyhow::Context;
use async_trait::async_trait;
use console::Term;
use dialoguer::Confirm;

/// The user's answer to the platform's install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformChoice {
    Accepted,
    Dismissed,
}

/// Result of an install attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No capability was held.
    Unavailable,
    /// The user accepted the install.
    Accepted,
    /// The user declined the install.
    Declined,
    /// The platform failed or revoked the offer.
    Failed(String),
}

impl InstallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Failed(_) => "failed",
        }
    }
}

impl From<PlatformChoice> for InstallOutcome {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Accepted => Self::Accepted,
            PlatformChoice::Dismissed => Self::Declined,
        }
    }
}

/// A pending native install offer.
#[async_trait(?Send)]
pub trait InstallCapability {
    /// Suppress the platform's own install UI for this offer.
    fn suppress_default_prompt(&mut self);

    /// Show the platform's install prompt and wait for the user's choice.
    async fn prompt(&mut self) -> anyhow::Result<PlatformChoice>;
}

/// Capability whose prompt resolves with a predetermined answer.
///
/// Used by the non-interactive shell and by tests.
#[derive(Debug, Clone)]
pub struct ScriptedCapability {
    answer: Result<PlatformChoice, String>,
    default_suppressed: bool,
}

impl ScriptedCapability {
    /// Capability whose prompt returns `choice`.
    pub fn answering(choice: PlatformChoice) -> Self {
        Self {
            answer: Ok(choice),
            default_suppressed: false,
        }
    }

    /// Capability whose prompt fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            answer: Err(reason.to_string()),
            default_suppressed: false,
        }
    }

    /// Whether the default platform UI was suppressed.
    pub fn default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}

#[async_trait(?Send)]
impl InstallCapability for ScriptedCapability {
    fn suppress_default_prompt(&mut self) {
        self.default_suppressed = true;
    }

    async fn prompt(&mut self) -> anyhow::Result<PlatformChoice> {
        self.answer.clone().map_err(|reason| anyhow::anyhow!(reason))
    }
}

/// Capability that asks the user on the terminal.
///
/// The blocking prompt runs on the runtime's blocking pool.
#[derive(Debug, Clone)]
pub struct TerminalCapability {
    app_name: String,
    default_suppressed: bool,
}

impl TerminalCapability {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            default_suppressed: false,
        }
    }

    /// Whether the default platform UI was suppressed.
    pub fn default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}

#[async_trait(?Send)]
impl InstallCapability for TerminalCapability {
    fn suppress_default_prompt(&mut self) {
        self.default_suppressed = true;
    }

    async fn prompt(&mut self) -> anyhow::Result<PlatformChoice> {
        let question = format!("Install {}?", self.app_name);
        let accepted = tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(question)
                .default(true)
                .interact_on(&Term::stderr())
        })
        .await
        .context("install prompt was interrupted")??;

        Ok(if accepted {
            PlatformChoice::Accepted
        } else {
            PlatformChoice::Dismissed
        })
    }
}
