//! Install prompt orchestration.
//!
//! [`InstallOrchestrator`] holds the deferred native install capability and
//! decides whether the "add to home screen" hint is shown on engines without
//! a native install event. Visibility is recomputed from live probes and the
//! dismissal store at every lifecycle checkpoint and never cached.

use std::str::FromStr;

use tracing::{debug, info, warn};

use super::capability::{InstallCapability, InstallOutcome};
use super::dismissal::{DismissalStore, DISMISSAL_KEY};
use super::platform::{PlatformProbe, PlatformSignal};

/// Page lifecycle points at which hint visibility is re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// Initial page load.
    Load,
    /// Page restored from the background or the back-forward cache.
    PageShow,
    /// Page visibility changed.
    VisibilityChange,
}

impl FromStr for Checkpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "load" => Ok(Self::Load),
            "pageshow" => Ok(Self::PageShow),
            "visibilitychange" => Ok(Self::VisibilityChange),
            _ => Err(format!("unknown checkpoint: {}", s)),
        }
    }
}

impl Checkpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::PageShow => "pageshow",
            Self::VisibilityChange => "visibilitychange",
        }
    }
}

/// Reconciles native install offers, lifecycle checkpoints and the persisted
/// dismissal into install affordance decisions.
pub struct InstallOrchestrator {
    platform: Box<dyn PlatformProbe>,
    store: Box<dyn DismissalStore>,
    capability: Option<Box<dyn InstallCapability>>,
    dismissed_this_session: bool,
}

impl InstallOrchestrator {
    /// Create an orchestrator over a platform probe and a dismissal store.
    pub fn new(platform: Box<dyn PlatformProbe>, store: Box<dyn DismissalStore>) -> Self {
        Self {
            platform,
            store,
            capability: None,
            dismissed_this_session: false,
        }
    }

    /// Take a native install offer.
    ///
    /// The platform's own prompt is suppressed so the application decides
    /// when to show it. A newly offered capability replaces a held one.
    pub fn on_capability_offered(&mut self, mut capability: Box<dyn InstallCapability>) {
        capability.suppress_default_prompt();
        if self.capability.replace(capability).is_some() {
            debug!("Replacing previously offered install capability");
        }
        info!("Native install capability offered");
    }

    /// Whether a native install offer is held.
    pub fn has_capability(&self) -> bool {
        self.capability.is_some()
    }

    /// Prompt the user with the held capability.
    ///
    /// Returns [`InstallOutcome::Unavailable`] when nothing is held. The
    /// capability is consumed by the first call regardless of the outcome,
    /// and a failing platform is reported as [`InstallOutcome::Failed`].
    pub async fn trigger_install(&mut self) -> InstallOutcome {
        let Some(mut capability) = self.capability.take() else {
            debug!("Install requested without a native capability");
            return InstallOutcome::Unavailable;
        };

        let outcome = match capability.prompt().await {
            Ok(choice) => InstallOutcome::from(choice),
            Err(e) => {
                warn!("Install prompt failed: {}", e);
                InstallOutcome::Failed(e.to_string())
            }
        };

        info!("Install prompt resolved: {}", outcome.as_str());
        outcome
    }

    /// Probe the platform now.
    pub fn platform_signal(&self) -> PlatformSignal {
        PlatformSignal::probe(self.platform.as_ref())
    }

    /// Whether the install hint should be visible.
    ///
    /// True iff the device is a handheld Apple device, the page is not
    /// running standalone and the hint has not been dismissed.
    pub fn evaluate_hint_visibility(&self) -> bool {
        let signal = self.platform_signal();
        let visible =
            signal.is_handheld_apple_device && !signal.is_running_standalone && !self.is_dismissed();

        debug!(
            "Hint visibility: handheld_apple={} standalone={} -> {}",
            signal.is_handheld_apple_device, signal.is_running_standalone, visible
        );
        visible
    }

    /// Re-evaluate hint visibility at a lifecycle checkpoint.
    pub fn on_lifecycle_checkpoint(&self, checkpoint: Checkpoint) -> bool {
        debug!("Lifecycle checkpoint: {}", checkpoint.as_str());
        self.evaluate_hint_visibility()
    }

    /// Permanently dismiss the hint for this device/profile.
    ///
    /// Returns the recomputed visibility, which is false from here on. If the
    /// record cannot be written the hint stays hidden for this process only.
    pub fn dismiss(&mut self) -> bool {
        if let Err(e) = self.store.set(DISMISSAL_KEY) {
            warn!("Could not persist hint dismissal: {}", e);
        }
        self.dismissed_this_session = true;
        self.evaluate_hint_visibility()
    }

    fn is_dismissed(&self) -> bool {
        if self.dismissed_this_session {
            return true;
        }

        self.store.get(DISMISSAL_KEY).unwrap_or_else(|e| {
            warn!("Could not read hint dismissal ({}); treating as not dismissed", e);
            false
        })
    }
}
