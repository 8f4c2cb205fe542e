//! Installation prompt orchestration.
//!
//! This module provides:
//! - [`InstallOrchestrator`] combining native install offers, lifecycle
//!   checkpoints and the persisted dismissal into one hint decision
//! - [`InstallCapability`] for the platform's single-use install offer
//! - [`PlatformProbe`] and [`PlatformSignal`] for environment probes
//! - [`DismissalStore`] with in-memory and file-backed implementations
//!
//! # Example
//!
//! ```
//! use pickapp::install::{EnvPlatform, InstallOrchestrator, MemoryDismissalStore};
//!
//! let platform = EnvPlatform::new().with_user_agent("Mozilla/5.0 (iPhone)");
//! let mut orchestrator =
//!     InstallOrchestrator::new(Box::new(platform), Box::new(MemoryDismissalStore::new()));
//!
//! assert!(orchestrator.evaluate_hint_visibility());
//! assert!(!orchestrator.dismiss());
//! ```

pub mod capability;
pub mod dismissal;
pub mod orchestrator;
pub mod platform;

pub use capability::{
    InstallCapability, InstallOutcome, PlatformChoice, ScriptedCapability, TerminalCapability,
};
pub use dismissal::{
    DismissalStore, FileDismissalStore, MemoryDismissalStore, ProfileId, DISMISSAL_KEY,
};
pub use orchestrator::{Checkpoint, InstallOrchestrator};
pub use platform::{is_handheld_apple_device, DisplayMode, EnvPlatform, PlatformProbe, PlatformSignal};
