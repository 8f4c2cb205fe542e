//! pickapp - Weighted option picker with install prompt orchestration.
//!
//! pickapp presents a small set of options with percentages that always sum
//! to 100, tracks a single selection through to confirmation, and decides
//! when to offer installing the app: through a native install capability
//! where the platform provides one, or through an "add to home screen" hint
//! on handheld Apple devices.
//!
//! # Modules
//!
//! - [`app`] - Composition root routing named events
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install capability, platform probes and hint dismissal
//! - [`options`] - Option records and percentage normalization
//! - [`selection`] - Single-selection state
//! - [`ui`] - Renderers, prompts, and terminal output
//! - [`worker`] - Background worker registration
//!
//! # Example
//!
//! ```
//! use pickapp::config::OptionConfig;
//! use pickapp::options::normalize;
//! use pickapp::selection::SelectionState;
//!
//! let options = normalize(&[
//!     OptionConfig::new("opt1", "Option 1", 3.0),
//!     OptionConfig::new("opt2", "Option 2", 1.0),
//! ]);
//!
//! let mut state = SelectionState::new(options);
//! assert!(!state.can_confirm());
//! assert!(state.select("opt2"));
//! assert_eq!(
//!     state.confirm().unwrap().confirmation_text(),
//!     "You selected: Option 2 (25%)"
//! );
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod options;
pub mod selection;
pub mod ui;
pub mod worker;

pub use error::{PickError, Result};
