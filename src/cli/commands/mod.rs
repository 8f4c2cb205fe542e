//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`pickapp run`, `pickapp hint`)
//! - Shared initialization logic through [`CommandContext`]
//! - Consistent global flag handling

pub mod dismiss;
pub mod dispatcher;
pub mod hint;
pub mod options;
pub mod run;

pub use dispatcher::{default_state_dir, Command, CommandContext, CommandDispatcher, CommandResult};
