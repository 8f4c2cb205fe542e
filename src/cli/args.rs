//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::install::{Checkpoint, DisplayMode, PlatformChoice};

/// pickapp - Pick one weighted option, with install prompt handling.
#[derive(Debug, Parser)]
#[command(name = "pickapp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pickapp/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Directory holding per-profile state (defaults to ~/.pickapp)
    #[arg(long, global = true, env = "PICKAPP_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// User agent to probe (overrides PICKAPP_USER_AGENT)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Display mode to probe (overrides PICKAPP_DISPLAY_MODE)
    #[arg(long, global = true, value_parser = parse_display_mode)]
    pub display_mode: Option<DisplayMode>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the options, pick one and confirm it (default if no command specified)
    Run(RunArgs),

    /// Print the normalized option set
    Options(OptionsArgs),

    /// Evaluate whether the install hint is shown
    Hint(HintArgs),

    /// Permanently dismiss the install hint for this profile
    Dismiss,
}

/// Answer given to a simulated native install offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NativeInstall {
    /// Offer an install that the user accepts
    Accept,
    /// Offer an install that the user declines
    Decline,
    /// Offer an install and ask on the terminal
    Ask,
}

impl NativeInstall {
    /// The scripted platform answer, if this is not an interactive offer.
    pub fn scripted_choice(&self) -> Option<PlatformChoice> {
        match self {
            Self::Accept => Some(PlatformChoice::Accepted),
            Self::Decline => Some(PlatformChoice::Dismissed),
            Self::Ask => None,
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Select the option with this id instead of prompting
    #[arg(short, long, value_name = "ID")]
    pub select: Option<String>,

    /// Confirm the selection without asking
    #[arg(long)]
    pub confirm: bool,

    /// Simulate a native install offer
    #[arg(long, value_enum, value_name = "ANSWER")]
    pub native_install: Option<NativeInstall>,

    /// Dismiss the install hint after start
    #[arg(long)]
    pub dismiss_hint: bool,

    /// Use flags and defaults only, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `hint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HintArgs {
    /// Lifecycle checkpoint to evaluate at
    #[arg(long, default_value = "load", value_parser = parse_checkpoint)]
    pub checkpoint: Checkpoint,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for HintArgs {
    fn default() -> Self {
        Self {
            checkpoint: Checkpoint::Load,
            json: false,
        }
    }
}

fn parse_display_mode(s: &str) -> Result<DisplayMode, String> {
    s.parse()
}

fn parse_checkpoint(s: &str) -> Result<Checkpoint, String> {
    s.parse()
}
