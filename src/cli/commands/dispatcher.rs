//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] carrying the global flags every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, validate, PickConfig, PROJECT_DIR};
use crate::error::Result;
use crate::install::{
    DisplayMode, EnvPlatform, FileDismissalStore, InstallOrchestrator, PlatformProbe, ProfileId,
};
use crate::ui::{OutputMode, Renderer};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Renderer for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    async fn execute(&self, renderer: &mut dyn Renderer) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Global settings shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    state_dir: PathBuf,
    user_agent: Option<String>,
    display_mode: Option<DisplayMode>,
}

impl CommandContext {
    /// Create a context for `project_root` with default state location.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            state_dir: default_state_dir(project_root),
            user_agent: None,
            display_mode: None,
        }
    }

    /// Create a context from the global CLI flags.
    pub fn from_cli(cli: &Cli, project_root: &Path) -> Self {
        let mut ctx = Self::new(project_root);
        ctx.config_path = cli.config.clone();
        if let Some(dir) = &cli.state_dir {
            ctx.state_dir = dir.clone();
        }
        ctx.user_agent = cli.user_agent.clone();
        ctx.display_mode = cli.display_mode;
        ctx
    }

    /// Use an explicit config file.
    pub fn with_config_path(mut self, path: &Path) -> Self {
        self.config_path = Some(path.to_path_buf());
        self
    }

    /// Keep per-profile state under `dir`.
    pub fn with_state_dir(mut self, dir: &Path) -> Self {
        self.state_dir = dir.to_path_buf();
        self
    }

    /// Probe this user agent instead of the environment's.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Probe this display mode instead of the environment's.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = Some(mode);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the state directory.
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Load and validate the configuration.
    pub fn load_config(&self) -> Result<PickConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// Platform probes with the flag overrides applied.
    pub fn platform(&self) -> EnvPlatform {
        let mut platform = EnvPlatform::new();
        if let Some(user_agent) = &self.user_agent {
            platform = platform.with_user_agent(user_agent);
        }
        if let Some(mode) = self.display_mode {
            platform = platform.with_display_mode(mode);
        }
        platform
    }

    /// The profile the current user agent maps to.
    pub fn profile(&self) -> ProfileId {
        ProfileId::from_user_agent(&self.platform().user_agent())
    }

    /// The dismissal store of the current profile.
    pub fn dismissal_store(&self) -> FileDismissalStore {
        FileDismissalStore::new(&self.state_dir, &self.profile())
    }

    /// An orchestrator over the current platform and profile store.
    pub fn orchestrator(&self) -> InstallOrchestrator {
        InstallOrchestrator::new(
            Box::new(self.platform()),
            Box::new(self.dismissal_store()),
        )
    }

    /// Apply the configured default output when no flag chose one.
    pub fn apply_default_output(&self, config: &PickConfig, renderer: &mut dyn Renderer) {
        if renderer.output_mode() == OutputMode::Normal {
            renderer.set_output_mode(config.settings.default_output.into());
        }
    }
}

/// Default location of per-profile state.
///
/// `~/.pickapp` when a home directory is known, otherwise inside the project.
pub fn default_state_dir(project_root: &Path) -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(PROJECT_DIR))
        .unwrap_or_else(|| project_root.join(PROJECT_DIR).join("state"))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub async fn dispatch(&self, cli: &Cli, renderer: &mut dyn Renderer) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.context, args.clone());
                cmd.execute(renderer).await
            }
            Some(Commands::Options(args)) => {
                let cmd = super::options::OptionsCommand::new(&self.context, args.clone());
                cmd.execute(renderer).await
            }
            Some(Commands::Hint(args)) => {
                let cmd = super::hint::HintCommand::new(&self.context, args.clone());
                cmd.execute(renderer).await
            }
            Some(Commands::Dismiss) => {
                let cmd = super::dismiss::DismissCommand::new(&self.context);
                cmd.execute(renderer).await
            }
            None => {
                // Default to run command with default args
                let cmd = super::run::RunCommand::new(&self.context, RunArgs::default());
                cmd.execute(renderer).await
            }
        }
    }
}
