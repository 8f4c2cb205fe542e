//! Options command implementation.
//!
//! The `pickapp options` command prints the normalized option set.

use async_trait::async_trait;

use crate::cli::args::OptionsArgs;
use crate::error::{PickError, Result};
use crate::options::normalize;
use crate::ui::Renderer;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The options command implementation.
pub struct OptionsCommand {
    context: CommandContext,
    args: OptionsArgs,
}

impl OptionsCommand {
    /// Create a new options command.
    pub fn new(context: &CommandContext, args: OptionsArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

#[async_trait(?Send)]
impl Command for OptionsCommand {
    async fn execute(&self, renderer: &mut dyn Renderer) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let options = normalize(&config.options);

        if self.args.json {
            let json = serde_json::to_string_pretty(&options)
                .map_err(|e| PickError::Other(e.into()))?;
            renderer.message(&json);
            return Ok(CommandResult::success());
        }

        self.context.apply_default_output(&config, renderer);
        if let Some(name) = &config.app_name {
            renderer.show_header(name);
        }
        renderer.render_options(&options);

        Ok(CommandResult::success())
    }
}
