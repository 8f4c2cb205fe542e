//! Hint command implementation.
//!
//! The `pickapp hint` command evaluates install hint visibility for the
//! current profile at a lifecycle checkpoint.

use async_trait::async_trait;
use serde_json::json;

use crate::cli::args::HintArgs;
use crate::error::{PickError, Result};
use crate::ui::Renderer;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The hint command implementation.
pub struct HintCommand {
    context: CommandContext,
    args: HintArgs,
}

impl HintCommand {
    /// Create a new hint command.
    pub fn new(context: &CommandContext, args: HintArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

#[async_trait(?Send)]
impl Command for HintCommand {
    async fn execute(&self, renderer: &mut dyn Renderer) -> Result<CommandResult> {
        let orchestrator = self.context.orchestrator();
        let signal = orchestrator.platform_signal();
        let visible = orchestrator.on_lifecycle_checkpoint(self.args.checkpoint);

        if self.args.json {
            let report = json!({
                "checkpoint": self.args.checkpoint.as_str(),
                "visible": visible,
                "handheld_apple_device": signal.is_handheld_apple_device,
                "running_standalone": signal.is_running_standalone,
                "profile": self.context.profile().hash(),
            });
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| PickError::Other(e.into()))?;
            renderer.message(&json);
            return Ok(CommandResult::success());
        }

        renderer.message(&format!(
            "Install hint: {}",
            if visible { "visible" } else { "hidden" }
        ));
        if renderer.output_mode().shows_details() {
            renderer.message(&format!(
                "  handheld Apple device: {}",
                signal.is_handheld_apple_device
            ));
            renderer.message(&format!(
                "  running standalone: {}",
                signal.is_running_standalone
            ));
            renderer.message(&format!(
                "  state: {}",
                self.context.dismissal_store().file_path().display()
            ));
        }
        renderer.set_hint_visible(visible);

        Ok(CommandResult::success())
    }
}
