//! Dismiss command implementation.
//!
//! The `pickapp dismiss` command records the hint dismissal for the current
//! profile.

use async_trait::async_trait;

use crate::error::Result;
use crate::install::{DismissalStore, DISMISSAL_KEY};
use crate::ui::Renderer;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The dismiss command implementation.
pub struct DismissCommand {
    context: CommandContext,
}

impl DismissCommand {
    /// Create a new dismiss command.
    pub fn new(context: &CommandContext) -> Self {
        Self {
            context: context.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Command for DismissCommand {
    async fn execute(&self, renderer: &mut dyn Renderer) -> Result<CommandResult> {
        let mut store = self.context.dismissal_store();

        if let Err(e) = store.set(DISMISSAL_KEY) {
            renderer.error(&format!("Could not dismiss install hint: {}", e));
            return Ok(CommandResult::failure(1));
        }

        renderer.success("Install hint dismissed for this profile");
        if renderer.output_mode().shows_details() {
            renderer.message(&format!("  {}", store.file_path().display()));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockRenderer;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn records_dismissal() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path())
            .with_state_dir(temp.path())
            .with_user_agent("iPhone");
        let mut renderer = MockRenderer::new();

        let result = DismissCommand::new(&ctx).execute(&mut renderer).await.unwrap();

        assert!(result.success);
        assert_eq!(
            renderer.successes(),
            &["Install hint dismissed for this profile".to_string()]
        );
        assert!(ctx.dismissal_store().get(DISMISSAL_KEY).unwrap());
    }

    #[tokio::test]
    async fn unwritable_state_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("state");
        fs::write(&blocker, "not a directory").unwrap();
        let ctx = CommandContext::new(temp.path())
            .with_state_dir(&blocker)
            .with_user_agent("iPhone");
        let mut renderer = MockRenderer::new();

        let result = DismissCommand::new(&ctx).execute(&mut renderer).await.unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(renderer.has_error("Could not dismiss"));
        assert!(renderer.successes().is_empty());
    }
}
