//! Run command implementation.
//!
//! The `pickapp run` command starts the app, lets the user pick and confirm
//! one option, and drives any simulated install offer.

use async_trait::async_trait;

use crate::app::{App, AppEvent, EventOutcome};
use crate::cli::args::{NativeInstall, RunArgs};
use crate::error::Result;
use crate::install::{InstallCapability, InstallOutcome, ScriptedCapability, TerminalCapability};
use crate::ui::{Prompt, Renderer};
use crate::worker::ScriptRegistrar;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    context: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(context: &CommandContext, args: RunArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn capability(
        &self,
        answer: NativeInstall,
        app_name: &str,
        interactive: bool,
    ) -> Box<dyn InstallCapability> {
        match answer.scripted_choice() {
            Some(choice) => Box::new(ScriptedCapability::answering(choice)),
            None if interactive => Box::new(TerminalCapability::new(app_name)),
            None => Box::new(ScriptedCapability::failing(
                "cannot ask for install in non-interactive mode",
            )),
        }
    }
}

#[async_trait(?Send)]
impl Command for RunCommand {
    async fn execute(&self, renderer: &mut dyn Renderer) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        self.context.apply_default_output(&config, renderer);

        let interactive = renderer.is_interactive() && !self.args.non_interactive;
        let app_name = config.app_name.clone().unwrap_or_else(|| "pickapp".to_string());

        let mut app = App::from_config(&config, self.context.orchestrator(), renderer);
        if let Some(script) = &config.settings.worker_script {
            app = app.with_worker(
                Box::new(ScriptRegistrar::new(self.context.project_root())),
                script,
            );
        }
        app.start();

        if let Some(answer) = self.args.native_install {
            let capability = self.capability(answer, &app_name, interactive);
            app.handle(AppEvent::CapabilityOffered(capability)).await;
        }

        if self.args.dismiss_hint {
            app.handle(AppEvent::UserDismissed).await;
        }

        let selected = match &self.args.select {
            Some(id) => Some(id.clone()),
            None if interactive => {
                let prompt =
                    Prompt::select_option("option", "Pick an option", app.selection().options());
                Some(app.renderer_mut().prompt(&prompt)?.as_string())
            }
            None => None,
        };

        if let Some(id) = selected {
            if app.handle(AppEvent::UserSelected(id.clone())).await == EventOutcome::Ignored {
                app.renderer_mut().error(&format!("Unknown option '{}'", id));
                return Ok(CommandResult::failure(1));
            }

            let confirm = if self.args.confirm {
                true
            } else if interactive {
                let question = format!("Confirm {}?", id);
                app.renderer_mut()
                    .prompt(&Prompt::confirm("confirm", &question, true))?
                    .as_bool()
                    .unwrap_or(false)
            } else {
                false
            };

            if confirm {
                app.handle(AppEvent::ConfirmRequested).await;
            }
        } else if self.args.confirm {
            app.renderer_mut()
                .warning("Nothing selected; use --select <id> to pick an option");
        }

        if self.args.native_install.is_some() {
            if let EventOutcome::Install(outcome) = app.handle(AppEvent::InstallRequested).await {
                let renderer = app.renderer_mut();
                match outcome {
                    InstallOutcome::Accepted => renderer.success("Install accepted"),
                    InstallOutcome::Declined => renderer.message("Install declined"),
                    InstallOutcome::Failed(reason) => {
                        renderer.warning(&format!("Install failed: {}", reason))
                    }
                    InstallOutcome::Unavailable => {}
                }
            }
        }

        Ok(CommandResult::success())
    }
}
