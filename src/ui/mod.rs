//! Rendering and user prompts.
//!
//! This module provides:
//! - [`Renderer`] trait through which the core paints options, reflects the
//!   selection and shows install affordances
//! - [`TerminalRenderer`] for interactive terminal usage
//! - [`PlainRenderer`] for scripted/headless environments
//! - [`MockRenderer`] capturing every call for tests
//!
//! # Example
//!
//! ```
//! use pickapp::ui::{create_renderer, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut renderer = create_renderer(false, OutputMode::Quiet);
//! renderer.show_header("Pick one");
//! renderer.success("Saved");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockRenderer;
pub use non_interactive::PlainRenderer;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_renderer, TerminalRenderer};
pub use theme::{should_use_colors, PickTheme};

use crate::error::Result;
use crate::options::PickOption;

/// Hint shown on handheld Apple devices, which have no native install prompt.
pub const INSTALL_HINT: &str =
    "Install this app: tap the Share button, then \"Add to Home Screen\".";

/// Trait for rendering and user interaction.
///
/// This trait allows mocking the UI in tests.
pub trait Renderer {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Paint the option set, one selection affordance per option.
    ///
    /// Each affordance carries the option id and its accessible label.
    fn render_options(&mut self, options: &[PickOption]);

    /// Mark the option with `id` as the selected one.
    fn reflect_selection(&mut self, id: &str);

    /// Enable or disable the confirm affordance.
    fn set_confirm_enabled(&mut self, enabled: bool);

    /// Display the confirmation text for a confirmed option.
    fn show_confirmation(&mut self, text: &str);

    /// Show or hide the install hint.
    fn set_hint_visible(&mut self, visible: bool);

    /// Enable or disable the native install affordance.
    fn set_install_enabled(&mut self, enabled: bool);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Set the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn output_mode(&self) -> OutputMode {
        (**self).output_mode()
    }

    fn message(&mut self, msg: &str) {
        (**self).message(msg)
    }

    fn success(&mut self, msg: &str) {
        (**self).success(msg)
    }

    fn warning(&mut self, msg: &str) {
        (**self).warning(msg)
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg)
    }

    fn show_header(&mut self, title: &str) {
        (**self).show_header(title)
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        (**self).prompt(prompt)
    }

    fn render_options(&mut self, options: &[PickOption]) {
        (**self).render_options(options)
    }

    fn reflect_selection(&mut self, id: &str) {
        (**self).reflect_selection(id)
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        (**self).set_confirm_enabled(enabled)
    }

    fn show_confirmation(&mut self, text: &str) {
        (**self).show_confirmation(text)
    }

    fn set_hint_visible(&mut self, visible: bool) {
        (**self).set_hint_visible(visible)
    }

    fn set_install_enabled(&mut self, enabled: bool) {
        (**self).set_install_enabled(enabled)
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        (**self).set_output_mode(mode)
    }
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Yes/no prompt.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// Single choice among the given options, labelled accessibly.
    pub fn select_option(key: &str, question: &str, options: &[PickOption]) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select {
                options: options
                    .iter()
                    .map(|o| PromptOption {
                        label: format!("{} ({})", o.accessible_label(), o.percentage_label()),
                        value: o.id.clone(),
                    })
                    .collect(),
            },
            default: None,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from select.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Parse a yes/no answer.
pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}
