//! Non-interactive renderer for scripts and headless environments.

use std::collections::HashMap;

use crate::error::{PickError, Result};
use crate::options::PickOption;

use super::theme::PickTheme;
use super::{parse_bool, OutputMode, Prompt, PromptResult, PromptType, Renderer, INSTALL_HINT};

/// Prefix of environment variables answering prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "PICKAPP_PROMPT_";

/// Renderer writing plain lines to stdout.
///
/// Prompts are answered from `PICKAPP_PROMPT_<KEY>` environment variables,
/// then from the prompt default.
pub struct PlainRenderer {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: PickTheme,
    options: Vec<PickOption>,
    selected: Option<String>,
    confirm_enabled: bool,
    hint_visible: bool,
    install_enabled: bool,
}

impl PlainRenderer {
    /// Create a new plain renderer.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: PickTheme::plain(),
            options: Vec::new(),
            selected: None,
            confirm_enabled: false,
            hint_visible: false,
            install_enabled: false,
        }
    }

    fn print_options(&self) {
        for option in &self.options {
            let selected = self.selected.as_deref() == Some(option.id.as_str());
            println!(
                "  {}",
                self.theme
                    .format_option(&option.title, &option.percentage_label(), selected)
            );
            if self.mode.shows_details() {
                println!("      {} [{}]", option.accessible_label(), option.id);
            }
        }
    }
}

impl Renderer for PlainRenderer {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_options() {
            println!("\n{}\n", title);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .ok_or_else(|| PickError::ConfigValidationError {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            })?;

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool(answer)),
            PromptType::Select { .. } => PromptResult::String(answer.clone()),
        })
    }

    fn render_options(&mut self, options: &[PickOption]) {
        self.options = options.to_vec();
        if self.mode.shows_options() {
            self.print_options();
        }
    }

    fn reflect_selection(&mut self, id: &str) {
        self.selected = Some(id.to_string());
        if self.mode.shows_details() {
            self.print_options();
        } else if self.mode.shows_options() {
            if let Some(option) = self.options.iter().find(|o| o.id == id) {
                println!("Selected: {}", option.title);
            }
        }
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        if enabled != self.confirm_enabled && self.mode.shows_details() {
            println!("Confirm {}", if enabled { "enabled" } else { "disabled" });
        }
        self.confirm_enabled = enabled;
    }

    fn show_confirmation(&mut self, text: &str) {
        if self.mode.shows_status() {
            println!("{}", text);
        }
    }

    fn set_hint_visible(&mut self, visible: bool) {
        if visible && !self.hint_visible && self.mode.shows_status() {
            println!("{}", INSTALL_HINT);
        }
        self.hint_visible = visible;
    }

    fn set_install_enabled(&mut self, enabled: bool) {
        if enabled && !self.install_enabled && self.mode.shows_options() {
            println!("Install available");
        }
        self.install_enabled = enabled;
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}
