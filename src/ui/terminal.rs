//! Interactive terminal renderer.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::options::PickOption;

use super::{
    prompt_user, should_use_colors, OutputMode, PickTheme, PlainRenderer, Prompt, PromptResult,
    Renderer, INSTALL_HINT,
};

/// Interactive terminal renderer.
///
/// Keeps the painted option list so a selection change can repaint it.
pub struct TerminalRenderer {
    term: Term,
    theme: PickTheme,
    mode: OutputMode,
    options: Vec<PickOption>,
    selected: Option<String>,
    confirm_enabled: bool,
    hint_visible: bool,
    install_enabled: bool,
}

impl TerminalRenderer {
    /// Create a new terminal renderer.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PickTheme::new()
        } else {
            PickTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            options: Vec::new(),
            selected: None,
            confirm_enabled: false,
            hint_visible: false,
            install_enabled: false,
        }
    }

    fn paint_options(&mut self) {
        for option in &self.options {
            let selected = self.selected.as_deref() == Some(option.id.as_str());
            writeln!(
                self.term,
                "  {}",
                self.theme
                    .format_option(&option.title, &option.percentage_label(), selected)
            )
            .ok();
            if self.mode.shows_details() {
                writeln!(
                    self.term,
                    "      {}",
                    self.theme
                        .dim
                        .apply_to(format!("{} [{}]", option.accessible_label(), option.id))
                )
                .ok();
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_options() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn render_options(&mut self, options: &[PickOption]) {
        self.options = options.to_vec();
        if self.mode.shows_options() {
            self.paint_options();
        }
    }

    fn reflect_selection(&mut self, id: &str) {
        self.selected = Some(id.to_string());
        if self.mode.shows_options() {
            writeln!(self.term).ok();
            self.paint_options();
        }
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        if enabled != self.confirm_enabled && self.mode.shows_details() {
            let state = if enabled { "enabled" } else { "disabled" };
            writeln!(self.term, "{}", self.theme.dim.apply_to(format!("Confirm {}", state))).ok();
        }
        self.confirm_enabled = enabled;
    }

    fn show_confirmation(&mut self, text: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(text)).ok();
        }
    }

    fn set_hint_visible(&mut self, visible: bool) {
        if visible && !self.hint_visible && self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_hint(INSTALL_HINT)).ok();
        }
        self.hint_visible = visible;
    }

    fn set_install_enabled(&mut self, enabled: bool) {
        if enabled && !self.install_enabled && self.mode.shows_options() {
            writeln!(
                self.term,
                "{}",
                self.theme.highlight.apply_to("Install available")
            )
            .ok();
        }
        self.install_enabled = enabled;
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Create the appropriate renderer based on interactivity.
pub fn create_renderer(interactive: bool, mode: OutputMode) -> Box<dyn Renderer> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalRenderer::new(mode))
    } else {
        Box::new(PlainRenderer::new(mode))
    }
}
