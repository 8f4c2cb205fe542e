//! Mock renderer for testing.
//!
//! `MockRenderer` implements the `Renderer` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use pickapp::ui::{MockRenderer, Renderer};
//!
//! let mut renderer = MockRenderer::new();
//! renderer.set_prompt_response("option", "opt2");
//!
//! // Use renderer in code under test...
//! renderer.set_confirm_enabled(true);
//! renderer.show_confirmation("You selected: Option 2 (40%)");
//!
//! // Assert on captured interactions
//! assert!(renderer.confirm_enabled());
//! assert!(renderer.has_confirmation("Option 2"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::options::PickOption;

use super::{parse_bool, OutputMode, Prompt, PromptResult, PromptType, Renderer};

/// Mock renderer for testing.
///
/// Captures all calls and allows pre-configured prompt responses. Supports
/// both single responses (via `set_prompt_response`) and queued responses
/// (via `queue_prompt_responses`) for keys asked multiple times.
#[derive(Debug, Default)]
pub struct MockRenderer {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    rendered: Vec<Vec<PickOption>>,
    selections: Vec<String>,
    confirm_states: Vec<bool>,
    confirmations: Vec<String>,
    hint_states: Vec<bool>,
    install_states: Vec<bool>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockRenderer {
    /// Create a new MockRenderer with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The most recently rendered option set.
    pub fn rendered_options(&self) -> Option<&[PickOption]> {
        self.rendered.last().map(|o| o.as_slice())
    }

    /// Every selection reflected so far, in order.
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Current state of the confirm affordance (disabled until set).
    pub fn confirm_enabled(&self) -> bool {
        self.confirm_states.last().copied().unwrap_or(false)
    }

    /// Every confirmation text shown.
    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    /// Current hint visibility (hidden until set).
    pub fn hint_visible(&self) -> bool {
        self.hint_states.last().copied().unwrap_or(false)
    }

    /// Every hint visibility change, in order.
    pub fn hint_states(&self) -> &[bool] {
        &self.hint_states
    }

    /// Current state of the install affordance (disabled until set).
    pub fn install_enabled(&self) -> bool {
        self.install_states.last().copied().unwrap_or(false)
    }

    /// Every install affordance change, in order.
    pub fn install_states(&self) -> &[bool] {
        &self.install_states
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a confirmation containing `text` was shown.
    pub fn has_confirmation(&self, text: &str) -> bool {
        self.confirmations.iter().any(|c| c.contains(text))
    }

    fn answer(prompt: &Prompt, response: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool(response)),
            PromptType::Select { .. } => PromptResult::String(response.to_string()),
        }
    }
}

impl Renderer for MockRenderer {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys asked multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(Self::answer(prompt, &response));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::answer(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        // Return type-appropriate empty for last resort
        Ok(Self::answer(prompt, ""))
    }

    fn render_options(&mut self, options: &[PickOption]) {
        self.rendered.push(options.to_vec());
    }

    fn reflect_selection(&mut self, id: &str) {
        self.selections.push(id.to_string());
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        self.confirm_states.push(enabled);
    }

    fn show_confirmation(&mut self, text: &str) {
        self.confirmations.push(text.to_string());
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_states.push(visible);
    }

    fn set_install_enabled(&mut self, enabled: bool) {
        self.install_states.push(enabled);
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages() {
        let mut renderer = MockRenderer::new();
        renderer.message("hello");
        renderer.success("done");
        renderer.warning("careful");
        renderer.error("broken");
        assert!(renderer.has_message("hello"));
        assert!(renderer.has_warning("careful"));
        assert!(renderer.has_error("broken"));
        assert_eq!(renderer.successes(), &["done".to_string()]);
        assert_eq!(renderer.warnings(), &["careful".to_string()]);
        assert_eq!(renderer.errors(), &["broken".to_string()]);
    }

    #[test]
    fn affordance_states_default_to_disabled() {
        let renderer = MockRenderer::new();
        assert!(!renderer.confirm_enabled());
        assert!(!renderer.hint_visible());
        assert!(!renderer.install_enabled());
    }

    #[test]
    fn confirm_prompt_uses_configured_response() {
        let mut renderer = MockRenderer::new();
        renderer.set_prompt_response("confirm", "yes");
        let result = renderer
            .prompt(&Prompt::confirm("confirm", "Confirm?", false))
            .unwrap();
        assert_eq!(result.as_bool(), Some(true));
        assert_eq!(renderer.prompts_shown(), &["confirm".to_string()]);
    }

    #[test]
    fn confirm_prompt_falls_back_to_default() {
        let mut renderer = MockRenderer::new();
        let result = renderer
            .prompt(&Prompt::confirm("confirm", "Confirm?", true))
            .unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn queued_responses_come_first() {
        let mut renderer = MockRenderer::new();
        renderer.queue_prompt_responses("option", vec!["a", "b"]);
        renderer.set_prompt_response("option", "c");
        let prompt = Prompt::select_option("option", "Pick", &[]);

        assert_eq!(renderer.prompt(&prompt).unwrap().as_string(), "a");
        assert_eq!(renderer.prompt(&prompt).unwrap().as_string(), "b");
        assert_eq!(renderer.prompt(&prompt).unwrap().as_string(), "c");
    }

    #[test]
    fn records_option_rendering() {
        let mut renderer = MockRenderer::new();
        let options = vec![PickOption {
            id: "a".to_string(),
            title: "A".to_string(),
            percentage: 100,
            select_label: None,
        }];
        renderer.render_options(&options);
        renderer.reflect_selection("a");
        assert_eq!(renderer.rendered_options().unwrap().len(), 1);
        assert_eq!(renderer.selections(), &["a".to_string()]);
    }
}
