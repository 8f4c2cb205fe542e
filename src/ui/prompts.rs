//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{PickError, Result};

use super::{parse_bool, Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to PickError.
fn map_dialoguer_err(e: dialoguer::Error) -> PickError {
    PickError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(confirm_default(prompt))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(PickError::ConfigValidationError {
            message: format!("Prompt '{}' has no options to choose from", prompt.key),
        });
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_index(prompt, options))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

fn confirm_default(prompt: &Prompt) -> bool {
    prompt.default.as_deref().map(parse_bool).unwrap_or(true)
}

fn default_index(prompt: &Prompt, options: &[PromptOption]) -> usize {
    prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0)
}
