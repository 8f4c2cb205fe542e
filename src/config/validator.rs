//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one option must be configured
//! - Option ids must be non-empty and unique
//! - Option titles must be non-empty
//! - Negative weights fail under the `reject` policy

use crate::config::schema::{NegativeWeightPolicy, PickConfig};
use crate::error::{PickError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Option id if error is option-specific
    pub option: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &PickConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.options.is_empty() {
        errors.push(ValidationError {
            rule: "no-options".to_string(),
            message: "At least one option must be configured".to_string(),
            option: None,
        });
    }

    errors.extend(validate_options(config));

    if config.settings.negative_weights == NegativeWeightPolicy::Reject {
        errors.extend(validate_weights(config));
    }

    errors
}

/// Validate option identity and display fields.
fn validate_options(config: &PickConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, option) in config.options.iter().enumerate() {
        if option.id.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-id".to_string(),
                message: format!("Option #{} has an empty id", index + 1),
                option: None,
            });
        } else if !seen.insert(option.id.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-id".to_string(),
                message: format!("Option id '{}' is used more than once", option.id),
                option: Some(option.id.clone()),
            });
        }

        if option.title.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-title".to_string(),
                message: format!("Option '{}' has an empty title", option.id),
                option: Some(option.id.clone()),
            });
        }
    }

    errors
}

fn validate_weights(config: &PickConfig) -> Vec<ValidationError> {
    config
        .options
        .iter()
        .filter(|o| o.percentage < 0.0 || !o.percentage.is_finite())
        .map(|o| ValidationError {
            rule: "negative-weight".to_string(),
            message: format!(
                "Option '{}' has weight {}; weights must be non-negative",
                o.id, o.percentage
            ),
            option: Some(o.id.clone()),
        })
        .collect()
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &PickConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PickError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
