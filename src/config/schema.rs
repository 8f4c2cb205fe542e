//! Configuration schema definitions for pickapp.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.pickapp/config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Ordered option set offered to the user
    pub options: Vec<OptionConfig>,

    /// Global settings
    pub settings: Settings,
}

impl PickConfig {
    /// The option set used when a project has no configuration of its own.
    pub fn builtin() -> Self {
        Self {
            app_name: None,
            options: vec![
                OptionConfig::new("opt1", "Option 1", 60.0).with_select_label("Choose"),
                OptionConfig::new("opt2", "Option 2", 40.0).with_select_label("Choose"),
            ],
            settings: Settings::default(),
        }
    }
}

/// A configured option with its raw weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionConfig {
    /// Unique, stable identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Raw weight. Numbers are taken as-is, numeric strings are parsed and
    /// anything else (missing, null, text, booleans) counts as 0.
    #[serde(default, deserialize_with = "lenient_weight::deserialize")]
    pub percentage: f64,

    /// Verb used in the accessible label ("Choose Option 1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_label: Option<String>,
}

impl OptionConfig {
    /// Create an option record without a select label.
    pub fn new(id: &str, title: &str, percentage: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            percentage,
            select_label: None,
        }
    }

    /// Set the select label.
    pub fn with_select_label(mut self, label: &str) -> Self {
        self.select_label = Some(label.to_string());
        self
    }
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How negative weights are treated: clamp or reject
    pub negative_weights: NegativeWeightPolicy,

    /// Background worker script registered at startup (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_script: Option<String>,

    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            negative_weights: NegativeWeightPolicy::default(),
            worker_script: None,
            default_output: OutputMode::Normal,
        }
    }
}

/// Policy for negative weights in the option set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeWeightPolicy {
    /// Treat negative weights as 0 and log a warning.
    #[default]
    Clamp,
    /// Fail validation.
    Reject,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

mod lenient_weight {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawWeight {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let weight = match RawWeight::deserialize(deserializer)? {
            RawWeight::Number(n) => n,
            RawWeight::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            RawWeight::Other(_) => 0.0,
        };
        Ok(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_options(yaml: &str) -> Vec<OptionConfig> {
        let config: PickConfig = serde_yaml::from_str(yaml).unwrap();
        config.options
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
app_name: Poll
options:
  - id: a
    title: Alpha
    percentage: 60
    select_label: Choose
  - id: b
    title: Beta
    percentage: 40
settings:
  negative_weights: reject
  worker_script: sw.js
  default_output: quiet
"#;
        let config: PickConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app_name.as_deref(), Some("Poll"));
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[0].select_label.as_deref(), Some("Choose"));
        assert_eq!(config.options[1].percentage, 40.0);
        assert_eq!(
            config.settings.negative_weights,
            NegativeWeightPolicy::Reject
        );
        assert_eq!(config.settings.worker_script.as_deref(), Some("sw.js"));
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
    }

    #[test]
    fn missing_percentage_is_zero() {
        let options = parse_options("options:\n  - id: a\n    title: A\n");
        assert_eq!(options[0].percentage, 0.0);
    }

    #[test]
    fn numeric_string_percentage_is_parsed() {
        let options = parse_options("options:\n  - id: a\n    title: A\n    percentage: \" 25 \"\n");
        assert_eq!(options[0].percentage, 25.0);
    }

    #[test]
    fn non_numeric_percentage_is_zero() {
        let yaml = r#"
options:
  - id: a
    title: A
    percentage: lots
  - id: b
    title: B
    percentage: true
  - id: c
    title: C
    percentage: ~
"#;
        let options = parse_options(yaml);
        assert!(options.iter().all(|o| o.percentage == 0.0));
    }

    #[test]
    fn fractional_percentage_is_kept() {
        let options = parse_options("options:\n  - id: a\n    title: A\n    percentage: 12.5\n");
        assert_eq!(options[0].percentage, 12.5);
    }

    #[test]
    fn settings_default_to_clamp_and_normal() {
        let config: PickConfig = serde_yaml::from_str("options: []").unwrap();
        assert_eq!(
            config.settings.negative_weights,
            NegativeWeightPolicy::Clamp
        );
        assert_eq!(config.settings.default_output, OutputMode::Normal);
        assert!(config.settings.worker_script.is_none());
    }

    #[test]
    fn builtin_config_has_two_options() {
        let config = PickConfig::builtin();
        let ids: Vec<_> = config.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["opt1", "opt2"]);
        assert_eq!(config.options[0].percentage + config.options[1].percentage, 100.0);
    }
}
