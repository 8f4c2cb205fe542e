//! Option records and percentage normalization.
//!
//! Options are read from configuration as [`OptionConfig`] records carrying a
//! raw weight, and turned into [`PickOption`]s by [`normalize`]. A normalized
//! set always carries non-negative integer percentages summing to exactly 100.

pub mod normalize;

pub use normalize::normalize;

use serde::Serialize;

use crate::config::OptionConfig;

/// A selectable option with its normalized percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOption {
    /// Unique, stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Normalized share, 0..=100.
    pub percentage: u32,
    /// Optional verb used in the accessible label of the selection affordance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_label: Option<String>,
}

impl PickOption {
    /// Accessible label for the selection affordance.
    ///
    /// `"{select_label} {title}"` when a label is configured, otherwise
    /// `"Select {title}"`.
    pub fn accessible_label(&self) -> String {
        match self.select_label.as_deref() {
            Some(label) if !label.is_empty() => format!("{} {}", label, self.title),
            _ => format!("Select {}", self.title),
        }
    }

    /// Percentage as displayed next to the title.
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Text shown once this option has been confirmed.
    pub fn confirmation_text(&self) -> String {
        format!("You selected: {} ({}%)", self.title, self.percentage)
    }
}

impl From<&PickOption> for OptionConfig {
    fn from(option: &PickOption) -> Self {
        Self {
            id: option.id.clone(),
            title: option.title.clone(),
            percentage: f64::from(option.percentage),
            select_label: option.select_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(select_label: Option<&str>) -> PickOption {
        PickOption {
            id: "opt1".to_string(),
            title: "Option 1".to_string(),
            percentage: 60,
            select_label: select_label.map(String::from),
        }
    }

    #[test]
    fn accessible_label_uses_select_label() {
        assert_eq!(option(Some("Choose")).accessible_label(), "Choose Option 1");
    }

    #[test]
    fn accessible_label_defaults_to_select() {
        assert_eq!(option(None).accessible_label(), "Select Option 1");
        assert_eq!(option(Some("")).accessible_label(), "Select Option 1");
    }

    #[test]
    fn confirmation_text_includes_title_and_percentage() {
        assert_eq!(
            option(None).confirmation_text(),
            "You selected: Option 1 (60%)"
        );
    }

    #[test]
    fn percentage_label_appends_percent_sign() {
        assert_eq!(option(None).percentage_label(), "60%");
    }

    #[test]
    fn converts_back_to_config_record() {
        let config = OptionConfig::from(&option(Some("Choose")));
        assert_eq!(config.id, "opt1");
        assert_eq!(config.percentage, 60.0);
        assert_eq!(config.select_label.as_deref(), Some("Choose"));
    }
}
