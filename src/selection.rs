//! Single-selection state driving the confirm action.
//!
//! The state starts [`Selection::Unselected`] and moves to
//! [`Selection::Selected`] on the first accepted `select`. A selection can be
//! replaced by another one but never cleared.

use tracing::debug;

use crate::options::PickOption;

/// Current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

/// Holds the option set and the chosen option id.
#[derive(Debug, Clone)]
pub struct SelectionState {
    options: Vec<PickOption>,
    selection: Selection,
}

impl SelectionState {
    /// Create an unselected state over a normalized option set.
    pub fn new(options: Vec<PickOption>) -> Self {
        Self {
            options,
            selection: Selection::Unselected,
        }
    }

    /// The option set selections are checked against.
    pub fn options(&self) -> &[PickOption] {
        &self.options
    }

    /// Select the option with `id`.
    ///
    /// Unknown ids are ignored and leave the state untouched. Returns whether
    /// the selection was accepted.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.options.iter().any(|o| o.id == id) {
            debug!("Ignoring selection of unknown option '{}'", id);
            return false;
        }

        self.selection = Selection::Selected(id.to_string());
        true
    }

    /// The selected option id, if any.
    pub fn current_selection(&self) -> Option<&str> {
        match &self.selection {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    /// Whether the confirm action is available.
    pub fn can_confirm(&self) -> bool {
        matches!(self.selection, Selection::Selected(_))
    }

    /// Snapshot of the selected option, or `None` without a selection.
    pub fn confirm(&self) -> Option<PickOption> {
        let id = self.current_selection()?;
        self.options.iter().find(|o| o.id == id).cloned()
    }
}
