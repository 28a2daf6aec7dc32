//! App-wide yewdux store.
//!
//! # Design
//! - The theme preference is the only shared state; menu actions are its only writers.
//! - Reducers are plain methods so they test without a renderer.

use crate::core::theme::ThemePreference;
use yewdux::store::Store;

/// Global shell state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ShellStore {
    /// Theme picked from the menu.
    pub theme: ThemePreference,
}

impl ShellStore {
    /// Record a theme choice. Returns whether it changed.
    pub fn select_theme(&mut self, theme: ThemePreference) -> bool {
        let changed = self.theme != theme;
        if changed {
            tracing::debug!(from = self.theme.as_str(), to = theme.as_str(), "theme selected");
        }
        self.theme = theme;
        changed
    }
}
