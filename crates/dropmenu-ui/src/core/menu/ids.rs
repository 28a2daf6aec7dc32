//! Per-instance DOM id scheme for dropdown parts.

use std::sync::atomic::{AtomicUsize, Ordering};
use yew::AttrValue;

static NEXT_MENU: AtomicUsize = AtomicUsize::new(0);

/// Element ids for one dropdown instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuIds {
    base: AttrValue,
}

impl MenuIds {
    /// Allocate a fresh, process-unique id base under `prefix`.
    #[must_use]
    pub fn allocate(prefix: &str) -> Self {
        let n = NEXT_MENU.fetch_add(1, Ordering::Relaxed);
        Self {
            base: AttrValue::from(format!("{prefix}-{n}")),
        }
    }

    /// Use a caller-supplied id base verbatim.
    #[must_use]
    pub const fn from_base(base: AttrValue) -> Self {
        Self { base }
    }

    /// Id base shared by every part.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Trigger (toggle) button id.
    #[must_use]
    pub fn trigger(&self) -> String {
        format!("{}-button", self.base)
    }

    /// Top-level list id.
    #[must_use]
    pub fn menu(&self) -> String {
        format!("{}-menu", self.base)
    }

    /// Top-level entry id.
    #[must_use]
    pub fn item(&self, index: usize) -> String {
        format!("{}-item-{index}", self.base)
    }

    /// Nested list id for the entry at `parent`.
    #[must_use]
    pub fn submenu(&self, parent: usize) -> String {
        format!("{}-submenu-{parent}", self.base)
    }

    /// Nested entry id.
    #[must_use]
    pub fn submenu_item(&self, parent: usize, index: usize) -> String {
        format!("{}-submenu-{parent}-item-{index}", self.base)
    }
}
