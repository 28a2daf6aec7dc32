//! Menu entry data supplied by callers.
//!
//! # Design
//! - Entries are immutable inputs; the controller only reads them.
//! - Nested entries are a separate type so a second nesting level cannot be expressed.
//! - Activation is resolved in one place ([`MenuItem::effect`]) so every variant agrees on precedence.

use super::MenuKind;
use thiserror::Error;
use yew::{AttrValue, Callback};

/// Glyphs available to menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    /// Pencil over a user silhouette.
    UserEdit,
    /// Clock with a counter-clockwise arrow.
    History,
    /// Door with an outgoing arrow.
    SignOut,
    /// Trash can.
    Delete,
    /// Sun.
    LightMode,
    /// Moon.
    DarkMode,
    /// Desktop monitor.
    Monitor,
}

/// Entry inside a submenu. Cannot carry a further submenu.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmenuItem {
    /// Visible label.
    pub title: AttrValue,
    /// Optional leading glyph.
    pub icon: Option<MenuIcon>,
    /// Callback run when the entry is activated.
    pub action: Option<Callback<()>>,
}

impl SubmenuItem {
    /// Build a nested entry that runs `action` when activated.
    #[must_use]
    pub fn new(title: impl Into<AttrValue>, action: Callback<()>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            action: Some(action),
        }
    }

    /// Attach a leading glyph.
    #[must_use]
    pub const fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Top-level menu entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Visible label.
    pub title: AttrValue,
    /// Route path to navigate to when activated.
    pub url: Option<AttrValue>,
    /// Optional leading glyph.
    pub icon: Option<MenuIcon>,
    /// Callback run when activated (ignored when `url` is set).
    pub action: Option<Callback<()>>,
    /// Nested entries, only honoured by [`MenuKind::Nested`] menus.
    pub submenu: Option<Vec<SubmenuItem>>,
}

/// What activating an entry does for a given menu kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemEffect {
    /// Toggle the entry's submenu.
    Expand,
    /// Navigate to the route path.
    Navigate(AttrValue),
    /// Run the caller-supplied callback.
    Run(Callback<()>),
    /// Nothing to do.
    Inert,
}

/// Problems detected in caller-supplied entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuItemError {
    /// Both a url and an action were supplied; the url wins.
    #[error("menu item `{title}` has both a url and an action")]
    ConflictingActivation {
        /// Title of the offending entry.
        title: String,
    },
    /// A submenu list was supplied with no entries.
    #[error("menu item `{title}` has an empty submenu")]
    EmptySubmenu {
        /// Title of the offending entry.
        title: String,
    },
}

impl MenuItem {
    /// Inert entry with only a title.
    #[must_use]
    pub fn new(title: impl Into<AttrValue>) -> Self {
        Self {
            title: title.into(),
            url: None,
            icon: None,
            action: None,
            submenu: None,
        }
    }

    /// Entry that navigates to `url`.
    #[must_use]
    pub fn link(title: impl Into<AttrValue>, url: impl Into<AttrValue>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(title)
        }
    }

    /// Entry that runs `action`.
    #[must_use]
    pub fn action(title: impl Into<AttrValue>, action: Callback<()>) -> Self {
        Self {
            action: Some(action),
            ..Self::new(title)
        }
    }

    /// Entry that opens a nested list.
    #[must_use]
    pub fn submenu(title: impl Into<AttrValue>, entries: Vec<SubmenuItem>) -> Self {
        Self {
            submenu: Some(entries),
            ..Self::new(title)
        }
    }

    /// Attach a leading glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Nested entries, empty when the entry has none.
    #[must_use]
    pub fn submenu_entries(&self) -> &[SubmenuItem] {
        self.submenu.as_deref().unwrap_or_default()
    }

    /// Whether the entry opens a non-empty nested list.
    #[must_use]
    pub fn has_submenu(&self) -> bool {
        !self.submenu_entries().is_empty()
    }

    /// Resolve what activation does. Submenu beats url, url beats action.
    #[must_use]
    pub fn effect(&self, kind: MenuKind) -> ItemEffect {
        if kind == MenuKind::Nested && self.has_submenu() {
            return ItemEffect::Expand;
        }
        if let Some(url) = &self.url {
            return ItemEffect::Navigate(url.clone());
        }
        self.action
            .as_ref()
            .map_or(ItemEffect::Inert, |action| ItemEffect::Run(action.clone()))
    }

    /// Check the entry against the activation rules.
    ///
    /// # Errors
    /// Returns [`MenuItemError::ConflictingActivation`] when both `url` and `action` are set
    /// and [`MenuItemError::EmptySubmenu`] when `submenu` is present but empty.
    pub fn validate(&self) -> Result<(), MenuItemError> {
        if self.url.is_some() && self.action.is_some() {
            return Err(MenuItemError::ConflictingActivation {
                title: self.title.to_string(),
            });
        }
        if self.submenu.as_ref().is_some_and(Vec::is_empty) {
            return Err(MenuItemError::EmptySubmenu {
                title: self.title.to_string(),
            });
        }
        Ok(())
    }
}
