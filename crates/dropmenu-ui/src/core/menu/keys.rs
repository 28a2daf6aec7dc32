//! Keyboard vocabulary understood by dropdown menus.

/// Keys that drive menu navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    /// Move focus down.
    ArrowDown,
    /// Move focus up.
    ArrowUp,
    /// Collapse a submenu.
    ArrowLeft,
    /// Expand a submenu.
    ArrowRight,
    /// Activate or toggle.
    Enter,
    /// Activate or toggle.
    Space,
    /// Dismiss the current level.
    Escape,
}

impl MenuKey {
    /// Map a DOM `KeyboardEvent.key` value, including legacy aliases.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Whether the browser default (scrolling, button activation) must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Escape)
    }

    /// Enter and Space share activation semantics.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
