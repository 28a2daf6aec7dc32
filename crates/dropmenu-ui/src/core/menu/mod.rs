//! Dropdown menu model and the keyboard/focus controller shared by every variant.

pub mod dismiss;
pub mod ids;
pub mod keys;
pub mod model;
pub mod state;

pub use dismiss::{PointerOrigin, dismisses};
pub use ids::MenuIds;
pub use keys::MenuKey;
pub use model::{ItemEffect, MenuIcon, MenuItem, MenuItemError, SubmenuItem};
pub use state::{
    FocusTarget, MenuCommand, MenuEvent, MenuKind, MenuState, SubmenuState, Transition,
    next_index, prev_index, roving_tab_index,
};
