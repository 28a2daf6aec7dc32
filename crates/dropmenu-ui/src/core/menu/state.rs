//! Dropdown controller: open/focus/submenu state and its transitions.
//!
//! # Design
//! - One tagged value per nesting level, so focus without an open list cannot be expressed.
//! - Transitions are pure: `apply` returns the next state plus commands for the view to run.
//! - The view owns DOM work (focus moves, navigation, callbacks) and never edits state directly.

use super::keys::MenuKey;
use super::model::{ItemEffect, MenuItem};
use yew::{AttrValue, Callback};

/// Behavioral family of a dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    /// Single list; submenus are ignored.
    Flat,
    /// One level of nested lists.
    Nested,
}

/// Expanded submenu state, only meaningful while the top level is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmenuState {
    /// No nested list is shown.
    #[default]
    Collapsed,
    /// The nested list of `parent` is shown.
    Expanded {
        /// Index of the top-level entry owning the list.
        parent: usize,
        /// Focused nested entry.
        focus: Option<usize>,
    },
}

/// Top-level dropdown state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    /// List hidden.
    #[default]
    Closed,
    /// List shown.
    Open {
        /// Focused top-level entry.
        focus: Option<usize>,
        /// Nested list state.
        submenu: SubmenuState,
    },
}

/// Input delivered to the controller by a dropdown view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer activation of the trigger (toggle) control.
    TriggerClick,
    /// Key pressed while the trigger has focus.
    TriggerKey(MenuKey),
    /// Pointer activation of the split button's primary region.
    PrimaryClick,
    /// Key pressed on a top-level entry.
    ItemKey {
        /// Entry receiving the key.
        index: usize,
        /// Key pressed.
        key: MenuKey,
    },
    /// Pointer activation of a top-level entry.
    ItemClick {
        /// Entry clicked.
        index: usize,
    },
    /// Pointer entered a top-level entry.
    ItemPointerEnter {
        /// Entry entered.
        index: usize,
    },
    /// Pointer left a top-level entry.
    ItemPointerLeave {
        /// Entry left.
        index: usize,
    },
    /// Key pressed inside the nested list of `parent`.
    SubmenuKey {
        /// Owning top-level entry.
        parent: usize,
        /// Nested entry receiving the key.
        index: usize,
        /// Key pressed.
        key: MenuKey,
    },
    /// Pointer activation of a nested entry.
    SubmenuItemClick {
        /// Owning top-level entry.
        parent: usize,
        /// Nested entry clicked.
        index: usize,
    },
    /// Pointer-down or touch-start outside the menu region.
    OutsidePointer,
}

/// Side effect the view must perform after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuCommand {
    /// Navigate to a route path.
    Navigate(AttrValue),
    /// Run an entry's callback.
    Run(Callback<()>),
    /// Run the split button's default action.
    RunPrimary,
    /// Move keyboard focus back to the trigger.
    FocusTrigger,
}

/// Element that should hold keyboard focus for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// No programmatic focus.
    None,
    /// Top-level entry.
    Item(usize),
    /// Nested entry.
    SubmenuItem {
        /// Owning top-level entry.
        parent: usize,
        /// Nested entry.
        index: usize,
    },
}

/// Result of reducing one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// State after the event.
    pub state: MenuState,
    /// Effects to perform, in order.
    pub commands: Vec<MenuCommand>,
}

impl Transition {
    const fn stay(state: MenuState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }

    fn close_with(commands: Vec<MenuCommand>) -> Self {
        Self {
            state: MenuState::Closed,
            commands,
        }
    }
}

/// Next index in a list of `len`, wrapping from last to first. `None` starts at the top.
#[must_use]
pub const fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index + 1 < len => Some(index + 1),
        Some(_) | None => Some(0),
    }
}

/// Previous index in a list of `len`, wrapping from first to last. `None` starts at the bottom.
#[must_use]
pub const fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index > 0 && index < len => Some(index - 1),
        Some(_) | None => Some(len - 1),
    }
}

/// Roving tabindex: the focused entry, or the first one when nothing is focused.
#[must_use]
pub const fn roving_tab_index(focus: Option<usize>, index: usize) -> i32 {
    let target = match focus {
        Some(focused) => focused,
        None => 0,
    };
    if target == index { 0 } else { -1 }
}

const fn open_fresh() -> MenuState {
    MenuState::Open {
        focus: None,
        submenu: SubmenuState::Collapsed,
    }
}

impl MenuState {
    /// Whether the top-level list is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Focused top-level entry.
    #[must_use]
    pub const fn focus(self) -> Option<usize> {
        match self {
            Self::Open { focus, .. } => focus,
            Self::Closed => None,
        }
    }

    /// Index of the entry whose submenu is expanded.
    #[must_use]
    pub const fn expanded_submenu(self) -> Option<usize> {
        match self {
            Self::Open {
                submenu: SubmenuState::Expanded { parent, .. },
                ..
            } => Some(parent),
            _ => None,
        }
    }

    /// Focused nested entry.
    #[must_use]
    pub const fn submenu_focus(self) -> Option<usize> {
        match self {
            Self::Open {
                submenu: SubmenuState::Expanded { focus, .. },
                ..
            } => focus,
            _ => None,
        }
    }

    /// Element that should receive DOM focus. Nested focus wins over top-level focus.
    #[must_use]
    pub const fn focus_target(self) -> FocusTarget {
        match self {
            Self::Open {
                submenu:
                    SubmenuState::Expanded {
                        parent,
                        focus: Some(index),
                    },
                ..
            } => FocusTarget::SubmenuItem { parent, index },
            Self::Open {
                focus: Some(index), ..
            } => FocusTarget::Item(index),
            _ => FocusTarget::None,
        }
    }

    /// Reduce one event against the current item list.
    #[must_use]
    pub fn apply(self, event: MenuEvent, items: &[MenuItem], kind: MenuKind) -> Transition {
        let next = self.reduce(event, items, kind);
        if next.state == self && next.commands.is_empty() {
            tracing::trace!(?event, state = ?self, "menu event ignored");
        } else {
            tracing::debug!(
                ?event,
                from = ?self,
                to = ?next.state,
                commands = next.commands.len(),
                "menu transition"
            );
        }
        next
    }

    fn reduce(self, event: MenuEvent, items: &[MenuItem], kind: MenuKind) -> Transition {
        match event {
            MenuEvent::PrimaryClick => Transition::close_with(vec![MenuCommand::RunPrimary]),
            MenuEvent::OutsidePointer => Transition::stay(Self::Closed),
            MenuEvent::TriggerClick => Transition::stay(self.toggled()),
            MenuEvent::TriggerKey(key) => self.trigger_key(key, items.len()),
            _ => match self {
                Self::Closed => Transition::stay(self),
                Self::Open { focus, submenu } => {
                    Self::reduce_open(focus, submenu, event, items, kind)
                }
            },
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Closed => open_fresh(),
            Self::Open { .. } => Self::Closed,
        }
    }

    fn trigger_key(self, key: MenuKey, len: usize) -> Transition {
        match key {
            MenuKey::ArrowDown => Transition::stay(Self::Open {
                focus: next_index(None, len),
                submenu: SubmenuState::Collapsed,
            }),
            MenuKey::Enter | MenuKey::Space => Transition::stay(self.toggled()),
            MenuKey::Escape => Transition::stay(Self::Closed),
            MenuKey::ArrowUp | MenuKey::ArrowLeft | MenuKey::ArrowRight => Transition::stay(self),
        }
    }

    fn reduce_open(
        focus: Option<usize>,
        submenu: SubmenuState,
        event: MenuEvent,
        items: &[MenuItem],
        kind: MenuKind,
    ) -> Transition {
        let current = Self::Open { focus, submenu };
        match event {
            MenuEvent::ItemKey { index, key } if index < items.len() => {
                Self::item_key(current, index, key, items, kind)
            }
            MenuEvent::ItemClick { index } if index < items.len() => {
                Self::activate(current, index, false, items, kind)
            }
            MenuEvent::ItemPointerEnter { index }
                if kind == MenuKind::Nested && index < items.len() =>
            {
                let submenu = if items[index].has_submenu() {
                    match submenu {
                        SubmenuState::Expanded { parent, .. } if parent == index => submenu,
                        _ => SubmenuState::Expanded {
                            parent: index,
                            focus: None,
                        },
                    }
                } else {
                    SubmenuState::Collapsed
                };
                Transition::stay(Self::Open { focus, submenu })
            }
            MenuEvent::ItemPointerLeave { index } if kind == MenuKind::Nested => match submenu {
                SubmenuState::Expanded { parent, .. } if parent == index => {
                    Transition::stay(Self::Open {
                        focus,
                        submenu: SubmenuState::Collapsed,
                    })
                }
                _ => Transition::stay(current),
            },
            MenuEvent::SubmenuKey { parent, index, key } => match submenu {
                SubmenuState::Expanded {
                    parent: open_parent,
                    focus: nested,
                } if open_parent == parent
                    && items
                        .get(parent)
                        .is_some_and(|item| index < item.submenu_entries().len()) =>
                {
                    let origin = nested.or(Some(index));
                    Self::submenu_key(current, parent, origin, key, &items[parent])
                }
                _ => Transition::stay(current),
            },
            MenuEvent::SubmenuItemClick { parent, index } => {
                match items.get(parent).and_then(|item| item.submenu_entries().get(index)) {
                    Some(entry) if kind == MenuKind::Nested => {
                        let mut commands: Vec<MenuCommand> =
                            entry.action.iter().cloned().map(MenuCommand::Run).collect();
                        commands.push(MenuCommand::FocusTrigger);
                        Transition::close_with(commands)
                    }
                    _ => Transition::stay(current),
                }
            }
            _ => Transition::stay(current),
        }
    }

    fn item_key(
        current: Self,
        index: usize,
        key: MenuKey,
        items: &[MenuItem],
        kind: MenuKind,
    ) -> Transition {
        let origin = current.focus().or(Some(index));
        match key {
            MenuKey::ArrowDown => Transition::stay(Self::Open {
                focus: next_index(origin, items.len()),
                submenu: SubmenuState::Collapsed,
            }),
            MenuKey::ArrowUp => Transition::stay(Self::Open {
                focus: prev_index(origin, items.len()),
                submenu: SubmenuState::Collapsed,
            }),
            MenuKey::ArrowRight if kind == MenuKind::Nested && items[index].has_submenu() => {
                Transition::stay(Self::Open {
                    focus: Some(index),
                    submenu: SubmenuState::Expanded {
                        parent: index,
                        focus: Some(0),
                    },
                })
            }
            MenuKey::Enter | MenuKey::Space => Self::activate(current, index, true, items, kind),
            MenuKey::Escape => Transition::close_with(vec![MenuCommand::FocusTrigger]),
            MenuKey::ArrowLeft | MenuKey::ArrowRight => Transition::stay(current),
        }
    }

    fn activate(
        current: Self,
        index: usize,
        from_keyboard: bool,
        items: &[MenuItem],
        kind: MenuKind,
    ) -> Transition {
        match items[index].effect(kind) {
            ItemEffect::Expand => {
                let submenu = if current.expanded_submenu() == Some(index) {
                    SubmenuState::Collapsed
                } else {
                    SubmenuState::Expanded {
                        parent: index,
                        focus: from_keyboard.then_some(0),
                    }
                };
                Transition::stay(Self::Open {
                    focus: Some(index),
                    submenu,
                })
            }
            ItemEffect::Navigate(url) => Transition::close_with(vec![
                MenuCommand::Navigate(url),
                MenuCommand::FocusTrigger,
            ]),
            ItemEffect::Run(action) => {
                Transition::close_with(vec![MenuCommand::Run(action), MenuCommand::FocusTrigger])
            }
            ItemEffect::Inert => match kind {
                MenuKind::Flat => Transition::close_with(vec![MenuCommand::FocusTrigger]),
                MenuKind::Nested => Transition::stay(current),
            },
        }
    }

    fn submenu_key(
        current: Self,
        parent: usize,
        nested: Option<usize>,
        key: MenuKey,
        item: &MenuItem,
    ) -> Transition {
        let entries = item.submenu_entries();
        let expanded = |focus| Self::Open {
            focus: Some(parent),
            submenu: SubmenuState::Expanded { parent, focus },
        };
        match key {
            MenuKey::ArrowDown => Transition::stay(expanded(next_index(nested, entries.len()))),
            MenuKey::ArrowUp => Transition::stay(expanded(prev_index(nested, entries.len()))),
            MenuKey::ArrowLeft | MenuKey::Escape => Transition::stay(Self::Open {
                focus: Some(parent),
                submenu: SubmenuState::Collapsed,
            }),
            MenuKey::Enter | MenuKey::Space => match nested.and_then(|index| entries.get(index)) {
                Some(entry) => {
                    let mut commands: Vec<MenuCommand> =
                        entry.action.iter().cloned().map(MenuCommand::Run).collect();
                    commands.push(MenuCommand::FocusTrigger);
                    Transition::close_with(commands)
                }
                None => Transition::stay(current),
            },
            MenuKey::ArrowRight => Transition::stay(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::model::SubmenuItem;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        (count, Callback::from(move |()| hits.set(hits.get() + 1)))
    }

    fn run(commands: &[MenuCommand]) {
        for command in commands {
            if let MenuCommand::Run(action) = command {
                action.emit(());
            }
        }
    }

    fn flat_items() -> Vec<MenuItem> {
        vec![
            MenuItem::link("Edit Profile", "/edit"),
            MenuItem::link("View Activity", "/view"),
            MenuItem::action("Logout", Callback::from(|()| ())),
        ]
    }

    fn open_at(focus: usize) -> MenuState {
        MenuState::Open {
            focus: Some(focus),
            submenu: SubmenuState::Collapsed,
        }
    }

    #[test]
    fn starts_closed_and_trigger_toggles() {
        let items = flat_items();
        let state = MenuState::default();
        assert!(!state.is_open());
        let opened = state.apply(MenuEvent::TriggerClick, &items, MenuKind::Flat);
        assert_eq!(opened.state, open_fresh());
        let closed = opened
            .state
            .apply(MenuEvent::TriggerClick, &items, MenuKind::Flat);
        assert_eq!(closed.state, MenuState::Closed);
    }

    #[test]
    fn enter_and_space_on_trigger_toggle() {
        let items = flat_items();
        for key in [MenuKey::Enter, MenuKey::Space] {
            let opened = MenuState::Closed.apply(MenuEvent::TriggerKey(key), &items, MenuKind::Flat);
            assert!(opened.state.is_open());
            assert_eq!(opened.state.focus(), None);
            let closed = opened
                .state
                .apply(MenuEvent::TriggerKey(key), &items, MenuKind::Flat);
            assert_eq!(closed.state, MenuState::Closed);
        }
    }

    #[test]
    fn arrow_down_on_trigger_opens_at_first_entry() {
        let items = flat_items();
        let next = MenuState::Closed.apply(
            MenuEvent::TriggerKey(MenuKey::ArrowDown),
            &items,
            MenuKind::Flat,
        );
        assert_eq!(next.state, open_at(0));
        assert!(next.commands.is_empty());
    }

    #[test]
    fn arrow_down_on_empty_list_opens_without_focus() {
        let next = MenuState::Closed.apply(
            MenuEvent::TriggerKey(MenuKey::ArrowDown),
            &[],
            MenuKind::Flat,
        );
        assert_eq!(next.state, open_fresh());
    }

    #[test]
    fn escape_on_item_closes_and_returns_focus() {
        let items = flat_items();
        for focus in 0..items.len() {
            let next = open_at(focus).apply(
                MenuEvent::ItemKey {
                    index: focus,
                    key: MenuKey::Escape,
                },
                &items,
                MenuKind::Flat,
            );
            assert_eq!(next.state, MenuState::Closed);
            assert_eq!(next.commands, vec![MenuCommand::FocusTrigger]);
        }
    }

    #[test]
    fn escape_on_trigger_closes_without_refocus() {
        let items = flat_items();
        let next = open_at(1).apply(
            MenuEvent::TriggerKey(MenuKey::Escape),
            &items,
            MenuKind::Flat,
        );
        assert_eq!(next.state, MenuState::Closed);
        assert!(next.commands.is_empty());
    }

    #[test]
    fn focus_wraps_both_ways() {
        let items = flat_items();
        let down = open_at(2).apply(
            MenuEvent::ItemKey {
                index: 2,
                key: MenuKey::ArrowDown,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(down.state.focus(), Some(0));
        let up = open_at(0).apply(
            MenuEvent::ItemKey {
                index: 0,
                key: MenuKey::ArrowUp,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(up.state.focus(), Some(2));
    }

    #[test]
    fn item_key_without_focus_moves_from_the_keyed_entry() {
        let items = flat_items();
        let next = open_fresh().apply(
            MenuEvent::ItemKey {
                index: 1,
                key: MenuKey::ArrowDown,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(next.state.focus(), Some(2));
    }

    #[test]
    fn navigation_entry_navigates_and_closes() {
        let items = flat_items();
        let next = open_at(0).apply(
            MenuEvent::ItemKey {
                index: 0,
                key: MenuKey::Enter,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(next.state, MenuState::Closed);
        assert_eq!(
            next.commands,
            vec![
                MenuCommand::Navigate(AttrValue::from("/edit")),
                MenuCommand::FocusTrigger
            ]
        );
    }

    #[test]
    fn action_entry_runs_once_on_click() {
        let (count, action) = counter();
        let items = vec![MenuItem::action("Delete profile", action)];
        let next = open_fresh().apply(MenuEvent::ItemClick { index: 0 }, &items, MenuKind::Flat);
        run(&next.commands);
        assert_eq!(count.get(), 1);
        assert_eq!(next.state, MenuState::Closed);
    }

    #[test]
    fn url_entry_never_runs_its_action() {
        let (count, action) = counter();
        let mut item = MenuItem::link("Edit", "/edit");
        item.action = Some(action);
        let next = open_at(0).apply(
            MenuEvent::ItemKey {
                index: 0,
                key: MenuKey::Space,
            },
            &[item],
            MenuKind::Nested,
        );
        run(&next.commands);
        assert_eq!(count.get(), 0);
        assert!(matches!(next.commands[0], MenuCommand::Navigate(_)));
    }

    #[test]
    fn inert_entry_closes_flat_menu_only() {
        let items = vec![MenuItem::new("Nothing")];
        let flat = open_at(0).apply(MenuEvent::ItemClick { index: 0 }, &items, MenuKind::Flat);
        assert_eq!(flat.state, MenuState::Closed);
        let nested = open_at(0).apply(MenuEvent::ItemClick { index: 0 }, &items, MenuKind::Nested);
        assert_eq!(nested.state, open_at(0));
        assert!(nested.commands.is_empty());
    }

    #[test]
    fn primary_click_runs_default_and_stays_closed() {
        let items = flat_items();
        let next = MenuState::Closed.apply(MenuEvent::PrimaryClick, &items, MenuKind::Flat);
        assert_eq!(next.state, MenuState::Closed);
        assert_eq!(next.commands, vec![MenuCommand::RunPrimary]);
        let from_open = open_at(1).apply(MenuEvent::PrimaryClick, &items, MenuKind::Flat);
        assert_eq!(from_open.state, MenuState::Closed);
    }

    #[test]
    fn trigger_never_runs_primary() {
        let items = flat_items();
        let next = MenuState::Closed.apply(MenuEvent::TriggerClick, &items, MenuKind::Flat);
        assert!(!next.commands.contains(&MenuCommand::RunPrimary));
    }

    #[test]
    fn outside_pointer_closes_without_commands() {
        let items = flat_items();
        let next = open_at(1).apply(MenuEvent::OutsidePointer, &items, MenuKind::Flat);
        assert_eq!(next, Transition::stay(MenuState::Closed));
    }

    #[test]
    fn item_events_are_ignored_while_closed() {
        let items = flat_items();
        let next = MenuState::Closed.apply(MenuEvent::ItemClick { index: 0 }, &items, MenuKind::Flat);
        assert_eq!(next, Transition::stay(MenuState::Closed));
    }

    #[test]
    fn stale_indices_are_ignored() {
        let items = flat_items();
        let next = open_at(0).apply(
            MenuEvent::ItemKey {
                index: 9,
                key: MenuKey::Enter,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(next.state, open_at(0));
    }

    #[test]
    fn flat_menus_ignore_submenus() {
        let items = vec![MenuItem::submenu(
            "Theme",
            vec![SubmenuItem::new("Light", Callback::from(|()| ()))],
        )];
        let right = open_at(0).apply(
            MenuEvent::ItemKey {
                index: 0,
                key: MenuKey::ArrowRight,
            },
            &items,
            MenuKind::Flat,
        );
        assert_eq!(right.state.expanded_submenu(), None);
        let hover = open_at(0).apply(MenuEvent::ItemPointerEnter { index: 0 }, &items, MenuKind::Flat);
        assert_eq!(hover.state.expanded_submenu(), None);
    }

    #[test]
    fn focus_target_prefers_nested_entry() {
        let state = MenuState::Open {
            focus: Some(1),
            submenu: SubmenuState::Expanded {
                parent: 1,
                focus: Some(2),
            },
        };
        assert_eq!(
            state.focus_target(),
            FocusTarget::SubmenuItem {
                parent: 1,
                index: 2
            }
        );
        assert_eq!(open_at(1).focus_target(), FocusTarget::Item(1));
        assert_eq!(MenuState::Closed.focus_target(), FocusTarget::None);
    }

    #[test]
    fn roving_tab_index_has_exactly_one_stop() {
        let stops = |focus| (0..4).filter(|i| roving_tab_index(focus, *i) == 0).count();
        assert_eq!(stops(None), 1);
        assert_eq!(stops(Some(3)), 1);
        assert_eq!(roving_tab_index(Some(3), 3), 0);
        assert_eq!(roving_tab_index(None, 0), 0);
    }

    fn hovered_submenu(action: Callback<()>) -> (Vec<MenuItem>, MenuState) {
        let items = vec![
            MenuItem::link("Edit Profile", "/edit"),
            MenuItem::submenu(
                "Theme",
                vec![
                    SubmenuItem::new("Light", action),
                    SubmenuItem::new("Dark", Callback::from(|()| ())),
                ],
            ),
        ];
        let state = open_fresh()
            .apply(MenuEvent::ItemPointerEnter { index: 1 }, &items, MenuKind::Nested)
            .state;
        (items, state)
    }

    #[test]
    fn tabbed_nested_entry_activates_without_prior_arrow() {
        let (hits, light) = counter();
        let (items, hovered) = hovered_submenu(light);
        assert_eq!(hovered.submenu_focus(), None);
        let next = hovered.apply(
            MenuEvent::SubmenuKey {
                parent: 1,
                index: 0,
                key: MenuKey::Enter,
            },
            &items,
            MenuKind::Nested,
        );
        run(&next.commands);
        assert_eq!(hits.get(), 1);
        assert_eq!(next.state, MenuState::Closed);
        assert_eq!(next.commands.last(), Some(&MenuCommand::FocusTrigger));
    }

    #[test]
    fn tabbed_nested_entry_arrows_from_itself() {
        let (items, hovered) = hovered_submenu(Callback::from(|()| ()));
        let next = hovered.apply(
            MenuEvent::SubmenuKey {
                parent: 1,
                index: 0,
                key: MenuKey::ArrowDown,
            },
            &items,
            MenuKind::Nested,
        );
        assert_eq!(next.state.submenu_focus(), Some(1));
        let stale = hovered.apply(
            MenuEvent::SubmenuKey {
                parent: 1,
                index: 2,
                key: MenuKey::Enter,
            },
            &items,
            MenuKind::Nested,
        );
        assert_eq!(stale.state, hovered);
        assert!(stale.commands.is_empty());
    }
}
