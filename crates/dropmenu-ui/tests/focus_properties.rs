use dropmenu_ui::core::menu::{
    MenuEvent, MenuItem, MenuKey, MenuKind, MenuState, SubmenuItem, next_index, prev_index,
};
use proptest::prelude::*;
use yew::Callback;

fn links(len: usize) -> Vec<MenuItem> {
    (0..len)
        .map(|index| MenuItem::link(format!("Item {index}"), "/view"))
        .collect()
}

fn key_strategy() -> impl Strategy<Value = MenuKey> {
    prop_oneof![
        Just(MenuKey::ArrowDown),
        Just(MenuKey::ArrowUp),
        Just(MenuKey::ArrowLeft),
        Just(MenuKey::ArrowRight),
        Just(MenuKey::Enter),
        Just(MenuKey::Space),
        Just(MenuKey::Escape),
    ]
}

fn event_strategy() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        Just(MenuEvent::TriggerClick),
        key_strategy().prop_map(MenuEvent::TriggerKey),
        (0usize..4, key_strategy()).prop_map(|(index, key)| MenuEvent::ItemKey { index, key }),
        (0usize..4).prop_map(|index| MenuEvent::ItemClick { index }),
        (0usize..4).prop_map(|index| MenuEvent::ItemPointerEnter { index }),
        (0usize..4).prop_map(|index| MenuEvent::ItemPointerLeave { index }),
        (0usize..4, 0usize..3, key_strategy())
            .prop_map(|(parent, index, key)| MenuEvent::SubmenuKey { parent, index, key }),
        (0usize..4, 0usize..3)
            .prop_map(|(parent, index)| MenuEvent::SubmenuItemClick { parent, index }),
        Just(MenuEvent::OutsidePointer),
    ]
}

fn mixed_items() -> Vec<MenuItem> {
    let entries = || {
        vec![
            SubmenuItem::new("One", Callback::from(|()| ())),
            SubmenuItem::new("Two", Callback::from(|()| ())),
        ]
    };
    vec![
        MenuItem::link("Edit Profile", "/edit"),
        MenuItem::submenu("Theme", entries()),
        MenuItem::submenu("Layout", entries()),
        MenuItem::new("Inert"),
    ]
}

proptest! {
    #[test]
    fn arrow_down_n_times_returns_to_start(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let mut focus = Some(start);
        for _ in 0..len {
            focus = next_index(focus, len);
        }
        prop_assert_eq!(focus, Some(start));
    }

    #[test]
    fn arrow_up_undoes_arrow_down(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        prop_assert_eq!(prev_index(next_index(Some(start), len), len), Some(start));
    }

    #[test]
    fn keyboard_focus_wraps_through_the_controller(len in 1usize..8, presses in 0usize..20) {
        let items = links(len);
        let mut state = MenuState::default()
            .apply(MenuEvent::TriggerKey(MenuKey::ArrowDown), &items, MenuKind::Flat)
            .state;
        for _ in 0..presses {
            let index = state.focus().unwrap_or(0);
            state = state
                .apply(MenuEvent::ItemKey { index, key: MenuKey::ArrowDown }, &items, MenuKind::Flat)
                .state;
        }
        prop_assert_eq!(state.focus(), Some(presses % len));
    }

    #[test]
    fn any_event_sequence_keeps_state_consistent(
        events in proptest::collection::vec(event_strategy(), 0..40)
    ) {
        let items = mixed_items();
        let mut state = MenuState::default();
        for event in events {
            state = state.apply(event, &items, MenuKind::Nested).state;
            if !state.is_open() {
                prop_assert_eq!(state.focus(), None);
                prop_assert_eq!(state.expanded_submenu(), None);
            }
            if let Some(index) = state.focus() {
                prop_assert!(index < items.len());
            }
            if let Some(parent) = state.expanded_submenu() {
                prop_assert!(items[parent].has_submenu());
                if let Some(index) = state.submenu_focus() {
                    prop_assert!(index < items[parent].submenu_entries().len());
                }
            }
        }
    }
}
