//! Hook that binds the menu state machine to a rendered dropdown.
//!
//! # Design
//! - State lives in a mutable ref so back-to-back events always reduce the latest value.
//! - Commands run after the state is stored; navigation and focus failures are logged, not raised.
//! - DOM focus follows the state's focus target after each render.

use super::outside::use_outside_dismiss;
use crate::core::menu::{
    FocusTarget, MenuCommand, MenuEvent, MenuIds, MenuItem, MenuKey, MenuKind, MenuState,
};
use crate::core::routes::{Route, resolve_route};
use gloo::console;
use gloo::utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Snapshot of one dropdown instance for rendering, plus its event sink.
#[derive(Clone)]
pub(crate) struct DropdownHandle {
    pub(crate) state: MenuState,
    pub(crate) kind: MenuKind,
    pub(crate) ids: MenuIds,
    pub(crate) root_ref: NodeRef,
    pub(crate) trigger_ref: NodeRef,
    dispatch: Callback<MenuEvent>,
}

impl DropdownHandle {
    pub(crate) fn on_trigger_click(&self) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::TriggerClick, false)
    }

    pub(crate) fn on_trigger_keydown(&self) -> Callback<KeyboardEvent> {
        self.keyboard(MenuEvent::TriggerKey, false)
    }

    pub(crate) fn on_primary_click(&self) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::PrimaryClick, false)
    }

    pub(crate) fn on_item_keydown(&self, index: usize) -> Callback<KeyboardEvent> {
        self.keyboard(move |key| MenuEvent::ItemKey { index, key }, false)
    }

    pub(crate) fn on_item_click(&self, index: usize) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::ItemClick { index }, true)
    }

    pub(crate) fn on_item_enter(&self, index: usize) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::ItemPointerEnter { index }, false)
    }

    pub(crate) fn on_item_leave(&self, index: usize) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::ItemPointerLeave { index }, false)
    }

    /// Nested keys stay inside the submenu so the parent entry never sees them.
    pub(crate) fn on_submenu_keydown(
        &self,
        parent: usize,
        index: usize,
    ) -> Callback<KeyboardEvent> {
        self.keyboard(move |key| MenuEvent::SubmenuKey { parent, index, key }, true)
    }

    pub(crate) fn on_submenu_click(&self, parent: usize, index: usize) -> Callback<MouseEvent> {
        self.pointer(MenuEvent::SubmenuItemClick { parent, index }, true)
    }

    fn keyboard(
        &self,
        to_event: impl Fn(MenuKey) -> MenuEvent + 'static,
        contain: bool,
    ) -> Callback<KeyboardEvent> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |event: KeyboardEvent| {
            let Some(key) = MenuKey::from_key(&event.key()) else {
                return;
            };
            if key.prevents_default() {
                event.prevent_default();
            }
            if contain {
                event.stop_propagation();
            }
            dispatch.emit(to_event(key));
        })
    }

    fn pointer(&self, menu_event: MenuEvent, contain: bool) -> Callback<MouseEvent> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            if contain {
                event.prevent_default();
                event.stop_propagation();
            }
            dispatch.emit(menu_event);
        })
    }
}

/// Wire a dropdown instance: state, ids, outside dismissal, focus sync and command execution.
#[hook]
pub(crate) fn use_dropdown(
    items: Vec<MenuItem>,
    kind: MenuKind,
    id: Option<AttrValue>,
    primary: Option<Callback<()>>,
) -> DropdownHandle {
    let ids = (*use_state(move || {
        id.map_or_else(|| MenuIds::allocate("dropdown"), MenuIds::from_base)
    }))
    .clone();
    let state = use_mut_ref(MenuState::default);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let root_ref = use_node_ref();
    let trigger_ref = use_node_ref();
    let items = Rc::new(items);

    {
        use_effect_with_deps(
            |items: &Rc<Vec<MenuItem>>| {
                for item in items.iter() {
                    if let Err(err) = item.validate() {
                        console::warn!("menu item rejected", err.to_string());
                    }
                }
                || ()
            },
            Rc::clone(&items),
        );
    }

    let dispatch = {
        let state = state.clone();
        let items = Rc::clone(&items);
        let trigger_ref = trigger_ref.clone();
        Callback::from(move |event: MenuEvent| {
            let current = *state.borrow();
            let transition = current.apply(event, &items, kind);
            if transition.state != current {
                *state.borrow_mut() = transition.state;
                redraw.force_update();
            }
            for command in transition.commands {
                run_command(command, navigator.as_ref(), primary.as_ref(), &trigger_ref);
            }
        })
    };

    let current = *state.borrow();
    {
        let on_dismiss = {
            let dispatch = dispatch.clone();
            Callback::from(move |()| dispatch.emit(MenuEvent::OutsidePointer))
        };
        use_outside_dismiss(root_ref.clone(), current.is_open(), on_dismiss);
    }
    {
        let ids = ids.clone();
        use_effect_with_deps(
            move |target: &FocusTarget| {
                focus_target(&ids, *target);
                || ()
            },
            current.focus_target(),
        );
    }

    DropdownHandle {
        state: current,
        kind,
        ids,
        root_ref,
        trigger_ref,
        dispatch,
    }
}

fn run_command(
    command: MenuCommand,
    navigator: Option<&Navigator>,
    primary: Option<&Callback<()>>,
    trigger_ref: &NodeRef,
) {
    match command {
        MenuCommand::Navigate(url) => navigate(navigator, &url),
        MenuCommand::Run(action) => action.emit(()),
        MenuCommand::RunPrimary => {
            if let Some(primary) = primary {
                primary.emit(());
            }
        }
        MenuCommand::FocusTrigger => {
            if let Some(trigger) = trigger_ref.cast::<HtmlElement>() {
                focus_element(&trigger);
            }
        }
    }
}

fn navigate(navigator: Option<&Navigator>, url: &str) {
    let Some(navigator) = navigator else {
        console::error!("menu navigation requires a router", url.to_string());
        return;
    };
    match resolve_route(url) {
        Ok(route) => navigator.push(&route),
        Err(err) => {
            console::warn!("menu navigation fell through", err.to_string());
            navigator.push(&Route::NotFound);
        }
    }
}

fn focus_target(ids: &MenuIds, target: FocusTarget) {
    let id = match target {
        FocusTarget::None => return,
        FocusTarget::Item(index) => ids.item(index),
        FocusTarget::SubmenuItem { parent, index } => ids.submenu_item(parent, index),
    };
    match document()
        .get_element_by_id(&id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        Some(element) => focus_element(&element),
        None => console::warn!("menu focus target missing", id),
    }
}

fn focus_element(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        console::error!("menu focus failed", err);
    }
}
