//! Multi-level dropdown: top-level entries may open one nested list.
//!
//! # Design
//! - Only one nested list is open at a time; the state machine keeps a single expanded parent.
//! - Hover opens on enter and closes on leave, so moving across entries never flickers.
//! - Nested key events are contained so the parent entry's handler never double-handles them.

use super::controller::use_dropdown;
use super::parts::{chevron, render_menu, render_trigger};
use crate::core::menu::{MenuItem, MenuKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MultiLevelDropdownProps {
    pub(crate) label: AttrValue,
    pub(crate) items: Vec<MenuItem>,
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(MultiLevelDropdown)]
pub(crate) fn multi_level_dropdown(props: &MultiLevelDropdownProps) -> Html {
    let handle = use_dropdown(props.items.clone(), MenuKind::Nested, props.id.clone(), None);
    let trigger = render_trigger(
        &handle,
        classes!("btn", "btn-outline", "btn-sm", "h-10", "px-4"),
        None,
        html! {
            <>
                {props.label.clone()}
                <span class="ml-2">{chevron(handle.state.is_open())}</span>
            </>
        },
    );

    html! {
        <div class={classes!("relative", "inline-block", props.class.clone())} ref={handle.root_ref.clone()}>
            {trigger}
            {render_menu(&handle, &props.items)}
        </div>
    }
}
