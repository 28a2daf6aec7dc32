//! Single-trigger dropdown: one button toggles a flat list.

use super::controller::use_dropdown;
use super::parts::{chevron, render_menu, render_trigger};
use crate::core::menu::{MenuItem, MenuKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SingleLevelDropdownProps {
    pub(crate) label: AttrValue,
    pub(crate) items: Vec<MenuItem>,
    /// Element id base; allocated per instance when absent.
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(SingleLevelDropdown)]
pub(crate) fn single_level_dropdown(props: &SingleLevelDropdownProps) -> Html {
    let handle = use_dropdown(props.items.clone(), MenuKind::Flat, props.id.clone(), None);
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
