//! Split-button dropdown: a primary action beside a list toggle.
//!
//! # Design
//! - The primary region never opens the list; it runs the default action and closes the list.
//! - The toggle region owns the keyboard contract and the popup ARIA attributes.

use super::controller::use_dropdown;
use super::parts::{chevron, render_menu, render_trigger};
use crate::core::menu::{MenuItem, MenuKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SplitButtonDropdownProps {
    pub(crate) label: AttrValue,
    pub(crate) items: Vec<MenuItem>,
    #[prop_or_default]
    pub(crate) default_action: Option<Callback<()>>,
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(SplitButtonDropdown)]
pub(crate) fn split_button_dropdown(props: &SplitButtonDropdownProps) -> Html {
    let handle = use_dropdown(
        props.items.clone(),
        MenuKind::Flat,
        props.id.clone(),
        props.default_action.clone(),
    );
    let on_primary = props
        .default_action
        .is_some()
        .then(|| handle.on_primary_click());
    let toggle = render_trigger(
        &handle,
        classes!("btn", "btn-outline", "btn-sm", "h-10", "px-2", "rounded-l-none", "border-l-0"),
        Some(AttrValue::from(format!("{} options", props.label))),
        chevron(handle.state.is_open()),
    );

    html! {
        <div class={classes!("relative", "inline-block", props.class.clone())} ref={handle.root_ref.clone()}>
            <div class="join inline-flex">
                <button
                    type="button"
                    class="btn btn-outline btn-sm h-10 px-4 rounded-r-none"
                    aria-label={format!("{} primary action", props.label)}
                    onclick={on_primary}
                >
                    {props.label.clone()}
                </button>
                {toggle}
            </div>
            {render_menu(&handle, &props.items)}
        </div>
    }
}
