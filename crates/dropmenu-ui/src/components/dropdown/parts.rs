//! Markup shared by the dropdown variants: trigger, list, entries, submenu.

use super::controller::DropdownHandle;
use crate::components::atoms::icons::{
    IconChevronDown, IconChevronRight, IconChevronUp, MenuGlyph,
};
use crate::core::menu::{MenuIcon, MenuItem, MenuKind, SubmenuItem, roving_tab_index};
use yew::prelude::*;

const ENTRY_CLASS: &str = "relative flex items-center gap-2 px-4 py-2 text-sm rounded-md";

pub(crate) fn chevron(open: bool) -> Html {
    let size = Some(AttrValue::from("4"));
    if open {
        html! { <IconChevronUp size={size} /> }
    } else {
        html! { <IconChevronDown size={size} /> }
    }
}

/// Toggle control with the popup ARIA contract.
pub(crate) fn render_trigger(
    handle: &DropdownHandle,
    class: Classes,
    label: Option<AttrValue>,
    content: Html,
) -> Html {
    html! {
        <button
            id={handle.ids.trigger()}
            ref={handle.trigger_ref.clone()}
            type="button"
            class={class}
            aria-label={label}
            aria-haspopup="true"
            aria-expanded={handle.state.is_open().to_string()}
            aria-controls={handle.ids.menu()}
            onclick={handle.on_trigger_click()}
            onkeydown={handle.on_trigger_keydown()}
        >
            {content}
        </button>
    }
}

/// Top-level list, rendered only while open.
pub(crate) fn render_menu(handle: &DropdownHandle, items: &[MenuItem]) -> Html {
    if !handle.state.is_open() {
        return html! {};
    }
    html! {
        <div class="absolute left-1/2 -translate-x-1/2 top-12 z-10">
            <ul
                role="menu"
                id={handle.ids.menu()}
                aria-labelledby={handle.ids.trigger()}
                class="w-56 rounded-box border border-base-300 bg-base-100 p-1 shadow-md"
            >
                {for items.iter().enumerate().map(|(index, item)| render_entry(handle, index, item))}
            </ul>
        </div>
    }
}

fn render_entry(handle: &DropdownHandle, index: usize, item: &MenuItem) -> Html {
    let nested = handle.kind == MenuKind::Nested && item.has_submenu();
    let expanded = handle.state.expanded_submenu() == Some(index);
    let focused = handle.state.focus() == Some(index);
    let class = classes!(
        ENTRY_CLASS,
        "hover:bg-base-200",
        (focused && !expanded).then_some("bg-base-200")
    );
    let (onmouseenter, onmouseleave) = match handle.kind {
        MenuKind::Nested => (
            Some(handle.on_item_enter(index)),
            Some(handle.on_item_leave(index)),
        ),
        MenuKind::Flat => (None, None),
    };
    let body = match &item.url {
        Some(url) if !nested => html! {
            <a
                href={url.clone()}
                tabindex="-1"
                class="w-full text-left"
                onclick={handle.on_item_click(index)}
            >
                {item.title.clone()}
            </a>
        },
        _ => html! {
            <>
                <button
                    type="button"
                    tabindex="-1"
                    class="flex w-full items-center justify-between text-left"
                    onclick={handle.on_item_click(index)}
                >
                    {item.title.clone()}
                    {nested.then(|| html! { <IconChevronRight size={Some(AttrValue::from("4"))} /> }).unwrap_or_default()}
                </button>
                {(nested && expanded).then(|| render_submenu(handle, index, item.submenu_entries())).unwrap_or_default()}
            </>
        },
    };

    html! {
        <li
            role="menuitem"
            id={handle.ids.item(index)}
            class={class}
            tabindex={roving_tab_index(handle.state.focus(), index).to_string()}
            aria-haspopup={nested.then_some("true")}
            aria-expanded={nested.then(|| expanded.to_string())}
            onkeydown={handle.on_item_keydown(index)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            {glyph(item.icon)}
            {body}
        </li>
    }
}

fn render_submenu(handle: &DropdownHandle, parent: usize, entries: &[SubmenuItem]) -> Html {
    let focus = handle.state.submenu_focus();
    html! {
        <ul
            role="menu"
            id={handle.ids.submenu(parent)}
            aria-labelledby={handle.ids.item(parent)}
            class="absolute left-full top-0 mt-0.5 w-44 rounded-box border border-base-300 bg-base-100 p-1 shadow-md"
        >
            {for entries.iter().enumerate().map(|(index, entry)| html! {
                <li
                    role="menuitem"
                    id={handle.ids.submenu_item(parent, index)}
                    class={classes!(
                        ENTRY_CLASS,
                        "hover:bg-base-200",
                        (focus == Some(index)).then_some("bg-base-200")
                    )}
                    tabindex={roving_tab_index(focus, index).to_string()}
                    onkeydown={handle.on_submenu_keydown(parent, index)}
                >
                    {glyph(entry.icon)}
                    <button
                        type="button"
                        tabindex="-1"
                        class="w-full text-left"
                        onclick={handle.on_submenu_click(parent, index)}
                    >
                        {entry.title.clone()}
                    </button>
                </li>
            })}
        </ul>
    }
}

fn glyph(icon: Option<MenuIcon>) -> Html {
    icon.map(|icon| html! { <span><MenuGlyph icon={icon} /></span> })
        .unwrap_or_default()
}
