//! Inline SVG glyphs used by the dropdowns and their entries.

use crate::core::menu::MenuIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconChevronDown)]
pub(crate) fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m6 9l6 6l6-6" /> })
}

#[function_component(IconChevronUp)]
pub(crate) fn icon_chevron_up(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m18 15l-6-6l-6 6" /> })
}

#[function_component(IconChevronRight)]
pub(crate) fn icon_chevron_right(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m9 18l6-6l-6-6" /> })
}

#[function_component(IconUserPen)]
pub(crate) fn icon_user_pen(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M11.5 15H7a4 4 0 0 0-4 4v2m18.378-4.374a1 1 0 0 0-3.004-3.004l-4.01 4.012a2 2 0 0 0-.506.854l-.837 2.87a.5.5 0 0 0 .62.62l2.87-.837a2 2 0 0 0 .854-.506z" />
            <circle cx="10" cy="7" r="4" />
        </> },
    )
}

#[function_component(IconHistory)]
pub(crate) fn icon_history(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 12a9 9 0 1 0 9-9a9.75 9.75 0 0 0-6.74 2.74L3 8m0-5v5h5m4-1v5l4 2" /> },
    )
}

#[function_component(IconLogOut)]
pub(crate) fn icon_log_out(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m16 17l5-5l-5-5m5 5H9m0 9H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" /> },
    )
}

#[function_component(IconTrash)]
pub(crate) fn icon_trash(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" /> },
    )
}

#[function_component(IconSun)]
pub(crate) fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </> },
    )
}

#[function_component(IconMoon)]
pub(crate) fn icon_moon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" /> },
    )
}

#[function_component(IconMonitor)]
pub(crate) fn icon_monitor(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="20" height="14" x="2" y="3" rx="2" />
            <path d="M8 21h8m-4-4v4" />
        </> },
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct MenuGlyphProps {
    pub(crate) icon: MenuIcon,
}

/// Renders the glyph a menu entry asked for.
#[function_component(MenuGlyph)]
pub(crate) fn menu_glyph(props: &MenuGlyphProps) -> Html {
    let size = Some(AttrValue::from("4"));
    match props.icon {
        MenuIcon::UserEdit => html! { <IconUserPen size={size} /> },
        MenuIcon::History => html! { <IconHistory size={size} /> },
        MenuIcon::SignOut => html! { <IconLogOut size={size} /> },
        MenuIcon::Delete => html! { <IconTrash size={size} /> },
        MenuIcon::LightMode => html! { <IconSun size={size} /> },
        MenuIcon::DarkMode => html! { <IconMoon size={size} /> },
        MenuIcon::Monitor => html! { <IconMonitor size={size} /> },
    }
}
