//! Root shell, layout and routing for the dropdown menus.

use crate::components::dropdown::{MultiLevelDropdown, SingleLevelDropdown, SplitButtonDropdown};
use crate::components::page::Placeholder;
use crate::core::routes::Route;
use crate::core::store::ShellStore;
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::utils::window;
use menus::{account_items, profile_items, settings_items, theme_setter};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

mod menus;

#[function_component(DropmenuApp)]
fn dropmenu_app() -> Html {
    html! {
        <BrowserRouter>
            <Layout />
        </BrowserRouter>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    html! {
        <div class="text-center mt-9">
            <main>
                <Switch<Route> render={switch} />
                <RootShell />
            </main>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Edit => html! { <Placeholder title="Edit profile" body="Profile editing form." /> },
        Route::Profile => html! { <Placeholder title="Profile" body="Public profile overview." /> },
        Route::View => html! { <Placeholder title="Activity" body="Recent account activity." /> },
        Route::Home | Route::NotFound => html! {},
    }
}

#[function_component(RootShell)]
fn root_shell() -> Html {
    let (store, dispatch) = use_store::<ShellStore>();
    let navigator = use_navigator();
    let theme = store.theme;

    use_effect_with_deps(
        move |theme| {
            apply_theme(theme.resolve(prefers_dark()));
            || ()
        },
        theme,
    );

    let account = use_memo(|_| account_items(), ());
    let profile = use_memo(|_| profile_items(), ());
    let settings = use_memo(move |_| settings_items(&theme_setter(&dispatch)), ());
    let view_profile = Callback::from(move |()| match &navigator {
        Some(navigator) => navigator.push(&Route::Profile),
        None => console::error!("profile navigation requires a router"),
    });

    html! {
        <>
            <h1 class="text-2xl font-bold">{format!("Current Theme: {}", theme.as_str())}</h1>
            <div class="mt-20 flex items-center justify-center gap-4">
                <SingleLevelDropdown
                    label="Single dropdown"
                    items={(*account).clone()}
                />
                <SplitButtonDropdown
                    label="View profile"
                    default_action={Some(view_profile)}
                    items={(*profile).clone()}
                />
                <MultiLevelDropdown
                    label="Multi level dropdown"
                    items={(*settings).clone()}
                />
            </div>
        </>
    }
}

fn prefers_dark() -> bool {
    match window().match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            console::error!("color scheme query failed", err);
            false
        }
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        if let Err(err) = body.set_attribute("data-theme", mode.as_str()) {
            console::error!("theme attribute update failed", err);
        }
    }
}

/// Mount the app on `#root`, or on `<body>` when the page has no root element.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DropmenuApp>::with_root(root).render();
    } else {
        yew::Renderer::<DropmenuApp>::new().render();
    }
}
