//! Item lists handed to the shell's dropdowns.

use crate::core::menu::{MenuIcon, MenuItem, SubmenuItem};
use crate::core::store::ShellStore;
use crate::core::theme::ThemePreference;
use gloo::dialogs::alert;
use std::rc::Rc;
use yew::Callback;
use yewdux::prelude::Dispatch;

/// Builds the callback that records one theme choice.
pub(super) type ThemeSetter = Rc<dyn Fn(ThemePreference) -> Callback<()>>;

pub(super) fn theme_setter(dispatch: &Dispatch<ShellStore>) -> ThemeSetter {
    let dispatch = dispatch.clone();
    Rc::new(move |theme| {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                store.select_theme(theme);
            });
        })
    })
}

fn logout() -> MenuItem {
    MenuItem::action("Logout", Callback::from(|()| alert("Logged out!"))).with_icon(MenuIcon::SignOut)
}

fn edit_profile() -> MenuItem {
    MenuItem::link("Edit Profile", "/edit").with_icon(MenuIcon::UserEdit)
}

fn view_activity() -> MenuItem {
    MenuItem::link("View Activity", "/view").with_icon(MenuIcon::History)
}

pub(super) fn account_items() -> Vec<MenuItem> {
    vec![edit_profile(), view_activity(), logout()]
}

pub(super) fn profile_items() -> Vec<MenuItem> {
    vec![
        edit_profile(),
        MenuItem::action("Delete profile", Callback::from(|()| alert("Delete profile")))
            .with_icon(MenuIcon::Delete),
    ]
}

pub(super) fn settings_items(set_theme: &ThemeSetter) -> Vec<MenuItem> {
    let themes = ThemePreference::all()
        .into_iter()
        .map(|theme| SubmenuItem::new(theme.label(), set_theme(theme)).with_icon(theme_icon(theme)))
        .collect();
    vec![
        edit_profile(),
        view_activity(),
        MenuItem::submenu("Theme", themes).with_icon(MenuIcon::Monitor),
        logout(),
    ]
}

const fn theme_icon(theme: ThemePreference) -> MenuIcon {
    match theme {
        ThemePreference::Light => MenuIcon::LightMode,
        ThemePreference::Dark => MenuIcon::DarkMode,
        ThemePreference::System => MenuIcon::Monitor,
    }
}
