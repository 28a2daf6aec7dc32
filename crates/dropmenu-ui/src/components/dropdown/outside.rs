//! Click-outside dismissal for any open overlay.
//!
//! # Design
//! - Document listeners exist only while the overlay is open; dropping them is the teardown.
//! - Each overlay instance owns its own listener pair, so menus never dismiss each other.
//! - The inside/outside decision lives in `core::menu::dismiss` for native tests.

use crate::core::menu::{PointerOrigin, dismisses};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;

const DISMISS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Emit `on_dismiss` when a pointer goes down outside `region` while `active`.
#[hook]
pub(crate) fn use_outside_dismiss(region: NodeRef, active: bool, on_dismiss: Callback<()>) {
    use_effect_with_deps(
        move |(region, active)| {
            let open = *active;
            let listeners = open.then(|| {
                let document = document();
                DISMISS_EVENTS.map(|kind| {
                    let region = region.clone();
                    let on_dismiss = on_dismiss.clone();
                    EventListener::new(&document, kind, move |event| {
                        let origin = PointerOrigin::from_containment(contains(&region, event));
                        if dismisses(open, origin) {
                            on_dismiss.emit(());
                        }
                    })
                })
            });
            move || drop(listeners)
        },
        (region, active),
    );
}

fn contains(region: &NodeRef, event: &Event) -> Option<bool> {
    let region = region.cast::<Node>()?;
    let target = event.target()?.dyn_into::<Node>().ok()?;
    Some(region.contains(Some(&target)))
}
