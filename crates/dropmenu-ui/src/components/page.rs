//! Placeholder pages behind the router.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) body: AttrValue,
}

#[function_component(Placeholder)]
pub(crate) fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <section class="placeholder">
            <h2 class="text-xl font-semibold">{props.title.clone()}</h2>
            <p class="text-base-content/60">{props.body.clone()}</p>
        </section>
    }
}
