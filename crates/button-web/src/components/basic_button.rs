use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::styling::basic_style;

/// Plain button styled inline. The native `disabled` attribute stops
/// click dispatch, so there is no explicit guard.
#[component]
pub fn BasicButton(
    children: Children,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            style=move || basic_style(disabled.get())
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
