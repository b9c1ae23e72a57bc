//! Full-card loading indicator.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <div class="loader__spinner" aria-hidden="true"></div>
            <p class="loader__message">{message}</p>
        </div>
    }
}
