//! Top-right toast stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push notifications through [`show_toast`]; the single `Toaster`
//! mounted by `App` renders them. In the browser each toast schedules its own
//! dismissal after `TOAST_DURATION_MS`; clicking dismisses it early.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

/// Queue a toast and schedule its removal.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let Some(id) = toasts.try_update(|state| state.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
        toasts.try_update(|state| state.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster toaster--top-right">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let (class, role) = match toast.kind {
        ToastKind::Success => ("toast toast--success", "status"),
        ToastKind::Error => ("toast toast--error", "alert"),
    };

    view! {
        <div class=class role=role on:click=move |_| toasts.update(|state| state.dismiss(id))>
            {toast.message}
        </div>
    }
}
