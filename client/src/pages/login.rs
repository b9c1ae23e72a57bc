//! Login page: email + password form with inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or via a guard redirect carrying `?next=<path>`. Users
//! who already hold a session are bounced to their intent (or the
//! dashboard) as soon as the session cookie has been read.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::state::login::{LOADING_MESSAGE, LoginPhase};
use crate::state::toast::ToastState;
use crate::util::auth::{INTENT_PARAM, NavigationIntent, mount_redirect};
use crate::util::validation::{FieldErrors, LoginForm, validate_login};
#[cfg(feature = "hydrate")]
use crate::{
    components::toaster::show_toast,
    net::api::HttpAuthClient,
    state::login::{LoginFlow, LoginOutcome},
    state::session::SessionStore,
    util::config::AppConfig,
    util::cookies::BrowserCookies,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let phase = RwSignal::new(LoginPhase::Idle);

    let intent = Memo::new(move |_| {
        query
            .get()
            .get(INTENT_PARAM)
            .and_then(|path| NavigationIntent::new(&path))
    });

    // Already signed in: leave the login page. Submissions navigate themselves.
    let navigate_mount = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        let target = intent.get();
        if state.loading || phase.get_untracked() != LoginPhase::Idle {
            return;
        }
        if let Some(to) = mount_redirect(state.is_authenticated(), target.as_ref()) {
            navigate_mount(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().shows_loader() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        if let Err(field_errors) = validate_login(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        phase.set(LoginPhase::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let target = intent.get_untracked();
            leptos::task::spawn_local(async move {
                let flow = LoginFlow::new(HttpAuthClient::new(&AppConfig::load()), SessionStore::new(BrowserCookies));
                let outcome = flow
                    .submit(&form, target.as_ref(), time::OffsetDateTime::now_utc())
                    .await;

                phase.set(outcome.next_phase());
                if let Some((kind, text)) = outcome.notification() {
                    show_toast(toasts, kind, text);
                }
                match outcome {
                    LoginOutcome::Invalid(field_errors) => errors.set(field_errors),
                    LoginOutcome::Authenticated { user, session, redirect_to } => {
                        auth.update(|state| state.sign_in(user, session));
                        navigate(&redirect_to, NavigateOptions::default());
                    }
                    LoginOutcome::Failed(_) => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, toasts);
    };

    view! {
        <Show when=move || phase.get().shows_loader()>
            <Loader message=LOADING_MESSAGE/>
        </Show>
        <div class="login-page" prop:hidden=move || phase.get().shows_loader()>
            <div class="login-card">
                <h1>"SMSWithoutBorders"</h1>
                <p class="login-card__subtitle">"Developer"</p>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label form-label--required" for="email">"Email address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="login-input"
                            class:login-input--error=move || errors.get().email.is_some()
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().email.is_some()>
                            <p class="form-error">{move || errors.get().email.unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <div class="form-group">
                        <label class="form-label form-label--required" for="password">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="login-input"
                            class:login-input--error=move || errors.get().password.is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().password.is_some()>
                            <p class="form-error">{move || errors.get().password.unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <div class="form-group">
                        <label class="form-checkbox">
                            <input
                                type="checkbox"
                                name="rememberMe"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            <span>"remember me"</span>
                        </label>
                    </div>
                    <button class="login-button" type="submit">"login"</button>
                </form>
                <p class="login-card__footer">
                    "Dont have an account? "
                    <a href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
