//! Authenticated dashboard shell with products, credentials and docs tabs.
//!
//! Only reached through route dispatch, which has already checked the
//! session. Tab content is a routing entry point; the views are placeholders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::DashboardTab;
use crate::state::auth::{AuthState, end_session};
use crate::state::session::SessionStore;
use crate::util::auth::LOGIN_ROUTE;
use crate::util::cookies::BrowserCookies;

#[component]
pub fn DashboardPage(tab: DashboardTab) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        auth.update(|state| end_session(&SessionStore::new(BrowserCookies), state));
        log::info!("session ended by user");
    };

    let account = move || {
        auth.get()
            .user
            .and_then(|user| user.profile_str("email").map(str::to_owned))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <aside class="dashboard__nav">
                <h2 class="dashboard__title">"Developer"</h2>
                <nav>
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|item| {
                            let current = if item == tab { "page" } else { "false" };
                            view! {
                                <a class="dashboard__link" href=item.path() aria-current=current>
                                    {item.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="dashboard__account">{account}</p>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </aside>
            <main class="dashboard__content">
                {match tab {
                    DashboardTab::Products => view! { <ProductsView/> }.into_any(),
                    DashboardTab::Credentials => view! { <CredentialsView/> }.into_any(),
                    DashboardTab::Docs => view! { <DocsView/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ProductsView() -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h1>"Products"</h1>
            <p>"Services available to your developer account."</p>
        </section>
    }
}

#[component]
fn CredentialsView() -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h1>"Credentials"</h1>
            <p>"API credentials issued to your developer account."</p>
        </section>
    }
}

#[component]
fn DocsView() -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h1>"Docs"</h1>
            <p>"Integration guides and API reference."</p>
        </section>
    }
}
