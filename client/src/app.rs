//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};
use time::OffsetDateTime;

use crate::components::loader::Loader;
use crate::components::toaster::Toaster;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
};
use crate::router::{Dispatch, Page, dispatch};
use crate::state::auth::AuthState;
use crate::state::login::LOADING_MESSAGE;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::cookies::BrowserCookies;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and hands every location to
/// [`RouteOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/swob-developer.css"/>
        <Title text="SWOB Developer"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("any") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}

/// Renders whatever the route table decides for the current location.
#[component]
fn RouteOutlet() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    // Re-read the session cookie on every navigation so an expired session
    // is noticed on the next route change. Browser-only: effects do not run
    // during server rendering.
    Effect::new(move || {
        location.pathname.track();
        let current = SessionStore::new(BrowserCookies).current();
        auth.maybe_update(|state| state.sync_session(current, OffsetDateTime::now_utc()));
    });

    let route = Memo::new(move |_| dispatch(&location.pathname.get(), auth.get().status()));

    Effect::new(move || {
        if let Dispatch::Redirect(to) = route.get() {
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match route.get() {
        Dispatch::Render(Page::Login) => view! { <LoginPage/> }.into_any(),
        Dispatch::Render(Page::Signup) => view! { <SignupPage/> }.into_any(),
        Dispatch::Render(Page::Dashboard(tab)) => view! { <DashboardPage tab=tab/> }.into_any(),
        Dispatch::Render(Page::NotFound) => view! { <NotFoundPage/> }.into_any(),
        Dispatch::Redirect(_) | Dispatch::Pending => view! { <Loader message=LOADING_MESSAGE/> }.into_any(),
    }
}
