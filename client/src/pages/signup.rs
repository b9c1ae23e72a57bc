//! Public sign-up entry point.

use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SMSWithoutBorders"</h1>
                <p class="login-card__subtitle">"Create a developer account"</p>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}
