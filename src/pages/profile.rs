//! Profile page showing the session identity.

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserAuthStore>();

    let username = move || auth.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let email = move || {
        auth.with(|s| s.user.as_ref().map(|u| u.email.clone()))
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| "Not provided".to_owned())
    };
    let role = move || auth.with(|s| s.role().map(Role::as_str).unwrap_or_default());

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            <dl class="profile__fields">
                <dt>"Username"</dt>
                <dd>{username}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <button class="profile__logout" on:click=move |_| store.logout()>
                "Log out"
            </button>
        </section>
    }
}
