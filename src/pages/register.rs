//! Registration page: username, email, password and marketplace role.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::net::types::{RegisterData, Role};
use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthState;

pub(crate) const MISSING_FIELDS: &str = "Fill in every field.";
pub(crate) const INVALID_EMAIL: &str = "Enter a valid email address.";
pub(crate) const INVALID_ROLE: &str = "Choose client or freelancer.";

pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegisterData, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    let role = Role::parse(role).ok_or(INVALID_ROLE)?;
    Ok(RegisterData { username: username.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserAuthStore>();
    let navigate = leptos_router::hooks::use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Client.as_str().to_owned());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|s| s.loading) {
            return;
        }
        let data = match validate_register_input(&username.get(), &email.get(), &password.get(), &role.get()) {
            Ok(data) => data,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if store.register(&data).await.is_ok() {
                    navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&store, &navigate, data);
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { auth.with(|s| s.error.clone()).unwrap_or_default() } else { local }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="client">"I want to hire"</option>
                        <option value="freelancer">"I want to work"</option>
                    </select>
                    <button class="auth-button" type="submit" disabled=move || auth.with(|s| s.loading)>
                        "Register"
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="auth-message">{message}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
