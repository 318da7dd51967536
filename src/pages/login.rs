//! Login page with username + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::net::types::LoginCredentials;
use crate::routes::REGISTER_PATH;
use crate::state::auth::AuthState;

pub(crate) const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trimmed username and raw password, both required.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginCredentials { username: username.to_owned(), password: password.to_owned() })
}

/// Login page. A successful login flips the session to authenticated and the
/// route guard moves the user to the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserAuthStore>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|s| s.loading) {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if store.login(&credentials).await.is_err() {
                    password.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&store, credentials);
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { auth.with(|s| s.error.clone()).unwrap_or_default() } else { local }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
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
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.with(|s| s.loading)>
                        {move || if auth.with(|s| s.loading) { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="auth-message">{message}</p>
                </Show>
                <p class="auth-switch">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
