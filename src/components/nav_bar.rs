//! Top navigation bar; links depend on whether the session is signed in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::BrowserAuthStore;
use crate::pages::my_bids::bids_title;
use crate::routes::{HOME_PATH, LOGIN_PATH, MESSAGES_PATH, MY_BIDS_PATH, PROFILE_PATH, PROJECTS_PATH, REGISTER_PATH};
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = StoredValue::new(expect_context::<BrowserAuthStore>());

    view! {
        <nav class="nav-bar">
            <A href=HOME_PATH>"Marketplace"</A>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=|| {
                    view! {
                        <A href=LOGIN_PATH>"Log in"</A>
                        <A href=REGISTER_PATH>"Register"</A>
                    }
                }
            >
                <A href=PROJECTS_PATH>"Projects"</A>
                <A href=MY_BIDS_PATH>{move || auth.with(bids_title)}</A>
                <A href=MESSAGES_PATH>"Messages"</A>
                <A href=PROFILE_PATH>"Profile"</A>
                <button class="nav-bar__logout" on:click=move |_| store.with_value(BrowserAuthStore::logout)>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
