//! Authenticated landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::my_bids::bids_title;
use crate::routes::{MY_BIDS_PATH, PROJECTS_PATH};
use crate::state::auth::AuthState;

pub(crate) fn greeting(state: &AuthState) -> String {
    match &state.user {
        Some(user) => format!("Welcome back, {}!", user.username),
        None => "Welcome!".to_owned(),
    }
}

pub(crate) fn role_tagline(state: &AuthState) -> &'static str {
    if state.is_client() {
        "Post projects and review the bids freelancers send you."
    } else if state.is_freelancer() {
        "Browse open projects and keep track of your bids."
    } else {
        ""
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="home">
            <h1>{move || auth.with(greeting)}</h1>
            <p class="home__tagline">{move || auth.with(role_tagline)}</p>
            <div class="home__actions">
                <A href=PROJECTS_PATH>"Browse projects"</A>
                <A href=MY_BIDS_PATH>{move || auth.with(bids_title)}</A>
            </div>
        </section>
    }
}
