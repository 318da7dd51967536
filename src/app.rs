//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::pages::{
    home::HomePage, login::LoginPage, messages::MessagesPage, my_bids::MyBidsPage, profile::ProfilePage,
    projects::ProjectsPage, register::RegisterPage,
};
use crate::routes::{
    HOME_PATH, LOGIN_PATH, MESSAGES_PATH, MY_BIDS_PATH, PROFILE_PATH, PROJECTS_PATH, REGISTER_PATH, access_for,
};
use crate::state::auth::AuthState;
use crate::state::store::{AuthStore, restore_session};
use crate::util::guard::{GuardDecision, evaluate, install_route_guard};
use crate::util::token_storage::LocalStorage;

/// Session store as wired in the browser.
pub type BrowserAuthStore = AuthStore<BrowserTransport, LocalStorage, RwSignal<AuthState>>;

/// Root application component.
///
/// Restores the session, provides it and its store as context, and declares
/// one guarded route per entry of the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let storage = LocalStorage::new(&config.token_key);
    let auth = RwSignal::new(restore_session(&storage, config.restore_policy));
    let store: BrowserAuthStore =
        AuthStore::new(ApiClient::new(BrowserTransport, &config.api_base_url), storage, auth);

    provide_context(auth);
    provide_context(store);

    view! {
        <Title text="Freelance Marketplace"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Guarded path=HOME_PATH><HomePage/></Guarded> }/>
                    <Route
                        path=StaticSegment("projects")
                        view=|| view! { <Guarded path=PROJECTS_PATH><ProjectsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("my-bids")
                        view=|| view! { <Guarded path=MY_BIDS_PATH><MyBidsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("messages")
                        view=|| view! { <Guarded path=MESSAGES_PATH><MessagesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded path=PROFILE_PATH><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded path=LOGIN_PATH><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <Guarded path=REGISTER_PATH><RegisterPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders `children` only while the session satisfies the route's access
/// requirement, redirecting otherwise.
#[component]
fn Guarded(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access = access_for(path);
    install_route_guard(auth, access, use_navigate());

    view! {
        <Show when=move || evaluate(access, auth.with(AuthState::is_authenticated)) == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
