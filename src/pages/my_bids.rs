//! Bids page: a freelancer's own bids, or the bids on a client's projects.

#[cfg(test)]
#[path = "my_bids_test.rs"]
mod my_bids_test;

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::net::types::Bid;
use crate::pages::listing::Load;
use crate::state::auth::AuthState;

/// Nav label and page heading for the session's role.
pub fn bids_title(state: &AuthState) -> &'static str {
    if state.is_client() { "Bids on my projects" } else { "My Bids" }
}

pub(crate) fn empty_bids_message(state: &AuthState) -> &'static str {
    if state.is_client() {
        "No freelancer has bid on your projects yet."
    } else {
        "You have not placed any bids."
    }
}

#[component]
pub fn MyBidsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<BrowserAuthStore>();
    let bids = RwSignal::new(Load::<Bid>::Pending);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        bids.set(Load::from_result(store.my_bids().await, "bids"));
    });
    #[cfg(not(feature = "csr"))]
    let _ = store;

    view! {
        <section class="listing">
            <h1>{move || auth.with(bids_title)}</h1>
            {move || match bids.get() {
                Load::Pending => view! { <p class="listing__status">"Loading bids..."</p> }.into_any(),
                Load::Failed(msg) => view! { <p class="listing__status listing__status--error">{msg}</p> }.into_any(),
                Load::Ready(items) if items.is_empty() => {
                    view! { <p class="listing__status">{auth.with_untracked(empty_bids_message)}</p> }.into_any()
                }
                Load::Ready(items) => {
                    view! { <ul class="listing__items">{items.into_iter().map(bid_row).collect_view()}</ul> }.into_any()
                }
            }}
        </section>
    }
}

fn bid_row(bid: Bid) -> impl IntoView {
    view! {
        <li class="listing__item">
            <h2>{bid.project}</h2>
            <p class="listing__meta">"$" {bid.amount} " by " {bid.freelancer} " · " {bid.created_at}</p>
            <p>{bid.cover_letter}</p>
        </li>
    }
}
