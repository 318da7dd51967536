//! Messages page. The API has no messaging endpoint yet.

use leptos::prelude::*;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <section class="listing">
            <h1>"Messages"</h1>
            <p class="listing__status">"No conversations yet."</p>
        </section>
    }
}
