//! Inline bid form shown to freelancers under an open project.

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::net::api::bid_error_message;
use crate::pages::forms::validate_new_bid;

#[component]
pub fn BidForm(project_id: u64) -> impl IntoView {
    let store = StoredValue::new(expect_context::<BrowserAuthStore>());
    let amount = RwSignal::new(String::new());
    let cover_letter = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let placed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let bid = match validate_new_bid(project_id, &amount.get(), &cover_letter.get()) {
            Ok(bid) => bid,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting bid...".to_owned());

        #[cfg(feature = "csr")]
        {
            let store = store.get_value();
            leptos::task::spawn_local(async move {
                match store.place_bid(&bid).await {
                    Ok(_) => {
                        placed.set(true);
                        info.set("Bid submitted.".to_owned());
                    }
                    Err(e) => info.set(bid_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (store, bid, bid_error_message);
    };

    view! {
        <Show when=move || !placed.get()>
            <form class="bid-form" on:submit=on_submit>
                <input
                    class="bid-form__amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <textarea
                    class="bid-form__letter"
                    placeholder="Why are you a good fit?"
                    prop:value=move || cover_letter.get()
                    on:input=move |ev| cover_letter.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || busy.get()>
                    "Place bid"
                </button>
            </form>
        </Show>
        <Show when=move || !info.get().is_empty()>
            <p class="bid-form__message">{move || info.get()}</p>
        </Show>
    }
}
