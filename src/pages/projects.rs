//! Project listing with title search, the client's post form and the
//! freelancer's bid forms.

use leptos::prelude::*;

use crate::app::BrowserAuthStore;
use crate::components::bid_form::BidForm;
use crate::net::api::project_error_message;
use crate::net::types::{Project, ProjectQuery, ProjectStatus};
use crate::pages::forms::validate_new_project;
use crate::pages::listing::Load;
use crate::state::auth::AuthState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = StoredValue::new(expect_context::<BrowserAuthStore>());
    let projects = RwSignal::new(Load::<Project>::Pending);
    let query = RwSignal::new(ProjectQuery::default());
    let search = RwSignal::new(String::new());

    let fetch = move |q: ProjectQuery| {
        #[cfg(feature = "csr")]
        {
            let store = store.get_value();
            projects.set(Load::Pending);
            leptos::task::spawn_local(async move {
                projects.set(Load::from_result(store.projects(&q).await, "projects"));
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (store, q);
    };
    Effect::new(move || fetch(query.get()));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get().trim().to_owned();
        query.update(|q| q.search = (!term.is_empty()).then_some(term));
    };

    // Post form (clients).
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let post_info = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get() {
            return;
        }
        let project = match validate_new_project(&title.get(), &description.get(), &budget.get()) {
            Ok(project) => project,
            Err(msg) => {
                post_info.set(msg.to_owned());
                return;
            }
        };
        posting.set(true);
        post_info.set("Posting project...".to_owned());

        #[cfg(feature = "csr")]
        {
            let store = store.get_value();
            leptos::task::spawn_local(async move {
                match store.post_project(&project).await {
                    Ok(_) => {
                        title.set(String::new());
                        description.set(String::new());
                        budget.set(String::new());
                        post_info.set("Project posted.".to_owned());
                        fetch(query.get_untracked());
                    }
                    Err(e) => post_info.set(project_error_message(&e)),
                }
                posting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (project, project_error_message);
    };

    view! {
        <section class="listing">
            <h1>"Projects"</h1>
            <form class="listing__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search titles"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                <Show when=move || auth.with(AuthState::is_client)>
                    <label class="listing__filter">
                        <input
                            type="checkbox"
                            prop:checked=move || query.with(|q| q.mine)
                            on:change=move |ev| query.update(|q| q.mine = event_target_checked(&ev))
                        />
                        "Only my projects"
                    </label>
                </Show>
            </form>

            <Show when=move || auth.with(AuthState::is_client)>
                <form class="project-form" on:submit=on_post>
                    <h2>"Post a project"</h2>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Describe the work"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="Budget"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || posting.get()>
                        "Post project"
                    </button>
                    <Show when=move || !post_info.get().is_empty()>
                        <p class="project-form__message">{move || post_info.get()}</p>
                    </Show>
                </form>
            </Show>

            {move || match projects.get() {
                Load::Pending => view! { <p class="listing__status">"Loading projects..."</p> }.into_any(),
                Load::Failed(msg) => view! { <p class="listing__status listing__status--error">{msg}</p> }.into_any(),
                Load::Ready(items) if items.is_empty() => {
                    view! { <p class="listing__status">"No projects match."</p> }.into_any()
                }
                Load::Ready(items) => {
                    let can_bid = auth.with_untracked(AuthState::is_freelancer);
                    view! {
                        <ul class="listing__items">
                            {items.into_iter().map(|p| project_row(p, can_bid)).collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn project_row(project: Project, can_bid: bool) -> impl IntoView {
    let id = project.id;
    let open = project.status == ProjectStatus::Open;
    view! {
        <li class="listing__item">
            <h2>{project.title}</h2>
            <span class="listing__badge">{project.status.label()}</span>
            <p>{project.description}</p>
            <p class="listing__meta">"Budget $" {project.budget} " · posted by " {project.client}</p>
            {(can_bid && open).then(|| view! { <BidForm project_id=id/> })}
        </li>
    }
}
