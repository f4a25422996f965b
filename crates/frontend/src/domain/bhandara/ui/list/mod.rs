use contracts::domain::bhandara::{Bhandara, OwnerId};
use leptos::prelude::*;

use crate::domain::bhandara::store::BhandaraStore;
use crate::shared::date_utils::format_event_time;
use crate::shared::icons::icon;

/// Card grid of upcoming bhandaras, in the order they were posted.
#[component]
pub fn BhandaraList() -> impl IntoView {
    let store = use_context::<BhandaraStore>().expect("BhandaraStore not found in context");

    view! {
        <Show
            when=move || !store.events.get().is_empty()
            fallback=|| view! {
                <p class="empty-state">"No bhandaras announced yet. Be the first to share one."</p>
            }
        >
            <div class="card-grid">
                <For
                    each=move || store.events.get()
                    key=|event| event.id.clone()
                    children=move |event: Bhandara| view! { <BhandaraCard event=event /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn BhandaraCard(event: Bhandara) -> impl IntoView {
    let store = use_context::<BhandaraStore>().expect("BhandaraStore not found in context");
    let viewer = use_context::<OwnerId>().expect("viewer identity not found in context");

    // Delete stays hidden for records created under another identity. This
    // is advisory, client-local access control; nothing stronger exists
    // without a backend.
    let deletable = event.is_owned_by(&viewer);
    let id = event.id.clone();
    let handle_delete = move |_| {
        store.remove(&id);
    };

    view! {
        <article class="card">
            <div class="card__media">
                <img class="card__image" src=event.image_url.clone() alt=event.title.clone() />
                {deletable.then(|| view! {
                    <button
                        type="button"
                        class="button button--danger button--icon card__delete"
                        on:click=handle_delete
                    >
                        {icon("trash")}
                    </button>
                })}
            </div>
            <div class="card__body">
                <h2 class="card__title">{event.title.clone()}</h2>
                <p class="card__description">{event.description.clone()}</p>
                <div class="card__meta">
                    <span class="card__meta-row">
                        {icon("map-pin")}
                        <span>{event.location.clone()}</span>
                    </span>
                    <span class="card__meta-row">
                        {icon("clock")}
                        <span>{format_event_time(&event.date_time)}</span>
                    </span>
                </div>
            </div>
        </article>
    }
}
