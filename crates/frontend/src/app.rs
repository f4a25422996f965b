use leptos::prelude::*;

use crate::domain::bhandara::store::BhandaraStore;
use crate::domain::bhandara::ui::form::BhandaraForm;
use crate::domain::bhandara::ui::list::BhandaraList;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::system::identity;

#[component]
pub fn App() -> impl IntoView {
    // One store and one identity for the whole app, handed down via context
    // instead of ambient globals.
    let store = BhandaraStore::new();
    let viewer = identity::get_or_create();
    provide_context(store);
    provide_context(viewer);

    store.load();
    store.start_refresh();
    on_cleanup(move || store.stop_refresh());

    let (adding, set_adding) = signal(false);

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Bhandara Finder"</h1>
                    <p class="page__tagline">"Find free community meals near you"</p>
                </div>
                <Button on_click=Callback::new(move |_| set_adding.update(|open| *open = !*open))>
                    {icon("plus")}
                    "Add a bhandara"
                </Button>
            </header>

            {move || store.persist_warning.get().map(|message| view! {
                <p class="banner banner--warning">{message}</p>
            })}

            <Show when=move || adding.get()>
                <BhandaraForm on_close=Callback::new(move |_| set_adding.set(false)) />
            </Show>

            <main class="page__content">
                <BhandaraList />
            </main>

            <footer class="page__footer">
                <span>"Made for the neighbourhood. Everything lives in your browser."</span>
            </footer>
        </div>
    }
}
