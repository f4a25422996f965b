use contracts::domain::bhandara::{BhandaraDraft, OwnerId};
use leptos::prelude::*;

use crate::domain::bhandara::store::BhandaraStore;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::date_utils::{local_to_instant, parse_datetime_local};
use crate::shared::icons::icon;

/// Inline creation form, shown while the header toggle is open.
///
/// All field validation lives here and in the draft DTO; the store accepts
/// whatever record this form hands it.
#[component]
pub fn BhandaraForm(
    /// Called after a successful submit and on cancel.
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<BhandaraStore>().expect("BhandaraStore not found in context");
    let viewer = use_context::<OwnerId>().expect("viewer identity not found in context");

    let (title, set_title) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (date_time, set_date_time) = signal(String::new());
    let image = RwSignal::new(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let submit = move || {
        let draft = BhandaraDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            date_time: date_time.get_untracked(),
            image_url: image.get_untracked(),
        };

        if let Err(message) = draft.validate() {
            set_error.set(Some(message));
            return;
        }
        let Some(naive) = parse_datetime_local(&draft.date_time) else {
            set_error.set(Some("Enter a valid date and time".to_string()));
            return;
        };

        store.add(draft.into_record(local_to_instant(naive), viewer.clone()));
        set_error.set(None);
        on_close.run(());
    };

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Share a bhandara"</h2>
                <Button variant="ghost" class="button--icon" on_click=Callback::new(move |_| on_close.run(()))>
                    {icon("x")}
                </Button>
            </div>
            <form class="form" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <div class="form__row">
                    <Input
                        label="Title"
                        value=title
                        on_input=Callback::new(move |v| set_title.set(v))
                        placeholder="Name of the bhandara"
                        required=true
                        id="title"
                    />
                    <Input
                        label="Location"
                        value=location
                        on_input=Callback::new(move |v| set_location.set(v))
                        placeholder="Where is it happening?"
                        required=true
                        id="location"
                    />
                </div>
                <Textarea
                    label="Description"
                    value=description
                    on_input=Callback::new(move |v| set_description.set(v))
                    placeholder="What is being served?"
                    rows=3
                    id="description"
                />
                <Input
                    label="Date and time"
                    value=date_time
                    on_input=Callback::new(move |v| set_date_time.set(v))
                    input_type="datetime-local"
                    required=true
                    id="date_time"
                />
                <ImagePicker value=image />
                {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
                <div class="form__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Cancel"
                    </Button>
                    <Button button_type="submit">"Post it"</Button>
                </div>
            </form>
        </section>
    }
}
