use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// The picker promises "up to 10MB"; anything larger is rejected before it
/// is read.
const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// File picker that turns the chosen image into a data URI, so the record
/// embeds its image and needs no external storage.
#[component]
pub fn ImagePicker(
    /// Data URI of the chosen image, `None` until one is picked.
    value: RwSignal<Option<String>>,
) -> impl IntoView {
    let (error, set_error) = signal(None::<String>);

    let handle_file_select = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if file.size() > MAX_IMAGE_BYTES {
            set_error.set(Some("That image is too large, 10MB max".to_string()));
            return;
        }

        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("FileReader unavailable: {e:?}");
                return;
            }
        };

        let reader_handle = reader.clone();
        let onloadend = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            if let Some(data_url) = reader_handle.result().ok().and_then(|r| r.as_string()) {
                value.set(Some(data_url));
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        onloadend.forget();

        match reader.read_as_data_url(&file) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::warn!("could not read the selected image: {e:?}");
                set_error.set(Some("Could not read that file".to_string()));
            }
        }
    };

    view! {
        <div class="form__group">
            <span class="form__label">"Image"</span>
            <div class="image-picker">
                <Show
                    when=move || value.get().is_some()
                    fallback=move || view! {
                        <label class="image-picker__drop">
                            {icon("image")}
                            <span>"Upload a photo of the bhandara"</span>
                            <span class="image-picker__hint">"up to 10MB"</span>
                            <input
                                class="image-picker__input"
                                type="file"
                                accept="image/*"
                                on:change=handle_file_select
                            />
                        </label>
                    }
                >
                    <div class="image-picker__preview">
                        <img src=move || value.get().unwrap_or_default() alt="Preview" />
                        <button
                            type="button"
                            class="button button--danger button--icon image-picker__clear"
                            on:click=move |_| value.set(None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                </Show>
                {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
            </div>
        </div>
    }
}
