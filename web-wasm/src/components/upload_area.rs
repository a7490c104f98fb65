//! Upload area component
//!
//! Accepts a dropped or picked file, reads it as a data URL and reports
//! either an accepted image or a rejection upstream.

use leptos::prelude::*;
use sentient_vision_common::{data_url, UploadedImage};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<FA, FR>(
    api_key: ReadSignal<String>,
    on_image_accepted: FA,
    on_image_rejected: FR,
) -> impl IntoView
where
    FA: Fn(UploadedImage) + 'static + Clone,
    FR: Fn(String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !api_key.get().is_empty();

    let handle_file = {
        let on_image_accepted = on_image_accepted.clone();
        let on_image_rejected = on_image_rejected.clone();
        move |file: File| {
            if !file.type_().starts_with("image/") {
                on_image_rejected(format!("{} is not an image file", file.name()));
                return;
            }
            read_file(file, on_image_accepted.clone(), on_image_rejected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    // one image per session; extra files are ignored
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(element) = document.create_element("input") else {
                return;
            };
            let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let input_clone = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=is_enabled
                fallback=|| view! {
                    <div class="upload-icon">"🔑"</div>
                    <p>"Enter your API key first"</p>
                    <p class="text-muted">"Set a Gemini API key above to upload a photo"</p>
                }
            >
                <div class="upload-icon">"📷"</div>
                <p>"Drop your image here, or click to choose a file"</p>
                <p class="text-muted">"Supports JPG, PNG, WEBP (max 10MB)"</p>
            </Show>
        </div>
    }
}

fn read_file<FA, FR>(file: File, on_image_accepted: FA, on_image_rejected: FR)
where
    FA: Fn(UploadedImage) + 'static,
    FR: Fn(String) + 'static + Clone,
{
    let file_name = file.name();
    let Ok(reader) = FileReader::new() else {
        on_image_rejected(format!("could not read {}", file_name));
        return;
    };

    let file_name_clone = file_name.clone();
    let reader_clone = reader.clone();
    let reject = on_image_rejected.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result() {
            Ok(result) => match result.as_string() {
                Some(url) if data_url::is_image(&url) => {
                    let mime_type = data_url::extract_mime_type(&url).to_string();
                    on_image_accepted(UploadedImage {
                        file_name: file_name_clone.clone(),
                        mime_type,
                        data_url: url,
                    });
                }
                _ => reject(format!("{} could not be read as an image", file_name_clone)),
            },
            Err(_) => reject(format!("{} could not be read", file_name_clone)),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if reader.read_as_data_url(&file).is_err() {
        on_image_rejected(format!("could not read {}", file_name));
    }
}
