//! Face selector component
//!
//! One button per detected face; only rendered when there is more than
//! one face to choose from. Indices always come from the current result,
//! so every selectable value is in bounds.

use leptos::prelude::*;

#[component]
pub fn FaceSelector<F>(
    face_count: Signal<usize>,
    selected_index: Signal<Option<usize>>,
    on_face_selected: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when={move || face_count.get() > 1}>
            <div class="face-selector">
                {
                    let on_face_selected = on_face_selected.clone();
                    move || {
                        let on_face_selected = on_face_selected.clone();
                        (0..face_count.get())
                            .map(|i| {
                                let on_face_selected = on_face_selected.clone();
                                view! {
                                    <button
                                        class="face-tab"
                                        class:active=move || selected_index.get() == Some(i)
                                        on:click=move |_| on_face_selected(i)
                                    >
                                        {format!("Face {}", i + 1)}
                                    </button>
                                }
                            })
                            .collect_view()
                    }
                }
            </div>
        </Show>
    }
}
