//! Header component

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"SentientVision - Emotion Analysis"</h1>
            <button
                class="btn btn-secondary"
                on:click=move |_| on_reset(())
            >
                "Reset"
            </button>
        </header>
    }
}
