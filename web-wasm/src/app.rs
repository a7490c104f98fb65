//! Main application component
//!
//! Owns the result store in a single signal. Child components read
//! derived state and push intents back through `Store::apply`; the
//! Gemini call is the only suspension point, and its completion is
//! tagged with the generation it was dispatched under.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sentient_vision_common::{Intent, Phase, Store, UploadedImage};

use crate::api::gemini;
use crate::components::{
    emotion_chart::EmotionChart, face_canvas::FaceCanvas, face_selector::FaceSelector,
    header::Header, settings_panel::SettingsPanel, upload_area::UploadArea,
};

/// Single user-facing message for every analysis failure cause.
const ANALYSIS_FAILED: &str =
    "Analysis failed. Please try a different image or check your API key.";

#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(String::new());
    let store = RwSignal::new(Store::new());

    // derived read-only views of the store
    let phase = Signal::derive(move || store.with(|s| s.phase()));
    let image = Signal::derive(move || store.with(|s| s.image().cloned()));
    let faces = Signal::derive(move || {
        store.with(|s| s.result().map(|r| r.faces.clone()).unwrap_or_default())
    });
    let face_count =
        Signal::derive(move || store.with(|s| s.result().map(|r| r.faces.len()).unwrap_or(0)));
    let selected_index = Signal::derive(move || store.with(|s| s.selected_index()));
    let selected_face = Signal::derive(move || store.with(|s| s.selected_face().cloned()));
    let atmosphere = Signal::derive(move || {
        store.with(|s| {
            s.result()
                .map(|r| r.overall_atmosphere.clone())
                .unwrap_or_default()
        })
    });
    let error = Signal::derive(move || store.with(|s| s.error().map(|e| e.to_string())));

    // intents
    let on_image_accepted =
        move |uploaded: UploadedImage| store.update(|s| s.apply(Intent::ImageAccepted(uploaded)));
    let on_image_rejected =
        move |message: String| store.update(|s| s.apply(Intent::ImageRejected(message)));
    let on_face_selected = move |index: usize| store.update(|s| s.apply(Intent::FaceSelected(index)));
    let on_reset = move |_: ()| store.update(|s| s.apply(Intent::Reset));

    let on_analyze = move |_| {
        let Some(uploaded) = store.with(|s| s.image().cloned()) else {
            return;
        };
        let key = api_key.get_untracked();

        store.update(|s| s.apply(Intent::AnalysisStarted));
        if store.with(|s| s.phase()) != Phase::Analyzing {
            return;
        }
        let generation = store.with(|s| s.generation());

        spawn_local(async move {
            match gemini::analyze_emotions(&key, &uploaded).await {
                Ok(response) => store.update(|s| {
                    s.apply(Intent::AnalysisCompleted {
                        generation,
                        response,
                    })
                }),
                Err(e) => {
                    gloo::console::error!(format!("analysis failed: {:?}", e));
                    store.update(|s| {
                        s.apply(Intent::AnalysisFailed {
                            generation,
                            message: ANALYSIS_FAILED.to_string(),
                        })
                    });
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header on_reset=on_reset />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <Show when=move || phase.get() == Phase::Idle>
                <UploadArea
                    api_key=api_key
                    on_image_accepted=on_image_accepted
                    on_image_rejected=on_image_rejected
                />
            </Show>

            <Show when=move || image.get().is_some()>
                <FaceCanvas
                    image=image
                    faces=faces
                    selected_index=selected_index
                    on_face_selected=on_face_selected
                />
            </Show>

            <Show when=move || phase.get() == Phase::Ready>
                <button class="btn btn-primary analyze-btn" on:click=on_analyze>
                    "🧠 Analyze Emotions"
                </button>
            </Show>

            <Show when=move || phase.get() == Phase::Analyzing>
                <div class="analyzing-panel">
                    <div class="spinner"></div>
                    <h3>"Analyzing expressions..."</h3>
                    <p class="text-muted">
                        "Scanning facial landmarks and cross-referencing emotion patterns."
                    </p>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span class="error-icon">"⚠"</span>
                    <p>{move || error.get().unwrap_or_default()}</p>
                </div>
            </Show>

            <Show when=move || phase.get() == Phase::Done>
                <div class="atmosphere-card">
                    <h3>"✨ Overall Atmosphere"</h3>
                    <p class="atmosphere-text">{move || atmosphere.get()}</p>
                </div>

                <FaceSelector
                    face_count=face_count
                    selected_index=selected_index
                    on_face_selected=on_face_selected
                />

                <EmotionChart face=selected_face />
            </Show>

            <Show when=move || matches!(phase.get(), Phase::Done | Phase::Failed)>
                <button class="btn btn-dark" on:click=move |_| on_reset(())>
                    "New Analysis"
                </button>
            </Show>
        </div>
    }
}
