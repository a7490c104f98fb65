//! Annotated image component
//!
//! Renders the uploaded image with one absolutely positioned overlay per
//! detected face. Box coordinates come in on the 0-1000 scale and are
//! expressed as percentages of the rendered image, so the overlays track
//! the image at any display size.

use leptos::prelude::*;
use sentient_vision_common::{types::BOX_SCALE, FaceDetection, UploadedImage};

#[component]
pub fn FaceCanvas<F>(
    image: Signal<Option<UploadedImage>>,
    faces: Signal<Vec<FaceDetection>>,
    selected_index: Signal<Option<usize>>,
    on_face_selected: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="face-canvas">
            {move || {
                image.get().map(|img| {
                    view! { <img src=img.data_url alt=img.file_name /> }
                })
            }}
            {move || {
                let on_face_selected = on_face_selected.clone();
                faces
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, face)| {
                        let on_face_selected = on_face_selected.clone();
                        let style = box_style(&face);
                        view! {
                            <button
                                class="face-box"
                                class:selected=move || selected_index.get() == Some(i)
                                style=style
                                on:click=move |_| on_face_selected(i)
                            >
                                <span class="face-box-label">{i + 1}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// CSS position of a face box as percentages of the image.
fn box_style(face: &FaceDetection) -> String {
    let [ymin, xmin, ymax, xmax] = face.box_2d;
    let pct = |v: f64| v / BOX_SCALE * 100.0;
    format!(
        "left:{:.2}%;top:{:.2}%;width:{:.2}%;height:{:.2}%",
        pct(xmin),
        pct(ymin),
        pct(xmax - xmin),
        pct(ymax - ymin)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(box_2d: [f64; 4]) -> FaceDetection {
        FaceDetection {
            box_2d,
            emotions: vec![],
            summary: String::new(),
            apparent_age: None,
            gender_estimate: None,
        }
    }

    #[test]
    fn test_box_style_scales_to_percent() {
        let style = box_style(&face([100.0, 200.0, 500.0, 600.0]));
        assert_eq!(style, "left:20.00%;top:10.00%;width:40.00%;height:40.00%");
    }

    #[test]
    fn test_box_style_full_frame() {
        let style = box_style(&face([0.0, 0.0, 1000.0, 1000.0]));
        assert_eq!(style, "left:0.00%;top:0.00%;width:100.00%;height:100.00%");
    }
}
