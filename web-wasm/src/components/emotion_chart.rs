//! Emotion chart component
//!
//! Ranked confidence bars for the selected face, with the face summary
//! and the optional age/gender estimates.

use leptos::prelude::*;
use sentient_vision_common::FaceDetection;

/// How many emotions the breakdown shows.
const TOP_EMOTIONS: usize = 3;

#[component]
pub fn EmotionChart(face: Signal<Option<FaceDetection>>) -> impl IntoView {
    view! {
        <div class="emotion-chart">
            {move || {
                face.get().map(|face| {
                    let traits = trait_badges(&face);
                    let bars = face
                        .top_emotions(TOP_EMOTIONS)
                        .iter()
                        .map(|emotion| {
                            let percent = emotion.confidence * 100.0;
                            view! {
                                <div class="emotion-row">
                                    <span class="emotion-label">{capitalize(&emotion.label)}</span>
                                    <div class="emotion-bar">
                                        <div
                                            class="emotion-bar-fill"
                                            style=format!("width: {:.0}%", percent)
                                        />
                                    </div>
                                    <span class="emotion-percent">{format!("{:.0}%", percent)}</span>
                                </div>
                            }
                        })
                        .collect_view();

                    view! {
                        <div class="face-detail">
                            <div class="face-detail-header">
                                <h2>"Detected Emotions"</h2>
                                {(!traits.is_empty()).then(|| view! {
                                    <span class="face-traits">{traits.join(" · ")}</span>
                                })}
                            </div>
                            <p class="face-summary">{face.summary.clone()}</p>
                            <div class="confidence-breakdown">{bars}</div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

fn trait_badges(face: &FaceDetection) -> Vec<String> {
    let mut traits = Vec::new();
    if let Some(age) = &face.apparent_age {
        traits.push(format!("{} yrs", age));
    }
    if let Some(gender) = &face.gender_estimate {
        traits.push(gender.clone());
    }
    traits
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentient_vision_common::Emotion;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("joy"), "Joy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Surprise"), "Surprise");
    }

    #[test]
    fn test_trait_badges() {
        let mut face = FaceDetection {
            box_2d: [0.0, 0.0, 10.0, 10.0],
            emotions: vec![Emotion {
                label: "joy".into(),
                confidence: 0.9,
            }],
            summary: "smiling".into(),
            apparent_age: Some("25-30".into()),
            gender_estimate: Some("female".into()),
        };
        assert_eq!(trait_badges(&face), vec!["25-30 yrs", "female"]);

        face.apparent_age = None;
        face.gender_estimate = None;
        assert!(trait_badges(&face).is_empty());
    }
}
