//! Result store: the single source of truth for one analysis session.
//!
//! Modeled as an explicit state machine. Views read the store and emit
//! intents; `Store::apply` is the only mutation path. Asynchronous
//! completions carry the generation number they were dispatched under,
//! and a completion whose generation no longer matches the store is
//! discarded, so a response arriving after a reset or re-upload cannot
//! populate state that belongs to a different image.

use crate::types::{AnalysisResponse, FaceDetection, UploadedImage};

/// Observable phase of the session, derived from the store fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image.
    Idle,
    /// Image present, no result yet.
    Ready,
    /// Analysis call in flight.
    Analyzing,
    /// Result present.
    Done,
    /// Error present; the image (if any) is kept.
    Failed,
}

/// User and completion intents. All state changes go through these.
#[derive(Debug, Clone)]
pub enum Intent {
    /// A readable image was selected.
    ImageAccepted(UploadedImage),
    /// The selected file could not be read as an image.
    ImageRejected(String),
    /// Analysis was triggered. Only honored from `Ready`.
    AnalysisStarted,
    /// The analysis call resolved.
    AnalysisCompleted {
        generation: u64,
        response: AnalysisResponse,
    },
    /// The analysis call failed.
    AnalysisFailed { generation: u64, message: String },
    /// A face was picked in the result view.
    FaceSelected(usize),
    /// Clear everything back to `Idle`.
    Reset,
}

/// Session state. Owns the current image, result, error and selection.
#[derive(Debug, Clone, Default)]
pub struct Store {
    image: Option<UploadedImage>,
    result: Option<AnalysisResponse>,
    error: Option<String>,
    selected_face: Option<usize>,
    analyzing: bool,
    generation: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.analyzing {
            Phase::Analyzing
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Done
        } else if self.image.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_face
    }

    /// The currently selected face, if any.
    pub fn selected_face(&self) -> Option<&FaceDetection> {
        let result = self.result.as_ref()?;
        result.faces.get(self.selected_face?)
    }

    /// Tag for the analysis dispatched most recently. Completions must
    /// echo this value back or they are discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one intent. Transitions not permitted in the current phase
    /// are ignored, matching the UI which never offers them.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ImageAccepted(image) => {
                // A new image invalidates any in-flight call.
                self.generation += 1;
                self.image = Some(image);
                self.result = None;
                self.error = None;
                self.selected_face = None;
                self.analyzing = false;
            }

            Intent::ImageRejected(message) => {
                self.error = Some(message);
            }

            Intent::AnalysisStarted => {
                if self.phase() == Phase::Ready {
                    self.generation += 1;
                    self.analyzing = true;
                    self.error = None;
                }
            }

            Intent::AnalysisCompleted {
                generation,
                response,
            } => {
                if generation != self.generation || !self.analyzing {
                    return; // stale completion
                }
                self.analyzing = false;
                self.selected_face = if response.faces.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.result = Some(response);
            }

            Intent::AnalysisFailed {
                generation,
                message,
            } => {
                if generation != self.generation || !self.analyzing {
                    return; // stale failure
                }
                self.analyzing = false;
                self.error = Some(message);
            }

            Intent::FaceSelected(index) => {
                if self.analyzing {
                    return;
                }
                if let Some(result) = &self.result {
                    if index < result.faces.len() {
                        self.selected_face = Some(index);
                    }
                }
            }

            Intent::Reset => {
                *self = Store {
                    generation: self.generation + 1,
                    ..Store::default()
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_analysis_response;
    use crate::types::Emotion;

    fn sample_image(name: &str) -> UploadedImage {
        UploadedImage {
            file_name: name.to_string(),
            mime_type: "image/jpeg".to_string(),
            data_url: format!("data:image/jpeg;base64,{}", name),
        }
    }

    fn response_with_faces(count: usize) -> AnalysisResponse {
        let faces = (0..count)
            .map(|i| FaceDetection {
                box_2d: [0.0, i as f64 * 100.0, 100.0, i as f64 * 100.0 + 100.0],
                emotions: vec![Emotion {
                    label: "joy".into(),
                    confidence: 0.9,
                }],
                summary: format!("face {}", i),
                apparent_age: None,
                gender_estimate: None,
            })
            .collect();
        AnalysisResponse {
            faces,
            overall_atmosphere: "cheerful".into(),
        }
    }

    /// Drive a store through upload and a started analysis, returning the
    /// dispatched generation.
    fn start_analysis(store: &mut Store) -> u64 {
        store.apply(Intent::ImageAccepted(sample_image("a.jpg")));
        store.apply(Intent::AnalysisStarted);
        assert_eq!(store.phase(), Phase::Analyzing);
        store.generation()
    }

    // =============================================
    // intake
    // =============================================

    #[test]
    fn test_image_accepted_clears_previous_state() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(2),
        });
        assert_eq!(store.phase(), Phase::Done);

        store.apply(Intent::ImageAccepted(sample_image("b.jpg")));
        assert_eq!(store.phase(), Phase::Ready);
        assert_eq!(store.image().unwrap().file_name, "b.jpg");
        assert!(store.result().is_none());
        assert!(store.error().is_none());
        assert!(store.selected_index().is_none());
    }

    #[test]
    fn test_image_rejected_surfaces_error() {
        let mut store = Store::new();
        store.apply(Intent::ImageRejected("not a readable image".into()));
        assert_eq!(store.phase(), Phase::Failed);
        assert_eq!(store.error(), Some("not a readable image"));
        assert!(store.image().is_none());
    }

    #[test]
    fn test_image_accepted_after_rejection_clears_error() {
        let mut store = Store::new();
        store.apply(Intent::ImageRejected("bad file".into()));
        store.apply(Intent::ImageAccepted(sample_image("ok.jpg")));
        assert_eq!(store.phase(), Phase::Ready);
        assert!(store.error().is_none());
    }

    // =============================================
    // analysis lifecycle
    // =============================================

    #[test]
    fn test_analysis_started_requires_image() {
        let mut store = Store::new();
        store.apply(Intent::AnalysisStarted);
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn test_analysis_started_not_reentrant() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        // second trigger while in flight must not bump the generation
        store.apply(Intent::AnalysisStarted);
        assert_eq!(store.generation(), generation);
    }

    #[test]
    fn test_completion_selects_first_face() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(3),
        });
        assert_eq!(store.phase(), Phase::Done);
        assert_eq!(store.selected_index(), Some(0));
        assert_eq!(store.result().unwrap().faces.len(), 3);
    }

    #[test]
    fn test_completion_with_no_faces_leaves_selection_empty() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(0),
        });
        assert_eq!(store.phase(), Phase::Done);
        assert!(store.selected_index().is_none());
    }

    #[test]
    fn test_failure_keeps_image_and_sets_error() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisFailed {
            generation,
            message: "network error".into(),
        });
        assert_eq!(store.phase(), Phase::Failed);
        assert!(store.result().is_none());
        assert_eq!(store.error(), Some("network error"));
        assert!(store.image().is_some());
    }

    #[test]
    fn test_reanalysis_requires_reset() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(1),
        });
        // Done -> Analyzing is not a permitted transition
        store.apply(Intent::AnalysisStarted);
        assert_eq!(store.phase(), Phase::Done);
    }

    // =============================================
    // stale completions
    // =============================================

    #[test]
    fn test_completion_after_reset_is_discarded() {
        let mut store = Store::new();
        let stale = start_analysis(&mut store);
        store.apply(Intent::Reset);
        store.apply(Intent::AnalysisCompleted {
            generation: stale,
            response: response_with_faces(1),
        });
        assert_eq!(store.phase(), Phase::Idle);
        assert!(store.result().is_none());
    }

    #[test]
    fn test_completion_after_new_upload_is_discarded() {
        let mut store = Store::new();
        let stale = start_analysis(&mut store);
        store.apply(Intent::ImageAccepted(sample_image("newer.jpg")));
        store.apply(Intent::AnalysisCompleted {
            generation: stale,
            response: response_with_faces(1),
        });
        assert_eq!(store.phase(), Phase::Ready);
        assert!(store.result().is_none());
        assert_eq!(store.image().unwrap().file_name, "newer.jpg");
    }

    #[test]
    fn test_failure_after_reset_is_discarded() {
        let mut store = Store::new();
        let stale = start_analysis(&mut store);
        store.apply(Intent::Reset);
        store.apply(Intent::AnalysisFailed {
            generation: stale,
            message: "late network error".into(),
        });
        assert_eq!(store.phase(), Phase::Idle);
        assert!(store.error().is_none());
    }

    // =============================================
    // selection
    // =============================================

    #[test]
    fn test_face_selected_within_bounds() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(3),
        });
        store.apply(Intent::FaceSelected(2));
        assert_eq!(store.selected_index(), Some(2));
        assert_eq!(store.selected_face().unwrap().summary, "face 2");
    }

    #[test]
    fn test_face_selected_out_of_bounds_ignored() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(2),
        });
        store.apply(Intent::FaceSelected(5));
        assert_eq!(store.selected_index(), Some(0));
    }

    #[test]
    fn test_face_selected_without_result_ignored() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("a.jpg")));
        store.apply(Intent::FaceSelected(0));
        assert!(store.selected_index().is_none());
    }

    #[test]
    fn test_selection_always_within_face_count() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(4),
        });
        for index in [3usize, 0, 2, 99, 1] {
            store.apply(Intent::FaceSelected(index));
            let selected = store.selected_index().unwrap();
            assert!(selected < store.result().unwrap().faces.len());
        }
    }

    // =============================================
    // reset
    // =============================================

    #[test]
    fn test_reset_from_ready() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("a.jpg")));
        store.apply(Intent::Reset);
        assert_eq!(store.phase(), Phase::Idle);
        assert!(store.image().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = Store::new();
        let generation = start_analysis(&mut store);
        store.apply(Intent::AnalysisCompleted {
            generation,
            response: response_with_faces(2),
        });
        store.apply(Intent::Reset);
        assert_eq!(store.phase(), Phase::Idle);
        assert!(store.image().is_none());
        assert!(store.result().is_none());
        assert!(store.error().is_none());
        assert!(store.selected_index().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("a.jpg")));
        store.apply(Intent::Reset);
        let after_once = store.clone();
        store.apply(Intent::Reset);
        assert_eq!(store.phase(), after_once.phase());
        assert!(store.image().is_none());
        assert!(store.result().is_none());
        assert!(store.error().is_none());
        assert!(store.selected_index().is_none());
    }

    // =============================================
    // end-to-end scenarios against the wire format
    // =============================================

    #[test]
    fn test_scenario_successful_analysis() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("group.jpg")));
        store.apply(Intent::AnalysisStarted);
        let generation = store.generation();

        let response = parse_analysis_response(
            r#"{"faces":[{"box_2d":[100,100,400,400],"emotions":[{"label":"joy","confidence":0.92}],"summary":"smiling"}],"overallAtmosphere":"cheerful"}"#,
        )
        .unwrap();
        store.apply(Intent::AnalysisCompleted {
            generation,
            response,
        });

        assert_eq!(store.phase(), Phase::Done);
        assert_eq!(store.selected_index(), Some(0));
        let face = store.selected_face().unwrap();
        assert_eq!(face.emotions[0].label, "joy");
        assert_eq!(store.result().unwrap().overall_atmosphere, "cheerful");
    }

    #[test]
    fn test_scenario_failed_analysis() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("b.jpg")));
        store.apply(Intent::AnalysisStarted);
        let generation = store.generation();
        store.apply(Intent::AnalysisFailed {
            generation,
            message: "Analysis failed. Please try a different image or check your API key.".into(),
        });

        assert_eq!(store.phase(), Phase::Failed);
        assert!(store.error().is_some());
        assert!(store.result().is_none());
        assert_eq!(store.image().unwrap().file_name, "b.jpg");
    }

    #[test]
    fn test_scenario_upload_then_reset_without_analysis() {
        let mut store = Store::new();
        store.apply(Intent::ImageAccepted(sample_image("c.jpg")));
        store.apply(Intent::Reset);
        assert_eq!(store.phase(), Phase::Idle);
    }
}
