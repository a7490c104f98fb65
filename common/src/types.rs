//! Domain types
//!
//! The wire format mirrors the JSON the vision model is instructed to emit:
//! camelCase keys, `box_2d` as a [ymin, xmin, ymax, xmax] array normalized
//! to a 0-1000 scale.

use serde::{Deserialize, Serialize};

/// Upper bound of the normalized bounding-box coordinate space.
pub const BOX_SCALE: f64 = 1000.0;

/// A single emotion reading for one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub label: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

/// One detected face with its emotion breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetection {
    /// (ymin, xmin, ymax, xmax), each on the 0-1000 scale.
    #[serde(rename = "box_2d")]
    pub box_2d: [f64; 4],
    /// Descending confidence by convention (not enforced).
    pub emotions: Vec<Emotion>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_estimate: Option<String>,
}

impl FaceDetection {
    /// Project the normalized box onto an image of the given pixel size.
    ///
    /// # Returns
    /// (x, y, width, height) in pixels.
    pub fn pixel_rect(&self, image_width: f64, image_height: f64) -> (f64, f64, f64, f64) {
        let [ymin, xmin, ymax, xmax] = self.box_2d;
        let x = xmin / BOX_SCALE * image_width;
        let y = ymin / BOX_SCALE * image_height;
        let width = (xmax - xmin) / BOX_SCALE * image_width;
        let height = (ymax - ymin) / BOX_SCALE * image_height;
        (x, y, width, height)
    }

    /// The leading emotions for display, at most `count` of them.
    pub fn top_emotions(&self, count: usize) -> &[Emotion] {
        &self.emotions[..self.emotions.len().min(count)]
    }
}

/// Top-level result of one analysis invocation.
///
/// Replaced wholesale on each invocation, never merged or patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Detection order from the model (arbitrary).
    pub faces: Vec<FaceDetection>,
    pub overall_atmosphere: String,
}

/// A user-selected image, held as a displayable data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}
