//! Model response parser
//!
//! Extracts the JSON payload from the model's free-form text output and
//! validates it strictly: a response that deserializes but violates the
//! schema's numeric ranges is rejected as a parse error rather than
//! accepted half-formed.

use crate::error::{Error, Result};
use crate::types::{AnalysisResponse, BOX_SCALE};

/// Extract the JSON portion of a model response.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. bare outermost { ... } object
/// 3. error
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON found in model output".into()))
}

/// Parse and validate an analysis response.
///
/// # Arguments
/// * `response` - raw model output, possibly with surrounding prose
///
/// # Returns
/// * `Ok(AnalysisResponse)` - well-formed and in range
/// * `Err` - no JSON, schema mismatch, or out-of-range values
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResponse> {
    let json_str = extract_json(response)?;
    let parsed: AnalysisResponse = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("schema mismatch: {}", e)))?;
    validate(&parsed)?;
    Ok(parsed)
}

fn validate(response: &AnalysisResponse) -> Result<()> {
    for (i, face) in response.faces.iter().enumerate() {
        let [ymin, xmin, ymax, xmax] = face.box_2d;
        let in_range = |v: f64| (0.0..=BOX_SCALE).contains(&v);
        if ![ymin, xmin, ymax, xmax].iter().all(|v| in_range(*v)) {
            return Err(Error::Parse(format!(
                "face {}: box_2d {:?} outside 0-{} range",
                i, face.box_2d, BOX_SCALE
            )));
        }
        if ymax < ymin || xmax < xmin {
            return Err(Error::Parse(format!(
                "face {}: box_2d {:?} has inverted corners",
                i, face.box_2d
            )));
        }
        for emotion in &face.emotions {
            if !(0.0..=1.0).contains(&emotion.confidence) {
                return Err(Error::Parse(format!(
                    "face {}: confidence {} for '{}' outside [0, 1]",
                    i, emotion.confidence, emotion.label
                )));
            }
        }
    }
    Ok(())
}
