//! Prompt construction
//!
//! One prompt shared by the CLI and the web frontend: it spells out the
//! exact JSON schema the model must return so the strict parser can fail
//! closed on anything else.

/// How many emotions the model is asked to rank per face.
pub const EMOTIONS_PER_FACE: usize = 5;

/// Build the emotion-analysis instruction sent alongside the image.
pub fn build_emotion_prompt() -> String {
    format!(
        r#"You are an expert in reading facial expressions. Examine the attached photograph, detect every clearly visible human face, and describe the emotional state of each.

## Output format (return exactly this JSON structure)
{{
  "faces": [
    {{
      "box_2d": [ymin, xmin, ymax, xmax],
      "emotions": [{{"label": "joy", "confidence": 0.92}}],
      "summary": "one sentence describing this face's expression",
      "apparentAge": "25-30",
      "genderEstimate": "female"
    }}
  ],
  "overallAtmosphere": "one sentence describing the aggregate mood of the scene"
}}

## Rules
- box_2d coordinates are [ymin, xmin, ymax, xmax], each normalized to a 0-1000 scale
- list up to {EMOTIONS_PER_FACE} emotions per face, in descending confidence order
- confidence is a number between 0 and 1
- apparentAge and genderEstimate are optional; omit them when uncertain
- if no face is visible, return an empty faces array
- output the JSON object only, no explanations, no markdown fences"#
    )
}
