//! Gemini API client (native)
//!
//! Sends the encoded image and the shared emotion prompt to the
//! generateContent endpoint, then parses the model's JSON text output
//! into an AnalysisResponse.

use crate::config::Config;
use crate::error::{Result, SentientVisionError};
use sentient_vision_common::{
    build_emotion_prompt, data_url, parse_analysis_response, AnalysisResponse, UploadedImage,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API request envelope
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini API response envelope
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

fn build_request(image: &UploadedImage) -> Result<GeminiRequest> {
    let base64_data = data_url::extract_base64(&image.data_url)
        .ok_or_else(|| SentientVisionError::ImageLoad("invalid data URL".into()))?;

    Ok(GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_emotion_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
        },
    })
}

/// Call the Gemini API and parse the structured result.
pub async fn analyze_image(
    api_key: &str,
    image: &UploadedImage,
    config: &Config,
) -> Result<AnalysisResponse> {
    let request = build_request(image)?;
    let url = format!(
        "{}/{}:generateContent?key={}",
        GEMINI_API_BASE, config.model, api_key
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| SentientVisionError::ApiCall(e.to_string()))?;

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| SentientVisionError::ApiCall(e.to_string()))?;

    if !response.status().is_success() {
        return Err(SentientVisionError::ApiCall(format!(
            "API error: {}",
            response.status()
        )));
    }

    let payload: GeminiResponse = response
        .json()
        .await
        .map_err(|e| SentientVisionError::ApiCall(e.to_string()))?;

    let text = payload
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| SentientVisionError::ApiCall("empty response".into()))?;

    parse_analysis_response(&text).map_err(|e| SentientVisionError::ApiParse(e.to_string()))
}
