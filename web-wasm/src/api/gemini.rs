//! Gemini API client (browser fetch)
//!
//! Builds the generateContent request around the shared emotion prompt,
//! sends it through the fetch API, and parses the model's JSON text
//! output into an AnalysisResponse.

use sentient_vision_common::{
    build_emotion_prompt, data_url, parse_analysis_response, AnalysisResponse, UploadedImage,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// Gemini API request
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

/// Gemini API response
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

async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// Analyze the emotions in one uploaded image.
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `image` - image with a data-URL preview
///
/// # Returns
/// The parsed per-face emotion breakdown, or a single opaque error.
pub async fn analyze_emotions(
    api_key: &str,
    image: &UploadedImage,
) -> Result<AnalysisResponse, JsValue> {
    let base64_data = data_url::extract_base64(&image.data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let mime_type = data_url::extract_mime_type(&image.data_url);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_emotion_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_analysis_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Parse error: {}", e)))
}
