use sentient_vision_common::{build_emotion_prompt, parse_analysis_response};
use serde_json::json;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

// 1x1 red pixel PNG
const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[tokio::test]
async fn gemini_emotion_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let body = json!({
        "contents": [
            { "parts": [
                { "text": build_emotion_prompt() },
                { "inline_data": { "mime_type": "image/png", "data": TINY_PNG_BASE64 } }
            ] }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "responseMimeType": "application/json"
        }
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}?key={}", GEMINI_API_URL, api_key))
        .json(&body)
        .send()
        .await
        .expect("request failed");

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        panic!("gemini api failed with status {}: {}", status, text);
    }

    let payload: serde_json::Value = response.json().await.expect("invalid json response");
    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .expect("response text missing");

    // A single red pixel has no faces, but the schema must still hold.
    let result = parse_analysis_response(text).expect("failed to parse analysis response");
    assert!(result.faces.is_empty());
    assert!(!result.overall_atmosphere.is_empty());
}
