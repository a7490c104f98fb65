use sentient_vision::error::SentientVisionError;

#[test]
fn missing_api_key_names_both_recovery_paths() {
    let message = format!("{}", SentientVisionError::MissingApiKey);
    assert!(message.contains("GEMINI_API_KEY"));
    assert!(message.contains("--set-api-key"));
}

#[test]
fn image_too_large_reports_sizes() {
    let error = SentientVisionError::ImageTooLarge(12_000_000, 10_485_760);
    let message = format!("{}", error);
    assert!(message.contains("12000000"));
    assert!(message.contains("10485760"));
}

#[test]
fn io_error_converts() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: SentientVisionError = io_error.into();
    assert!(matches!(error, SentientVisionError::Io(_)));
    assert!(format!("{}", error).contains("gone"));
}

#[test]
fn json_error_converts() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: SentientVisionError = json_error.into();
    assert!(matches!(error, SentientVisionError::JsonParse(_)));
}

#[test]
fn api_errors_keep_cause_text() {
    let call = SentientVisionError::ApiCall("API error: 503".into());
    assert_eq!(format!("{}", call), "API call error: API error: 503");

    let parse = SentientVisionError::ApiParse("Parse error: no JSON found".into());
    assert!(format!("{}", parse).contains("no JSON found"));
}
