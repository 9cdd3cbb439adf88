use weed_identifier::gemini::{GeminiClient, InlineImage, WEED_PROMPT};

#[test]
fn request_body_carries_prompt_and_inline_image() {
    let image = InlineImage {
        mime_type: "image/png".to_string(),
        data: "aGVsbG8=".to_string(),
    };
    let body = GeminiClient::request_body(WEED_PROMPT, &image);

    let parts = &body["contents"][0]["parts"];
    assert_eq!(parts[0]["text"].as_str(), Some(WEED_PROMPT));
    assert_eq!(
        parts[1]["inline_data"]["mime_type"].as_str(),
        Some("image/png")
    );
    assert_eq!(parts[1]["inline_data"]["data"].as_str(), Some("aGVsbG8="));
}

#[test]
fn prompt_requests_the_report_shape() {
    for field in [
        "\"name\"",
        "\"scientificName\"",
        "\"description\"",
        "\"characteristics\"",
        "\"controlMethods\"",
        "\"impact\"",
    ] {
        assert!(WEED_PROMPT.contains(field), "prompt is missing {field}");
    }
    assert!(WEED_PROMPT.contains("raw JSON object"));
}

#[test]
fn endpoint_embeds_model_and_key() {
    let client = GeminiClient::with_base_url(
        "key123".to_string(),
        "gemini-2.5-flash".to_string(),
        "http://localhost:9099".to_string(),
    );
    assert_eq!(
        client.endpoint(),
        "http://localhost:9099/v1beta/models/gemini-2.5-flash:generateContent?key=key123"
    );
}
