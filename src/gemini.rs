use serde_json::Value;
use tracing::debug;

use crate::error::IdentifyError;
use crate::util::snippet;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Instruction sent with every upload. The model is told the exact JSON
/// shape wanted and to skip fencing and prose; it does not always listen,
/// which is what the repair pipeline in `report` is for.
pub const WEED_PROMPT: &str = r#"Analyze this image of a weed and provide the following information in JSON format:
{
  "name": "Common name of the weed",
  "scientificName": "Scientific name (Latin)",
  "description": "Detailed description of the weed",
  "characteristics": ["Key characteristic 1", "Key characteristic 2", "Key characteristic 3", "Key characteristic 4", "Key characteristic 5"],
  "controlMethods": ["Control method 1", "Control method 2", "Control method 3", "Control method 4", "Control method 5"],
  "impact": "Description of how this weed affects crops"
}

Return only the raw JSON object without any markdown formatting, code blocks, or additional text."#;

/// An image ready for the generateContent `inline_data` part: base64 bytes
/// plus the MIME type the upload declared.
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// Client for the Gemini generateContent API. Credential and model id are
/// injected at construction; nothing here reads the environment.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// The generateContent request body: one content with a text part and an
    /// inline image part.
    pub fn request_body(prompt: &str, image: &InlineImage) -> Value {
        serde_json::json!({
            "contents": [{
                "parts": [
                    {
                        "text": prompt
                    },
                    {
                        "inline_data": {
                            "mime_type": image.mime_type,
                            "data": image.data
                        }
                    }
                ]
            }]
        })
    }

    /// Sends the prompt and image, returning the model's text reply.
    ///
    /// One best-effort attempt: no retries, no timeout beyond the HTTP
    /// client's defaults. Upstream failures carry the status and body for
    /// the server log; callers never forward them to the client.
    pub async fn describe(&self, prompt: &str, image: &InlineImage) -> Result<String, IdentifyError> {
        let payload = Self::request_body(prompt, image);

        debug!(model = %self.model, "sending generateContent request");
        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "generateContent response: {}", snippet(&body));

        if !status.is_success() {
            return Err(IdentifyError::Api { status, body });
        }

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(err) => {
                debug!("generateContent body is not JSON ({err})");
                return Err(IdentifyError::EmptyReply);
            }
        };

        let reply = value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(IdentifyError::EmptyReply)?;

        Ok(reply.to_string())
    }
}
