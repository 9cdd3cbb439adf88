use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures on the path between "upload received" and "model reply in hand".
///
/// A reply that arrives but will not parse is not an error: that degrades to
/// the fallback report instead (see [`WeedReport::from_model_reply`]).
///
/// [`WeedReport::from_model_reply`]: crate::report::WeedReport::from_model_reply
#[derive(Debug, Error)]
pub enum IdentifyError {
    #[error("no image provided")]
    MissingImage,
    #[error("malformed multipart upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Gemini reply contained no text candidate")]
    EmptyReply,
}

impl IdentifyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingImage | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Http(_) | Self::Api { .. } | Self::EmptyReply => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Clients get one opaque message regardless of the cause; the specific
/// reason is only logged.
impl IntoResponse for IdentifyError {
    fn into_response(self) -> Response {
        error!("weed identification failed: {self}");
        let body = Json(json!({ "error": "Failed to identify weed" }));
        (self.status_code(), body).into_response()
    }
}
