use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::error::IdentifyError;
use crate::gemini::{GeminiClient, InlineImage, WEED_PROMPT};
use crate::page;
use crate::report::WeedReport;

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

pub fn router(config: &Config, gemini: GeminiClient) -> Router {
    let state = Arc::new(AppState { gemini });

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/identify", post(identify))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The identification handler: multipart image in, weed report out.
///
/// The upload is read fully into memory, forwarded inline-base64 to Gemini,
/// and the text reply is repaired into a [`WeedReport`]. Parse trouble ends
/// in the fallback report; everything before the reply propagates as an
/// [`IdentifyError`].
async fn identify(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<WeedReport>, IdentifyError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            let declared = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await?;
            upload = Some((bytes, declared));
            break;
        }
    }

    let (bytes, declared) = upload.ok_or(IdentifyError::MissingImage)?;
    if bytes.is_empty() {
        return Err(IdentifyError::MissingImage);
    }

    let mime_type = resolve_mime(declared.as_deref(), &bytes);
    info!(bytes = bytes.len(), mime = %mime_type, "identifying uploaded image");

    let image = InlineImage {
        mime_type,
        data: general_purpose::STANDARD.encode(&bytes),
    };

    let reply = state.gemini.describe(WEED_PROMPT, &image).await?;
    Ok(Json(WeedReport::from_model_reply(&reply)))
}

/// The browser's declared content type wins; otherwise the magic bytes are
/// sniffed. Gemini wants some `image/*` type, so unknown bytes go out as
/// JPEG and the model copes.
pub fn resolve_mime(declared: Option<&str>, bytes: &[u8]) -> String {
    if let Some(mime) = declared {
        if !mime.is_empty() && mime != "application/octet-stream" {
            return mime.to_string();
        }
    }

    use image::ImageFormat;
    let mime = match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        _ => "image/jpeg",
    };
    mime.to_string()
}
