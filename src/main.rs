use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weed_identifier::config::Config;
use weed_identifier::gemini::GeminiClient;
use weed_identifier::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let gemini = GeminiClient::new(config.api_key.clone(), config.model.clone());
    let app = routes::router(&config, gemini);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(model = %config.model, "weed identifier listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("serving HTTP")?;

    Ok(())
}
