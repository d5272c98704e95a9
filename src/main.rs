mod config;
mod error;
mod llm;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // The credential is read once here. A missing key is not fatal: every
    // completion call fails at request time instead.
    let llm = llm::LlmClient::from_env().expect("LLM client init failed");
    if llm.has_api_key() {
        tracing::info!(model = llm.model(), "LLM client initialized");
    } else {
        tracing::warn!(
            model = llm.model(),
            key_var = llm.api_key_env(),
            "LLM API key not set; completion requests will fail"
        );
    }

    let state = state::AppState::new(Arc::new(llm));
    let app = routes::app(state, &config.client_dist_dir);

    let listener = tokio::net::TcpListener::bind((config.bind_addr.as_str(), config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        addr = %config.bind_addr,
        port = config.port,
        client_dist_dir = %config.client_dist_dir.display(),
        "askai listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
