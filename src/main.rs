use anyhow::Context;
use portfolio_chat::{build_app, run_server, AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[portfolio-chat] .env not loaded: {e} (using system environment)");
    }

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if !config.provider.has_usable_key() {
        tracing::warn!("OPENAI_API_KEY missing or placeholder; general questions get a setup notice");
    }

    let app = build_app(AppState::new(&config));
    run_server(app, config.port)
        .await
        .with_context(|| format!("server on port {} failed", config.port))
}
