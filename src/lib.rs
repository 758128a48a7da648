//! Answer backend for the portfolio chat widget.
//!
//! Questions that mention the portfolio owner's work are answered from canned
//! knowledge; everything else goes to a chat-completion provider. Either way
//! the caller gets a [`NormalizedResponse`], never an error.

pub mod api;
pub mod classifier;
pub mod config;
pub mod external;
pub mod knowledge;
pub mod provider;
pub mod response;
pub mod service;

use axum::Router;

pub use config::{AppConfig, ProviderConfig};
pub use response::{NormalizedResponse, ResponseKind};
pub use service::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            chat: ChatService::new(config),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "portfolio chat listening");
    axum::serve(listener, app).await
}
