mod handlers;
mod models;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub use handlers::{ask, not_found, welcome};
pub use models::{AskRequest, ErrorResponse, WelcomeResponse};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/ask", post(ask))
        .route("/welcome", get(welcome))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
