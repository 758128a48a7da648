use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{AppState, NormalizedResponse};

use super::models::{AskRequest, ErrorResponse, WelcomeResponse};

const GREETING: &str = "👋 Hello! I'm Ehsan's AI portfolio assistant. I specialize in providing \
detailed information about his backend development expertise, particularly in Java, Spring Boot, \
Quarkus, and banking systems. What would you like to know?";

const QUICK_SUGGESTIONS: &[&str] = &[
    "What are your Java and Spring Boot skills?",
    "Tell me about your banking projects",
    "What is your experience with Quarkus?",
    "How can I contact you for opportunities?",
    "Tell me about your backend development experience",
];

pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<NormalizedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "question must not be empty".to_string(),
            }),
        ));
    }

    Ok(Json(state.chat.get_answer(question).await))
}

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        greeting: GREETING,
        suggestions: QUICK_SUGGESTIONS,
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
