use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(alias = "prompt")]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub greeting: &'static str,
    pub suggestions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
