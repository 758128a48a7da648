//! General-knowledge answers from the chat-completion provider.
//!
//! Every failure is turned into a displayable answer here; nothing past this
//! point sees a [`ProviderError`].

use tracing::warn;

use crate::provider::{ErrorKind, ProviderClient, ProviderError};
use crate::response::NormalizedResponse;

pub const PROVIDER_SOURCE: &str = "OpenAI ChatGPT";

pub async fn fetch_external(provider: &ProviderClient, question: &str) -> NormalizedResponse {
    match provider.complete(question).await {
        Ok(answer) => NormalizedResponse::general(
            answer,
            PROVIDER_SOURCE,
            follow_up_suggestions(question),
        ),
        Err(err) => {
            if err.kind() != ErrorKind::NotConfigured {
                warn!(kind = ?err.kind(), error = %err, "provider call failed");
            }
            error_response(&err, question)
        }
    }
}

pub fn error_response(err: &ProviderError, question: &str) -> NormalizedResponse {
    match err.kind() {
        ErrorKind::NotConfigured => not_configured_response(),
        ErrorKind::RateLimited => rate_limited_response(),
        ErrorKind::Timeout | ErrorKind::MalformedResponse | ErrorKind::TransportOrServerError => {
            unavailable_response(question)
        }
    }
}

pub fn not_configured_response() -> NormalizedResponse {
    NormalizedResponse::general(
        "I'm configured to use OpenAI API for general knowledge questions, but no API key is \
         provided. Please add your OpenAI API key to enable this feature. Meanwhile, I can answer \
         questions about Ehsan's portfolio, skills, and experience!",
        "System Configuration",
        &[
            "What are your technical skills?",
            "Tell me about your banking projects",
            "What is your experience with Java?",
        ],
    )
}

pub fn rate_limited_response() -> NormalizedResponse {
    NormalizedResponse::general(
        "I'm currently experiencing high demand for general knowledge questions. Please try again \
         in a few moments.\n\nIn the meantime, I'd be happy to tell you about Ehsan's backend \
         development skills, Java experience, banking projects, or contact information!",
        "OpenAI Rate Limit",
        &[
            "What are your Java skills?",
            "Tell me about your banking projects",
            "What is your experience with Spring Boot?",
            "How can I contact you?",
            "What banking projects have you done?",
            "Tell me about your Spring Boot experience",
            "How can I reach you?",
        ],
    )
}

pub fn unavailable_response(question: &str) -> NormalizedResponse {
    let answer = format!(
        "I encountered an issue while processing your question about \"{question}\". This appears \
         to be outside my portfolio scope and requires external AI services, which are currently \
         unavailable.\n\nI'd be happy to help with questions about Ehsan's backend development \
         skills, Java experience, banking projects, or contact information instead!"
    );
    NormalizedResponse::general(
        answer,
        "System Status",
        &[
            "What are your Java skills?",
            "Tell me about your banking experience",
            "How can I contact you?",
        ],
    )
}

const TECH_SUGGESTIONS: &[&str] = &[
    "What are your Java skills?",
    "Tell me about your backend experience",
    "What projects have you worked on?",
];
const BACKEND_SUGGESTIONS: &[&str] = &[
    "Tell me about your Java backend projects",
    "What banking systems have you built?",
];
const FRONTEND_SUGGESTIONS: &[&str] = &[
    "I also work with Angular for frontend",
    "See my full-stack learning project",
];
const DEFAULT_SUGGESTIONS: &[&str] = &[
    "What are your technical skills?",
    "Tell me about your banking projects",
    "What is your experience with Spring Boot?",
    "How can I contact you?",
];

/// Picks follow-ups that steer a general question back to the portfolio.
pub fn follow_up_suggestions(question: &str) -> &'static [&'static str] {
    let lower = question.to_lowercase();

    if contains_any(&lower, &["tech", "programming", "code"]) {
        TECH_SUGGESTIONS
    } else if contains_any(&lower, &["backend", "server"]) {
        BACKEND_SUGGESTIONS
    } else if contains_any(&lower, &["frontend", "ui"]) {
        FRONTEND_SUGGESTIONS
    } else {
        DEFAULT_SUGGESTIONS
    }
}

fn contains_any(lower: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_buckets_follow_keyword_order() {
        assert_eq!(
            follow_up_suggestions("Is Rust a good programming language?")[0],
            "What are your Java skills?"
        );
        // "code" wins over "server"
        assert_eq!(
            follow_up_suggestions("server code")[1],
            "Tell me about your backend experience"
        );
        assert_eq!(
            follow_up_suggestions("How do servers handle load?").len(),
            2
        );
        assert_eq!(
            follow_up_suggestions("What makes a good UI?")[0],
            "I also work with Angular for frontend"
        );
        assert_eq!(follow_up_suggestions("Why is the sky blue?").len(), 4);
    }

    #[test]
    fn errors_map_to_fixed_answers() {
        let question = "Why is the sky blue?";

        let rate_limited = error_response(&ProviderError::RateLimited, question);
        assert_eq!(rate_limited.sources, vec!["OpenAI Rate Limit".to_string()]);
        assert_eq!(rate_limited.suggestions.len(), 7);

        let timeout = error_response(&ProviderError::Timeout(15_000), question);
        assert_eq!(timeout.sources, vec!["System Status".to_string()]);
        assert!(timeout.answer.contains("\"Why is the sky blue?\""));

        let malformed = error_response(&ProviderError::MalformedResponse("x".into()), question);
        assert_eq!(malformed, timeout);

        let not_configured = error_response(&ProviderError::NotConfigured, question);
        assert_eq!(
            not_configured.sources,
            vec!["System Configuration".to_string()]
        );

        for response in [rate_limited, timeout, not_configured] {
            assert!(response.is_general_knowledge);
            assert!(!response.suggestions.is_empty());
        }
    }
}
