use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::config::ProviderConfig;

pub const GENERAL_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Provide accurate, \
informative answers to general knowledge questions.";

/// Failure kinds the answer path distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotConfigured,
    RateLimited,
    Timeout,
    MalformedResponse,
    TransportOrServerError,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider credential is missing or a placeholder")]
    NotConfigured,
    #[error("provider is rate limiting requests")]
    RateLimited,
    #[error("provider request timed out after {0} ms")]
    Timeout(u64),
    #[error("provider response was malformed: {0}")]
    MalformedResponse(String),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to reach provider: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProviderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured => ErrorKind::NotConfigured,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Status { .. } | Self::Transport(_) => ErrorKind::TransportOrServerError,
        }
    }
}

/// Linear backoff bookkeeping for rate-limited calls.
///
/// Only [`ErrorKind::RateLimited`] earns a retry. Retry `n` waits `n * unit`.
#[derive(Debug, Clone)]
pub struct RetryState {
    max_retries: u32,
    unit: Duration,
    attempt: u32,
    last_error: Option<ErrorKind>,
}

impl RetryState {
    pub fn new(max_retries: u32, unit: Duration) -> Self {
        Self {
            max_retries,
            unit,
            attempt: 0,
            last_error: None,
        }
    }

    /// Records a failure and returns the delay before the next attempt, or
    /// `None` when the call should give up.
    pub fn next_delay(&mut self, kind: ErrorKind) -> Option<Duration> {
        self.last_error = Some(kind);
        if kind != ErrorKind::RateLimited || self.attempt >= self.max_retries {
            return None;
        }
        self.attempt += 1;
        Some(self.unit * self.attempt)
    }

    pub fn retries(&self) -> u32 {
        self.attempt
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.has_usable_key()
    }

    /// Asks the provider for a completion, retrying only on rate limits.
    pub async fn complete(&self, question: &str) -> Result<String, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured);
        }

        let mut retry = RetryState::new(self.config.max_retries, self.config.backoff_unit());
        loop {
            let err = match self.send_once(question).await {
                Ok(answer) => return Ok(answer),
                Err(err) => err,
            };

            match retry.next_delay(err.kind()) {
                Some(delay) => {
                    warn!(
                        attempt = retry.retries(),
                        delay_ms = delay.as_millis() as u64,
                        "provider rate limited, retrying"
                    );
                    sleep(delay).await;
                }
                None => return Err(err),
            }
        }
    }

    async fn send_once(&self, question: &str) -> Result<String, ProviderError> {
        timeout(self.config.timeout(), self.request(question))
            .await
            .map_err(|_| ProviderError::Timeout(self.config.timeout_ms))?
    }

    async fn request(&self, question: &str) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: GENERAL_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(self.config.api_key.trim())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        extract_message(&payload)
    }
}

fn extract_message(payload: &Value) -> Result<String, ProviderError> {
    payload
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backoff_is_linear_and_bounded() {
        let mut retry = RetryState::new(3, Duration::from_secs(2));
        assert_eq!(
            retry.next_delay(ErrorKind::RateLimited),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            retry.next_delay(ErrorKind::RateLimited),
            Some(Duration::from_secs(4))
        );
        assert_eq!(
            retry.next_delay(ErrorKind::RateLimited),
            Some(Duration::from_secs(6))
        );
        assert_eq!(retry.next_delay(ErrorKind::RateLimited), None);
        assert_eq!(retry.retries(), 3);
        assert_eq!(retry.last_error(), Some(ErrorKind::RateLimited));
    }

    #[test]
    fn other_errors_are_not_retried() {
        for kind in [
            ErrorKind::Timeout,
            ErrorKind::MalformedResponse,
            ErrorKind::TransportOrServerError,
            ErrorKind::NotConfigured,
        ] {
            let mut retry = RetryState::new(3, Duration::from_secs(2));
            assert_eq!(retry.next_delay(kind), None);
            assert_eq!(retry.retries(), 0);
            assert_eq!(retry.last_error(), Some(kind));
        }
    }

    #[test]
    fn status_errors_count_as_transport_failures() {
        let err = ProviderError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.kind(), ErrorKind::TransportOrServerError);
        assert_eq!(ProviderError::Timeout(15_000).kind(), ErrorKind::Timeout);
    }

    #[test]
    fn extracts_first_choice_content() {
        let payload = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Paris" } }]
        });
        assert_eq!(extract_message(&payload).unwrap(), "Paris");
    }

    #[test]
    fn rejects_payloads_without_message_content() {
        for payload in [
            json!({ "id": "cmpl-1" }),
            json!({ "choices": [] }),
            json!({ "choices": [{ "finish_reason": "length" }] }),
            json!({ "choices": [{ "message": { "content": null } }] }),
        ] {
            let err = extract_message(&payload).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        }
    }

    #[test]
    fn request_body_has_chat_completion_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4.1-mini",
            messages: [
                ChatMessage {
                    role: "system",
                    content: GENERAL_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "Why is the sky blue?",
                },
            ],
            max_tokens: 300,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Why is the sky blue?");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["temperature"], 0.5);
    }
}
