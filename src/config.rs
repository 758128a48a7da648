use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Keys at or below this length are treated as unset.
const MIN_KEY_LEN: usize = 20;
const PLACEHOLDER_MARKER: &str = "PLACEHOLDER";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub pacing_ms: u64,
    pub provider: ProviderConfig,
}

/// Settings for the chat-completion provider used for general questions.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub backoff_unit_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout_ms: 15_000,
            max_retries: 3,
            backoff_unit_ms: 2_000,
        }
    }
}

impl ProviderConfig {
    /// A key is usable when it is long enough and is not a build-time placeholder.
    pub fn has_usable_key(&self) -> bool {
        let key = self.api_key.trim();
        key.len() > MIN_KEY_LEN && !key.contains(PLACEHOLDER_MARKER)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_unit_ms)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ProviderConfig::default();

        let provider = ProviderConfig {
            api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            api_url: lookup("OPENAI_API_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.api_url),
            model: lookup("OPENAI_MODEL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.model),
            max_tokens: parsed(&lookup, "OPENAI_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            temperature: parsed(&lookup, "OPENAI_TEMPERATURE").unwrap_or(defaults.temperature),
            timeout_ms: parsed(&lookup, "PROVIDER_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
            max_retries: parsed(&lookup, "RATE_LIMIT_RETRIES").unwrap_or(defaults.max_retries),
            backoff_unit_ms: parsed(&lookup, "RATE_LIMIT_BACKOFF_MS")
                .unwrap_or(defaults.backoff_unit_ms),
        };

        Self {
            port: parsed(&lookup, "PORT").unwrap_or(3000),
            pacing_ms: parsed(&lookup, "RESPONSE_PACING_MS").unwrap_or(3_000),
            provider,
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse::<T>().ok())
}
