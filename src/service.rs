use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::info;

use crate::classifier::is_portfolio_question;
use crate::config::AppConfig;
use crate::external::fetch_external;
use crate::knowledge::compose_local;
use crate::provider::ProviderClient;
use crate::response::NormalizedResponse;

/// Routes a visitor question to the canned knowledge or the provider.
#[derive(Clone)]
pub struct ChatService {
    provider: ProviderClient,
    pacing: Duration,
}

impl ChatService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            provider: ProviderClient::new(config.provider.clone()),
            pacing: config.pacing(),
        }
    }

    /// Always yields an answer, no sooner than the configured pacing delay.
    pub async fn get_answer(&self, question: &str) -> NormalizedResponse {
        let started = Instant::now();

        let (route, response) = if is_portfolio_question(question) {
            ("portfolio", compose_local(question))
        } else {
            ("general", fetch_external(&self.provider, question).await)
        };

        info!(
            route,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "answer composed"
        );

        sleep(self.pacing).await;
        response
    }
}
