use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;
#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct NutriAgentConfig {
    pub llm: LLMConfig,
    pub catalog: CatalogConfig,
    pub http: HttpClientConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    /// Used for sessions that never saved their own key
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Language suffix of the preferred `ingredients_text_<lang>` field
    pub language: String,
    pub user_agent: String,
}

#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
