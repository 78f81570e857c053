//! Chat-completion API client
//!
//! One request per article, paced by a minimum-interval rate limiter, with
//! bounded retries and longer waits on HTTP 429.

use newsprep_common::Article;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const USER_AGENT: &str = "newsprep/0.1.0 (news dataset tooling)";
const RATE_LIMIT_MS: u64 = 700; // minimum gap between requests
const MAX_ATTEMPTS: u32 = 6;

const SYSTEM_PROMPT: &str = "You write concise factual news summaries.";

/// Stored as `full_text` when every attempt for an article has failed
pub const EXPANSION_FAILED: &str = "Expansion failed.";

/// Expansion client errors
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response contained no completion")]
    EmptyResponse,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat-completion response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Rate limiter enforcing a minimum interval between requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// Wait if necessary to comply with the minimum interval
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Render the per-article prompt from title, abstract and tags
pub fn build_prompt(article: &Article) -> String {
    format!(
        "Expand the following news abstract into a single, concise paragraph (60-90 words).\n\
         Keep it factual, neutral, and tied to the topic. Avoid made-up numbers.\n\
         \n\
         TITLE: {title}\n\
         ABSTRACT: {abstract_text}\n\
         TAGS: {tags}\n\
         \n\
         Write a one-paragraph expanded summary:",
        title = article.title,
        abstract_text = article.abstract_text,
        tags = article.tags.join(", "),
    )
}

/// Expansion service client
pub struct ExpansionClient {
    http_client: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    api_key: String,
    model: String,
}

impl ExpansionClient {
    pub fn new(api_key: String, model: String) -> Result<Self, ExpandError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ExpandError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: Arc::new(RateLimiter::new(RATE_LIMIT_MS)),
            api_key,
            model,
        })
    }

    /// Single expansion request. Rate-limited; does not retry.
    pub async fn expand(&self, prompt: &str) -> Result<String, ExpandError> {
        self.rate_limiter.wait().await;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            max_tokens: 180,
            temperature: 0.4,
        };

        let response = self
            .http_client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExpandError::Network(e.to_string()))?;

        let status = response.status();

        if status == 429 {
            return Err(ExpandError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExpandError::Api(status.as_u16(), error_text));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExpandError::Parse(e.to_string()))?;

        extract_content(completion)
    }

    /// Expand with bounded retries.
    ///
    /// HTTP 429 waits `2 + 2 * attempt` seconds before the next try; any
    /// other failure waits 2 seconds. Returns `None` once every attempt
    /// has failed; the caller substitutes [`EXPANSION_FAILED`].
    pub async fn expand_with_retry(&self, prompt: &str) -> Option<String> {
        for attempt in 0..MAX_ATTEMPTS {
            match self.expand(prompt).await {
                Ok(text) => return Some(text),
                Err(ExpandError::RateLimited) => {
                    let wait = Duration::from_secs(2 + 2 * attempt as u64);
                    warn!("Rate limit hit. Waiting {:?}...", wait);
                    tokio::time::sleep(wait).await;
                }
                Err(e) => {
                    warn!(attempt, "Expansion attempt failed: {}", e);
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        }

        None
    }
}

/// Pull the completion text out of the response, trimmed
fn extract_content(response: ChatResponse) -> Result<String, ExpandError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ExpandError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(700);
        assert_eq!(limiter.min_interval, Duration::from_millis(700));
    }

    #[tokio::test]
    async fn test_rate_limiter_timing() {
        let limiter = RateLimiter::new(200); // short interval for a fast test

        let start = Instant::now();
        limiter.wait().await;
        let first_elapsed = start.elapsed();

        limiter.wait().await;
        let second_elapsed = start.elapsed();

        assert!(first_elapsed < Duration::from_millis(100));
        assert!(second_elapsed >= Duration::from_millis(180));
    }

    #[test]
    fn test_client_creation() {
        let client = ExpansionClient::new("key".to_string(), "gpt-4o-mini".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_prompt_includes_article_fields() {
        let article = Article {
            title: "Solar farm approved".to_string(),
            abstract_text: "Construction begins next spring.".to_string(),
            tags: vec!["climate".to_string(), "policy".to_string()],
            ..Default::default()
        };

        let prompt = build_prompt(&article);
        assert!(prompt.contains("TITLE: Solar farm approved"));
        assert!(prompt.contains("ABSTRACT: Construction begins next spring."));
        assert!(prompt.contains("TAGS: climate, policy"));
        assert!(prompt.contains("60-90 words"));
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  A short paragraph.  "}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = extract_content(response).unwrap();
        assert_eq!(content, "A short paragraph.");
    }

    #[test]
    fn test_empty_choices_is_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_content(response),
            Err(ExpandError::EmptyResponse)
        ));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            }],
            max_tokens: 180,
            temperature: 0.4,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["max_tokens"], 180);
    }
}
