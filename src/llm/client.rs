use super::types::{GenerateError, GenerateRequest, GenerateResponse};
use crate::{Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Upper bound on one generate call, covering connect, send and body read.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);

#[async_trait]
pub trait GenerateClient: Send + Sync {
    /// Sends one prompt to the inference server and returns the generated
    /// text. Exactly one attempt; no retries.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerateError>;
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        Self::with_timeout(config, GENERATE_TIMEOUT)
    }

    /// Same as [`OllamaClient::new`] with a caller-chosen timeout. Tests use
    /// this to exercise the timeout path without waiting two minutes.
    pub fn with_timeout(config: LlmConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            model: config.model,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps a transport failure onto the user-facing taxonomy. Precedence
    /// mirrors the classification table: a timed-out connect attempt counts
    /// as a connection failure, not a timeout.
    fn classify(&self, err: reqwest::Error) -> GenerateError {
        if err.is_connect() {
            GenerateError::Connection {
                base_url: self.base_url.clone(),
            }
        } else if err.is_timeout() {
            GenerateError::Timeout
        } else if err.is_status() {
            GenerateError::Http(err.to_string())
        } else if err.is_decode() {
            GenerateError::MalformedResponse
        } else if err.is_request() || err.is_body() || err.is_redirect() {
            GenerateError::Http(err.to_string())
        } else {
            GenerateError::Unexpected(err.to_string())
        }
    }
}

#[async_trait]
impl GenerateClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        debug!("Sending generate request to {} for model {}", url, self.model);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(|e| self.classify(e))?;

        let body: GenerateResponse = response.json().await.map_err(|e| self.classify(e))?;

        debug!("Received generate response (has text: {})", body.response.is_some());

        Ok(body
            .response
            .unwrap_or_else(|| "No response received".to_string()))
    }
}
