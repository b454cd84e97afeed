use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /api/generate`. `stream` is always false; the relay does
/// not consume token streams.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Failure modes of one generate call. The `Display` strings are the exact
/// user-visible messages, so converting to an [`Outcome`] is just
/// `to_string()`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateError {
    #[error("Error: Cannot connect to Ollama at {base_url}. Please ensure Ollama is running.")]
    Connection { base_url: String },

    #[error("Error: Request timed out. The model might be loading or the prompt is too complex.")]
    Timeout,

    #[error("Error: {0}")]
    Http(String),

    #[error("Error: Invalid response from Ollama API")]
    MalformedResponse,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// What one submission produced: the text to display and whether it gets
/// error styling. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub text: String,
    pub is_error: bool,
}

impl Outcome {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Outcome for a submission that was empty after trimming. No generate
    /// call is made for these.
    pub fn empty_prompt() -> Self {
        Self {
            text: "Please enter a prompt.".to_string(),
            is_error: true,
        }
    }
}

impl From<GenerateError> for Outcome {
    fn from(err: GenerateError) -> Self {
        Self {
            text: err.to_string(),
            is_error: true,
        }
    }
}
