#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use prompt_relay::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    llm::{GenerateClient, GenerateError, OllamaClient},
    server::{self, handlers::AppState},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn test_config(base_url: &str) -> Config {
    Config {
        llm: LlmConfig {
            base_url: base_url.to_string(),
            model: "tinyllama".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Router backed by a real [`OllamaClient`] pointed at `base_url`.
pub fn app_for(base_url: &str) -> Router {
    let config = test_config(base_url);
    let client = OllamaClient::new(config.llm.clone()).unwrap();
    app_with_client(Arc::new(client), config)
}

/// Router backed by a real client with a shortened timeout, for exercising
/// the timeout path against a deliberately slow mock.
pub fn app_with_client_timeout(base_url: &str, timeout: Duration) -> Router {
    let config = test_config(base_url);
    let client = OllamaClient::with_timeout(config.llm.clone(), timeout).unwrap();
    app_with_client(Arc::new(client), config)
}

pub fn app_with_client(client: Arc<dyn GenerateClient>, config: Config) -> Router {
    server::router(AppState {
        client,
        config: Arc::new(config),
    })
}

/// Canned generate client. Records every prompt it is handed and returns a
/// fixed result, so handler behavior can be tested without an HTTP layer.
pub struct StubGenerateClient {
    reply: Result<String, GenerateError>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerateClient {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: GenerateError) -> Self {
        Self {
            reply: Err(err),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateClient for StubGenerateClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}
