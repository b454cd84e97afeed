mod types;

pub use types::*;

use std::env;
use tracing::debug;

/// Builds the process configuration from the environment. `OLLAMA_URL`
/// overrides the default base URL; everything else is fixed.
pub fn load() -> Config {
    let base_url = env::var("OLLAMA_URL").unwrap_or_else(|_| types::default_ollama_url());

    debug!("Using Ollama base URL: {}", base_url);

    Config {
        llm: LlmConfig {
            base_url,
            ..LlmConfig::default()
        },
        server: ServerConfig::default(),
    }
}
