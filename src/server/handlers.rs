use super::types::{HealthResponse, PromptForm};
use crate::{
    config::Config,
    llm::{GenerateClient, Outcome},
};
use askama::Template;
use axum::{Form, extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerateClient>,
    pub config: Arc<Config>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub last_prompt: String,
    pub outcome: Option<Outcome>,
    pub ollama_url: String,
    pub model: String,
}

impl IndexTemplate {
    fn new(state: &AppState, last_prompt: String, outcome: Option<Outcome>) -> Self {
        Self {
            last_prompt,
            outcome,
            ollama_url: state.config.llm.base_url.clone(),
            model: state.config.llm.model.clone(),
        }
    }
}

pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate::new(&state, String::new(), None)
}

/// Handles a form submission. Every failure path ends in an [`Outcome`]
/// with error styling; the page itself always renders with status 200.
pub async fn submit(State(state): State<AppState>, Form(form): Form<PromptForm>) -> IndexTemplate {
    let prompt = form.prompt.trim();

    if prompt.is_empty() {
        return IndexTemplate::new(&state, prompt.to_string(), Some(Outcome::empty_prompt()));
    }

    info!("Relaying prompt of {} chars to Ollama", prompt.len());

    let outcome = match state.client.generate(prompt).await {
        Ok(text) => Outcome::reply(text),
        Err(e) => {
            error!("Generate call failed: {}", e);
            e.into()
        }
    };

    IndexTemplate::new(&state, prompt.to_string(), Some(outcome))
}

/// Liveness probe for this process. Never calls out to Ollama, so it stays
/// green while the inference server is down.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        ollama_url: state.config.llm.base_url.clone(),
    })
}
