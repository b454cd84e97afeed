mod client;
mod types;

pub use client::{GenerateClient, OllamaClient, GENERATE_TIMEOUT};
pub use types::{GenerateError, GenerateRequest, GenerateResponse, Outcome};
