//! Public types for the chat API
use serde::Deserialize;

pub use crate::chat::ChatResponse;
pub use crate::google::{PlaceResult, Provider, SearchOutcome};

/// Body of a chat request. Missing or unparseable bodies degrade to
/// the default (empty message) and are rejected by the handler.
#[derive(Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}
