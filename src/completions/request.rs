use serde::Serialize;

use crate::core::Message;

/// Chat-completions request body. Every field is sent on every call; the
/// effective temperature is the per-call override or the configured default.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Request {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}
