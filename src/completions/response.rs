use serde::Deserialize;

use crate::core::Usage;

/// The subset of the chat-completions reply the facade reads. The full
/// schema is owned by the provider.
#[derive(Debug, Deserialize)]
pub(crate) struct Response {
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    /// Absent when the model produced no text, e.g. on a filtered reply.
    pub content: Option<String>,
}
