use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DialError;

/// Role of a message author. Conversations are built from these three roles
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(format!("unknown role {other:?}")),
        }
    }
}

/// A single conversation message in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

/// Message input as accepted by [`crate::LlmClient::generate`].
///
/// Call sites either pass already-typed messages or raw `role`/`content`
/// pairs; both resolve into [`Message`] once, at the normalization boundary,
/// before any network activity.
#[derive(Debug, Clone)]
pub enum MessageInput {
    Typed(Message),
    Raw(HashMap<String, String>),
}

impl From<Message> for MessageInput {
    fn from(message: Message) -> Self {
        MessageInput::Typed(message)
    }
}

impl From<HashMap<String, String>> for MessageInput {
    fn from(pairs: HashMap<String, String>) -> Self {
        MessageInput::Raw(pairs)
    }
}

/// Resolve a heterogeneous input sequence into canonical messages.
///
/// Typed messages pass through unchanged; order is conversation order and is
/// preserved. A raw pair must carry both a `role` and a `content` key, and
/// the role must name one of the [`ChatRole`] variants. Anything else aborts
/// the whole sequence with the offending element's position.
pub fn normalize(inputs: Vec<MessageInput>) -> Result<Vec<Message>, DialError> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| match input {
            MessageInput::Typed(message) => Ok(message),
            MessageInput::Raw(pairs) => {
                let role = pairs.get("role").ok_or_else(|| DialError::InvalidMessage {
                    index,
                    reason: "missing `role` key".to_string(),
                })?;
                let content = pairs.get("content").ok_or_else(|| DialError::InvalidMessage {
                    index,
                    reason: "missing `content` key".to_string(),
                })?;
                let role = role
                    .parse()
                    .map_err(|reason| DialError::InvalidMessage { index, reason })?;

                Ok(Message {
                    role,
                    content: content.clone(),
                })
            }
        })
        .collect()
}

/// Token usage reported by the provider for one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One completed generation. Constructed per successful call and handed to
/// the caller; the client keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub content: String,
    pub model: String,
    pub usage: Usage,
}
