//! Provider handle for higher-level orchestration layers.
//!
//! [`LlmClient::generate`] is the direct call path. An orchestration
//! framework that wants to own the call loop itself takes a
//! [`DialChatModel`] instead: a second handle built from the same settings,
//! behind the object-safe [`ChatModel`] trait.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use crate::LlmClient;
use crate::completions;
use crate::core::{Completion, DialError, DialSettings, Message, http::HttpTransport};

/// Object-safe chat interface consumed by orchestration layers.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one chat round trip over already-normalized messages, at the
    /// handle's configured temperature.
    async fn chat(&self, messages: Vec<Message>) -> Result<Completion, DialError>;
}

/// [`ChatModel`] handle over a DIAL deployment.
pub struct DialChatModel {
    settings: DialSettings,
    transport: HttpTransport,
}

impl DialChatModel {
    /// Build a handle from resolved settings.
    ///
    /// Unlike the per-call transport in [`LlmClient::generate`], the
    /// transport here is constructed eagerly, so an unusable environment
    /// fails at handle creation with the same error taxonomy.
    pub fn new(settings: DialSettings) -> Result<Self, DialError> {
        let transport = HttpTransport::new(Duration::from_secs(settings.timeout_secs))
            .map_err(|err| {
                error!(error = %err, "failed to create chat model handle");
                err
            })?;

        info!(model = %settings.model, "created chat model handle");
        Ok(Self {
            settings,
            transport,
        })
    }
}

#[async_trait]
impl ChatModel for DialChatModel {
    async fn chat(&self, messages: Vec<Message>) -> Result<Completion, DialError> {
        completions::run_chat_completion(
            &self.transport,
            &self.settings,
            messages,
            self.settings.temperature,
        )
        .await
    }
}

impl LlmClient {
    /// Build a [`DialChatModel`] sharing this client's settings.
    pub fn chat_model(&self) -> Result<DialChatModel, DialError> {
        DialChatModel::new(self.settings().clone())
    }
}
