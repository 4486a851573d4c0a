//! The DIAL completion client.

use std::time::Duration;

use tracing::info;

use crate::completions;
use crate::core::{Completion, DialError, DialSettings, MessageInput, http::HttpTransport, normalize};

/// Client for chat completions against a DIAL deployment.
///
/// Holds resolved [`DialSettings`] for its lifetime and nothing else: no
/// session, no conversation history. Each call builds its own transport, so
/// one client can serve concurrent calls without coordination.
pub struct LlmClient {
    settings: DialSettings,
}

impl LlmClient {
    /// Create a client from explicit settings.
    pub fn new(settings: DialSettings) -> Self {
        info!(model = %settings.model, "LLM client initialized");
        Self { settings }
    }

    /// Create a client with settings resolved from the process environment.
    pub fn from_env() -> Result<Self, DialError> {
        Ok(Self::new(DialSettings::from_env()?))
    }

    /// The settings in effect for this client.
    pub fn settings(&self) -> &DialSettings {
        &self.settings
    }

    /// Generate a chat completion.
    ///
    /// `temperature` overrides the configured default for this call only;
    /// the stored settings are never mutated. Messages are normalized before
    /// dispatch and a malformed element aborts the call without any network
    /// activity. Exactly one request is issued: no retries, no streaming,
    /// no partial results. An empty `messages` sequence is passed through to
    /// the provider unvalidated.
    pub async fn generate(
        &self,
        messages: Vec<MessageInput>,
        temperature: Option<f32>,
    ) -> Result<Completion, DialError> {
        let temperature = temperature.unwrap_or(self.settings.temperature);
        let messages = normalize(messages)?;

        info!(model = %self.settings.model, "generating completion via DIAL API");

        let transport = HttpTransport::new(Duration::from_secs(self.settings.timeout_secs))?;
        let completion =
            completions::run_chat_completion(&transport, &self.settings, messages, temperature)
                .await?;

        info!(
            total_tokens = completion.usage.total_tokens,
            "DIAL API response received"
        );
        Ok(completion)
    }
}
