//! # dial-client
//!
//! Chat-completion client for EPAM DIAL deployments. DIAL exposes the Azure
//! OpenAI wire protocol; this crate wraps it in one operation: a list of
//! role/content messages in, a completion with token usage out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dial_client::{ChatRole, LlmClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads DIAL_API_KEY, DIAL_API_URL, MODEL_NAME, ... from the
//!     // environment; anything unset falls back to a fixed default.
//!     let client = LlmClient::from_env()?;
//!
//!     let completion = client
//!         .generate(
//!             vec![
//!                 Message {
//!                     role: ChatRole::User,
//!                     content: "Hello".to_string(),
//!                 }
//!                 .into(),
//!             ],
//!             None,
//!         )
//!         .await?;
//!
//!     println!("{}", completion.content);
//!     Ok(())
//! }
//! ```
//!
//! There is no retry policy, no streaming, and no conversation state: each
//! call is an independent request/response round trip, and a failed attempt
//! surfaces as a single error.

pub mod adapter;
pub mod client;
pub(crate) mod completions;
pub mod core;

pub use adapter::{ChatModel, DialChatModel};
pub use client::LlmClient;
pub use crate::core::{
    config::DialSettings,
    error::DialError,
    types::{ChatRole, Completion, Message, MessageInput, Usage, normalize},
};
