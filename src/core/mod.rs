pub mod config;
pub mod error;
pub(crate) mod http;
pub mod types;

pub use config::DialSettings;
pub use error::DialError;
pub use types::{ChatRole, Completion, Message, MessageInput, Usage, normalize};
