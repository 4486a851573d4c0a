//! Wire-level plumbing for the DIAL chat-completions endpoint.
//!
//! DIAL speaks the Azure OpenAI dialect: deployment-based paths with an
//! `api-version` query parameter, authenticated through an `api-key` header.

pub(crate) mod request;
pub(crate) mod response;

use tracing::{debug, error};

use crate::core::{Completion, DialError, DialSettings, Message, http::HttpTransport};
use self::request::Request;
use self::response::Response;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Build the deployment-based endpoint URL:
/// `{base}/openai/deployments/{model}{path}?api-version={version}`.
pub(crate) fn endpoint_url(settings: &DialSettings) -> String {
    format!(
        "{}/openai/deployments/{}{CHAT_COMPLETIONS_PATH}?api-version={}",
        settings.api_url.trim_end_matches('/'),
        settings.model.trim().trim_matches('/'),
        settings.api_version.trim(),
    )
}

pub(crate) fn auth_header(settings: &DialSettings) -> (String, String) {
    ("api-key".to_string(), settings.api_key.clone())
}

/// Issue one chat-completion round trip and map the reply.
///
/// Shared by the direct [`crate::LlmClient::generate`] path and the
/// [`crate::adapter::DialChatModel`] handle. The error is logged here, once,
/// before it is re-signaled to the caller.
pub(crate) async fn run_chat_completion(
    transport: &HttpTransport,
    settings: &DialSettings,
    messages: Vec<Message>,
    temperature: f32,
) -> Result<Completion, DialError> {
    let request = Request {
        model: settings.model.clone(),
        messages,
        temperature,
        max_tokens: settings.max_tokens,
    };

    let url = endpoint_url(settings);
    let headers = [auth_header(settings)];

    let result = async {
        let response: Response = transport.post_json(&url, &headers, &request).await?;
        map_response(&settings.model, response)
    }
    .await;

    if let Err(err) = &result {
        error!(error = %err, "DIAL API error");
    }
    result
}

fn map_response(model: &str, response: Response) -> Result<Completion, DialError> {
    debug!(model = %response.model, "provider reported model");

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DialError::Call("no choices in provider response".to_string()))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| DialError::Call("no content in provider response".to_string()))?;

    Ok(Completion {
        content,
        model: model.to_string(),
        usage: response.usage,
    })
}
