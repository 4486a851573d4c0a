//! Single-shot JSON transport for the DIAL API.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::error::DialError;

/// Thin wrapper over [`reqwest::Client`] that performs exactly one POST per
/// call. A failed attempt is a single error; there is no retry loop.
pub(crate) struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout.
    pub(crate) fn new(timeout: Duration) -> Result<Self, DialError> {
        let user_agent = format!("dial-client/{}", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| DialError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// POST a JSON body and decode a JSON reply.
    ///
    /// Any failure along the way (connect, timeout, non-success status,
    /// unreadable or undecodable body) folds into [`DialError::Call`] with
    /// the cause text.
    pub(crate) async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, DialError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DialError::Call(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DialError::Call(format!(
                "provider returned {status}: {error_text}"
            )));
        }

        debug!(status = %status, "DIAL API request succeeded");

        let body = response
            .text()
            .await
            .map_err(|e| DialError::Call(format!("failed to read response body: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| DialError::Call(format!("failed to decode provider response: {e}")))
    }
}
