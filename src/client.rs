//! Client side of the gateway boundary.
//!
//! [`SummarizeGateway`] is the seam the orchestrator talks to; the HTTP
//! implementation lives here and test fakes implement the same trait.

use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::protocol::{SummarizeRequest, SummaryOutcome, FAILED_TO_SUMMARIZE_TEXT, SUMMARIZE_PATH};

/// The call could not complete (or its answer could not be read).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Asynchronous summarize call as seen by the orchestrator.
pub trait SummarizeGateway: Send + Sync + 'static {
    fn summarize(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<SummaryOutcome, ClientError>> + Send;
}

/// [`SummarizeGateway`] backed by the HTTP gateway.
pub struct HttpGatewayClient {
    client: Client,
    endpoint: String,
}

impl HttpGatewayClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(limit) = config.request_timeout() {
            builder = builder.timeout(limit);
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.gateway_url.trim_end_matches('/'),
                SUMMARIZE_PATH
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SummarizeGateway for HttpGatewayClient {
    async fn summarize(&self, text: &str) -> Result<SummaryOutcome, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, "Submitting text to gateway");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummarizeRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        interpret_reply(status, &body)
    }
}

/// Loose view of a gateway body; either field may be missing.
#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Fold a gateway response into a [`SummaryOutcome`].
///
/// - success with a non-empty summary → `Summarized`
/// - success without one → `Rejected` (gateway's error or the fallback)
/// - non-success → `Rejected` with the body's `error`, or the fallback when
///   the body has none or is not JSON
/// - success with a body that is not JSON → `Err(Decode)`
pub fn interpret_reply(status: StatusCode, body: &[u8]) -> Result<SummaryOutcome, ClientError> {
    if !status.is_success() {
        let reply: ReplyBody = serde_json::from_slice(body).unwrap_or_default();
        return Ok(SummaryOutcome::rejected(message_or_fallback(reply.error)));
    }

    let reply: ReplyBody = serde_json::from_slice(body)?;
    match reply.summary {
        Some(summary) if !summary.is_empty() => Ok(SummaryOutcome::summarized(summary)),
        _ => Ok(SummaryOutcome::rejected(message_or_fallback(reply.error))),
    }
}

fn message_or_fallback(message: Option<String>) -> String {
    match message {
        Some(message) if !message.trim().is_empty() => message,
        _ => FAILED_TO_SUMMARIZE_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_summary() {
        let outcome = interpret_reply(StatusCode::OK, br#"{"summary":"short"}"#).unwrap();
        assert_eq!(outcome, SummaryOutcome::summarized("short"));
    }

    #[test]
    fn error_status_uses_gateway_message() {
        let outcome = interpret_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"Backend connection failed"}"#,
        )
        .unwrap();
        assert_eq!(outcome, SummaryOutcome::rejected("Backend connection failed"));
    }

    #[test]
    fn error_status_without_message_falls_back() {
        for body in [&b""[..], b"<html>oops</html>", br#"{"error":""}"#, b"{}"] {
            let outcome = interpret_reply(StatusCode::BAD_GATEWAY, body).unwrap();
            assert_eq!(outcome, SummaryOutcome::rejected("Failed to summarize text"));
        }
    }

    #[test]
    fn success_without_summary_is_rejected() {
        let outcome = interpret_reply(StatusCode::OK, b"{}").unwrap();
        assert_eq!(outcome, SummaryOutcome::rejected("Failed to summarize text"));
    }

    #[test]
    fn success_with_garbage_body_is_transport_failure() {
        let err = interpret_reply(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig {
            gateway_url: "http://127.0.0.1:3000/".into(),
            ..ClientConfig::default()
        };
        let client = HttpGatewayClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/api/summarize");
    }
}
