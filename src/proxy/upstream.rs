use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::timeout;

use crate::config::GatewayConfig;
use crate::proxy::error::{GatewayError, StartupError};
use crate::protocol::SummarizeRequest;

/// Client for the external summarization service.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct UpstreamClient {
    client: Client,
    endpoint: String,
    request_timeout: Option<Duration>,
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, StartupError> {
        let client = Client::builder()
            .build()
            .map_err(StartupError::UpstreamClient)?;

        Ok(Self {
            client,
            endpoint: config.upstream_url.clone(),
            request_timeout: config.request_timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward `text` upstream and return its summary.
    ///
    /// The text is sent exactly as received; trimming only decides validity.
    pub async fn summarize(&self, text: &str) -> Result<String, GatewayError> {
        match self.request_timeout {
            Some(limit) => timeout(limit, self.do_summarize(text))
                .await
                .map_err(|_| GatewayError::Timeout {
                    duration: limit.as_secs(),
                })?,
            None => self.do_summarize(text).await,
        }
    }

    async fn do_summarize(&self, text: &str) -> Result<String, GatewayError> {
        tracing::debug!(endpoint = %self.endpoint, chars = text.len(), "Forwarding to upstream");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummarizeRequest::new(text))
            .send()
            .await
            .map_err(GatewayError::Connection)?;

        let status = response.status();
        let body = response.bytes().await.map_err(GatewayError::Connection)?;

        extract_summary(status, &body)
    }
}

/// Pull a non-empty string `summary` out of an upstream body.
///
/// The upstream status is ignored for the decision: a body with a summary
/// wins, a body without one is a failure whatever the status says.
pub fn extract_summary(status: StatusCode, body: &[u8]) -> Result<String, GatewayError> {
    let value: Value = serde_json::from_slice(body).map_err(GatewayError::MalformedUpstream)?;

    match value.get("summary").and_then(Value::as_str) {
        Some(summary) if !summary.is_empty() => Ok(summary.to_string()),
        _ => Err(GatewayError::MissingSummary {
            status: status.as_u16(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_summary() {
        let summary =
            extract_summary(StatusCode::OK, br#"{"summary":"A fox jumps over a dog."}"#).unwrap();
        assert_eq!(summary, "A fox jumps over a dog.");
    }

    #[test]
    fn summary_wins_even_on_error_status() {
        let summary =
            extract_summary(StatusCode::INTERNAL_SERVER_ERROR, br#"{"summary":"ok"}"#).unwrap();
        assert_eq!(summary, "ok");
    }

    #[test]
    fn missing_summary_keeps_upstream_status() {
        let err = extract_summary(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"detail":"CUDA out of memory"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GatewayError::MissingSummary { status: 500 }));
    }

    #[test]
    fn empty_or_non_string_summary_is_missing() {
        for body in [
            &br#"{"summary":""}"#[..],
            br#"{"summary":null}"#,
            br#"{"summary":42}"#,
            br#"["summary"]"#,
        ] {
            let err = extract_summary(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, GatewayError::MissingSummary { .. }), "{err}");
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = extract_summary(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedUpstream(_)));
    }
}
