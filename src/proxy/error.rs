//! Error types and response handling for the gateway.
//!
//! Every failure on the summarize path collapses into one of three public
//! messages; the variant is kept only for logging.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::protocol::{
    GatewayReply, BACKEND_CONNECTION_FAILED, FAILED_TO_SUMMARIZE, NO_TEXT_PROVIDED,
};

/// Errors that can occur while serving a summarize request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// `text` absent, null, empty or whitespace-only.
    #[error("No text provided")]
    EmptyText,

    /// Request body was not JSON, or `text` was not a string.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Upstream answered without a usable `summary` field.
    #[error("Upstream responded with status {status} but no summary")]
    MissingSummary { status: u16 },

    /// Failed to reach the upstream or to read its response.
    #[error("Connection to upstream failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Upstream response body was not JSON.
    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(#[source] serde_json::Error),

    /// Upstream call exceeded the configured timeout.
    #[error("Upstream request timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl GatewayError {
    /// Map error variant to the HTTP status returned to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::EmptyText => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            GatewayError::EmptyText => NO_TEXT_PROVIDED,
            GatewayError::MissingSummary { .. } => FAILED_TO_SUMMARIZE,
            GatewayError::InvalidBody(_)
            | GatewayError::Connection(_)
            | GatewayError::MalformedUpstream(_)
            | GatewayError::Timeout { .. } => BACKEND_CONNECTION_FAILED,
        }
    }

    /// Short error kind for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::EmptyText => "empty_text",
            GatewayError::InvalidBody(_) => "invalid_body",
            GatewayError::MissingSummary { .. } => "missing_summary",
            GatewayError::Connection(_) => "connection_error",
            GatewayError::MalformedUpstream(_) => "malformed_upstream",
            GatewayError::Timeout { .. } => "upstream_timeout",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = GatewayReply::Error {
            error: self.public_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Errors that prevent the gateway server from starting or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build upstream client: {0}")]
    UpstreamClient(#[source] reqwest::Error),

    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("run() called before try_bind()")]
    NotBound,

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_bad_request() {
        let err = GatewayError::EmptyText;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "No text provided");
    }

    #[test]
    fn missing_summary_is_generic_500() {
        let err = GatewayError::MissingSummary { status: 200 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to summarize");
        assert_eq!(err.error_type(), "missing_summary");
    }

    #[test]
    fn transport_failures_collapse_to_connection_message() {
        let malformed = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        for err in [
            GatewayError::MalformedUpstream(malformed),
            GatewayError::Timeout { duration: 5 },
        ] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_message(), "Backend connection failed");
        }
    }

    #[test]
    fn error_response_format() {
        let response = GatewayError::EmptyText.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
