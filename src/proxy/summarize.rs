//! `POST /api/summarize`: validate, forward, normalize.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::protocol::GatewayReply;
use crate::proxy::error::GatewayError;
use crate::proxy::router::RouterEngine;

/// Incoming body. A missing or null `text` both land on `None`.
#[derive(Debug, Deserialize)]
struct IncomingRequest {
    #[serde(default)]
    text: Option<String>,
}

pub async fn summarize_handler(State(engine): State<RouterEngine>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("summarize", %request_id);

    async move {
        match handle(&engine, &body).await {
            Ok(summary) => {
                tracing::info!(summary_len = summary.len(), "Summary produced");
                (StatusCode::OK, Json(GatewayReply::Summary { summary })).into_response()
            }
            Err(err) => {
                match &err {
                    GatewayError::EmptyText => {
                        tracing::info!(error_type = err.error_type(), "Rejected empty input")
                    }
                    GatewayError::MissingSummary { .. } => {
                        tracing::warn!(error_type = err.error_type(), error = %err, "Upstream gave no summary")
                    }
                    _ => {
                        tracing::error!(error_type = err.error_type(), error = %err, "Upstream call failed")
                    }
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

async fn handle(engine: &RouterEngine, body: &[u8]) -> Result<String, GatewayError> {
    let text = parse_text(body)?;
    engine.upstream().summarize(&text).await
}

/// Extract the submitted text, rejecting blank input.
///
/// The returned text is untrimmed.
fn parse_text(body: &[u8]) -> Result<String, GatewayError> {
    let request: IncomingRequest =
        serde_json::from_slice(body).map_err(GatewayError::InvalidBody)?;

    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GatewayError::EmptyText),
    }
}
