//! Wire contract between the terminal client, the gateway and the
//! upstream summarization service.
//!
//! Both hops speak the same request shape (`{"text": ...}`). The gateway
//! answers with either `{"summary": ...}` or `{"error": ...}`; the client
//! folds that answer into a [`SummaryOutcome`] exactly once so nothing
//! downstream has to probe for fields again.

use serde::{Deserialize, Serialize};

/// Path of the summarize endpoint exposed by the gateway.
pub const SUMMARIZE_PATH: &str = "/api/summarize";

/// Path of the liveness endpoint exposed by the gateway.
pub const HEALTH_PATH: &str = "/health";

/// Gateway error for absent, empty or whitespace-only input.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Gateway error when the upstream answered without a summary.
pub const FAILED_TO_SUMMARIZE: &str = "Failed to summarize";

/// Gateway error when the upstream call could not complete.
pub const BACKEND_CONNECTION_FAILED: &str = "Backend connection failed";

/// Client-side message used when the gateway rejects a request
/// without saying why.
pub const FAILED_TO_SUMMARIZE_TEXT: &str = "Failed to summarize text";

/// Request body for both the gateway and the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Response body produced by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GatewayReply {
    Summary { summary: String },
    Error { error: String },
}

/// Result of a summarize call once the gateway response has been interpreted.
///
/// Produced by the client at the gateway boundary and consumed by the
/// orchestrator as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The gateway returned a summary.
    Summarized { summary: String },
    /// The gateway answered but did not produce a summary.
    Rejected { message: String },
}

impl SummaryOutcome {
    pub fn summarized(summary: impl Into<String>) -> Self {
        Self::Summarized {
            summary: summary.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
