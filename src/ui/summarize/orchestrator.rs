//! Drives the summarize reducer against a [`SummarizeGateway`].
//!
//! The orchestrator owns the single [`SummarizerState`] value. A submission
//! is split in two so callers on an event loop never block:
//! [`Orchestrator::begin_submit`] runs the transition synchronously and hands
//! back the request to send, [`Orchestrator::complete`] applies the answer.
//! [`Orchestrator::submit`] does both for callers that can simply await.

use std::sync::Arc;

use crate::client::{ClientError, SummarizeGateway};
use crate::protocol::SummaryOutcome;
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::reducer::SummarizeReducer;
use super::state::{RequestState, SummarizerState};

/// A gateway call the caller must issue and feed back via `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Raw input, untrimmed.
    pub text: String,
}

pub struct Orchestrator<G> {
    state: SummarizerState,
    gateway: Arc<G>,
}

impl<G: SummarizeGateway> Orchestrator<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_shared(Arc::new(gateway))
    }

    pub fn with_shared(gateway: Arc<G>) -> Self {
        Self {
            state: SummarizerState::default(),
            gateway,
        }
    }

    pub fn state(&self) -> &SummarizerState {
        &self.state
    }

    pub fn request(&self) -> &RequestState {
        &self.state.request
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// Shared handle to the gateway, for issuing a [`PendingRequest`]
    /// from a spawned task.
    pub fn gateway(&self) -> Arc<G> {
        Arc::clone(&self.gateway)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(SummarizeIntent::InputChanged { text: text.into() });
    }

    /// Advance the spinner while a call is outstanding.
    pub fn tick(&mut self) {
        self.dispatch(SummarizeIntent::AnimationTick);
    }

    /// Run the submit transition.
    ///
    /// Returns the request to send when the state moved into `InFlight`;
    /// `None` when validation failed or a call is already outstanding.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        let was_in_flight = self.state.request.is_in_flight();
        self.dispatch(SummarizeIntent::Submit);

        if was_in_flight {
            tracing::debug!("Submit ignored: request already in flight");
            return None;
        }

        match &self.state.request {
            RequestState::InFlight { .. } => {
                tracing::info!(chars = self.state.input.len(), "Submitting text");
                Some(PendingRequest {
                    text: self.state.input.clone(),
                })
            }
            RequestState::Failed { message } => {
                tracing::debug!(%message, "Submit rejected before any network call");
                None
            }
            _ => None,
        }
    }

    /// Apply the result of the outstanding gateway call.
    pub fn complete(&mut self, result: Result<SummaryOutcome, ClientError>) {
        let intent = match result {
            Ok(outcome) => {
                match &outcome {
                    SummaryOutcome::Summarized { summary } => {
                        tracing::info!(summary_len = summary.len(), "Summary received")
                    }
                    SummaryOutcome::Rejected { message } => {
                        tracing::warn!(%message, "Gateway rejected submission")
                    }
                }
                SummarizeIntent::Completed { outcome }
            }
            Err(err) => {
                tracing::error!(error = %err, "Gateway call failed");
                SummarizeIntent::TransportFailed {
                    message: err.to_string(),
                }
            }
        };
        self.dispatch(intent);
    }

    /// Set the input, submit it and wait for the terminal state.
    pub async fn submit(&mut self, text: impl Into<String>) -> &RequestState {
        self.set_input(text);
        if let Some(pending) = self.begin_submit() {
            let result = self.gateway.summarize(&pending.text).await;
            self.complete(result);
        }
        &self.state.request
    }

    fn dispatch(&mut self, intent: SummarizeIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SummarizeReducer::reduce(state, intent);
    }
}
