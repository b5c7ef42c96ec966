//! Intents for the summarize screen.

use crate::protocol::SummaryOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    /// The input text was edited.
    InputChanged { text: String },

    /// User asked to summarize the current input.
    Submit,

    /// The gateway answered.
    Completed { outcome: SummaryOutcome },

    /// The gateway call could not complete.
    TransportFailed {
        /// Message of the caught failure; may be empty.
        message: String,
    },

    /// Animation tick (spinner updates).
    AnimationTick,
}

impl Intent for SummarizeIntent {}
