//! State for the summarize screen.

use crate::ui::mvi::UiState;

/// Shown when submit is attempted with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text to summarize";

/// Shown when a transport failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Number of distinct spinner frames; the animation tick cycles through
/// `0..SPINNER_PERIOD`.
pub const SPINNER_PERIOD: u8 = 10;

/// Lifecycle of a single submission.
///
/// Summary and error live in different variants, so they can never be
/// populated at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Exactly one gateway call is outstanding.
    InFlight {
        /// Animation tick for the spinner, always below [`SPINNER_PERIOD`].
        animation_tick: u8,
    },

    /// The gateway produced a summary.
    Succeeded { summary: String },

    /// Validation, gateway or transport failure.
    Failed { message: String },
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Everything the summarize screen owns: the text being edited and the
/// state of the current submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarizerState {
    pub input: String,
    pub request: RequestState,
}

impl UiState for SummarizerState {}

impl SummarizerState {
    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.request.is_in_flight()
    }
}
