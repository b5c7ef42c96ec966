//! Reducer for the summarize screen.

use crate::protocol::SummaryOutcome;
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::{
    RequestState, SummarizerState, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, SPINNER_PERIOD,
};

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = SummarizerState;
    type Intent = SummarizeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SummarizerState { input, request } = state;

        let request = match intent {
            SummarizeIntent::InputChanged { text } => {
                return SummarizerState {
                    input: text,
                    request,
                };
            }

            SummarizeIntent::Submit => match request {
                // One outstanding call at most; a second submit is dropped.
                pending @ RequestState::InFlight { .. } => pending,
                _ if input.trim().is_empty() => RequestState::Failed {
                    message: EMPTY_INPUT_MESSAGE.to_string(),
                },
                _ => RequestState::InFlight { animation_tick: 0 },
            },

            // Responses only land on a pending request; anything else is stale.
            SummarizeIntent::Completed { outcome } => match request {
                RequestState::InFlight { .. } => match outcome {
                    SummaryOutcome::Summarized { summary } => RequestState::Succeeded { summary },
                    SummaryOutcome::Rejected { message } => RequestState::Failed { message },
                },
                other => other,
            },

            SummarizeIntent::TransportFailed { message } => match request {
                RequestState::InFlight { .. } => RequestState::Failed {
                    message: if message.trim().is_empty() {
                        GENERIC_FAILURE_MESSAGE.to_string()
                    } else {
                        message
                    },
                },
                other => other,
            },

            SummarizeIntent::AnimationTick => match request {
                RequestState::InFlight { animation_tick } => RequestState::InFlight {
                    animation_tick: (animation_tick + 1) % SPINNER_PERIOD,
                },
                other => other,
            },
        };

        SummarizerState { input, request }
    }
}
