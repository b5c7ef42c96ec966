//! Summarize screen: the request orchestrator.
//!
//! Uses the MVI pattern:
//! - `state.rs` - owned screen state and the request lifecycle enum
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `orchestrator.rs` - runs the reducer and issues gateway calls

mod intent;
mod orchestrator;
mod reducer;
mod state;

pub use intent::SummarizeIntent;
pub use orchestrator::{Orchestrator, PendingRequest};
pub use reducer::SummarizeReducer;
pub use state::{
    RequestState, SummarizerState, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, SPINNER_PERIOD,
};
