//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents cover user actions (submit, copy) and system events
/// (gateway responses, spinner ticks). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
