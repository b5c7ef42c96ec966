//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// Cloneable so views can snapshot it, comparable so changes can be
/// detected, defaultable so a fresh screen has a well-defined start.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
