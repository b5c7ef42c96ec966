//! Terminal front-end.

pub mod app;
pub mod copy;
pub mod events;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod stats;
pub mod summarize;
pub mod terminal_guard;
pub mod theme;
