pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod protocol;
pub mod proxy;
pub mod ui;
