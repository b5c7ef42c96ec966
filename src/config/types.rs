use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for the proxy gateway (`summarizer serve`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bind address for the gateway server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Fixed endpoint of the external summarization service.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Upper bound for a single upstream call, in seconds.
    /// Unset means the HTTP client's own defaults apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

/// Settings for the terminal client (`summarizer tui` / `summarizer once`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the gateway (scheme + host + port).
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    /// How long the "copied" acknowledgment stays visible, in milliseconds.
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,
    /// Upper bound for a single gateway call, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_upstream_url() -> String {
    "http://127.0.0.1:8000/summarize".to_string()
}

fn default_gateway_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_copy_ack_ms() -> u64 {
    2000
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn copy_ack(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upstream_url: default_upstream_url(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            copy_ack_ms: default_copy_ack_ms(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            client: ClientConfig::default(),
        }
    }
}
