//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_upstream;

use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;

use summarizer::config::{ClientConfig, GatewayConfig};
use summarizer::proxy::{ProxyHandle, ProxyServer};
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// A gateway running on an ephemeral port.
pub struct RunningGateway {
    pub addr: SocketAddr,
    pub handle: ProxyHandle,
}

impl RunningGateway {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn summarize_url(&self) -> String {
        format!("{}/api/summarize", self.base_url())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            gateway_url: self.base_url(),
            ..ClientConfig::default()
        }
    }
}

impl Drop for RunningGateway {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

/// Start a gateway that forwards to `upstream_url`.
pub async fn spawn_gateway(upstream_url: &str, request_timeout_seconds: Option<u64>) -> RunningGateway {
    let config = GatewayConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        upstream_url: upstream_url.to_string(),
        request_timeout_seconds,
    };
    let mut server = ProxyServer::new(&config).expect("gateway config");
    let addr = server.try_bind().await.expect("bind gateway");
    let handle = server.handle();
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    RunningGateway { addr, handle }
}
