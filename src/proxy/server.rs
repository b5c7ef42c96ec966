use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::proxy::error::StartupError;
use crate::proxy::router::{build_router, RouterEngine};
use crate::proxy::shutdown::ShutdownManager;
use crate::proxy::upstream::UpstreamClient;

pub struct ProxyServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive between try_bind() and run().
    listener: Option<TcpListener>,
    router: RouterEngine,
    shutdown: Arc<ShutdownManager>,
}

impl ProxyServer {
    pub fn new(config: &GatewayConfig) -> Result<Self, StartupError> {
        let addr: SocketAddr =
            config
                .bind_addr
                .parse()
                .map_err(|source| StartupError::InvalidBindAddr {
                    addr: config.bind_addr.clone(),
                    source,
                })?;
        let upstream = UpstreamClient::new(config)?;

        Ok(Self {
            addr,
            listener: None,
            router: RouterEngine::new(upstream),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address. Port 0 picks a free port; the actual
    /// address is returned and stored in `self.addr`.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, StartupError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| StartupError::Bind {
                addr: self.addr,
                source,
            })?;
        let actual_addr = listener.local_addr().map_err(|source| StartupError::Bind {
            addr: self.addr,
            source,
        })?;

        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!(
            "Gateway bound to {} (upstream: {})",
            actual_addr,
            self.router.upstream().endpoint()
        );
        Ok(actual_addr)
    }

    pub fn handle(&self) -> ProxyHandle {
        ProxyHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is requested.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), StartupError> {
        let listener = self.listener.ok_or(StartupError::NotBound)?;

        tracing::info!("Starting gateway on {}", self.addr);

        let app = build_router(self.router.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Shutdown signal listener failed: {}", e);
                }
            })
            .into_future()
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProxyHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ProxyHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
