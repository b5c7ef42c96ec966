use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::protocol::{HEALTH_PATH, SUMMARIZE_PATH};
use crate::proxy::health::health_handler;
use crate::proxy::summarize::summarize_handler;
use crate::proxy::upstream::UpstreamClient;

/// Shared handler state. Immutable after construction, so concurrent
/// requests never observe each other.
#[derive(Clone)]
pub struct RouterEngine {
    upstream: Arc<UpstreamClient>,
}

impl RouterEngine {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }
}

pub fn build_router(engine: RouterEngine) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route(SUMMARIZE_PATH, post(summarize_handler))
        .with_state(engine)
}
