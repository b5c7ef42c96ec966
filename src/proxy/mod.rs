//! Proxy gateway: a stateless HTTP endpoint in front of the external
//! summarization service.
//!
//! ```text
//! client ──POST /api/summarize──→ gateway ──POST {text}──→ upstream
//!        ←── {summary} | {error} ──       ←── {summary?} ──
//! ```

pub mod error;
pub mod health;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod summarize;
pub mod upstream;

pub use error::{GatewayError, StartupError};
pub use router::{build_router, RouterEngine};
pub use server::{ProxyHandle, ProxyServer};
pub use upstream::UpstreamClient;
