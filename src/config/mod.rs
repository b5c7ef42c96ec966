//! Configuration: TOML file under the user config dir, defaults for
//! everything, validated on load.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ClientConfig, Config, GatewayConfig};
