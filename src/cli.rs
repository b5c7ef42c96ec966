//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError, ConfigStore};

#[derive(Debug, Parser)]
#[command(name = "summarizer", version, about = "Text summarization gateway and terminal client")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP gateway in front of the summarization service
    Serve {
        /// Address to listen on (host:port)
        #[arg(long)]
        bind: Option<String>,
        /// Summarization service endpoint
        #[arg(long)]
        upstream: Option<String>,
        /// Upstream call timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        upstream_timeout: Option<u64>,
    },
    /// Interactive terminal client (default)
    Tui {
        /// Gateway base URL
        #[arg(long)]
        gateway: Option<String>,
    },
    /// Summarize a single text and print the result
    Once {
        /// Gateway base URL
        #[arg(long)]
        gateway: Option<String>,
        /// Also copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
        /// Text to summarize; read from stdin when omitted
        text: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Tui { gateway: None })
    }

    /// Load the config file and layer command-line overrides on top.
    pub fn load_config(&self) -> Result<ConfigStore, ConfigError> {
        let store = match &self.config {
            Some(path) => ConfigStore::new(Config::load_from(path)?, path.clone()),
            None => ConfigStore::new(Config::load()?, Config::config_path()),
        };
        let command = self.command();
        store.update(|config| command.apply_overrides(config))?;
        Ok(store)
    }
}

impl Command {
    pub fn apply_overrides(&self, config: &mut Config) {
        match self {
            Command::Serve {
                bind,
                upstream,
                upstream_timeout,
            } => {
                if let Some(bind) = bind {
                    config.gateway.bind_addr = bind.clone();
                }
                if let Some(upstream) = upstream {
                    config.gateway.upstream_url = upstream.clone();
                }
                if upstream_timeout.is_some() {
                    config.gateway.request_timeout_seconds = *upstream_timeout;
                }
            }
            Command::Tui { gateway } | Command::Once { gateway, .. } => {
                if let Some(gateway) = gateway {
                    config.client.gateway_url = gateway.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["summarizer"]).unwrap();
        assert_eq!(cli.command(), Command::Tui { gateway: None });
    }

    #[test]
    fn serve_overrides_gateway_section() {
        let cli = Cli::try_parse_from([
            "summarizer",
            "serve",
            "--bind",
            "0.0.0.0:4000",
            "--upstream",
            "http://ml:9000/summarize",
            "--upstream-timeout",
            "30",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.command().apply_overrides(&mut config);
        assert_eq!(config.gateway.bind_addr, "0.0.0.0:4000");
        assert_eq!(config.gateway.upstream_url, "http://ml:9000/summarize");
        assert_eq!(config.gateway.request_timeout_seconds, Some(30));
        assert_eq!(config.client, Config::default().client);
    }

    #[test]
    fn once_takes_positional_text_and_global_config() {
        let cli = Cli::try_parse_from([
            "summarizer",
            "once",
            "--copy",
            "--gateway",
            "http://gw:3000",
            "hello world",
            "--config",
            "/tmp/custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(
            cli.command(),
            Command::Once {
                gateway: Some("http://gw:3000".into()),
                copy: true,
                text: Some("hello world".into()),
            }
        );

        let mut config = Config::default();
        cli.command().apply_overrides(&mut config);
        assert_eq!(config.client.gateway_url, "http://gw:3000");
    }

    #[test]
    fn load_config_rejects_invalid_override() {
        let cli = Cli::try_parse_from([
            "summarizer",
            "--config",
            "/nonexistent/summarizer.toml",
            "serve",
            "--upstream",
            "not-a-url",
        ])
        .unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn load_config_falls_back_to_defaults() {
        let cli = Cli::try_parse_from(["summarizer", "--config", "/nonexistent/summarizer.toml"])
            .unwrap();
        let store = cli.load_config().unwrap();
        assert_eq!(store.get(), Config::default());
        assert_eq!(store.path(), std::path::Path::new("/nonexistent/summarizer.toml"));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["summarizer", "frobnicate"]).is_err());
    }
}
