use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncReadExt;

use summarizer::cli::{Cli, Command};
use summarizer::client::HttpGatewayClient;
use summarizer::clipboard::ClipboardHandler;
use summarizer::config::{ClientConfig, Config};
use summarizer::logging::{init_client_tracing, init_server_tracing};
use summarizer::proxy::ProxyServer;
use summarizer::ui::copy::CopyAck;
use summarizer::ui::summarize::Orchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .context("Failed to load configuration")?
        .get();

    match cli.command() {
        Command::Serve { .. } => {
            init_server_tracing();
            serve(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Tui { .. } => {
            init_client_tracing();
            let client = config.client.clone();
            let runtime = tokio::runtime::Handle::current();
            tokio::task::spawn_blocking(move || summarizer::ui::runtime::run(&client, runtime))
                .await
                .context("UI thread panicked")??;
            Ok(ExitCode::SUCCESS)
        }
        Command::Once { copy, text, .. } => {
            init_client_tracing();
            once(&config.client, text, copy).await
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let mut server = ProxyServer::new(&config.gateway)?;
    server.try_bind().await?;
    server.run().await?;
    Ok(())
}

async fn once(config: &ClientConfig, text: Option<String>, copy: bool) -> anyhow::Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read stdin")?;
            buf
        }
    };

    let gateway = HttpGatewayClient::new(config).context("Failed to build gateway client")?;
    let mut orchestrator = Orchestrator::new(gateway);

    let state = orchestrator.submit(text).await;
    if !state.is_terminal() {
        eprintln!("Summarization did not complete");
        return Ok(ExitCode::FAILURE);
    }
    if let Some(message) = state.error_message() {
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }
    let summary = state.summary().unwrap_or_default().to_owned();
    println!("{summary}");

    if copy {
        let mut clipboard = ClipboardHandler::new()?;
        let mut ack = CopyAck::new(config.copy_ack());
        ack.copy(&mut clipboard, &summary)?;
        eprintln!("Copied!");
        // Some clipboard backends drop ownership when the process exits.
        ack.wait_for_revert().await;
    }

    Ok(ExitCode::SUCCESS)
}
