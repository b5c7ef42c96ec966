use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;

use crate::client::HttpGatewayClient;
use crate::clipboard::{ClipboardHandler, ClipboardSink};
use crate::config::ClientConfig;
use crate::ui::app::App;
use crate::ui::copy::CopyAck;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the terminal front-end until the user quits.
///
/// Blocks the calling thread; gateway calls are spawned on `runtime`.
pub fn run(config: &ClientConfig, runtime: Handle) -> anyhow::Result<()> {
    let gateway = HttpGatewayClient::new(config).context("Failed to build gateway client")?;
    tracing::info!(endpoint = gateway.endpoint(), "Starting summarizer UI");

    let clipboard: Option<Box<dyn ClipboardSink>> = match ClipboardHandler::new() {
        Ok(handler) => Some(Box::new(handler)),
        Err(err) => {
            tracing::warn!(error = %err, "Copy disabled");
            None
        }
    };

    let events = EventHandler::new(TICK_RATE);
    let mut app = App::new(
        gateway,
        CopyAck::new(config.copy_ack()),
        clipboard,
        events.sender(),
        runtime,
    );

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;

    loop {
        terminal.draw(|frame| draw(frame, &app.view()))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.insert_str(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::SummaryResult(result)) => app.on_summary_result(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Summarizer UI closed");
    Ok(())
}
