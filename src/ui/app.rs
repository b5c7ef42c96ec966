use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::client::{ClientError, SummarizeGateway};
use crate::clipboard::ClipboardSink;
use crate::protocol::SummaryOutcome;
use crate::ui::copy::CopyAck;
use crate::ui::events::AppEvent;
use crate::ui::render::View;
use crate::ui::stats::TextStats;
use crate::ui::summarize::{Orchestrator, SummarizerState};

/// Terminal application state: the orchestrator plus everything around it
/// that only the front-end cares about.
pub struct App<G> {
    orchestrator: Orchestrator<G>,
    copy_ack: CopyAck,
    clipboard: Option<Box<dyn ClipboardSink>>,
    notice: Option<String>,
    should_quit: bool,
    results: Sender<AppEvent>,
    runtime: Handle,
}

impl<G: SummarizeGateway> App<G> {
    /// `results` receives [`AppEvent::SummaryResult`] when a gateway call
    /// spawned on `runtime` finishes.
    pub fn new(
        gateway: G,
        copy_ack: CopyAck,
        clipboard: Option<Box<dyn ClipboardSink>>,
        results: Sender<AppEvent>,
        runtime: Handle,
    ) -> Self {
        Self {
            orchestrator: Orchestrator::new(gateway),
            copy_ack,
            clipboard,
            notice: None,
            should_quit: false,
            results,
            runtime,
        }
    }

    pub fn state(&self) -> &SummarizerState {
        self.orchestrator.state()
    }

    pub fn view(&self) -> View<'_> {
        View {
            state: self.orchestrator.state(),
            stats: TextStats::from_input(self.orchestrator.input()),
            copied: self.copy_ack.is_copied(),
            notice: self.notice.as_deref(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.orchestrator.input().to_owned();
        text.push(ch);
        self.orchestrator.set_input(text);
    }

    pub fn insert_str(&mut self, pasted: &str) {
        let mut text = self.orchestrator.input().to_owned();
        text.push_str(pasted);
        self.orchestrator.set_input(text);
    }

    pub fn backspace(&mut self) {
        let mut text = self.orchestrator.input().to_owned();
        if text.pop().is_some() {
            self.orchestrator.set_input(text);
        }
    }

    pub fn clear_input(&mut self) {
        self.orchestrator.set_input(String::new());
    }

    /// Submit the current input. Ignored while a call is outstanding,
    /// mirroring a disabled submit button.
    pub fn submit(&mut self) {
        if !self.orchestrator.state().can_submit() {
            return;
        }
        self.notice = None;

        let Some(pending) = self.orchestrator.begin_submit() else {
            return;
        };

        let gateway = self.orchestrator.gateway();
        let results = self.results.clone();
        self.runtime.spawn(async move {
            let result = gateway.summarize(&pending.text).await;
            let _ = results.send(AppEvent::SummaryResult(result));
        });
    }

    pub fn on_summary_result(&mut self, result: Result<SummaryOutcome, ClientError>) {
        self.orchestrator.complete(result);
    }

    /// Copy the current summary, if there is one.
    pub fn copy_summary(&mut self) {
        let Some(summary) = self.orchestrator.state().request.summary() else {
            return;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            self.notice = Some("Clipboard unavailable".to_string());
            return;
        };

        // Spawning the revert timer needs the runtime context.
        let _enter = self.runtime.enter();
        match self.copy_ack.copy(&mut **clipboard, summary) {
            Ok(()) => self.notice = None,
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.notice = Some(err.to_string());
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.orchestrator.tick();
    }
}
