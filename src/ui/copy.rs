//! "Copied!" acknowledgment for the copy action.
//!
//! Independent of the summarize state machine: copying sets a flag that a
//! spawned timer clears after a fixed delay. Each copy aborts the previous
//! timer before scheduling its own, and the timer only clears the flag if
//! no newer copy happened since it was scheduled.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::clipboard::{ClipboardError, ClipboardSink};

/// Default time the acknowledgment stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Default)]
struct AckSlot {
    copied: bool,
    generation: u64,
}

pub struct CopyAck {
    slot: Arc<Mutex<AckSlot>>,
    revert: Option<JoinHandle<()>>,
    delay: Duration,
}

impl CopyAck {
    pub fn new(delay: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(AckSlot::default())),
            revert: None,
            delay,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.slot.lock().copied
    }

    /// Write `summary` to the clipboard and show the acknowledgment.
    ///
    /// Must be called from within a Tokio runtime. On clipboard failure the
    /// flag is left untouched.
    pub fn copy<C>(&mut self, clipboard: &mut C, summary: &str) -> Result<(), ClipboardError>
    where
        C: ClipboardSink + ?Sized,
    {
        clipboard.set_text(summary)?;

        if let Some(previous) = self.revert.take() {
            previous.abort();
        }

        let generation = {
            let mut slot = self.slot.lock();
            slot.generation = slot.generation.wrapping_add(1);
            slot.copied = true;
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let delay = self.delay;
        self.revert = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = slot.lock();
            if slot.generation == generation {
                slot.copied = false;
            }
        }));

        tracing::debug!(chars = summary.len(), "Summary copied to clipboard");
        Ok(())
    }

    /// Wait until the pending revert (if any) has run.
    pub async fn wait_for_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            let _ = handle.await;
        }
    }
}

impl Default for CopyAck {
    fn default() -> Self {
        Self::new(COPY_ACK_DURATION)
    }
}

impl Drop for CopyAck {
    fn drop(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }
}
