use std::time::Duration;

use summarizer::clipboard::{ClipboardError, ClipboardSink};
use summarizer::ui::copy::{CopyAck, COPY_ACK_DURATION};

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Advance paused time and let spawned timers run.
async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn copy_writes_summary_and_shows_ack() {
    let mut clipboard = RecordingClipboard::default();
    let mut ack = CopyAck::default();
    assert!(!ack.is_copied());

    ack.copy(&mut clipboard, "A fox jumps over a dog.").unwrap();

    assert!(ack.is_copied());
    assert_eq!(clipboard.copied, vec!["A fox jumps over a dog.".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn ack_reverts_after_two_seconds() {
    assert_eq!(COPY_ACK_DURATION, Duration::from_millis(2000));

    let mut clipboard = RecordingClipboard::default();
    let mut ack = CopyAck::default();
    ack.copy(&mut clipboard, "summary").unwrap();

    advance(1999).await;
    assert!(ack.is_copied());

    advance(1).await;
    assert!(!ack.is_copied());
}

#[tokio::test(start_paused = true)]
async fn recopy_restarts_the_timer() {
    let mut clipboard = RecordingClipboard::default();
    let mut ack = CopyAck::default();

    ack.copy(&mut clipboard, "summary").unwrap();
    advance(1500).await;
    ack.copy(&mut clipboard, "summary").unwrap();

    // First timer would have fired at 2000.
    advance(1000).await;
    assert!(ack.is_copied());

    advance(1000).await;
    assert!(!ack.is_copied());
    assert_eq!(clipboard.copied.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn wait_for_revert_returns_after_ack_clears() {
    let mut clipboard = RecordingClipboard::default();
    let mut ack = CopyAck::new(Duration::from_millis(300));
    ack.copy(&mut clipboard, "summary").unwrap();

    ack.wait_for_revert().await;
    assert!(!ack.is_copied());
}

#[tokio::test]
async fn failed_write_leaves_ack_unset() {
    struct Broken;
    impl ClipboardSink for Broken {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Write(arboard::Error::ClipboardNotSupported))
        }
    }

    let mut ack = CopyAck::default();
    assert!(ack.copy(&mut Broken, "summary").is_err());
    assert!(!ack.is_copied());
}
