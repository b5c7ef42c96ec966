use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::client::SummarizeGateway;
use crate::ui::app::App;

/// Key bindings:
/// - Ctrl+S: summarize
/// - Ctrl+Y: copy summary
/// - Ctrl+L: clear input
/// - Ctrl+Q / Ctrl+C: quit
/// - anything else edits the input
pub fn handle_key<G: SummarizeGateway>(app: &mut App<G>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_summary();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.clear_input();
        return;
    }

    match key.code {
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Tab => app.insert_char('\t'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
