use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::stats::TextStats;
use crate::ui::summarize::{RequestState, SummarizerState, SPINNER_PERIOD};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

/// Spinner animation frames.
const SPINNER_FRAMES: [&str; SPINNER_PERIOD as usize] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Snapshot of what the screen shows.
pub struct View<'a> {
    pub state: &'a SummarizerState,
    pub stats: TextStats,
    pub copied: bool,
    pub notice: Option<&'a str>,
}

pub fn draw(frame: &mut Frame, view: &View) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    frame.render_widget(header(), rows[0]);
    render_input(frame, columns[0], view);
    render_result(frame, columns[1], view);
    frame.render_widget(footer(view), rows[2]);
}

fn header() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            "Text Summarizer",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Distill your content into concise summaries",
            Style::default().fg(MUTED_TEXT),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn render_input(frame: &mut Frame, area: Rect, view: &View) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let placeholder = view.state.input.is_empty();
    let text = if placeholder {
        "Enter the text you want to summarize...".to_string()
    } else {
        view.state.input.clone()
    };
    let text_style = if placeholder {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let editor = Paragraph::new(text)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Paste your text ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FOCUS_BORDER)),
        );
    frame.render_widget(editor, parts[0]);
    frame.render_widget(Paragraph::new(submit_line(&view.state.request)), parts[1]);
}

fn submit_line(request: &RequestState) -> Line<'static> {
    match request {
        RequestState::InFlight { animation_tick } => Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(*animation_tick)),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled("Summarizing...", Style::default().fg(HEADER_TEXT)),
        ]),
        _ => Line::from(Span::styled(
            " Ctrl+S: Summarize",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    }
}

fn render_result(frame: &mut Frame, area: Rect, view: &View) {
    let widget = match &view.state.request {
        RequestState::Failed { message } => Paragraph::new(message.clone())
            .style(Style::default().fg(STATUS_ERROR))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            ),
        RequestState::Succeeded { summary } => Paragraph::new(summary.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(summary_title(view.copied))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            ),
        RequestState::Idle | RequestState::InFlight { .. } => {
            Paragraph::new("Your summary will appear here")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                )
        }
    };
    frame.render_widget(widget, area);
}

fn summary_title(copied: bool) -> Line<'static> {
    if copied {
        Line::from(vec![
            Span::raw(" Summary │ "),
            Span::styled("✓ Copied!", Style::default().fg(STATUS_OK)),
            Span::raw(" "),
        ])
    } else {
        Line::from(" Summary │ Ctrl+Y: Copy ")
    }
}

fn footer(view: &View) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Characters ", label),
        Span::styled(view.stats.characters.to_string(), value),
        Span::styled("  │  Words ", label),
        Span::styled(view.stats.words.to_string(), value),
        Span::styled("  │  Est. Summary ", label),
        Span::styled(view.stats.estimated_summary_words.to_string(), value),
        Span::styled("  │  Ctrl+L: Clear  Ctrl+Q: Quit", label),
    ];
    if let Some(notice) = view.notice {
        spans.push(Span::styled(
            format!("  │  {notice}"),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}
