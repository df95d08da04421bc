//! Help tab view

use super::section_header;
use crate::app::App;
use crate::labels::{labels, Labels};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(help_lines(labels(app.language)))
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Key reference followed by the FAQ in the current language
fn help_lines(l: &Labels) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("F1", "Jump to help"),
        key_line("Ctrl+L", "Cycle language (EN/RU/UK)"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        section_header("Input"),
        key_line("↑ ↓", "Select field"),
        key_line("0-9 . k m", "Type a value (500k, 1.5m)"),
        key_line("Backspace", "Delete last character"),
        key_line("Delete / Ctrl+U", "Clear field"),
        key_line("Enter", "Calculate now and go to next field"),
        Line::from(""),
        section_header("Share"),
        key_line("Ctrl+Y", "Copy share text"),
        key_line("Ctrl+S", "Copy share link"),
        Line::from(""),
        section_header(l.faq_title),
    ];

    for entry in l.faq {
        lines.push(Line::from(Span::styled(
            entry.question,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.answer),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    lines
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
