//! Share tab: link and copyable summary

use super::{prompt_paragraph, section_header};
use crate::app::App;
use crate::labels::labels;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let l = labels(app.language);

    let Some(text) = app.share_text() else {
        f.render_widget(prompt_paragraph(l.enter_data, l.share_results), area);
        return;
    };

    let lines = vec![
        section_header(l.share_link),
        Line::from(Span::styled(app.share_url.clone(), Style::default().fg(Color::Cyan))),
        Line::from(""),
        section_header(l.copy_text),
        Line::from(Span::styled(text, Style::default().fg(Color::White))),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", l.share_results)),
        );

    f.render_widget(paragraph, area);
}
