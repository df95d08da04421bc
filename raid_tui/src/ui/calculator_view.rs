//! Calculator tab: input form and headline metrics

use super::{metric_line, prompt_paragraph};
use crate::app::App;
use crate::labels::labels;
use raid_core::format::number_to_string;
use raid_core::{format_compact, format_fixed, StatField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_form(f, app, chunks[0]);
    draw_metrics(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let l = labels(app.language);
    let mut lines = vec![
        Line::from(Span::styled(l.subtitle, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];

    for field in StatField::all() {
        let focused = *field == app.focused;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, l.field(*field)),
            label_style,
        )));

        let entry = app.entries.get(*field);
        let value = if entry.is_empty() {
            Span::styled(
                format!("    {}", l.placeholder(*field)),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let cursor = if focused { "▏" } else { "" };
            Span::styled(
                format!("    {}{}", entry, cursor),
                Style::default().fg(Color::White),
            )
        };
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(l.footer, Style::default().fg(Color::DarkGray))));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", l.enter_stats)));

    f.render_widget(paragraph, area);
}

fn draw_metrics(f: &mut Frame, app: &App, area: Rect) {
    let l = labels(app.language);

    let Some(result) = app.result() else {
        f.render_widget(prompt_paragraph(l.enter_data, l.metric), area);
        return;
    };

    let mut lines = vec![
        Line::from(""),
        metric_line(l.dmg_ratio, format!("{}x", format_fixed(result.dmg_ratio, 1)), Color::Green),
        metric_line(l.dmg_per_kill, format_compact(result.avg_dmg_per_kill), Color::Magenta),
        metric_line(l.estimated_deaths, number_to_string(result.estimated_deaths), Color::Magenta),
        metric_line(l.kd, format_fixed(result.kd, 2), Color::Green),
    ];

    if app.has_pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "…",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", l.metric)));

    f.render_widget(paragraph, area);
}
