//! Tables tab: per-hour and per-raid breakdowns

use super::prompt_paragraph;
use crate::app::App;
use crate::labels::labels;
use raid_core::{format_compact, format_fixed, RaidBreakdown, RaidDuration, StatsResult};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let l = labels(app.language);

    let Some(result) = app.result() else {
        f.render_widget(prompt_paragraph(l.enter_data, l.stats_per_hour), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(area);

    draw_per_hour(f, app, result, chunks[0]);
    draw_per_raid(f, app, result, chunks[1]);
}

fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn draw_per_hour(f: &mut Frame, app: &App, result: &StatsResult, area: Rect) {
    let l = labels(app.language);
    let per_hour = &result.per_hour;

    let rows = vec![
        value_row(l.downed, format_fixed(per_hour.downed, 1), Color::Green),
        value_row(l.kills, format_fixed(per_hour.kills, 1), Color::Green),
        value_row(l.dmg_dealt, format_compact(per_hour.dmg_dealt), Color::Green),
        value_row(l.dmg_taken, format_compact(per_hour.dmg_taken), Color::Magenta),
        value_row(l.deaths_estimate, format_fixed(per_hour.estimated_deaths, 2), Color::Magenta),
    ];

    let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(10)])
        .header(Row::new(vec![l.metric, l.value]).style(header_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", l.stats_per_hour)),
        );

    f.render_widget(table, area);
}

fn draw_per_raid(f: &mut Frame, app: &App, result: &StatsResult, area: Rect) {
    let l = labels(app.language);
    let raids: Vec<RaidBreakdown> = RaidDuration::all().iter().map(|d| *result.raid(*d)).collect();

    let rows = vec![
        raid_row(l.downed, &raids, |r| format_fixed(r.downed, 1), Color::Green),
        raid_row(l.kills, &raids, |r| format_fixed(r.kills, 1), Color::Green),
        raid_row(l.dmg_dealt, &raids, |r| format_compact(r.dmg_dealt), Color::Green),
        raid_row(l.dmg_taken, &raids, |r| format_compact(r.dmg_taken), Color::Magenta),
    ];

    let mut header = vec![l.metric];
    header.extend(RaidDuration::all().iter().map(|d| l.raid(*d)));

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(Row::new(header).style(header_style()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", l.stats_per_raid)),
    );

    f.render_widget(table, area);
}

fn value_row(name: &'static str, value: String, color: Color) -> Row<'static> {
    Row::new(vec![
        Cell::from(name).style(Style::default().fg(Color::Gray)),
        Cell::from(value).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn raid_row(
    name: &'static str,
    raids: &[RaidBreakdown],
    cell: fn(&RaidBreakdown) -> String,
    color: Color,
) -> Row<'static> {
    let mut cells = vec![Cell::from(name).style(Style::default().fg(Color::Gray))];
    cells.extend(
        raids
            .iter()
            .map(|r| Cell::from(cell(r)).style(Style::default().fg(color))),
    );
    Row::new(cells)
}
