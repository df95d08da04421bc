//! raid_tui - Interactive TUI for the raid stats calculator

mod app;
mod cli;
mod clipboard;
mod debouncer;
mod headless;
mod labels;
mod logging;
mod ui;

use anyhow::Context;
use app::{App, Tab};
use clap::Parser;
use cli::Cli;
use clipboard::SystemClipboard;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use raid_core::share::link_language;
use raid_core::{decode_link, CalculatorConfig, RawEntries};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging);

    let language = cli
        .language
        .or_else(|| cli.link.as_deref().and_then(link_language))
        .unwrap_or(config.display.language);
    let shared = cli.link.as_deref().map(decode_link).unwrap_or_default();
    info!(%language, json = cli.json, "starting");

    if cli.json {
        let entries = if shared.is_empty() { RawEntries::new() } else { shared.to_entries() };
        let report = headless::build_report(entries, &config.share.origin, language);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut app = App::new(&config, language);
    app.load_shared(&shared);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal UI failed")
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut clipboard = SystemClipboard;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if ctrl => break,
                    KeyCode::Char('l') if ctrl => app.cycle_language(),
                    KeyCode::Char('y') if ctrl => app.copy_share_text(&mut clipboard),
                    KeyCode::Char('s') if ctrl => app.copy_share_url(&mut clipboard),
                    KeyCode::Char('u') if ctrl => app.clear_field(),
                    KeyCode::Tab => app.next_tab(),
                    KeyCode::BackTab => app.prev_tab(),
                    KeyCode::F(1) => app.set_tab(Tab::Help),
                    KeyCode::Up => app.focus_prev(),
                    KeyCode::Down => app.focus_next(),
                    KeyCode::Enter => app.on_enter(),
                    KeyCode::Backspace => app.on_backspace(),
                    KeyCode::Delete => app.clear_field(),
                    KeyCode::Char(c) if !ctrl => app.on_char(c),
                    _ => {}
                }
            }
        }

        app.tick();
    }

    Ok(())
}

/// Explicit `--config` paths must exist; the default location is optional
fn load_config(explicit: Option<&Path>) -> anyhow::Result<CalculatorConfig> {
    if let Some(path) = explicit {
        return CalculatorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => CalculatorConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        _ => Ok(CalculatorConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("raid_stats").join("config.toml"))
}
