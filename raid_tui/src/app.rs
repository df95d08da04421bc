//! Application state

use crate::clipboard::{ClipboardBackend, ClipboardError};
use crate::debouncer::Debouncer;
use crate::labels::labels;
use raid_core::{
    compute_stats, share_text, share_url, CalculatorConfig, Language, PartialInput, RawEntries,
    StatField, StatsInput, StatsOutcome, StatsResult,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long a status message stays in the footer
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Tables,
    Share,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Tables, Tab::Share, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calc",
            Tab::Tables => "Tables",
            Tab::Share => "Share",
            Tab::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    created: Instant,
}

/// Whether a keystroke is allowed in a field.
/// Counters take digits, `.` and the `k`/`m` shorthand (Cyrillic `м` too);
/// hours take digits and `.` only.
pub fn accepts_char(field: StatField, c: char) -> bool {
    if c.is_ascii_digit() || c == '.' {
        return true;
    }
    field.accepts_shorthand() && matches!(c, 'k' | 'K' | 'm' | 'M' | 'м' | 'М')
}

pub struct App {
    pub current_tab: Tab,
    pub language: Language,
    pub entries: RawEntries,
    pub focused: StatField,
    pub outcome: StatsOutcome,
    /// Link for the last snapshot that produced a result
    pub share_url: String,
    pub status: Option<StatusMessage>,
    origin: String,
    debouncer: Debouncer,
}

impl App {
    pub fn new(config: &CalculatorConfig, language: Language) -> Self {
        App {
            current_tab: Tab::Calculator,
            language,
            entries: RawEntries::new(),
            focused: StatField::Downed,
            outcome: StatsOutcome::Insufficient,
            share_url: String::new(),
            status: None,
            origin: config.share.origin.clone(),
            debouncer: Debouncer::new(Duration::from_millis(config.display.debounce_ms)),
        }
    }

    /// Pre-fill the form from a decoded share link and compute right away
    pub fn load_shared(&mut self, partial: &PartialInput) {
        if partial.is_empty() {
            return;
        }
        info!(?partial, "loading shared stats");
        self.entries = partial.to_entries();
        self.recompute();
    }

    pub fn result(&self) -> Option<&StatsResult> {
        self.outcome.result()
    }

    pub fn input(&self) -> StatsInput {
        self.entries.parse()
    }

    // === Editing ===

    pub fn on_char(&mut self, c: char) {
        if !accepts_char(self.focused, c) {
            return;
        }
        self.entries.get_mut(self.focused).push(c);
        self.debouncer.schedule_execution();
    }

    pub fn on_backspace(&mut self) {
        if self.entries.get_mut(self.focused).pop().is_some() {
            self.debouncer.schedule_execution();
        }
    }

    pub fn clear_field(&mut self) {
        let entry = self.entries.get_mut(self.focused);
        if !entry.is_empty() {
            entry.clear();
            self.debouncer.schedule_execution();
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Recompute immediately and move to the next field
    pub fn on_enter(&mut self) {
        if self.debouncer.has_pending() {
            self.recompute();
        }
        self.focus_next();
    }

    // === Navigation ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        debug!(language = %self.language, "language changed");
        if self.outcome.is_ready() {
            self.share_url = share_url(&self.origin, self.language, &self.input());
        }
    }

    // === Computation ===

    /// Called every loop iteration; runs a pending recompute once the input
    /// has been quiet long enough and expires old status messages
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.debouncer.should_execute_at(now) {
            self.recompute();
        }
        if let Some(status) = &self.status {
            if now.saturating_duration_since(status.created) >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn recompute(&mut self) {
        self.debouncer.mark_executed();
        let input = self.input();
        self.outcome = compute_stats(&input);

        if self.outcome.is_ready() {
            self.share_url = share_url(&self.origin, self.language, &input);
            debug!(url = %self.share_url, "stats recomputed");
        }
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.has_pending()
    }

    // === Sharing ===

    /// Localised share sentence for the current result
    pub fn share_text(&self) -> Option<String> {
        let result = self.result()?;
        if self.share_url.is_empty() {
            return None;
        }
        Some(share_text(self.language, result, &self.share_url))
    }

    pub fn copy_share_text(&mut self, backend: &mut dyn ClipboardBackend) {
        let outcome = match self.share_text() {
            Some(text) => backend.copy(&text),
            None => Err(ClipboardError::Empty),
        };
        self.report_copy(outcome);
    }

    pub fn copy_share_url(&mut self, backend: &mut dyn ClipboardBackend) {
        let outcome = if self.share_url.is_empty() {
            Err(ClipboardError::Empty)
        } else {
            backend.copy(&self.share_url)
        };
        self.report_copy(outcome);
    }

    fn report_copy(&mut self, outcome: Result<(), ClipboardError>) {
        let l = labels(self.language);
        let (text, kind) = match outcome {
            Ok(()) => (l.copied.to_string(), StatusKind::Info),
            Err(ClipboardError::Empty) => (l.enter_data.to_string(), StatusKind::Error),
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                (format!("{}: {}", l.copy_failed, err), StatusKind::Error)
            }
        };
        self.status = Some(StatusMessage {
            text,
            kind,
            created: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl ClipboardBackend for MemoryClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::SystemUnavailable);
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn app() -> App {
        App::new(&CalculatorConfig::default(), Language::En)
    }

    fn type_into(app: &mut App, field: StatField, text: &str) {
        app.focused = field;
        for c in text.chars() {
            app.on_char(c);
        }
    }

    fn fill_sample(app: &mut App) {
        type_into(app, StatField::Downed, "10");
        type_into(app, StatField::Kills, "100");
        type_into(app, StatField::DmgDealt, "50k");
        type_into(app, StatField::DmgTaken, "10k");
        type_into(app, StatField::Hours, "10");
    }

    #[test]
    fn test_keystroke_filter() {
        assert!(accepts_char(StatField::DmgDealt, 'k'));
        assert!(accepts_char(StatField::DmgDealt, 'М'));
        assert!(!accepts_char(StatField::DmgDealt, 'x'));
        assert!(!accepts_char(StatField::Hours, 'k'));
        assert!(accepts_char(StatField::Hours, '.'));
        assert!(!accepts_char(StatField::Kills, '-'));
    }

    #[test]
    fn test_typing_is_filtered() {
        let mut app = app();
        type_into(&mut app, StatField::Hours, "1a2k.5");
        assert_eq!(app.entries.hours, "12.5");
    }

    #[test]
    fn test_recompute_waits_for_quiet_period() {
        let mut app = app();
        fill_sample(&mut app);
        assert!(app.has_pending());

        app.tick_at(Instant::now());
        assert!(app.result().is_none());

        app.tick_at(Instant::now() + Duration::from_millis(900));
        let result = app.result().expect("result after debounce");
        assert!((result.kd - 5.0).abs() < f64::EPSILON);
        assert!(!app.has_pending());
    }

    #[test]
    fn test_share_url_follows_result() {
        let mut app = app();
        fill_sample(&mut app);
        app.recompute();
        assert_eq!(
            app.share_url,
            "http://localhost:8080/en?downed=10&kills=100&dmgDealt=50000&dmgTaken=10000&hours=10"
        );

        app.cycle_language();
        assert!(app.share_url.starts_with("http://localhost:8080/ru?"));
    }

    #[test]
    fn test_insufficient_keeps_prompt() {
        let mut app = app();
        type_into(&mut app, StatField::Kills, "5");
        app.recompute();
        assert!(app.result().is_none());
        assert!(app.share_text().is_none());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();
        type_into(&mut app, StatField::Kills, "123");
        app.on_backspace();
        assert_eq!(app.entries.kills, "12");
        app.clear_field();
        assert!(app.entries.kills.is_empty());
    }

    #[test]
    fn test_load_shared_prefills_and_computes() {
        let mut app = app();
        let partial = raid_core::decode("kills=100&dmgDealt=50000&dmgTaken=10000&hours=10");
        app.load_shared(&partial);
        assert_eq!(app.entries.kills, "100");
        assert!(app.entries.downed.is_empty());
        assert!(app.result().is_some());
    }

    #[test]
    fn test_copy_share_text() {
        let mut app = app();
        fill_sample(&mut app);
        app.recompute();

        let mut clipboard = MemoryClipboard::default();
        app.copy_share_text(&mut clipboard);
        assert_eq!(clipboard.copied.len(), 1);
        assert!(clipboard.copied[0].starts_with("My ARC Raiders stats: K/D 5.00, damage ratio 5.0x — "));
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Info));
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut app = app();
        fill_sample(&mut app);
        app.recompute();

        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        app.copy_share_url(&mut clipboard);
        let status = app.status.as_ref().expect("status message");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Copy failed"));
    }

    #[test]
    fn test_copy_without_result() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();
        app.copy_share_text(&mut clipboard);
        assert!(clipboard.copied.is_empty());
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_status_expires() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();
        app.copy_share_url(&mut clipboard);
        assert!(app.status.is_some());
        app.tick_at(Instant::now() + Duration::from_secs(4));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Calculator);
    }
}
