//! TUI application state and event handling.
//!
//! The `App` struct owns all interactive state and runs the main event loop
//! via `run()`. It manages:
//!
//! - **Form state**: category selector, value input, from/to unit selectors
//! - **Conversions**: a pending "Converting…" phase followed by the result,
//!   trivia fact, and history append
//! - **History panel**: toggleable side panel with export, copy and clear
//! - **Status messages**: transient feedback with automatic expiry
//! - **Dirty state tracking**: redraw only when state changes

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::catalog;
use crate::clipboard::copy_to_clipboard;
use crate::engine::{self, format_magnitude};
use crate::history::{ConversionRecord, EXPORT_FILENAME, HistoryEntry, HistoryStore, to_csv, write_csv};
use crate::trivia;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Cosmetic processing delay before a result is revealed (milliseconds)
const CONVERT_DELAY_MS: u64 = 2500;
/// Value input precision: at most this many digits after the decimal point
const MAX_VALUE_DECIMALS: usize = 4;
/// Lines scrolled per history page action
const HISTORY_PAGE_LINES: usize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which form field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Value,
    FromUnit,
    ToUnit,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Category => Field::Value,
            Field::Value => Field::FromUnit,
            Field::FromUnit => Field::ToUnit,
            Field::ToUnit => Field::Category,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Category => Field::ToUnit,
            Field::Value => Field::Category,
            Field::FromUnit => Field::Value,
            Field::ToUnit => Field::FromUnit,
        }
    }
}

/// Displayed result of the last conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { text: String, fact: &'static str },
    Failure { message: String },
}

/// A conversion computed but not yet revealed (cosmetic delay)
struct Pending {
    reveal_at: Instant,
    result: Result<ConversionRecord, String>,
}

pub struct App {
    store: HistoryStore,
    focus: Field,
    category_idx: usize,
    from_idx: usize,
    to_idx: usize,
    value_input: String,
    outcome: Option<Outcome>,
    pending: Option<Pending>,
    // History panel state
    history_open: bool,
    history_entries: Vec<HistoryEntry>,
    history_scroll: usize,
    // Status message (export feedback, etc.)
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    convert_delay: Duration,
}

impl App {
    pub fn new(store: HistoryStore) -> Self {
        Self {
            store,
            focus: Field::Category,
            category_idx: 0,
            from_idx: 0,
            to_idx: 0,
            value_input: String::new(),
            outcome: None,
            pending: None,
            history_open: false,
            history_entries: Vec::new(),
            history_scroll: 0,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
            convert_delay: Duration::from_millis(CONVERT_DELAY_MS),
        }
    }

    pub fn category(&self) -> &'static str {
        catalog::CATEGORIES[self.category_idx]
    }

    fn units(&self) -> &'static [&'static str] {
        // Every entry in CATEGORIES has a unit list
        catalog::units_for(self.category()).unwrap_or(&[])
    }

    pub fn from_unit(&self) -> &'static str {
        self.units()[self.from_idx]
    }

    pub fn to_unit(&self) -> &'static str {
        self.units()[self.to_idx]
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.reveal_pending_if_due();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        focus: self.focus,
                        category: self.category(),
                        value_input: &self.value_input,
                        from_unit: self.from_unit(),
                        to_unit: self.to_unit(),
                        outcome: self.outcome.as_ref(),
                        converting: self.pending.is_some(),
                        history_open: self.history_open,
                        history_entries: &self.history_entries,
                        history_scroll: self.history_scroll,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                // Esc closes the history panel first, then quits
                if self.history_open {
                    self.history_open = false;
                    self.needs_redraw = true;
                } else {
                    self.should_quit = true;
                }
            }
            Action::NextField => {
                self.focus = self.focus.next();
                self.needs_redraw = true;
            }
            Action::PrevField => {
                self.focus = self.focus.prev();
                self.needs_redraw = true;
            }
            Action::SelectPrev => self.move_selection(-1),
            Action::SelectNext => self.move_selection(1),
            Action::InputChar(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Convert => self.start_conversion(),
            Action::ToggleHistory => self.toggle_history(),
            Action::ClearHistory => self.clear_history(),
            Action::ExportHistory => self.export_history(),
            Action::CopyHistory => self.copy_history(),
            Action::HistoryScrollUp => self.scroll_history(-(HISTORY_PAGE_LINES as isize)),
            Action::HistoryScrollDown => self.scroll_history(HISTORY_PAGE_LINES as isize),
            Action::None => {}
        }
    }

    /// Move the focused selector. The value field has no selection to move.
    fn move_selection(&mut self, delta: isize) {
        let step = |idx: usize, len: usize| -> usize {
            if len == 0 {
                return 0;
            }
            ((idx as isize + delta).rem_euclid(len as isize)) as usize
        };

        match self.focus {
            Field::Category => {
                self.category_idx = step(self.category_idx, catalog::CATEGORIES.len());
                // Unit selectors are scoped to the category; reset them
                self.from_idx = 0;
                self.to_idx = 0;
                self.outcome = None;
            }
            Field::FromUnit => self.from_idx = step(self.from_idx, self.units().len()),
            Field::ToUnit => self.to_idx = step(self.to_idx, self.units().len()),
            Field::Value => return,
        }
        self.needs_redraw = true;
    }

    /// Append to the value input: non-negative decimal, at most one dot,
    /// at most four digits after it.
    fn input_char(&mut self, c: char) {
        if self.focus != Field::Value {
            return;
        }

        let accept = match c {
            '.' => !self.value_input.contains('.'),
            '0'..='9' => match self.value_input.split_once('.') {
                Some((_, decimals)) => decimals.len() < MAX_VALUE_DECIMALS,
                None => true,
            },
            _ => false,
        };

        if accept {
            self.value_input.push(c);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.focus == Field::Value && self.value_input.pop().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Kick off a conversion: compute the result now, reveal it after the
    /// cosmetic delay.
    fn start_conversion(&mut self) {
        if self.pending.is_some() {
            return; // One interaction at a time
        }

        let value: f64 = match self.value_input.parse() {
            Ok(v) => v,
            Err(_) => {
                self.outcome = Some(Outcome::Failure {
                    message: format!("Invalid value: '{}'", self.value_input),
                });
                self.needs_redraw = true;
                return;
            }
        };

        let result = engine::convert(value, self.from_unit(), self.to_unit(), self.category())
            .map(|c| ConversionRecord::new(value, self.from_unit(), &c.unit_label, c.magnitude))
            .map_err(|e| format!("Invalid conversion: {}", e));

        self.pending = Some(Pending { reveal_at: Instant::now() + self.convert_delay, result });
        self.outcome = None;
        self.needs_redraw = true;
    }

    /// Finish a pending conversion once its reveal time has passed: show the
    /// outcome, log it, pick a trivia fact.
    fn reveal_pending_if_due(&mut self) {
        let due = self.pending.as_ref().is_some_and(|p| Instant::now() >= p.reveal_at);
        if !due {
            return;
        }
        let Some(pending) = self.pending.take() else { return };

        match pending.result {
            Ok(record) => {
                let text = format!(
                    "Converted Value: {} {}",
                    format_magnitude(record.result),
                    record.to_unit
                );
                self.outcome = Some(Outcome::Success { text, fact: trivia::random_fact() });

                // A log failure must not suppress the displayed result
                if let Err(e) = self.store.append(&record) {
                    self.set_status(
                        format!("✗ Could not log conversion: {}", e),
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                } else if self.history_open {
                    self.refresh_history();
                }
            }
            Err(message) => {
                self.outcome = Some(Outcome::Failure { message });
            }
        }
        self.needs_redraw = true;
    }

    fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
        if self.history_open {
            self.refresh_history();
        }
        self.needs_redraw = true;
    }

    fn refresh_history(&mut self) {
        match self.store.entries() {
            Ok(entries) => {
                self.history_entries = entries;
                self.history_scroll = 0;
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Could not read history: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn clear_history(&mut self) {
        match self.store.clear() {
            Ok(()) => {
                self.history_entries.clear();
                self.history_scroll = 0;
                self.set_status("✓ History cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Could not clear history: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn export_history(&mut self) {
        if let Err(e) = self.refresh_and(|entries| write_csv(entries, &PathBuf::from(EXPORT_FILENAME))) {
            self.set_status(
                format!("✗ Export failed: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        } else {
            self.set_status(
                format!("✓ Exported to {}", EXPORT_FILENAME),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            );
        }
    }

    fn copy_history(&mut self) {
        if let Err(e) = self.refresh_and(|entries| copy_to_clipboard(&to_csv(entries))) {
            self.set_status(
                format!("✗ Copy failed: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        } else {
            self.set_status(
                "✓ History copied as CSV",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            );
        }
    }

    /// Re-read history from the store and run an action over it.
    fn refresh_and(
        &mut self,
        f: impl FnOnce(&[HistoryEntry]) -> Result<()>,
    ) -> Result<()> {
        self.history_entries = self.store.entries()?;
        f(&self.history_entries)
    }

    fn scroll_history(&mut self, delta: isize) {
        if !self.history_open {
            return;
        }
        let max = self.history_entries.len().saturating_sub(1);
        let new = (self.history_scroll as isize + delta).clamp(0, max as isize) as usize;
        if new != self.history_scroll {
            self.history_scroll = new;
            self.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("log.jsonl"));
        let mut app = App::new(store);
        // Tests should not wait out the cosmetic delay
        app.convert_delay = Duration::ZERO;
        (dir, app)
    }

    fn type_value(app: &mut App, text: &str) {
        app.focus = Field::Value;
        for c in text.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn test_new_app_initial_state() {
        let (_dir, app) = test_app();

        assert_eq!(app.focus, Field::Category);
        assert_eq!(app.category(), "Length");
        assert_eq!(app.from_unit(), "meter");
        assert_eq!(app.to_unit(), "meter");
        assert!(!app.should_quit);
        assert!(!app.history_open);
    }

    #[test]
    fn test_field_cycling() {
        let (_dir, mut app) = test_app();

        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Value);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::FromUnit);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::ToUnit);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Category);

        app.handle_action(Action::PrevField);
        assert_eq!(app.focus, Field::ToUnit);
    }

    #[test]
    fn test_category_selection_resets_units() {
        let (_dir, mut app) = test_app();
        app.focus = Field::FromUnit;
        app.handle_action(Action::SelectNext);
        assert_eq!(app.from_unit(), "kilometer");

        app.focus = Field::Category;
        app.handle_action(Action::SelectNext);
        assert_eq!(app.category(), "Weight");
        assert_eq!(app.from_unit(), "gram");
        assert_eq!(app.to_unit(), "gram");
    }

    #[test]
    fn test_category_selection_wraps() {
        let (_dir, mut app) = test_app();
        app.focus = Field::Category;
        app.handle_action(Action::SelectPrev);
        assert_eq!(app.category(), "Volume");
        app.handle_action(Action::SelectNext);
        assert_eq!(app.category(), "Length");
    }

    #[test]
    fn test_value_input_rules() {
        let (_dir, mut app) = test_app();
        type_value(&mut app, "12.34567");

        // Second dot rejected, decimals capped at four digits
        assert_eq!(app.value_input, "12.3456");
        app.input_char('.');
        assert_eq!(app.value_input, "12.3456");
        app.input_char('x');
        assert_eq!(app.value_input, "12.3456");

        app.delete_char();
        assert_eq!(app.value_input, "12.345");
    }

    #[test]
    fn test_value_input_only_when_value_focused() {
        let (_dir, mut app) = test_app();
        app.focus = Field::Category;
        app.input_char('5');
        assert_eq!(app.value_input, "");
    }

    #[test]
    fn test_conversion_success_flow() {
        let (_dir, mut app) = test_app();
        type_value(&mut app, "5");
        app.focus = Field::ToUnit;
        // Length: meter -> ... -> foot is index 4
        for _ in 0..4 {
            app.handle_action(Action::SelectNext);
        }
        assert_eq!(app.to_unit(), "foot");

        app.handle_action(Action::Convert);
        assert!(app.pending.is_some());
        app.reveal_pending_if_due();
        assert!(app.pending.is_none());

        match app.outcome.as_ref().unwrap() {
            Outcome::Success { text, fact } => {
                assert_eq!(text, "Converted Value: 16.40419948 foot");
                assert!(trivia::FACTS.contains(fact));
            }
            other => panic!("expected success, got {:?}", other),
        }

        // Logged to the store
        let records = app.store.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from_unit, "meter");
        assert_eq!(records[0].to_unit, "foot");
    }

    #[test]
    fn test_conversion_invalid_value() {
        let (_dir, mut app) = test_app();
        app.handle_action(Action::Convert);

        match app.outcome.as_ref().unwrap() {
            Outcome::Failure { message } => assert!(message.contains("Invalid value")),
            other => panic!("expected failure, got {:?}", other),
        }
        // Nothing logged
        assert!(app.store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_temperature_conversion_uses_table() {
        let (_dir, mut app) = test_app();
        app.focus = Field::Category;
        // Length -> Weight -> Temperature
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::SelectNext);
        assert_eq!(app.category(), "Temperature");

        type_value(&mut app, "0");
        app.focus = Field::ToUnit;
        app.handle_action(Action::SelectNext);
        assert_eq!(app.to_unit(), "fahrenheit");

        app.handle_action(Action::Convert);
        app.reveal_pending_if_due();

        match app.outcome.as_ref().unwrap() {
            Outcome::Success { text, .. } => {
                assert_eq!(text, "Converted Value: 32 fahrenheit");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_log_failure_still_shows_result() {
        let dir = TempDir::new().unwrap();
        // A directory at the log path makes every append fail
        let store = HistoryStore::new(dir.path());
        let mut app = App::new(store);
        app.convert_delay = Duration::ZERO;

        type_value(&mut app, "5");
        app.handle_action(Action::Convert);
        app.reveal_pending_if_due();

        match app.outcome.as_ref().unwrap() {
            Outcome::Success { text, .. } => assert_eq!(text, "Converted Value: 5 meter"),
            other => panic!("expected success, got {:?}", other),
        }
        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains("Could not log conversion"));
    }

    #[test]
    fn test_second_convert_ignored_while_pending() {
        let (_dir, mut app) = test_app();
        app.convert_delay = Duration::from_secs(60);
        type_value(&mut app, "1");

        app.handle_action(Action::Convert);
        app.handle_action(Action::Convert);
        app.reveal_pending_if_due(); // Not due yet

        assert!(app.pending.is_some());
        assert!(app.store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_history_toggle_and_clear() {
        let (_dir, mut app) = test_app();
        type_value(&mut app, "2");
        app.handle_action(Action::Convert);
        app.reveal_pending_if_due();

        app.handle_action(Action::ToggleHistory);
        assert!(app.history_open);
        assert_eq!(app.history_entries.len(), 1);

        app.handle_action(Action::ClearHistory);
        assert!(app.history_entries.is_empty());
        assert!(app.store.read_all().unwrap().is_empty());

        app.handle_action(Action::ToggleHistory);
        assert!(!app.history_open);
    }

    #[test]
    fn test_escape_closes_history_before_quitting() {
        let (_dir, mut app) = test_app();
        app.handle_action(Action::ToggleHistory);

        app.handle_action(Action::Escape);
        assert!(!app.history_open);
        assert!(!app.should_quit);

        app.handle_action(Action::Escape);
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_message_expiry() {
        let (_dir, mut app) = test_app();
        app.set_status("done", MessageType::Success, 0);
        assert!(app.status_message.is_some());

        std::thread::sleep(Duration::from_millis(5));
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());
    }
}
