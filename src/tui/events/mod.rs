//! Event handling for the TUI.
//!
//! This module provides event handling for the TUI, including:
//! - Key and mouse event polling
//! - Dispatch to the open modal, the active view, then global keys
//! - Integration with the `EventResult` type from `traits`

pub mod mouse;

use super::App;
use super::app_states::{ConfirmationDialog, Modal, ViewJumpModal};
use super::traits::EventResult;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

pub use mouse::handle_mouse_event;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (for timers and animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    #[must_use]
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Clear any status message on key press
    app.clear_status_message();

    if !app.is_authenticated() {
        handle_sign_in_keys(app, key);
        return;
    }

    // The open modal takes every key
    if app.modal.is_some() {
        app.handle_modal_key(key);
        return;
    }

    // Case detail replaces the active view while a case is selected
    if app.selected_case().is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.clear_case(),
            KeyCode::Char('a') => app.analyze_selected_case(),
            _ => handle_global_keys(app, key),
        }
        return;
    }

    let view = app.active_view();
    let result = app.with_view(view, |state, ctx| state.handle_key(key, ctx));
    if result != EventResult::Ignored {
        app.handle_event_result(result);
        return;
    }

    // Views that are taking text see every key
    if !app.captures_input() {
        handle_global_keys(app, key);
    }
}

fn handle_sign_in_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.login(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_global_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.back_to_main(),
        KeyCode::Char('?') => app.navigate(super::ViewKind::Help),
        KeyCode::Char('g') => app.open_modal(Modal::ViewJump(ViewJumpModal::new())),
        KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('L') => app.open_modal(Modal::Confirmation(ConfirmationDialog::logout())),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tui::ViewKind;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.session.show_onboarding = false;
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = app();
        app.open_modal(Modal::ViewJump(ViewJumpModal::new()));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view(), ViewKind::LegalResearch);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_view(), ViewKind::Home);
    }

    #[test]
    fn test_composing_suppresses_global_keys() {
        let mut app = app();
        app.navigate(ViewKind::Drafting);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert_eq!(app.chat(ViewKind::Drafting).map(|c| c.input.as_str()), Some("q"));
    }

    #[test]
    fn test_logout_needs_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('L'));
        assert!(matches!(app.modal(), Some(Modal::Confirmation(_))));
        assert!(app.is_authenticated());
        press(&mut app, KeyCode::Char('y'));
        assert!(app.modal().is_none());
        assert!(!app.is_authenticated());

        press(&mut app, KeyCode::Enter);
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_case_detail_keys() {
        let mut app = app();
        app.navigate(ViewKind::MyCases);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_case(), Some("c-1"));
        press(&mut app, KeyCode::Esc);
        assert!(app.selected_case().is_none());
        assert_eq!(app.active_view(), ViewKind::MyCases);
    }

    #[test]
    fn test_view_jump_palette() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        for c in "settings".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modal().is_none());
        assert_eq!(app.active_view(), ViewKind::Settings);
    }
}
