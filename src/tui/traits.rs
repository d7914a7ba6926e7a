//! TUI trait abstractions for screen state management.
//!
//! Each full-panel screen owns its state and implements [`ViewState`]. The
//! screen never reaches into the rest of the application: everything it
//! wants done outside itself (navigation, opening a modal, selecting a
//! session) is returned as an [`EventResult`] command and carried out by
//! the `App` orchestrator.
//!
//! # Event Flow
//!
//! 1. App receives a key from the terminal
//! 2. An open modal gets it first, then the case-detail overlay
//! 3. The active screen's `handle_key` runs with a [`ViewContext`]
//! 4. Unhandled keys fall through to the global bindings
//! 5. App applies the returned command

use super::app_states::Modal;
use super::router::ViewKind;
use crate::model::{CaseId, SessionData};
use crossterm::event::KeyEvent;

/// Result of handling an event in a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by this screen
    Consumed,
    /// Event was not handled, let the orchestrator process it
    Ignored,
    /// Switch to another view
    Navigate(ViewKind),
    /// Open a stored chat session in the view hosting its tool
    SelectSession(SessionData),
    /// Close the selected session and reset the chat screens
    ClearSession,
    /// Show case detail over the active view
    SelectCase(CaseId),
    /// Show a modal dialog
    OpenModal(Modal),
    /// Set a status message
    StatusMessage(String),
    /// Switch to the next theme and remember it
    CycleTheme,
}

impl EventResult {
    /// Create a status message result
    pub fn status(msg: impl Into<String>) -> Self {
        Self::StatusMessage(msg.into())
    }
}

/// A keyboard shortcut for display in help and footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Key sequence (e.g., "j/k", "Enter")
    pub key: &'static str,
    /// Brief description (e.g., "Navigate", "Open")
    pub description: &'static str,
    /// Whether this is a primary shortcut (shown in footer)
    pub primary: bool,
}

impl Shortcut {
    #[must_use]
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            primary: false,
        }
    }

    /// Create a primary shortcut (shown in footer)
    #[must_use]
    pub const fn primary(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            primary: true,
        }
    }
}

/// Context provided to screens for accessing shared state
pub struct ViewContext<'a> {
    /// The view this screen is mounted as
    pub view: ViewKind,
    /// Current tick count for animations and timers
    pub tick: u64,
    /// Chat session picked from history, if any
    pub session: Option<&'a SessionData>,
    /// Mutable status message slot
    pub status_message: &'a mut Option<String>,
}

impl ViewContext<'_> {
    /// Set a status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        *self.status_message = Some(msg.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        *self.status_message = None;
    }
}

/// Trait for screen state machines.
///
/// Rendering is handled separately by the `views` module, which reads
/// from screen state. Screens expose their state through fields and
/// getters.
pub trait ViewState: Send {
    /// Handle a key event.
    ///
    /// Screens return `EventResult::Ignored` for unhandled keys so the
    /// global bindings still apply.
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult;

    /// Title shown in the header.
    fn title(&self) -> &str;

    /// Keyboard shortcuts for the footer and help screen.
    fn shortcuts(&self) -> Vec<Shortcut>;

    /// Called when this screen becomes active.
    fn on_enter(&mut self, _ctx: &mut ViewContext) {}

    /// Called when this screen is deactivated.
    fn on_leave(&mut self, _ctx: &mut ViewContext) {}

    /// Called on every tick.
    fn on_tick(&mut self, _ctx: &mut ViewContext) {}

    /// Whether the screen is taking free text, in which case global
    /// single-letter shortcuts are suppressed.
    fn captures_input(&self) -> bool {
        false
    }

    /// Drop screen-local state after the selected session was cleared
    /// or the user signed out.
    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    struct Counter {
        hits: usize,
    }

    impl ViewState for Counter {
        fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
            match key.code {
                KeyCode::Char('+') => {
                    self.hits += 1;
                    ctx.set_status(format!("{} hits", self.hits));
                    EventResult::Consumed
                }
                KeyCode::Enter => EventResult::Navigate(ViewKind::Help),
                _ => EventResult::Ignored,
            }
        }

        fn title(&self) -> &str {
            "Counter"
        }

        fn shortcuts(&self) -> Vec<Shortcut> {
            vec![Shortcut::primary("+", "Count")]
        }
    }

    #[test]
    fn test_view_state_dispatch() {
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Home,
            tick: 0,
            session: None,
            status_message: &mut status,
        };
        let mut view = Counter { hits: 0 };

        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(view.handle_key(plus, &mut ctx), EventResult::Consumed);
        assert_eq!(
            view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx),
            EventResult::Navigate(ViewKind::Help)
        );
        assert_eq!(
            view.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE), &mut ctx),
            EventResult::Ignored
        );
        assert!(!view.captures_input());
        assert_eq!(status.as_deref(), Some("1 hits"));
    }

    #[test]
    fn test_shortcut_constructors() {
        assert!(Shortcut::primary("q", "Quit").primary);
        assert!(!Shortcut::new("?", "Help").primary);
    }
}
