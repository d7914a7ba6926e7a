//! List-backed screens: home, history, my cases and the static catalogs.

use super::modals::{ConfirmationDialog, Modal};
use crate::model::fixtures::{CASES, CHAT_SESSIONS, DOCUMENTS, NOTIFICATIONS, TOOLS};
use crate::model::{CaseSummary, SessionData};
use crate::tui::router::{ViewKind, tool_view};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::theme::GLOBAL_SHORTCUTS;
use crate::tui::traits::{EventResult, Shortcut, ViewContext, ViewState};
use crossterm::event::{KeyCode, KeyEvent};

/// Shared j/k, arrow and paging keys. Returns false for any other key.
fn navigate_list(list: &mut ListState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => list.select_prev(),
        KeyCode::PageDown => list.page_down(),
        KeyCode::PageUp => list.page_up(),
        KeyCode::Home => list.go_first(),
        KeyCode::End | KeyCode::Char('G') => list.go_last(),
        _ => return false,
    }
    true
}

// ============================================================================
// Home
// ============================================================================

/// Dashboard home: the tool launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub list: ListState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(TOOLS.len()),
        }
    }
}

impl HomeState {
    #[must_use]
    pub fn selected_tool(&self) -> Option<(&'static str, &'static str)> {
        TOOLS.get(self.list.selected).copied()
    }
}

impl ViewState for HomeState {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut ViewContext) -> EventResult {
        if navigate_list(&mut self.list, key) {
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter => self
                .selected_tool()
                .map_or(EventResult::Ignored, |(name, _)| {
                    EventResult::Navigate(tool_view(name))
                }),
            _ => EventResult::Ignored,
        }
    }

    fn title(&self) -> &str {
        "Home"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::primary("j/k", "select"),
            Shortcut::primary("Enter", "open tool"),
        ]
    }
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub list: ListState,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(CHAT_SESSIONS.len()),
        }
    }
}

impl HistoryState {
    #[must_use]
    pub fn selected_session(&self) -> Option<SessionData> {
        CHAT_SESSIONS.get(self.list.selected).map(|f| f.session())
    }
}

impl ViewState for HistoryState {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        if navigate_list(&mut self.list, key) {
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter => self
                .selected_session()
                .map_or(EventResult::Ignored, EventResult::SelectSession),
            KeyCode::Char('x') if ctx.session.is_some() => {
                EventResult::OpenModal(Modal::Confirmation(ConfirmationDialog::clear_session()))
            }
            KeyCode::Char('x') => EventResult::status("No session is open"),
            _ => EventResult::Ignored,
        }
    }

    fn title(&self) -> &str {
        "History"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::primary("Enter", "open session"),
            Shortcut::primary("x", "close session"),
        ]
    }
}

// ============================================================================
// My cases
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasesState {
    pub list: ListState,
}

impl Default for CasesState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(CASES.len()),
        }
    }
}

impl CasesState {
    #[must_use]
    pub fn selected_case(&self) -> Option<&'static CaseSummary> {
        CASES.get(self.list.selected)
    }
}

impl ViewState for CasesState {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut ViewContext) -> EventResult {
        if navigate_list(&mut self.list, key) {
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter => self
                .selected_case()
                .map_or(EventResult::Ignored, |c| EventResult::SelectCase(c.id)),
            _ => EventResult::Ignored,
        }
    }

    fn title(&self) -> &str {
        "My Cases"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::primary("j/k", "select"),
            Shortcut::primary("Enter", "open case"),
        ]
    }
}

// ============================================================================
// Static catalogs
// ============================================================================

/// One row of a catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub detail: String,
    /// Short tag shown before the title
    pub tag: String,
    /// View opened by Enter
    pub target: Option<ViewKind>,
    /// Read notification, or the current subscription plan
    pub marked: bool,
}

impl CatalogEntry {
    fn new(tag: &str, title: &str, detail: &str) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            tag: tag.to_string(),
            target: None,
            marked: false,
        }
    }

    fn opens(mut self, view: ViewKind) -> Self {
        self.target = Some(view);
        self
    }
}

const PLANS: &[(&str, &str)] = &[
    ("Free", "20 research queries a month, single user"),
    ("Professional", "Unlimited chats, 5 precedent radars, translation up to 200 pages"),
    ("Chambers", "Everything in Professional for up to 10 seats, shared case library"),
];

/// Documents, notifications, tools, subscription and help share one
/// read-mostly list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pub view: ViewKind,
    pub entries: Vec<CatalogEntry>,
    pub list: ListState,
}

impl CatalogState {
    #[must_use]
    pub fn for_view(view: ViewKind) -> Self {
        let entries: Vec<CatalogEntry> = match view {
            ViewKind::Documents => DOCUMENTS
                .iter()
                .map(|(name, tool, size)| {
                    CatalogEntry::new(tool, name, size).opens(tool_view(tool))
                })
                .collect(),
            ViewKind::Notifications => NOTIFICATIONS
                .iter()
                .map(|(kind, text)| CatalogEntry::new(kind, text, ""))
                .collect(),
            ViewKind::Tools => TOOLS
                .iter()
                .map(|(name, about)| CatalogEntry::new("tool", name, about).opens(tool_view(name)))
                .collect(),
            ViewKind::Subscription => PLANS
                .iter()
                .enumerate()
                .map(|(i, (plan, about))| {
                    let mut entry = CatalogEntry::new("plan", plan, about);
                    entry.marked = i == 0;
                    entry
                })
                .collect(),
            _ => help_entries(),
        };
        Self {
            view,
            list: ListState::with_total(entries.len()),
            entries,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.entries.get(self.list.selected)
    }

    #[must_use]
    pub fn unread(&self) -> usize {
        if self.view == ViewKind::Notifications {
            self.entries.iter().filter(|e| !e.marked).count()
        } else {
            0
        }
    }

    fn activate(&mut self, ctx: &mut ViewContext) -> EventResult {
        let index = self.list.selected;
        let Some(entry) = self.entries.get(index) else {
            return EventResult::Ignored;
        };
        if let Some(view) = entry.target {
            return EventResult::Navigate(view);
        }
        match self.view {
            ViewKind::Notifications => {
                self.entries[index].marked = true;
                EventResult::Consumed
            }
            ViewKind::Subscription => {
                let plan = entry.title.clone();
                for (i, e) in self.entries.iter_mut().enumerate() {
                    e.marked = i == index;
                }
                ctx.set_status(format!("Switched to the {plan} plan"));
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

fn help_entries() -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = GLOBAL_SHORTCUTS
        .iter()
        .map(|s| CatalogEntry::new("key", s.key, s.description))
        .collect();
    entries.extend(
        [
            ("Shift-Tab", "previous view"),
            ("Esc / b", "back"),
            ("T", "cycle theme"),
            ("L", "sign out"),
            ("Ctrl-C", "quit immediately"),
        ]
        .iter()
        .map(|(key, what)| CatalogEntry::new("key", key, what)),
    );
    entries
}

impl ViewState for CatalogState {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        if navigate_list(&mut self.list, key) {
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Enter => self.activate(ctx),
            KeyCode::Char('r') if self.view == ViewKind::Notifications => {
                for entry in &mut self.entries {
                    entry.marked = true;
                }
                ctx.set_status("All notifications marked as read");
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn title(&self) -> &str {
        self.view.title()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        let mut shortcuts = vec![Shortcut::primary("j/k", "select")];
        match self.view {
            ViewKind::Documents | ViewKind::Tools => {
                shortcuts.push(Shortcut::primary("Enter", "open"));
            }
            ViewKind::Notifications => {
                shortcuts.push(Shortcut::primary("Enter", "mark read"));
                shortcuts.push(Shortcut::primary("r", "mark all read"));
            }
            ViewKind::Subscription => shortcuts.push(Shortcut::primary("Enter", "choose plan")),
            _ => {}
        }
        shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with_ctx<R>(session: Option<&SessionData>, f: impl FnOnce(&mut ViewContext) -> R) -> R {
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Home,
            tick: 0,
            session,
            status_message: &mut status,
        };
        f(&mut ctx)
    }

    #[test]
    fn test_home_opens_selected_tool() {
        let mut home = HomeState::default();
        with_ctx(None, |ctx| {
            home.handle_key(key(KeyCode::Down), ctx);
            assert_eq!(
                home.handle_key(key(KeyCode::Enter), ctx),
                EventResult::Navigate(ViewKind::Drafting)
            );
            home.handle_key(key(KeyCode::End), ctx);
            assert_eq!(
                home.handle_key(key(KeyCode::Enter), ctx),
                EventResult::Navigate(ViewKind::CaseAnalysis)
            );
        });
    }

    #[test]
    fn test_history_selects_session() {
        let mut history = HistoryState::default();
        let result = with_ctx(None, |ctx| history.handle_key(key(KeyCode::Enter), ctx));
        match result {
            EventResult::SelectSession(session) => {
                assert_eq!(session.id, "s-101");
                assert_eq!(session.tool_name, "Legal Research");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_history_clear_requires_open_session() {
        let mut history = HistoryState::default();
        let result = with_ctx(None, |ctx| history.handle_key(key(KeyCode::Char('x')), ctx));
        assert!(matches!(result, EventResult::StatusMessage(_)));

        let session = SessionData::new("s-102", "Drafting", "Notice");
        let result = with_ctx(Some(&session), |ctx| {
            history.handle_key(key(KeyCode::Char('x')), ctx)
        });
        assert!(matches!(
            result,
            EventResult::OpenModal(Modal::Confirmation(_))
        ));
    }

    #[test]
    fn test_cases_select() {
        let mut cases = CasesState::default();
        let result = with_ctx(None, |ctx| {
            cases.handle_key(key(KeyCode::Char('j')), ctx);
            cases.handle_key(key(KeyCode::Enter), ctx)
        });
        assert_eq!(result, EventResult::SelectCase("c-2"));
    }

    #[test]
    fn test_documents_open_their_tool() {
        let mut docs = CatalogState::for_view(ViewKind::Documents);
        let result = with_ctx(None, |ctx| docs.handle_key(key(KeyCode::Enter), ctx));
        assert_eq!(result, EventResult::Navigate(ViewKind::Translation));
    }

    #[test]
    fn test_notifications_mark_read() {
        let mut notes = CatalogState::for_view(ViewKind::Notifications);
        assert_eq!(notes.unread(), NOTIFICATIONS.len());
        with_ctx(None, |ctx| {
            notes.handle_key(key(KeyCode::Enter), ctx);
        });
        assert_eq!(notes.unread(), NOTIFICATIONS.len() - 1);
        with_ctx(None, |ctx| {
            notes.handle_key(key(KeyCode::Char('r')), ctx);
        });
        assert_eq!(notes.unread(), 0);
    }

    #[test]
    fn test_subscription_single_current_plan() {
        let mut plans = CatalogState::for_view(ViewKind::Subscription);
        with_ctx(None, |ctx| {
            plans.handle_key(key(KeyCode::Char('j')), ctx);
            plans.handle_key(key(KeyCode::Enter), ctx);
        });
        let marked: Vec<_> = plans.entries.iter().filter(|e| e.marked).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].title, "Professional");
    }

    #[test]
    fn test_help_lists_global_keys() {
        let help = CatalogState::for_view(ViewKind::Help);
        assert!(help.entries.len() > GLOBAL_SHORTCUTS.len());
        assert_eq!(help.title(), "Help");
    }
}
