//! Modal dialogs.
//!
//! A modal never decides its own visibility. `App` holds at most one
//! `Modal`; the modal's key handler reports a [`ModalOutcome`] and `App`
//! closes it on both cancel and confirm. Selection state lives inside the
//! modal value, so closing drops it and a reopened dialog starts empty.

use crate::model::fixtures::{NARRATION_MISMATCHES, TRANSLATION_PAGES, onboarding_pages};
use crate::model::{COURTS, Court};
use crate::tui::constants::{JUMP_MIN_SCORE, JUMP_SUGGESTIONS};
use crate::tui::router::ViewKind;
use crate::tui::state::{ListNavigation, ListState};
use crossterm::event::{KeyCode, KeyEvent};
use indexmap::IndexSet;
use std::collections::BTreeSet;

/// Action carried out when a confirmation dialog is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Logout,
    ClearSession,
    DeleteRadar(String),
}

/// What a confirmed modal hands back to `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult {
    Confirm(ConfirmAction),
    /// Court names, in the fixed court-list order
    Courts(Vec<String>),
    OnboardingDone(String),
    /// Follow-up question to put into the cross-examination chat
    AskFollowUp(String),
    /// One-based page numbers, ascending
    TranslatePages(Vec<usize>),
    JumpTo(ViewKind),
}

/// Result of feeding one key to a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    Pending,
    Cancelled,
    Confirmed(ModalResult),
}

/// The single open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Confirmation(ConfirmationDialog),
    CourtSelection(CourtSelectionModal),
    ToolOnboarding(ToolOnboardingModal),
    NarrationMismatch(NarrationMismatchModal),
    SelectiveTranslation(SelectiveTranslationModal),
    ViewJump(ViewJumpModal),
}

impl Modal {
    pub fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match self {
            Self::Confirmation(m) => m.handle_key(key),
            Self::CourtSelection(m) => m.handle_key(key),
            Self::ToolOnboarding(m) => m.handle_key(key),
            Self::NarrationMismatch(m) => m.handle_key(key),
            Self::SelectiveTranslation(m) => m.handle_key(key),
            Self::ViewJump(m) => m.handle_key(key),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Confirmation(m) => &m.title,
            Self::CourtSelection(_) => "Select Courts",
            Self::ToolOnboarding(m) => &m.tool_name,
            Self::NarrationMismatch(_) => "Narration Mismatch",
            Self::SelectiveTranslation(_) => "Select Pages to Translate",
            Self::ViewJump(_) => "Go To",
        }
    }
}

// ============================================================================
// Confirmation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub action: ConfirmAction,
    /// Whether the confirm button has focus (the cancel button otherwise)
    pub confirm_focused: bool,
}

impl ConfirmationDialog {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: &'static str,
        action: ConfirmAction,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label,
            action,
            confirm_focused: true,
        }
    }

    #[must_use]
    pub fn logout() -> Self {
        Self::new(
            "Sign out",
            "You will need to sign in again to continue.",
            "Sign out",
            ConfirmAction::Logout,
        )
    }

    #[must_use]
    pub fn clear_session() -> Self {
        Self::new(
            "Start a new chat",
            "The current conversation will be closed.",
            "New chat",
            ConfirmAction::ClearSession,
        )
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Char('y') => ModalOutcome::Confirmed(ModalResult::Confirm(self.action.clone())),
            KeyCode::Enter if self.confirm_focused => {
                ModalOutcome::Confirmed(ModalResult::Confirm(self.action.clone()))
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => ModalOutcome::Cancelled,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_focused = !self.confirm_focused;
                ModalOutcome::Pending
            }
            _ => ModalOutcome::Pending,
        }
    }
}

// ============================================================================
// Court selection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtSelectionModal {
    pub query: String,
    /// Selected court ids, in the order they were picked
    pub selected: IndexSet<&'static str>,
    pub list: ListState,
}

impl CourtSelectionModal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: ListState::with_total(COURTS.len()),
            ..Self::default()
        }
    }

    /// Courts whose name contains the search query, case-insensitively.
    #[must_use]
    pub fn filtered(&self) -> Vec<&'static Court> {
        let needle = self.query.to_lowercase();
        COURTS
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, court: &Court) -> bool {
        self.selected.contains(court.id)
    }

    fn toggle_current(&mut self) {
        if let Some(court) = self.filtered().get(self.list.selected).copied()
            && !self.selected.shift_remove(court.id)
        {
            self.selected.insert(court.id);
        }
    }

    fn refilter(&mut self) {
        self.list.set_total(self.filtered().len());
        self.list.clamp_selection();
    }

    /// Selected court names in the fixed court-list order.
    #[must_use]
    pub fn selected_names(&self) -> Vec<String> {
        COURTS
            .iter()
            .filter(|c| self.selected.contains(c.id))
            .map(|c| c.name.to_string())
            .collect()
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Esc => return ModalOutcome::Cancelled,
            KeyCode::Enter => {
                return ModalOutcome::Confirmed(ModalResult::Courts(self.selected_names()));
            }
            KeyCode::Down => self.list.select_next(),
            KeyCode::Up => self.list.select_prev(),
            // Space searches once a query is being typed
            KeyCode::Tab => self.toggle_current(),
            KeyCode::Char(' ') if self.query.is_empty() => self.toggle_current(),
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            _ => {}
        }
        ModalOutcome::Pending
    }
}

// ============================================================================
// Tool onboarding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOnboardingModal {
    pub tool_name: String,
    pub pages: &'static [&'static str],
    pub page: usize,
}

impl ToolOnboardingModal {
    pub fn new(tool_name: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        let pages = onboarding_pages(&tool_name);
        Self {
            tool_name,
            pages,
            page: 0,
        }
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.pages.len()
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Esc => ModalOutcome::Cancelled,
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if self.is_last_page() {
                    ModalOutcome::Confirmed(ModalResult::OnboardingDone(self.tool_name.clone()))
                } else {
                    self.page += 1;
                    ModalOutcome::Pending
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.page = self.page.saturating_sub(1);
                ModalOutcome::Pending
            }
            _ => ModalOutcome::Pending,
        }
    }
}

// ============================================================================
// Narration mismatch
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationMismatchModal {
    pub mismatches: &'static [(&'static str, &'static str)],
    pub list: ListState,
}

impl Default for NarrationMismatchModal {
    fn default() -> Self {
        Self {
            mismatches: NARRATION_MISMATCHES,
            list: ListState::with_total(NARRATION_MISMATCHES.len()),
        }
    }
}

impl NarrationMismatchModal {
    fn follow_up(&self) -> Option<String> {
        self.mismatches
            .get(self.list.selected)
            .map(|(narration, statement)| {
                format!("How do we reconcile \"{narration}\" with \"{statement}\"?")
            })
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Esc => ModalOutcome::Cancelled,
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.select_next();
                ModalOutcome::Pending
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select_prev();
                ModalOutcome::Pending
            }
            KeyCode::Enter => self
                .follow_up()
                .map_or(ModalOutcome::Cancelled, |q| {
                    ModalOutcome::Confirmed(ModalResult::AskFollowUp(q))
                }),
            _ => ModalOutcome::Pending,
        }
    }
}

// ============================================================================
// Selective translation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectiveTranslationModal {
    pub pages: &'static [&'static str],
    /// Zero-based indices of the chosen pages
    pub selected: BTreeSet<usize>,
    pub list: ListState,
    /// Shown when confirming with nothing selected
    pub warning: Option<&'static str>,
}

impl Default for SelectiveTranslationModal {
    fn default() -> Self {
        Self {
            pages: TRANSLATION_PAGES,
            selected: BTreeSet::new(),
            list: ListState::with_total(TRANSLATION_PAGES.len()),
            warning: None,
        }
    }
}

impl SelectiveTranslationModal {
    fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Esc => return ModalOutcome::Cancelled,
            KeyCode::Enter => {
                if self.selected.is_empty() {
                    self.warning = Some("Select at least one page");
                    return ModalOutcome::Pending;
                }
                let pages = self.selected.iter().map(|i| i + 1).collect();
                return ModalOutcome::Confirmed(ModalResult::TranslatePages(pages));
            }
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Char(' ') => self.toggle(self.list.selected),
            KeyCode::Char('a') => {
                if self.selected.len() == self.pages.len() {
                    self.selected.clear();
                } else {
                    self.selected = (0..self.pages.len()).collect();
                }
            }
            _ => return ModalOutcome::Pending,
        }
        self.warning = None;
        ModalOutcome::Pending
    }
}

// ============================================================================
// View jump palette
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewJumpModal {
    pub query: String,
    pub list: ListState,
}

impl ViewJumpModal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            list: ListState::with_total(ViewKind::ALL.len()),
        }
    }

    /// Views ranked by fuzzy similarity of their title or key to the query.
    #[must_use]
    pub fn matches(&self) -> Vec<ViewKind> {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return ViewKind::ALL.to_vec();
        }

        let mut scored: Vec<(f64, ViewKind)> = ViewKind::ALL
            .into_iter()
            .map(|view| (jump_score(&query, view), view))
            .filter(|(score, _)| *score >= JUMP_MIN_SCORE)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(JUMP_SUGGESTIONS)
            .map(|(_, view)| view)
            .collect()
    }

    fn refilter(&mut self) {
        self.list.set_total(self.matches().len());
        self.list.clamp_selection();
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        match key.code {
            KeyCode::Esc => return ModalOutcome::Cancelled,
            KeyCode::Enter => {
                return self
                    .matches()
                    .get(self.list.selected)
                    .map_or(ModalOutcome::Pending, |view| {
                        ModalOutcome::Confirmed(ModalResult::JumpTo(*view))
                    });
            }
            KeyCode::Down => self.list.select_next(),
            KeyCode::Up => self.list.select_prev(),
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            _ => {}
        }
        ModalOutcome::Pending
    }
}

/// Similarity of a lowercase query to a view. Prefix hits on the title
/// or key rank above anything fuzzy.
fn jump_score(query: &str, view: ViewKind) -> f64 {
    let title = view.title().to_lowercase();
    if title.starts_with(query) || view.key().starts_with(query) {
        return 1.0 + strsim::jaro_winkler(query, &title);
    }
    let by_title = strsim::jaro_winkler(query, &title);
    let by_key = strsim::jaro_winkler(query, view.key());
    let by_word = title
        .split_whitespace()
        .map(|word| strsim::jaro_winkler(query, word))
        .fold(0.0, f64::max);
    by_title.max(by_key).max(by_word)
}
