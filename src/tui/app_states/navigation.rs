//! Navigation state: which view is shown, what it was before, and the
//! session and case currently selected.

use crate::model::{CaseId, SessionData};
use crate::tui::router::{ViewKind, tool_view};
use std::collections::VecDeque;

/// One-shot commands emitted by navigation for the rest of the app.
///
/// Queued when raised and drained by `App` once per handled event, so each
/// command is observed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// The selected session was cleared; screens drop their local state.
    ResetViews,
}

/// Active/previous view, selection context and sign-in flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_view: ViewKind,
    previous_view: ViewKind,
    selected_session: Option<SessionData>,
    selected_case: Option<CaseId>,
    authenticated: bool,
    commands: VecDeque<NavCommand>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ViewKind::DEFAULT)
    }
}

impl NavigationState {
    #[must_use]
    pub const fn new(start: ViewKind) -> Self {
        Self {
            active_view: start,
            previous_view: start,
            selected_session: None,
            selected_case: None,
            authenticated: true,
            commands: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn active_view(&self) -> ViewKind {
        self.active_view
    }

    #[must_use]
    pub const fn previous_view(&self) -> ViewKind {
        self.previous_view
    }

    #[must_use]
    pub const fn selected_session(&self) -> Option<&SessionData> {
        self.selected_session.as_ref()
    }

    #[must_use]
    pub const fn selected_case(&self) -> Option<CaseId> {
        self.selected_case
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Record the current view as previous and switch to `view`.
    pub fn navigate(&mut self, view: ViewKind) {
        tracing::debug!(from = %self.active_view, to = %view, "navigate");
        self.previous_view = self.active_view;
        self.active_view = view;
    }

    /// Return to the previous view, or the default view when the previous
    /// one is the view already shown.
    pub fn back_to_main(&mut self) {
        let target = if self.previous_view == self.active_view {
            ViewKind::DEFAULT
        } else {
            self.previous_view
        };
        self.navigate(target);
    }

    /// Store the session and switch to the view hosting its tool.
    pub fn select_session(
        &mut self,
        id: impl Into<String>,
        tool_name: impl Into<String>,
        title: impl Into<String>,
    ) -> ViewKind {
        let session = SessionData::new(id, tool_name, title);
        let view = tool_view(&session.tool_name);
        tracing::debug!(session = %session.id, tool = %session.tool_name, %view, "select session");
        self.selected_session = Some(session);
        self.navigate(view);
        view
    }

    /// Clear the selected session and queue a one-shot reset for the screens.
    pub fn clear_session(&mut self) {
        self.selected_session = None;
        self.commands.push_back(NavCommand::ResetViews);
    }

    pub const fn select_case(&mut self, id: CaseId) {
        self.selected_case = Some(id);
    }

    pub const fn clear_case(&mut self) {
        self.selected_case = None;
    }

    /// Sign out: drop all selection context and return to the default view.
    pub fn logout(&mut self) {
        self.selected_session = None;
        self.selected_case = None;
        self.authenticated = false;
        self.active_view = ViewKind::DEFAULT;
        self.previous_view = ViewKind::DEFAULT;
    }

    pub const fn login(&mut self) {
        self.authenticated = true;
    }

    /// Take every queued command, oldest first.
    pub fn drain_commands(&mut self) -> impl Iterator<Item = NavCommand> + '_ {
        self.commands.drain(..)
    }

    #[must_use]
    pub fn has_pending_commands(&self) -> bool {
        !self.commands.is_empty()
    }
}
