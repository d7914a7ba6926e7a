//! Navigation, command dispatch and modal results for App.

use super::app::App;
use super::app_states::{ConfirmAction, Modal, ModalOutcome, ModalResult, NavCommand, ToolOnboardingModal};
use super::router::ViewKind;
use super::theme::toggle_theme;
use super::traits::EventResult;
use crate::config::TuiPreferences;
use crate::model::{CaseId, SessionData};
use crossterm::event::KeyEvent;

impl App {
    /// Switch to `view`, running the leave/enter hooks when the view
    /// changes. The first visit to a tool chat shows its onboarding.
    pub fn navigate(&mut self, view: ViewKind) {
        let from = self.active_view();
        tracing::debug!(%from, to = %view, "navigate");
        if from != view {
            self.with_view(from, |state, ctx| state.on_leave(ctx));
        }
        self.nav.clear_case();
        self.nav.navigate(view);
        if from != view {
            self.enter_view(view);
        }
    }

    fn enter_view(&mut self, view: ViewKind) {
        self.with_view(view, |state, ctx| state.on_enter(ctx));
        if let Some(tool) = view.tool_name()
            && view.is_chat()
            && self.show_onboarding
            && self.modal.is_none()
            && self.onboarding_seen.insert(view)
        {
            self.open_modal(Modal::ToolOnboarding(ToolOnboardingModal::new(tool)));
        }
    }

    /// Go back to the previous view, or home when there is none.
    pub fn back_to_main(&mut self) {
        let target = if self.previous_view() == self.active_view() {
            ViewKind::DEFAULT
        } else {
            self.previous_view()
        };
        self.navigate(target);
    }

    /// Open a stored session in the view hosting its tool.
    pub fn select_session(&mut self, session: SessionData) {
        let from = self.active_view();
        if from != super::router::tool_view(&session.tool_name) {
            self.with_view(from, |state, ctx| state.on_leave(ctx));
        }
        self.nav.clear_case();
        let SessionData { id, tool_name, title } = session;
        let view = self.nav.select_session(id, tool_name, title);
        // A session opened from the view already shown still loads.
        self.enter_view(view);
    }

    /// Close the current session; every chat screen resets once.
    pub fn clear_session(&mut self) {
        self.nav.clear_session();
        self.process_nav_commands();
    }

    pub fn select_case(&mut self, id: CaseId) {
        tracing::debug!(case = id, "select case");
        self.nav.select_case(id);
    }

    pub fn clear_case(&mut self) {
        self.nav.clear_case();
    }

    /// Run the case analysis for the case shown in case detail.
    pub fn analyze_selected_case(&mut self) {
        if let Some(id) = self.selected_case() {
            self.screens.analysis.case = Some(id);
            if self.active_view() == ViewKind::CaseAnalysis {
                self.nav.clear_case();
                self.screens.analysis.progress.start();
            } else {
                self.navigate(ViewKind::CaseAnalysis);
            }
        }
    }

    /// Sign out: leave the active view, drop every chat and return home.
    pub fn logout(&mut self) {
        let from = self.active_view();
        self.with_view(from, |state, ctx| state.on_leave(ctx));
        self.close_modal();
        self.reset_views();
        self.nav.logout();
        tracing::info!("signed out");
    }

    /// Mock sign-in: no credentials are checked.
    pub fn login(&mut self) {
        self.nav.login();
        tracing::info!("signed in");
        if self.start_view != self.active_view() {
            self.navigate(self.start_view);
        } else {
            self.enter_view(self.start_view);
        }
    }

    /// Next view in sidebar order, wrapping.
    pub fn next_view(&mut self) {
        let index = ViewKind::ALL
            .iter()
            .position(|v| *v == self.active_view())
            .unwrap_or(0);
        self.navigate(ViewKind::ALL[(index + 1) % ViewKind::ALL.len()]);
    }

    /// Previous view in sidebar order, wrapping.
    pub fn prev_view(&mut self) {
        let len = ViewKind::ALL.len();
        let index = ViewKind::ALL
            .iter()
            .position(|v| *v == self.active_view())
            .unwrap_or(0);
        self.navigate(ViewKind::ALL[(index + len - 1) % len]);
    }

    /// Cycle the theme and remember it for the next run when a
    /// preferences file is set.
    pub fn cycle_theme(&mut self) {
        let name = toggle_theme();
        if let Some(path) = &self.preferences_path {
            let prefs = TuiPreferences {
                theme: name.to_string(),
            };
            if let Err(e) = prefs.save_to(path) {
                tracing::warn!(error = %e, "could not save preferences");
            }
        }
        self.set_status_message(format!("Theme: {name}"));
    }

    /// Apply queued navigation commands exactly once.
    pub fn process_nav_commands(&mut self) {
        let commands: Vec<NavCommand> = self.nav.drain_commands().collect();
        for command in commands {
            match command {
                NavCommand::ResetViews => {
                    tracing::debug!("reset views");
                    self.reset_views();
                }
            }
        }
    }

    fn reset_views(&mut self) {
        for view in ViewKind::ALL {
            self.screens.view_mut(view).reset();
        }
    }

    /// Act on what a view's key handler asked for.
    pub fn handle_event_result(&mut self, result: EventResult) {
        match result {
            EventResult::Consumed | EventResult::Ignored => {}
            EventResult::Navigate(view) => self.navigate(view),
            EventResult::SelectSession(session) => self.select_session(session),
            EventResult::ClearSession => self.clear_session(),
            EventResult::SelectCase(id) => self.select_case(id),
            EventResult::OpenModal(modal) => self.open_modal(modal),
            EventResult::StatusMessage(msg) => self.set_status_message(msg),
            EventResult::CycleTheme => self.cycle_theme(),
        }
        self.process_nav_commands();
    }

    /// Route a key to the open modal. Cancel and confirm both close it.
    pub fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match modal.handle_key(key) {
            ModalOutcome::Pending => {}
            ModalOutcome::Cancelled => self.close_modal(),
            ModalOutcome::Confirmed(result) => {
                self.close_modal();
                self.apply_modal_result(result);
            }
        }
        self.process_nav_commands();
    }

    fn apply_modal_result(&mut self, result: ModalResult) {
        match result {
            ModalResult::Confirm(ConfirmAction::Logout) => self.logout(),
            ModalResult::Confirm(ConfirmAction::ClearSession) => {
                self.clear_session();
                self.set_status_message("Session closed");
            }
            ModalResult::Confirm(ConfirmAction::DeleteRadar(id)) => {
                match self.screens.radar.delete(&id) {
                    Ok(_) => self.set_status_message("Radar deleted"),
                    Err(e) => self.set_status_message(e.to_string()),
                }
            }
            ModalResult::Courts(courts) => {
                let count = courts.len();
                match self.screens.radar.apply_courts(courts) {
                    Ok(()) => self.set_status_message(format!("{count} court(s) selected")),
                    Err(e) => self.set_status_message(e.to_string()),
                }
            }
            ModalResult::OnboardingDone(tool) => {
                tracing::debug!(%tool, "onboarding finished");
            }
            ModalResult::AskFollowUp(question) => {
                self.screens.cross_examination.send(&question);
            }
            ModalResult::TranslatePages(pages) => {
                self.screens.translation.request_pages(&pages);
            }
            ModalResult::JumpTo(view) => self.navigate(view),
        }
    }

    /// Advance timers: the tick counter and the active view.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.is_authenticated() {
            let view = self.active_view();
            self.with_view(view, |state, ctx| state.on_tick(ctx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.session.show_onboarding = false;
        App::new(&config)
    }

    #[test]
    fn test_navigate_and_back() {
        let mut app = app();
        app.navigate(ViewKind::History);
        app.navigate(ViewKind::Settings);
        app.back_to_main();
        assert_eq!(app.active_view(), ViewKind::History);
    }

    #[test]
    fn test_back_to_same_view_goes_home() {
        let mut app = app();
        app.navigate(ViewKind::Help);
        app.navigate(ViewKind::Help);
        app.back_to_main();
        assert_eq!(app.active_view(), ViewKind::Home);
    }

    #[test]
    fn test_onboarding_once_per_tool() {
        let mut app = App::new(&AppConfig::default());
        app.navigate(ViewKind::Drafting);
        assert!(matches!(app.modal(), Some(Modal::ToolOnboarding(_))));
        app.close_modal();
        app.navigate(ViewKind::Home);
        app.navigate(ViewKind::Drafting);
        assert!(app.modal().is_none());
    }

    #[test]
    fn test_clear_session_resets_chats_once() {
        let mut app = app();
        app.select_session(SessionData::new("s-102", "Drafting", "Notice"));
        assert_eq!(app.active_view(), ViewKind::Drafting);
        assert_eq!(app.screens.drafting.messages.len(), 2);

        app.clear_session();
        assert!(app.selected_session().is_none());
        assert!(app.screens.drafting.messages.is_empty());
        assert!(!app.nav.has_pending_commands());
    }

    #[test]
    fn test_next_view_wraps() {
        let mut app = app();
        app.navigate(ViewKind::Help);
        app.next_view();
        assert_eq!(app.active_view(), ViewKind::Home);
        app.prev_view();
        assert_eq!(app.active_view(), ViewKind::Help);
    }

    #[test]
    fn test_logout_then_login() {
        let mut app = app();
        app.navigate(ViewKind::MyCases);
        app.select_case("c-1");
        app.logout();
        assert!(!app.is_authenticated());
        assert_eq!(app.active_view(), ViewKind::Home);
        assert!(app.selected_case().is_none());
        app.login();
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_analyze_selected_case() {
        let mut app = app();
        app.navigate(ViewKind::MyCases);
        app.select_case("c-2");
        app.analyze_selected_case();
        assert_eq!(app.active_view(), ViewKind::CaseAnalysis);
        assert!(app.selected_case().is_none());
        assert_eq!(app.analysis().case, Some("c-2"));
        assert!(app.analysis().progress.is_running());
    }
}
