//! Application state for the TUI.

use super::app_states::{
    AnalysisScreen, CasesState, CatalogState, ChatState, HistoryState, HomeState, Modal,
    NavigationState, ProfileState, RadarScreen, SettingsState,
};
use super::router::ViewKind;
use super::traits::{ViewContext, ViewState};
use crate::config::AppConfig;
use crate::model::fixtures::sample_radars;
use crate::model::{CaseId, SessionData};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Per-view UI state container.
///
/// One state machine per screen; the five catalog screens share a type.
/// Access via `app.screens.radar`, etc.
pub struct Screens {
    pub(crate) home: HomeState,
    pub(crate) research: ChatState,
    pub(crate) drafting: ChatState,
    pub(crate) translation: ChatState,
    pub(crate) cross_examination: ChatState,
    pub(crate) radar: RadarScreen,
    pub(crate) analysis: AnalysisScreen,
    pub(crate) cases: CasesState,
    pub(crate) history: HistoryState,
    pub(crate) documents: CatalogState,
    pub(crate) notifications: CatalogState,
    pub(crate) tools: CatalogState,
    pub(crate) profile: ProfileState,
    pub(crate) settings: SettingsState,
    pub(crate) subscription: CatalogState,
    pub(crate) help: CatalogState,
}

impl Screens {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            home: HomeState::default(),
            research: ChatState::new(ViewKind::LegalResearch),
            drafting: ChatState::new(ViewKind::Drafting),
            translation: ChatState::new(ViewKind::Translation),
            cross_examination: ChatState::new(ViewKind::CrossExamination),
            radar: RadarScreen::new(sample_radars()),
            analysis: AnalysisScreen::new(config.analysis_step_ticks()),
            cases: CasesState::default(),
            history: HistoryState::default(),
            documents: CatalogState::for_view(ViewKind::Documents),
            notifications: CatalogState::for_view(ViewKind::Notifications),
            tools: CatalogState::for_view(ViewKind::Tools),
            profile: ProfileState::new(&config.user),
            settings: SettingsState::default(),
            subscription: CatalogState::for_view(ViewKind::Subscription),
            help: CatalogState::for_view(ViewKind::Help),
        }
    }

    /// State machine behind a view.
    pub fn view_mut(&mut self, view: ViewKind) -> &mut dyn ViewState {
        match view {
            ViewKind::Home => &mut self.home,
            ViewKind::LegalResearch => &mut self.research,
            ViewKind::Drafting => &mut self.drafting,
            ViewKind::Translation => &mut self.translation,
            ViewKind::CrossExamination => &mut self.cross_examination,
            ViewKind::PrecedentRadar => &mut self.radar,
            ViewKind::CaseAnalysis => &mut self.analysis,
            ViewKind::MyCases => &mut self.cases,
            ViewKind::History => &mut self.history,
            ViewKind::Documents => &mut self.documents,
            ViewKind::Notifications => &mut self.notifications,
            ViewKind::Tools => &mut self.tools,
            ViewKind::Profile => &mut self.profile,
            ViewKind::Settings => &mut self.settings,
            ViewKind::Subscription => &mut self.subscription,
            ViewKind::Help => &mut self.help,
        }
    }

    #[must_use]
    pub fn view(&self, view: ViewKind) -> &dyn ViewState {
        match view {
            ViewKind::Home => &self.home,
            ViewKind::LegalResearch => &self.research,
            ViewKind::Drafting => &self.drafting,
            ViewKind::Translation => &self.translation,
            ViewKind::CrossExamination => &self.cross_examination,
            ViewKind::PrecedentRadar => &self.radar,
            ViewKind::CaseAnalysis => &self.analysis,
            ViewKind::MyCases => &self.cases,
            ViewKind::History => &self.history,
            ViewKind::Profile => &self.profile,
            ViewKind::Settings => &self.settings,
            ViewKind::Documents
            | ViewKind::Notifications
            | ViewKind::Tools
            | ViewKind::Subscription
            | ViewKind::Help => self.catalog(view),
        }
    }

    /// Catalog state for one of the static list screens. Other views get
    /// the help catalog.
    #[must_use]
    pub fn catalog(&self, view: ViewKind) -> &CatalogState {
        match view {
            ViewKind::Documents => &self.documents,
            ViewKind::Notifications => &self.notifications,
            ViewKind::Tools => &self.tools,
            ViewKind::Subscription => &self.subscription,
            _ => &self.help,
        }
    }

    #[must_use]
    pub const fn chat(&self, view: ViewKind) -> Option<&ChatState> {
        match view {
            ViewKind::LegalResearch => Some(&self.research),
            ViewKind::Drafting => Some(&self.drafting),
            ViewKind::Translation => Some(&self.translation),
            ViewKind::CrossExamination => Some(&self.cross_examination),
            _ => None,
        }
    }
}

/// Main application state
pub struct App {
    /// Active/previous view, selection context and sign-in
    pub(crate) nav: NavigationState,
    /// Per-view UI state
    pub(crate) screens: Screens,
    /// The single open modal, if any
    pub(crate) modal: Option<Modal>,
    /// Status message shown until the next key press
    pub(crate) status_message: Option<String>,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Animation tick counter
    pub(crate) tick: u64,
    /// View shown after signing in
    pub(crate) start_view: ViewKind,
    /// Tool views whose onboarding was shown this run
    pub(crate) onboarding_seen: HashSet<ViewKind>,
    pub(crate) show_onboarding: bool,
    /// Where theme changes are saved; `None` keeps them in memory
    pub(crate) preferences_path: Option<PathBuf>,
}

impl App {
    /// Build the app from configuration. Unknown start views fall back to
    /// the default view.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let start_view = ViewKind::from_key(&config.session.start_view);
        let mut nav = NavigationState::new(start_view);
        if !config.session.auto_sign_in {
            nav.logout();
        }
        Self {
            nav,
            screens: Screens::new(config),
            modal: None,
            status_message: None,
            should_quit: false,
            tick: 0,
            start_view,
            onboarding_seen: HashSet::new(),
            show_onboarding: config.session.show_onboarding,
            preferences_path: None,
        }
    }

    /// Remember theme changes in the preferences file at `path`.
    #[must_use]
    pub fn with_preferences_path(mut self, path: Option<PathBuf>) -> Self {
        self.preferences_path = path;
        self
    }

    #[must_use]
    pub fn preferences_path(&self) -> Option<&Path> {
        self.preferences_path.as_deref()
    }

    #[must_use]
    pub const fn active_view(&self) -> ViewKind {
        self.nav.active_view()
    }

    #[must_use]
    pub const fn previous_view(&self) -> ViewKind {
        self.nav.previous_view()
    }

    #[must_use]
    pub const fn selected_session(&self) -> Option<&SessionData> {
        self.nav.selected_session()
    }

    #[must_use]
    pub const fn selected_case(&self) -> Option<CaseId> {
        self.nav.selected_case()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.nav.is_authenticated()
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub const fn screens(&self) -> &Screens {
        &self.screens
    }

    #[must_use]
    pub const fn radar(&self) -> &RadarScreen {
        &self.screens.radar
    }

    #[must_use]
    pub const fn chat(&self, view: ViewKind) -> Option<&ChatState> {
        self.screens.chat(view)
    }

    #[must_use]
    pub const fn analysis(&self) -> &AnalysisScreen {
        &self.screens.analysis
    }

    /// Whether the active view is consuming typed characters.
    #[must_use]
    pub fn captures_input(&self) -> bool {
        self.nav.selected_case().is_none() && self.screens.view(self.active_view()).captures_input()
    }

    /// Set a temporary status message
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Open a modal, replacing any modal already shown.
    pub fn open_modal(&mut self, modal: Modal) {
        tracing::debug!(modal = modal.title(), "open modal");
        self.modal = Some(modal);
    }

    /// Close the open modal, dropping its local state.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Run `f` against a view's state machine with a context built from the
    /// current app state.
    pub(crate) fn with_view<R>(
        &mut self,
        view: ViewKind,
        f: impl FnOnce(&mut dyn ViewState, &mut ViewContext) -> R,
    ) -> R {
        let mut ctx = ViewContext {
            view,
            tick: self.tick,
            session: self.nav.selected_session(),
            status_message: &mut self.status_message,
        };
        f(self.screens.view_mut(view), &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_start_view() {
        let mut config = AppConfig::default();
        config.session.start_view = "precedent-radar".to_string();
        let app = App::new(&config);
        assert_eq!(app.active_view(), ViewKind::PrecedentRadar);
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_new_unknown_start_view_falls_back() {
        let mut config = AppConfig::default();
        config.session.start_view = "nope".to_string();
        let app = App::new(&config);
        assert_eq!(app.active_view(), ViewKind::DEFAULT);
    }

    #[test]
    fn test_new_signed_out() {
        let mut config = AppConfig::default();
        config.session.auto_sign_in = false;
        let app = App::new(&config);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn test_every_view_has_a_state() {
        let config = AppConfig::default();
        let screens = Screens::new(&config);
        for view in ViewKind::ALL {
            assert!(!screens.view(view).title().is_empty(), "{view}");
        }
        assert_eq!(screens.catalog(ViewKind::Tools).view, ViewKind::Tools);
        assert_eq!(screens.catalog(ViewKind::Home).view, ViewKind::Help);
    }
}
