//! View routing: the closed set of full-panel screens and their dispatch.
//!
//! The string keys and the tool-name table below are part of the external
//! contract (config files and the `--view` flag use them) and must not
//! change spelling.

use super::app::App;
use super::views;
use ratatui::{Frame, layout::Rect};
use serde::Serialize;
use std::fmt;

/// A named, full-panel screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ViewKind {
    Home,
    LegalResearch,
    Drafting,
    Translation,
    CrossExamination,
    PrecedentRadar,
    CaseAnalysis,
    MyCases,
    History,
    Documents,
    Notifications,
    Profile,
    Settings,
    Subscription,
    Help,
    Tools,
}

impl ViewKind {
    /// View shown when nothing else applies.
    pub const DEFAULT: Self = Self::Home;

    /// Every view, in sidebar order.
    pub const ALL: [Self; 16] = [
        Self::Home,
        Self::LegalResearch,
        Self::Drafting,
        Self::Translation,
        Self::CrossExamination,
        Self::PrecedentRadar,
        Self::CaseAnalysis,
        Self::MyCases,
        Self::History,
        Self::Documents,
        Self::Notifications,
        Self::Tools,
        Self::Profile,
        Self::Settings,
        Self::Subscription,
        Self::Help,
    ];

    /// Stable dispatch key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::LegalResearch => "legal-research",
            Self::Drafting => "drafting",
            Self::Translation => "translation",
            Self::CrossExamination => "cross-examination",
            Self::PrecedentRadar => "precedent-radar",
            Self::CaseAnalysis => "case-analysis",
            Self::MyCases => "my-cases",
            Self::History => "history",
            Self::Documents => "documents",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Subscription => "subscription",
            Self::Help => "help",
            Self::Tools => "tools",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::LegalResearch => "Legal Research",
            Self::Drafting => "Drafting",
            Self::Translation => "Translation",
            Self::CrossExamination => "Cross Examination",
            Self::PrecedentRadar => "Precedent Radar",
            Self::CaseAnalysis => "Case Analysis",
            Self::MyCases => "My Cases",
            Self::History => "History",
            Self::Documents => "Documents",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Subscription => "Subscription",
            Self::Help => "Help",
            Self::Tools => "All Tools",
        }
    }

    /// Strict lookup by key.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    /// Lookup by key, falling back to [`ViewKind::DEFAULT`] for unknown keys.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or(Self::DEFAULT)
    }

    /// Tool chat views.
    #[must_use]
    pub const fn is_chat(self) -> bool {
        matches!(
            self,
            Self::LegalResearch | Self::Drafting | Self::Translation | Self::CrossExamination
        )
    }

    /// Tool name shown in onboarding, if this view is a tool.
    #[must_use]
    pub const fn tool_name(self) -> Option<&'static str> {
        match self {
            Self::LegalResearch => Some("Legal Research"),
            Self::Drafting => Some("Drafting"),
            Self::Translation => Some("Translation"),
            Self::CrossExamination => Some("Cross Examination"),
            Self::PrecedentRadar => Some("Precedent Radar"),
            Self::CaseAnalysis => Some("Case Analysis"),
            _ => None,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<ViewKind> for &'static str {
    fn from(view: ViewKind) -> Self {
        view.key()
    }
}

/// Tool name to view mapping used when a chat session is opened.
pub const TOOL_VIEWS: &[(&str, ViewKind)] = &[
    ("Legal Research", ViewKind::LegalResearch),
    ("Drafting", ViewKind::Drafting),
    ("Translation", ViewKind::Translation),
    ("Cross Examination", ViewKind::CrossExamination),
    ("Precedent Radar", ViewKind::PrecedentRadar),
    ("Case Analysis", ViewKind::CaseAnalysis),
];

/// View for sessions of tools with no dedicated screen.
pub const BASELINE_TOOL_VIEW: ViewKind = ViewKind::LegalResearch;

/// Map a tool name to the view that hosts its sessions.
#[must_use]
pub fn tool_view(tool_name: &str) -> ViewKind {
    TOOL_VIEWS
        .iter()
        .find(|(name, _)| *name == tool_name)
        .map_or(BASELINE_TOOL_VIEW, |(_, view)| *view)
}

/// Render the active view into `area`.
pub fn route(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.selected_session();
    match app.active_view() {
        ViewKind::Home => views::render_home(frame, area, app),
        ViewKind::LegalResearch => {
            views::render_chat(frame, area, &app.screens.research, session, app.tick);
        }
        ViewKind::Drafting => views::render_chat(frame, area, &app.screens.drafting, session, app.tick),
        ViewKind::Translation => {
            views::render_chat(frame, area, &app.screens.translation, session, app.tick);
        }
        ViewKind::CrossExamination => {
            views::render_chat(frame, area, &app.screens.cross_examination, session, app.tick);
        }
        ViewKind::PrecedentRadar => views::render_radar(frame, area, &app.screens.radar),
        ViewKind::CaseAnalysis => views::render_analysis(frame, area, &app.screens.analysis, app.tick),
        ViewKind::MyCases => views::render_cases(frame, area, &app.screens.cases),
        ViewKind::History => views::render_history(frame, area, &app.screens.history, session),
        ViewKind::Documents
        | ViewKind::Notifications
        | ViewKind::Tools
        | ViewKind::Subscription
        | ViewKind::Help => views::render_catalog(frame, area, app.screens.catalog(app.active_view())),
        ViewKind::Profile => views::render_profile(frame, area, &app.screens.profile),
        ViewKind::Settings => views::render_settings(frame, area, &app.screens.settings),
    }
}
