//! Precedent radar: the saved-proposition monitors and the wizard that
//! creates them.
//!
//! The wizard is a small state machine over [`RadarPhase`]:
//!
//! ```text
//!   Dashboard --start_setup--> Setup --complete_setup--> Preview
//!       ^  |                     ^                          |
//!       |  +--select--> CaseFeed +----------edit------------+
//!       +------------- cancel / back / confirm -------------+
//! ```
//!
//! The draft being edited lives inside the `Setup` and `Preview` variants,
//! so leaving those phases discards it.

use super::modals::{ConfirmAction, ConfirmationDialog, CourtSelectionModal, Modal};
use crate::error::RadarError;
use crate::model::fixtures::cases_for_courts;
use crate::model::{CaseSummary, RadarDraft, RadarItem, RadarStatus};
use crate::tui::constants::MAX_INPUT_LEN;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, Shortcut, ViewContext, ViewState};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where the radar screen currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadarPhase {
    Dashboard,
    Setup(RadarDraft),
    Preview(RadarDraft),
    CaseFeed { radar_id: String },
}

impl RadarPhase {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Setup(_) => "setup",
            Self::Preview(_) => "preview",
            Self::CaseFeed { .. } => "case-feed",
        }
    }

    /// The draft being edited or previewed.
    #[must_use]
    pub const fn draft(&self) -> Option<&RadarDraft> {
        match self {
            Self::Setup(draft) | Self::Preview(draft) => Some(draft),
            Self::Dashboard | Self::CaseFeed { .. } => None,
        }
    }
}

/// Hands out `radar-<unix millis>` ids that never repeat within a run,
/// even when two radars are created in the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct RadarIdGenerator {
    last: i64,
}

impl RadarIdGenerator {
    pub fn next_id(&mut self, now: DateTime<Utc>, existing: &[RadarItem]) -> String {
        let mut candidate = now.timestamp_millis().max(self.last + 1);
        loop {
            let id = format!("radar-{candidate}");
            if !existing.iter().any(|r| r.id == id) {
                self.last = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

/// Radar list plus the wizard phase.
#[derive(Debug, Clone)]
pub struct PrecedentRadarWorkflow {
    phase: RadarPhase,
    radars: Vec<RadarItem>,
    ids: RadarIdGenerator,
}

impl PrecedentRadarWorkflow {
    #[must_use]
    pub fn new(radars: Vec<RadarItem>) -> Self {
        Self {
            phase: RadarPhase::Dashboard,
            radars,
            ids: RadarIdGenerator::default(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &RadarPhase {
        &self.phase
    }

    #[must_use]
    pub fn radars(&self) -> &[RadarItem] {
        &self.radars
    }

    #[must_use]
    pub fn radar(&self, id: &str) -> Option<&RadarItem> {
        self.radars.iter().find(|r| r.id == id)
    }

    fn radar_mut(&mut self, id: &str) -> Result<&mut RadarItem, RadarError> {
        self.radars
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RadarError::UnknownRadar(id.to_string()))
    }

    const fn wrong_phase(&self, operation: &'static str) -> RadarError {
        RadarError::WrongPhase {
            operation,
            phase: self.phase.name(),
        }
    }

    /// Dashboard -> Setup with an empty draft.
    pub fn start_setup(&mut self) -> Result<(), RadarError> {
        if self.phase != RadarPhase::Dashboard {
            return Err(self.wrong_phase("start a new radar"));
        }
        self.phase = RadarPhase::Setup(RadarDraft::default());
        Ok(())
    }

    /// The draft, while in Setup.
    pub fn draft_mut(&mut self) -> Option<&mut RadarDraft> {
        match &mut self.phase {
            RadarPhase::Setup(draft) => Some(draft),
            _ => None,
        }
    }

    /// Replace the draft's jurisdictions with the courts picked in the
    /// court-selection dialog.
    pub fn set_jurisdictions(&mut self, courts: Vec<String>) -> Result<(), RadarError> {
        if let RadarPhase::Setup(draft) = &mut self.phase {
            draft.jurisdictions = courts;
            return Ok(());
        }
        Err(self.wrong_phase("choose courts"))
    }

    /// Setup -> Preview once the draft has a proposition and a court.
    pub fn complete_setup(&mut self) -> Result<(), RadarError> {
        let RadarPhase::Setup(draft) = &self.phase else {
            return Err(self.wrong_phase("review the radar"));
        };
        if !draft.is_complete() {
            return Err(RadarError::IncompleteDraft);
        }
        let draft = draft.clone();
        self.phase = RadarPhase::Preview(draft);
        Ok(())
    }

    /// Preview -> Setup, keeping the draft.
    pub fn edit(&mut self) -> Result<(), RadarError> {
        let RadarPhase::Preview(draft) = &self.phase else {
            return Err(self.wrong_phase("edit the radar"));
        };
        let draft = draft.clone();
        self.phase = RadarPhase::Setup(draft);
        Ok(())
    }

    /// Preview -> Dashboard, creating the radar. Returns the new id.
    pub fn confirm(&mut self) -> Result<String, RadarError> {
        self.confirm_at(Utc::now())
    }

    pub fn confirm_at(&mut self, now: DateTime<Utc>) -> Result<String, RadarError> {
        let draft = match std::mem::replace(&mut self.phase, RadarPhase::Dashboard) {
            RadarPhase::Preview(draft) => draft,
            other => {
                self.phase = other;
                return Err(self.wrong_phase("confirm"));
            }
        };

        let id = self.ids.next_id(now, &self.radars);
        let radar = RadarItem::from_draft(id.clone(), draft, now);
        tracing::info!(radar = %id, courts = radar.jurisdictions.len(), "radar created");
        self.radars.insert(0, radar);
        Ok(id)
    }

    /// Any phase -> Dashboard, discarding the draft.
    pub fn cancel(&mut self) {
        self.phase = RadarPhase::Dashboard;
    }

    /// Any phase -> Dashboard.
    pub fn back(&mut self) {
        self.cancel();
    }

    /// Dashboard -> CaseFeed for an existing radar.
    pub fn select(&mut self, id: &str) -> Result<(), RadarError> {
        if self.phase != RadarPhase::Dashboard {
            return Err(self.wrong_phase("open a radar"));
        }
        if self.radar(id).is_none() {
            return Err(RadarError::UnknownRadar(id.to_string()));
        }
        self.phase = RadarPhase::CaseFeed {
            radar_id: id.to_string(),
        };
        Ok(())
    }

    pub fn toggle_status(&mut self, id: &str) -> Result<RadarStatus, RadarError> {
        let radar = self.radar_mut(id)?;
        radar.status = radar.status.toggled();
        Ok(radar.status)
    }

    pub fn toggle_notifications(&mut self, id: &str) -> Result<bool, RadarError> {
        let radar = self.radar_mut(id)?;
        radar.notifications_enabled = !radar.notifications_enabled;
        Ok(radar.notifications_enabled)
    }

    /// Copy a radar as an inactive radar with fresh counters, placed right
    /// after the source. Returns the new id.
    pub fn duplicate(&mut self, id: &str) -> Result<String, RadarError> {
        self.duplicate_at(id, Utc::now())
    }

    pub fn duplicate_at(&mut self, id: &str, now: DateTime<Utc>) -> Result<String, RadarError> {
        let index = self
            .radars
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RadarError::UnknownRadar(id.to_string()))?;
        let new_id = self.ids.next_id(now, &self.radars);
        let copy = self.radars[index].duplicate_as(new_id.clone(), now);
        self.radars.insert(index + 1, copy);
        Ok(new_id)
    }

    /// Remove exactly the radar with `id`.
    pub fn delete(&mut self, id: &str) -> Result<RadarItem, RadarError> {
        let index = self
            .radars
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RadarError::UnknownRadar(id.to_string()))?;
        if matches!(&self.phase, RadarPhase::CaseFeed { radar_id } if radar_id == id) {
            self.phase = RadarPhase::Dashboard;
        }
        tracing::info!(radar = %id, "radar deleted");
        Ok(self.radars.remove(index))
    }

    /// Cases intercepted by the radar shown in the case feed.
    #[must_use]
    pub fn feed_cases(&self) -> Vec<&'static CaseSummary> {
        match &self.phase {
            RadarPhase::CaseFeed { radar_id } => self
                .radar(radar_id)
                .map(|r| cases_for_courts(&r.jurisdictions))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Screen
// ============================================================================

/// The precedent radar screen: workflow plus list cursors.
#[derive(Debug, Clone)]
pub struct RadarScreen {
    pub workflow: PrecedentRadarWorkflow,
    pub list: ListState,
    pub feed: ListState,
}

impl RadarScreen {
    #[must_use]
    pub fn new(radars: Vec<RadarItem>) -> Self {
        let list = ListState::with_total(radars.len());
        Self {
            workflow: PrecedentRadarWorkflow::new(radars),
            list,
            feed: ListState::default(),
        }
    }

    /// Radar under the cursor on the dashboard.
    #[must_use]
    pub fn selected_radar(&self) -> Option<&RadarItem> {
        self.workflow.radars().get(self.list.selected)
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_radar().map(|r| r.id.clone())
    }

    /// Keep the cursor in range after the list changed.
    pub fn sync_list(&mut self) {
        self.list.set_total(self.workflow.radars().len());
        self.list.clamp_selection();
    }

    /// Apply courts picked in the court-selection dialog.
    pub fn apply_courts(&mut self, courts: Vec<String>) -> Result<(), RadarError> {
        self.workflow.set_jurisdictions(courts)
    }

    /// Delete a radar after the confirmation dialog.
    pub fn delete(&mut self, id: &str) -> Result<RadarItem, RadarError> {
        let removed = self.workflow.delete(id)?;
        self.sync_list();
        Ok(removed)
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Char('n') => {
                if let Err(e) = self.workflow.start_setup() {
                    ctx.set_status(e.to_string());
                }
            }
            KeyCode::Enter => {
                let Some(id) = self.selected_id() else {
                    return EventResult::Consumed;
                };
                match self.workflow.select(&id) {
                    Ok(()) => {
                        self.feed = ListState::with_total(self.workflow.feed_cases().len());
                    }
                    Err(e) => ctx.set_status(e.to_string()),
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.selected_id() {
                    match self.workflow.toggle_status(&id) {
                        Ok(status) => ctx.set_status(format!("Radar is now {status}")),
                        Err(e) => ctx.set_status(e.to_string()),
                    }
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_id() {
                    match self.workflow.toggle_notifications(&id) {
                        Ok(true) => ctx.set_status("Alerts on"),
                        Ok(false) => ctx.set_status("Alerts off"),
                        Err(e) => ctx.set_status(e.to_string()),
                    }
                }
            }
            KeyCode::Char('c') => {
                if let Some(id) = self.selected_id() {
                    match self.workflow.duplicate(&id) {
                        Ok(new_id) => {
                            self.sync_list();
                            self.list.select_next();
                            ctx.set_status(format!("Duplicated as {new_id}"));
                        }
                        Err(e) => ctx.set_status(e.to_string()),
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(radar) = self.selected_radar() {
                    return EventResult::OpenModal(Modal::Confirmation(ConfirmationDialog::new(
                        "Delete radar",
                        format!("Stop monitoring \"{}\"?", radar.proposition),
                        "Delete",
                        ConfirmAction::DeleteRadar(radar.id.clone()),
                    )));
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_setup_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        match key.code {
            KeyCode::Esc => self.workflow.cancel(),
            KeyCode::Tab => return EventResult::OpenModal(Modal::CourtSelection(CourtSelectionModal::new())),
            KeyCode::Enter => {
                if let Err(e) = self.workflow.complete_setup() {
                    ctx.set_status(e.to_string());
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = self.workflow.draft_mut() {
                    draft.proposition.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(draft) = self.workflow.draft_mut()
                    && draft.proposition.len() < MAX_INPUT_LEN
                {
                    draft.proposition.push(c);
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_preview_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => match self.workflow.confirm() {
                Ok(id) => {
                    self.sync_list();
                    self.list.go_first();
                    ctx.set_status(format!("Radar {id} is now monitoring"));
                }
                Err(e) => ctx.set_status(e.to_string()),
            },
            KeyCode::Char('e') => {
                if let Err(e) = self.workflow.edit() {
                    ctx.set_status(e.to_string());
                }
            }
            KeyCode::Esc => self.workflow.cancel(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_feed_key(&mut self, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.feed.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.feed.select_prev(),
            KeyCode::Enter => {
                if let Some(case) = self.workflow.feed_cases().get(self.feed.selected) {
                    return EventResult::SelectCase(case.id);
                }
            }
            KeyCode::Esc | KeyCode::Char('b') => self.workflow.back(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

impl ViewState for RadarScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        match self.workflow.phase() {
            RadarPhase::Dashboard => self.handle_dashboard_key(key, ctx),
            RadarPhase::Setup(_) => self.handle_setup_key(key, ctx),
            RadarPhase::Preview(_) => self.handle_preview_key(key, ctx),
            RadarPhase::CaseFeed { .. } => self.handle_feed_key(key),
        }
    }

    fn title(&self) -> &str {
        match self.workflow.phase() {
            RadarPhase::Dashboard => "Precedent Radar",
            RadarPhase::Setup(_) => "New Radar",
            RadarPhase::Preview(_) => "Review Radar",
            RadarPhase::CaseFeed { .. } => "Case Feed",
        }
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        match self.workflow.phase() {
            RadarPhase::Dashboard => vec![
                Shortcut::primary("n", "new"),
                Shortcut::primary("Enter", "open"),
                Shortcut::primary("s", "pause/resume"),
                Shortcut::primary("a", "alerts"),
                Shortcut::primary("c", "duplicate"),
                Shortcut::primary("d", "delete"),
            ],
            RadarPhase::Setup(_) => vec![
                Shortcut::primary("Tab", "choose courts"),
                Shortcut::primary("Enter", "review"),
                Shortcut::primary("Esc", "cancel"),
            ],
            RadarPhase::Preview(_) => vec![
                Shortcut::primary("Enter", "start monitoring"),
                Shortcut::primary("e", "edit"),
                Shortcut::primary("Esc", "cancel"),
            ],
            RadarPhase::CaseFeed { .. } => vec![
                Shortcut::primary("Enter", "open case"),
                Shortcut::primary("b", "back"),
            ],
        }
    }

    fn on_leave(&mut self, _ctx: &mut ViewContext) {
        self.workflow.cancel();
    }

    fn captures_input(&self) -> bool {
        matches!(self.workflow.phase(), RadarPhase::Setup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_radars;
    use chrono::TimeZone;

    fn ready_draft(workflow: &mut PrecedentRadarWorkflow) {
        workflow.start_setup().unwrap();
        let draft = workflow.draft_mut().unwrap();
        draft.proposition = "Arbitrability of tenancy disputes".to_string();
        workflow
            .set_jurisdictions(vec!["Supreme Court".to_string()])
            .unwrap();
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_720_000_000_000).unwrap()
    }

    #[test]
    fn test_full_wizard_prepends_active_radar() {
        let mut workflow = PrecedentRadarWorkflow::new(sample_radars());
        ready_draft(&mut workflow);
        workflow.complete_setup().unwrap();
        assert_eq!(workflow.phase().name(), "preview");

        let id = workflow.confirm_at(fixed_now()).unwrap();
        assert_eq!(id, "radar-1720000000000");
        assert_eq!(workflow.phase(), &RadarPhase::Dashboard);
        assert_eq!(workflow.radars().len(), 3);

        let created = &workflow.radars()[0];
        assert_eq!(created.id, id);
        assert_eq!(created.status, RadarStatus::Active);
        assert!(created.notifications_enabled);
        assert_eq!(created.cases_intercepted, 0);
        assert_eq!(created.created_at, fixed_now());
    }

    #[test]
    fn test_complete_setup_requires_proposition_and_court() {
        let mut workflow = PrecedentRadarWorkflow::new(Vec::new());
        workflow.start_setup().unwrap();
        assert_eq!(workflow.complete_setup(), Err(RadarError::IncompleteDraft));

        workflow.draft_mut().unwrap().proposition = "   ".to_string();
        workflow.set_jurisdictions(vec!["Supreme Court".into()]).unwrap();
        assert_eq!(workflow.complete_setup(), Err(RadarError::IncompleteDraft));
        assert_eq!(workflow.phase().name(), "setup");
    }

    #[test]
    fn test_edit_keeps_draft() {
        let mut workflow = PrecedentRadarWorkflow::new(Vec::new());
        ready_draft(&mut workflow);
        workflow.complete_setup().unwrap();
        workflow.edit().unwrap();
        let draft = workflow.phase().draft().unwrap();
        assert_eq!(draft.proposition, "Arbitrability of tenancy disputes");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut workflow = PrecedentRadarWorkflow::new(Vec::new());
        ready_draft(&mut workflow);
        workflow.cancel();
        assert!(workflow.phase().draft().is_none());
        workflow.start_setup().unwrap();
        assert_eq!(workflow.phase().draft(), Some(&RadarDraft::default()));
    }

    #[test]
    fn test_wrong_phase_errors() {
        let mut workflow = PrecedentRadarWorkflow::new(sample_radars());
        assert!(matches!(
            workflow.confirm(),
            Err(RadarError::WrongPhase { phase: "dashboard", .. })
        ));
        assert!(workflow.complete_setup().is_err());
        assert!(workflow.edit().is_err());
        workflow.start_setup().unwrap();
        assert!(workflow.start_setup().is_err());
        assert!(workflow.select("radar-1700000000000").is_err());
    }

    #[test]
    fn test_id_generator_never_repeats() {
        let mut ids = RadarIdGenerator::default();
        let now = fixed_now();
        let a = ids.next_id(now, &[]);
        let b = ids.next_id(now, &[]);
        assert_eq!(a, "radar-1720000000000");
        assert_eq!(b, "radar-1720000000001");
    }

    #[test]
    fn test_id_generator_skips_existing() {
        let mut ids = RadarIdGenerator::default();
        let radars = sample_radars();
        let clash = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(ids.next_id(clash, &radars), "radar-1700000000001");
    }

    #[test]
    fn test_select_unknown_radar() {
        let mut workflow = PrecedentRadarWorkflow::new(sample_radars());
        assert_eq!(
            workflow.select("radar-0"),
            Err(RadarError::UnknownRadar("radar-0".to_string()))
        );
        workflow.select("radar-1700000000000").unwrap();
        assert!(!workflow.feed_cases().is_empty());
    }

    #[test]
    fn test_delete_radar_in_feed_returns_to_dashboard() {
        let mut workflow = PrecedentRadarWorkflow::new(sample_radars());
        workflow.select("radar-1700000000000").unwrap();
        workflow.delete("radar-1700000000000").unwrap();
        assert_eq!(workflow.phase(), &RadarPhase::Dashboard);
        assert_eq!(workflow.radars().len(), 1);
    }

    #[test]
    fn test_toggles() {
        let mut workflow = PrecedentRadarWorkflow::new(sample_radars());
        let id = "radar-1700000000000";
        assert_eq!(workflow.toggle_status(id), Ok(RadarStatus::Inactive));
        assert_eq!(workflow.toggle_notifications(id), Ok(false));
        assert!(workflow.toggle_status("nope").is_err());
    }

    #[test]
    fn test_screen_setup_typing_captures_input() {
        let mut screen = RadarScreen::new(Vec::new());
        let mut status = None;
        let mut ctx = ViewContext {
            view: crate::tui::ViewKind::PrecedentRadar,
            tick: 0,
            session: None,
            status_message: &mut status,
        };
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        screen.handle_key(key('n'), &mut ctx);
        assert!(screen.captures_input());
        screen.handle_key(key('q'), &mut ctx);
        assert_eq!(
            screen.workflow.phase().draft().map(|d| d.proposition.as_str()),
            Some("q")
        );

        let result = screen.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), &mut ctx);
        assert!(matches!(result, EventResult::OpenModal(Modal::CourtSelection(_))));

        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx);
        assert_eq!(status.as_deref(), Some("Enter a proposition and choose at least one court"));
    }
}
