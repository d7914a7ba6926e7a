//! Case analysis: a fixed sequence of steps stepped through on a timer.

use crate::model::fixtures::{analysis_steps, case_by_id};
use crate::model::{AnalysisStep, CaseId, StepStatus};
use crate::tui::traits::{EventResult, Shortcut, ViewContext, ViewState};
use crossterm::event::{KeyCode, KeyEvent};

/// Bounded step-through: at most one step is `Processing`, and each one
/// completes after `ticks_per_step` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisProgress {
    steps: Vec<AnalysisStep>,
    ticks_per_step: u64,
    elapsed: u64,
    running: bool,
}

impl AnalysisProgress {
    #[must_use]
    pub fn new(steps: Vec<AnalysisStep>, ticks_per_step: u64) -> Self {
        Self {
            steps,
            ticks_per_step: ticks_per_step.max(1),
            elapsed: 0,
            running: false,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[AnalysisStep] {
        &self.steps
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| s.status == StepStatus::Complete)
    }

    /// Index of the step being processed.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.status == StepStatus::Processing)
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Complete)
            .count()
    }

    /// Completion in percent, for the gauge.
    #[must_use]
    pub fn percent(&self) -> u16 {
        if self.steps.is_empty() {
            return 0;
        }
        (self.completed() * 100 / self.steps.len()) as u16
    }

    fn reset_steps(&mut self) {
        for step in &mut self.steps {
            step.status = StepStatus::Pending;
        }
        self.elapsed = 0;
    }

    /// Restart from the first step.
    pub fn start(&mut self) {
        self.reset_steps();
        if let Some(first) = self.steps.first_mut() {
            first.status = StepStatus::Processing;
            self.running = true;
        }
    }

    /// Stop and return every step to pending.
    pub fn cancel(&mut self) {
        self.running = false;
        self.reset_steps();
    }

    /// Advance the timer by one tick. Returns true when a step finished.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed < self.ticks_per_step {
            return false;
        }
        self.elapsed = 0;

        let Some(index) = self.current() else {
            self.running = false;
            return false;
        };
        self.steps[index].status = StepStatus::Complete;
        match self.steps.get_mut(index + 1) {
            Some(next) => next.status = StepStatus::Processing,
            None => self.running = false,
        }
        true
    }
}

/// The case analysis screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisScreen {
    pub progress: AnalysisProgress,
    /// Case being analysed; the first fixture case when none was chosen
    pub case: Option<CaseId>,
}

impl AnalysisScreen {
    #[must_use]
    pub fn new(ticks_per_step: u64) -> Self {
        Self {
            progress: AnalysisProgress::new(analysis_steps(), ticks_per_step),
            case: None,
        }
    }

    /// Title of the case under analysis.
    #[must_use]
    pub fn case_title(&self) -> &'static str {
        self.case
            .and_then(case_by_id)
            .map_or("Uploaded case file", |c| c.title)
    }
}

impl ViewState for AnalysisScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        match key.code {
            KeyCode::Char('r') => {
                self.progress.start();
                ctx.set_status("Analysis restarted");
                EventResult::Consumed
            }
            KeyCode::Char('x') if self.progress.is_running() => {
                self.progress.cancel();
                ctx.set_status("Analysis cancelled");
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn title(&self) -> &str {
        "Case Analysis"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        let mut shortcuts = vec![Shortcut::primary("r", "restart")];
        if self.progress.is_running() {
            shortcuts.push(Shortcut::primary("x", "cancel"));
        }
        shortcuts
    }

    fn on_enter(&mut self, _ctx: &mut ViewContext) {
        self.progress.start();
    }

    fn on_leave(&mut self, _ctx: &mut ViewContext) {
        self.progress.cancel();
    }

    fn on_tick(&mut self, ctx: &mut ViewContext) {
        if self.progress.tick() && self.progress.is_complete() {
            ctx.set_status("Analysis complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress() -> AnalysisProgress {
        AnalysisProgress::new(analysis_steps(), 2)
    }

    #[test]
    fn test_start_marks_first_processing() {
        let mut p = progress();
        assert_eq!(p.current(), None);
        p.start();
        assert_eq!(p.current(), Some(0));
        assert!(p.is_running());
    }

    #[test]
    fn test_steps_advance_every_interval() {
        let mut p = progress();
        p.start();
        assert!(!p.tick());
        assert!(p.tick());
        assert_eq!(p.completed(), 1);
        assert_eq!(p.current(), Some(1));
    }

    #[test]
    fn test_run_to_completion_is_bounded() {
        let mut p = progress();
        p.start();
        for _ in 0..100 {
            p.tick();
        }
        assert!(p.is_complete());
        assert!(!p.is_running());
        assert_eq!(p.percent(), 100);
        assert_eq!(p.current(), None);
    }

    #[test]
    fn test_cancel_returns_to_pending() {
        let mut p = progress();
        p.start();
        p.tick();
        p.tick();
        p.cancel();
        assert_eq!(p.completed(), 0);
        assert!(!p.tick());
        assert!(p.steps().iter().all(|s| s.status == StepStatus::Pending));
    }

    #[test]
    fn test_zero_interval_clamped() {
        let mut p = AnalysisProgress::new(analysis_steps(), 0);
        p.start();
        assert!(p.tick());
    }

    #[test]
    fn test_case_title_fallback() {
        let mut screen = AnalysisScreen::new(1);
        assert_eq!(screen.case_title(), "Uploaded case file");
        screen.case = Some("c-1");
        assert_eq!(screen.case_title(), "State v. Mehra");
    }
}
