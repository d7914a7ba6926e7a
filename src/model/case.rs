//! Case records used by the case list, case detail and radar feed.

pub type CaseId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseSummary {
    pub id: CaseId,
    pub title: &'static str,
    pub citation: &'static str,
    pub court: &'static str,
    pub decided: &'static str,
    pub status: &'static str,
    pub summary: &'static str,
}
