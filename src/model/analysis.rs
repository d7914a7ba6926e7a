//! Steps shown by the case-analysis progress screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Processing,
    Complete,
}

impl StepStatus {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pending => "○",
            Self::Processing => "◐",
            Self::Complete => "●",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisStep {
    pub id: usize,
    pub label: &'static str,
    pub status: StepStatus,
}

impl AnalysisStep {
    #[must_use]
    pub const fn pending(id: usize, label: &'static str) -> Self {
        Self {
            id,
            label,
            status: StepStatus::Pending,
        }
    }
}
