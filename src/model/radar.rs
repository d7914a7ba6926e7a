//! Precedent radar records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a radar is currently intercepting new material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarStatus {
    Active,
    Inactive,
}

impl RadarStatus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RadarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved legal-monitoring query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarItem {
    pub id: String,
    pub proposition: String,
    pub jurisdictions: Vec<String>,
    pub status: RadarStatus,
    pub notifications_enabled: bool,
    pub cases_intercepted: u32,
    pub articles_intercepted: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

impl RadarItem {
    /// Build a fresh radar from a completed draft.
    #[must_use]
    pub fn from_draft(id: String, draft: RadarDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            proposition: draft.proposition.trim().to_string(),
            jurisdictions: draft.jurisdictions,
            status: RadarStatus::Active,
            notifications_enabled: true,
            cases_intercepted: 0,
            articles_intercepted: 0,
            created_at,
            last_activity: None,
        }
    }

    /// Copy of this radar under a new id, switched off and with counters reset.
    #[must_use]
    pub fn duplicate_as(&self, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            proposition: self.proposition.clone(),
            jurisdictions: self.jurisdictions.clone(),
            status: RadarStatus::Inactive,
            notifications_enabled: self.notifications_enabled,
            cases_intercepted: 0,
            articles_intercepted: 0,
            created_at,
            last_activity: None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RadarStatus::Active
    }

    /// Comma-joined jurisdiction list for display.
    #[must_use]
    pub fn jurisdiction_label(&self) -> String {
        if self.jurisdictions.is_empty() {
            "All jurisdictions".to_string()
        } else {
            self.jurisdictions.join(", ")
        }
    }
}

/// Transient data collected by the radar setup step.
///
/// Only exists while the workflow is in its setup or preview phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadarDraft {
    pub proposition: String,
    pub jurisdictions: Vec<String>,
}

impl RadarDraft {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.proposition.trim().is_empty() && !self.jurisdictions.is_empty()
    }
}
