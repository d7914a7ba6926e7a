//! Plain data records shown by the dashboard.
//!
//! Everything here is in-memory only. Records live for the lifetime of the
//! process and carry no referential integrity beyond list membership.

mod analysis;
mod case;
mod court;
pub mod fixtures;
mod radar;
mod session;

pub use analysis::{AnalysisStep, StepStatus};
pub use case::{CaseId, CaseSummary};
pub use court::{Court, COURTS, court_by_id};
pub use radar::{RadarDraft, RadarItem, RadarStatus};
pub use session::{ChatMessage, ChatRole, SessionData};
