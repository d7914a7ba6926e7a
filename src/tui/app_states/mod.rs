//! Application state types for the TUI.
//!
//! Each sub-module holds the state machine of one screen or feature area.

pub mod analysis;
pub mod chat;
pub mod lists;
pub mod modals;
pub mod navigation;
pub mod profile;
pub mod radar;

pub use analysis::{AnalysisProgress, AnalysisScreen};
pub use chat::{ChatState, PendingReply};
pub use lists::{CasesState, CatalogEntry, CatalogState, HistoryState, HomeState};
pub use modals::{
    ConfirmAction, ConfirmationDialog, CourtSelectionModal, Modal, ModalOutcome, ModalResult,
    NarrationMismatchModal, SelectiveTranslationModal, ToolOnboardingModal, ViewJumpModal,
};
pub use navigation::{NavCommand, NavigationState};
pub use profile::{PasswordForm, ProfileField, ProfileState, SettingsRow, SettingsState};
pub use radar::{PrecedentRadarWorkflow, RadarIdGenerator, RadarPhase, RadarScreen};
