//! Rich TUI interface using ratatui.
//!
//! The dashboard is a sidebar of named views, a content panel showing the
//! active view (or the case detail while a case is selected), a status bar
//! and at most one modal on top.
//!
//! # Architecture
//!
//! [`App`] orchestrates [`app_states::NavigationState`] and one
//! [`ViewState`] state machine per screen. Key events go to the open modal
//! first, then to the active view, then to global bindings. Views report
//! what they need through [`EventResult`]; navigation side effects such as
//! resetting the chat screens travel as one-shot
//! [`app_states::NavCommand`]s drained after every event.

mod app;
mod app_impl_nav;
pub mod app_states;
pub(crate) mod constants;
mod events;
pub mod router;
pub mod state;
pub mod theme;
pub mod traits;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{ColorScheme, Styles, Theme, colors, current_theme_name, set_theme, toggle_theme};

// Trait exports for view state machines
pub use traits::{EventResult, Shortcut, ViewContext, ViewState};

// Shared state exports
pub use state::{ListNavigation, ListState};

pub use app::{App, Screens};
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use router::{BASELINE_TOOL_VIEW, TOOL_VIEWS, ViewKind, route, tool_view};
pub use ui::{render, run_tui};
