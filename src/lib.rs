//! **Terminal dashboard for the Jubee legal assistant.**
//!
//! `jubee` is a keyboard-driven shell around the assistant's tools: legal
//! research, drafting, translation and cross-examination chats, a case list
//! with case analysis, and the precedent radar that monitors courts for new
//! judgments on a saved proposition. All data is in-memory mock data.
//!
//! ## Core Concepts & Modules
//!
//! - **[`tui`]**: the terminal application. [`tui::App`] orchestrates the
//!   navigation state, the per-screen state machines and the single open
//!   modal. [`tui::ViewKind`] is the closed set of full-panel screens and
//!   its string keys are the dispatch table.
//! - **[`model`]**: plain records ([`model::RadarItem`], [`model::SessionData`],
//!   courts, cases, analysis steps) and the [`model::fixtures`] mock data.
//! - **[`config`]**: typed YAML configuration with discovery and validation.
//! - **[`cli`]**: command handlers invoked by the `jubee` binary.
//!
//! ## Driving the app without a terminal
//!
//! ```
//! use jubee::config::AppConfig;
//! use jubee::tui::{App, ViewKind};
//!
//! let mut app = App::new(&AppConfig::default());
//! app.navigate(ViewKind::from_key("precedent-radar"));
//! assert_eq!(app.active_view(), ViewKind::PrecedentRadar);
//!
//! app.back_to_main();
//! assert_eq!(app.active_view(), ViewKind::Home);
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math casts between usize and u16; values are bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Render functions are long by nature
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod tui;

pub use config::{AppConfig, ConfigError, TuiConfig, Validatable};
pub use error::{JubeeError, RadarError, Result};
pub use model::{RadarItem, RadarStatus, SessionData};
pub use tui::{App, ViewKind};
