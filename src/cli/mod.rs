//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for a specific CLI subcommand.

mod catalog;
mod run;

pub use catalog::{render_tools, render_views, run_tools, run_views};
pub use run::{resolve_start_view, run_dashboard};
