//! Run command handler.
//!
//! Implements the default `run` subcommand that opens the dashboard.

use crate::config::{AppConfig, TuiPreferences};
use crate::error::JubeeError;
use crate::tui::{App, ViewKind, run_tui};
use anyhow::{Context, Result};

/// Pick the view to start in. An unknown key warns and falls back to the
/// default view.
#[must_use]
pub fn resolve_start_view(requested: Option<&str>, configured: &str) -> ViewKind {
    let key = requested.unwrap_or(configured);
    ViewKind::parse(key).unwrap_or_else(|| {
        tracing::warn!(view = key, "unknown view; starting at {}", ViewKind::DEFAULT);
        ViewKind::DEFAULT
    })
}

/// Run the dashboard until the user quits.
#[allow(clippy::needless_pass_by_value)]
pub fn run_dashboard(mut config: AppConfig, view: Option<String>) -> Result<()> {
    let start = resolve_start_view(view.as_deref(), &config.session.start_view);
    config.session.start_view = start.key().to_string();

    let mut app = App::new(&config).with_preferences_path(TuiPreferences::config_path());
    tracing::debug!(view = %start, signed_in = app.is_authenticated(), "starting dashboard");

    run_tui(&mut app, &config.tui)
        .map_err(JubeeError::Terminal)
        .context("dashboard terminated abnormally")?;

    tracing::debug!("dashboard closed");
    Ok(())
}
