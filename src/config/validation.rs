//! Configuration validation for jubee.

use super::defaults::{MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, THEME_NAMES};
use super::types::{AnalysisConfig, AppConfig, SessionConfig, TuiConfig, UserConfig};
use crate::tui::ViewKind;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern is valid")
});

/// Loose email shape check shared by config validation and the profile screen.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.session.validate());
        errors.extend(self.analysis.validate());
        errors.extend(self.user.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            });
        }
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {MIN_TICK_RATE_MS} and {MAX_TICK_RATE_MS} ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}

impl Validatable for SessionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if ViewKind::parse(&self.start_view).is_none() {
            errors.push(ConfigError {
                field: "session.start_view".to_string(),
                message: format!(
                    "Unknown view '{}'. Run `jubee views` for the list of keys",
                    self.start_view
                ),
            });
        }
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.step_interval_ms == 0 {
            errors.push(ConfigError {
                field: "analysis.step_interval_ms".to_string(),
                message: "Step interval must be greater than zero".to_string(),
            });
        }
        errors
    }
}

impl Validatable for UserConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.push(ConfigError {
                field: "user.email".to_string(),
                message: format!("'{}' is not a valid email address", self.email),
            });
        }
        errors
    }
}
