//! Configuration module for jubee.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Persisted TUI preferences (theme)
//!
//! # Configuration File
//!
//! Place a `.jubee.yaml` file in your working directory or `~/.config/jubee/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! session:
//!   start_view: precedent-radar
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_ANALYSIS_STEP_MS, DEFAULT_START_VIEW, DEFAULT_THEME, DEFAULT_TICK_RATE_MS,
    MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, THEME_NAMES,
};
pub use types::{AnalysisConfig, AppConfig, SessionConfig, TuiConfig, TuiPreferences, UserConfig};
pub use validation::{ConfigError, Validatable, is_valid_email};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, config_search_dirs, discover_config_file,
    generate_example_config, generate_full_example_config, load_config_file, load_or_default,
    load_validated,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
