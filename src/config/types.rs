//! Configuration types for the jubee dashboard.

use super::defaults::{
    DEFAULT_ANALYSIS_STEP_MS, DEFAULT_START_VIEW, DEFAULT_THEME, DEFAULT_TICK_RATE_MS,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::error::JubeeError;
use std::path::{Path, PathBuf};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal UI settings
    pub tui: TuiConfig,
    /// Start-up navigation and onboarding
    pub session: SessionConfig,
    /// Case analysis step-through timing
    pub analysis: AnalysisConfig,
    /// Profile shown on the profile screen
    pub user: UserConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks each analysis step takes at the configured tick rate.
    #[must_use]
    pub fn analysis_step_ticks(&self) -> u64 {
        (self.analysis.step_interval_ms / self.tui.tick_rate_ms.max(1)).max(1)
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 2000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

/// Start-up navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionConfig {
    /// View key shown after sign-in (unknown keys fall back to "home")
    pub start_view: String,
    /// Show the onboarding dialog the first time each tool is opened
    pub show_onboarding: bool,
    /// Start signed in instead of on the sign-in screen
    pub auto_sign_in: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_view: DEFAULT_START_VIEW.to_string(),
            show_onboarding: true,
            auto_sign_in: true,
        }
    }
}

/// Case analysis step-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Milliseconds each step stays in the processing state
    pub step_interval_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_ANALYSIS_STEP_MS,
        }
    }
}

/// Profile details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UserConfig {
    pub display_name: String,
    pub email: String,
    /// Bar council enrolment number
    pub bar_id: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            display_name: "Advocate".to_string(),
            email: "advocate@example.com".to_string(),
            bar_id: String::new(),
        }
    }
}

// ============================================================================
// Persisted TUI Preferences
// ============================================================================

/// Preferences changed from inside the TUI and remembered across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jubee").join("preferences.json"))
    }

    /// Load preferences from `path`, or `None` if nothing was saved there.
    #[must_use]
    pub fn load_from(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| JubeeError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JubeeError::config(format!("preferences: {e}")))?;
        std::fs::write(path, json).map_err(|e| JubeeError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_step_ticks() {
        let mut config = AppConfig::default();
        assert_eq!(config.analysis_step_ticks(), 6);

        config.analysis.step_interval_ms = 100;
        assert_eq!(config.analysis_step_ticks(), 1);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: light\n").unwrap();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.session.start_view, "home");
    }

    #[test]
    fn test_preferences_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        assert!(TuiPreferences::load_from(&path).is_none());

        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(TuiPreferences::load_from(&path), Some(prefs));
    }

    #[test]
    fn test_preferences_save_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = TuiPreferences::default()
            .save_to(&blocker.join("preferences.json"))
            .unwrap_err();
        assert!(matches!(err, JubeeError::Io { .. }));
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_preferences_roundtrip_json() {
        let prefs = TuiPreferences {
            theme: "high-contrast".to_string(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: TuiPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
