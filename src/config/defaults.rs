//! Default values for jubee configuration.

/// Event poll interval of the terminal loop, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Fastest tick rate accepted from configuration.
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Slowest tick rate accepted from configuration.
pub const MAX_TICK_RATE_MS: u64 = 2_000;

/// Time each case-analysis step stays in the processing state.
pub const DEFAULT_ANALYSIS_STEP_MS: u64 = 1_500;

/// View shown after sign-in.
pub const DEFAULT_START_VIEW: &str = "home";

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Accepted theme names.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];
