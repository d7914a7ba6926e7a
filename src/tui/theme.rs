//! Centralized theme and color scheme for the TUI.
//!
//! The active theme is global and switchable at runtime; render code reads
//! it through [`colors`] and the [`Styles`] presets.

use super::traits::Shortcut;
use crate::model::{RadarStatus, StepStatus};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Chat bubbles
    pub user_message: Color,
    pub assistant_message: Color,

    // Text on colored badges
    pub badge_fg_dark: Color,
    pub selection_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            user_message: Color::Cyan,
            assistant_message: Color::White,

            badge_fg_dark: Color::Black,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            user_message: Color::Rgb(0, 100, 150),
            assistant_message: Color::Rgb(30, 30, 30),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            selection_bg: Color::Rgb(200, 220, 240),
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            user_message: Color::LightCyan,
            assistant_message: Color::White,

            badge_fg_dark: Color::Black,
            selection_bg: Color::Rgb(50, 50, 80),
        }
    }

    /// Color for a radar status badge
    #[must_use]
    pub const fn radar_status_color(&self, status: RadarStatus) -> Color {
        match status {
            RadarStatus::Active => self.success,
            RadarStatus::Inactive => self.muted,
        }
    }

    /// Color for an analysis step marker
    #[must_use]
    pub const fn step_color(&self, status: StepStatus) -> Color {
        match status {
            StepStatus::Pending => self.text_muted,
            StepStatus::Processing => self.accent,
            StepStatus::Complete => self.success,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Look a theme up by name; unknown names give the dark theme.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selected row in a list
    pub fn selected() -> Style {
        Style::default()
            .fg(colors().text)
            .bg(colors().selection_bg)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning).bold()
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a radar status badge
pub fn radar_status_badge(status: RadarStatus) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", status.as_str().to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.radar_status_color(status))
            .bold(),
    )
}

/// Render a count badge
pub fn count_badge(count: usize, bg_color: Color) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(bg_color)
            .bold(),
    )
}

/// Render a view badge for the header
pub fn view_badge(title: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", title.to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.primary)
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Shortcuts available on every screen.
pub const GLOBAL_SHORTCUTS: &[Shortcut] = &[
    Shortcut::primary("Tab", "next view"),
    Shortcut::primary("g", "go to"),
    Shortcut::primary("?", "help"),
    Shortcut::primary("q", "quit"),
];

/// Render footer hints with consistent styling
pub fn render_footer_hints(hints: &[Shortcut]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().filter(|h| h.primary).enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(format!("[{}]", hint.key), Styles::shortcut_key()));
        spans.push(Span::styled(
            format!(" {}", hint.description),
            Styles::shortcut_desc(),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        let dark = Theme::dark();
        assert_eq!(dark.next().name, "light");
        assert_eq!(dark.next().next().name, "high-contrast");
        assert_eq!(dark.next().next().next().name, "dark");
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("LIGHT").name, "light");
        assert_eq!(Theme::from_name("hc").name, "high-contrast");
        assert_eq!(Theme::from_name("sepia").name, "dark");
    }

    #[test]
    fn test_footer_hints_skip_secondary() {
        let hints = [Shortcut::primary("j/k", "move"), Shortcut::new("x", "hidden")];
        let spans = render_footer_hints(&hints);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "[j/k]");
    }

    #[test]
    fn test_status_colors_differ() {
        let scheme = ColorScheme::dark();
        assert_ne!(
            scheme.radar_status_color(RadarStatus::Active),
            scheme.radar_status_color(RadarStatus::Inactive)
        );
        assert_eq!(scheme.step_color(StepStatus::Complete), scheme.success);
    }
}
