//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Width of the navigation sidebar in columns.
pub(crate) const SIDEBAR_WIDTH: u16 = 24;

/// Maximum length of a chat input line.
pub(crate) const MAX_INPUT_LEN: usize = 500;

/// Number of suggestions shown in the view-jump palette.
pub(crate) const JUMP_SUGGESTIONS: usize = 6;

/// Minimum similarity for a view title to be suggested in the palette.
pub(crate) const JUMP_MIN_SCORE: f64 = 0.35;

/// Height of the header bar, borders included.
pub(crate) const HEADER_HEIGHT: u16 = 3;
