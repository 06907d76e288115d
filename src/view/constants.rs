//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the search bar in lines (border + input line).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the "Filters" button to the right of the search field.
pub const FILTER_BUTTON_WIDTH: u16 = 13;

/// Height of the footer hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of one result card, borders included.
///
/// Image reference, author, two excerpt lines, one blank line, tags/rating.
pub const CARD_HEIGHT: u16 = 8;

/// Minimum terminal width for a two-column results grid.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 72;

/// Minimum terminal width for a three-column results grid.
pub const THREE_COLUMN_MIN_WIDTH: u16 = 120;

/// Number of columns in the suggestions grid.
pub const SUGGESTION_COLUMNS: usize = 2;

/// Blank cells between result cards.
pub const CARD_GAP: u16 = 1;
