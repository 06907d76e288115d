//! Color and text styles for the search view.

use ratatui::style::{Color, Modifier, Style};

/// Muted text style (hints, placeholders, secondary info).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Disabled by the `--no-color` flag or the `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// True when colored output is allowed.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every region of the view.
///
/// With colors disabled, only modifiers (bold, reversed) remain, so focus and
/// selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Unfocused region border.
    pub border: Style,
    /// Focused region border.
    pub border_focused: Style,
    /// Placeholder text of the empty search field.
    pub placeholder: Style,
    /// Cell under the text cursor.
    pub text_cursor: Style,
    /// Clear glyph in the search field.
    pub clear_button: Style,
    /// Unselected tag chip.
    pub chip: Style,
    /// Selected tag chip.
    pub chip_selected: Style,
    /// Item under a list or chip cursor.
    pub cursor_highlight: Style,
    /// Card title in the card border.
    pub card_title: Style,
    /// `by author` line.
    pub card_author: Style,
    /// Image reference line.
    pub card_image: Style,
    /// `#tag` labels on cards.
    pub tag: Style,
    /// Rating label on cards.
    pub rating: Style,
    /// Secondary text: counts, hints, sort label.
    pub muted: Style,
}

impl Theme {
    /// Theme for the given color setting.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Gray),
                border_focused: Style::default().fg(Color::Indexed(105)),
                placeholder: MUTED_TEXT,
                text_cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                clear_button: Style::default().fg(Color::Gray),
                chip: Style::default().fg(Color::Gray),
                chip_selected: Style::default()
                    .fg(Color::Indexed(61))
                    .bg(Color::Indexed(189))
                    .add_modifier(Modifier::BOLD),
                cursor_highlight: Style::default().add_modifier(Modifier::REVERSED),
                card_title: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                card_author: Style::default().fg(Color::Gray),
                card_image: Style::default().fg(Color::DarkGray),
                tag: Style::default().fg(Color::Cyan),
                rating: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                muted: MUTED_TEXT,
            }
        } else {
            let plain = Style::default();
            Self {
                border: plain,
                border_focused: plain.add_modifier(Modifier::BOLD),
                placeholder: plain,
                text_cursor: plain.add_modifier(Modifier::REVERSED),
                clear_button: plain,
                chip: plain,
                chip_selected: plain.add_modifier(Modifier::BOLD),
                cursor_highlight: plain.add_modifier(Modifier::REVERSED),
                card_title: plain.add_modifier(Modifier::BOLD),
                card_author: plain,
                card_image: plain,
                tag: plain,
                rating: plain.add_modifier(Modifier::BOLD),
                muted: plain,
            }
        }
    }

    /// Border style for a region, depending on focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}
