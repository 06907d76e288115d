//! Suggestions panel shown below the search bar while the field has focus.

use crate::state::{AppState, Focus, SuggestionItem};
use crate::view::constants::SUGGESTION_COLUMNS;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Title of the suggestions overlay.
pub const SUGGESTIONS_HEADER: &str = "Recent searches";
/// Action that empties the query.
pub const CLEAR_ACTION: &str = "Clear";

const PRESET_GLYPH: &str = "↺ ";

/// Rows needed to show `count` presets, borders and header included.
pub fn panel_height(count: usize) -> u16 {
    let rows = count.div_ceil(SUGGESTION_COLUMNS);
    (rows as u16).saturating_add(3)
}

/// Overlay listing preset queries in a grid with a Clear action.
pub struct SuggestionsPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> SuggestionsPanel<'a> {
    /// Overlay listing the presets of `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn highlight(&self, item: SuggestionItem, base: Style) -> Style {
        if self.state.focus == Focus::Suggestions && self.state.suggestion_item() == item {
            base.patch(self.theme.cursor_highlight)
        } else {
            base
        }
    }
}

impl Widget for SuggestionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [header_area, grid_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let [title_area, clear_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(CLEAR_ACTION.len() as u16),
        ])
        .areas(header_area);
        Paragraph::new(Line::from(Span::styled(SUGGESTIONS_HEADER, self.theme.muted)))
            .render(title_area, buf);
        let clear_style = self.highlight(SuggestionItem::Clear, self.theme.clear_button);
        Paragraph::new(Line::from(Span::styled(CLEAR_ACTION, clear_style)))
            .render(clear_area, buf);

        let columns = Layout::horizontal(
            [Constraint::Ratio(1, SUGGESTION_COLUMNS as u32); SUGGESTION_COLUMNS],
        )
        .split(grid_area);

        for (i, preset) in self.state.suggestions().iter().enumerate() {
            let row = (i / SUGGESTION_COLUMNS) as u16;
            let column = columns[i % SUGGESTION_COLUMNS];
            if row >= column.height {
                break;
            }
            let cell = Rect::new(column.x, column.y + row, column.width, 1);
            let style = self.highlight(SuggestionItem::Preset(i), Style::default());
            Paragraph::new(Line::from(vec![
                Span::styled(PRESET_GLYPH, self.theme.muted),
                Span::styled(preset.as_str(), style),
            ]))
            .render(cell, buf);
        }
    }
}
