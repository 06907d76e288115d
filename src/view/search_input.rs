//! Search bar widget: text field with placeholder and clear affordance.

use crate::state::AppState;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Placeholder shown while the query is empty.
pub const PLACEHOLDER: &str = "Search designs, authors, or tags";

/// Glyph of the clear affordance.
pub const CLEAR_GLYPH: &str = "✕";

const SEARCH_GLYPH: &str = "⌕ ";

/// Search bar widget.
///
/// Shows the cursor only while the field has focus and the clear glyph only
/// while the query is non-empty.
pub struct SearchInput<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    /// Field showing the query and cursor of `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.input_focused();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.theme.border_for(focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let query = self.state.search.query();
        let show_clear = !query.is_empty();
        // Glyph plus one space of padding on the right.
        let clear_width = if show_clear { 2 } else { 0 };
        let prefix_width = SEARCH_GLYPH.chars().count() as u16;
        let text_width = inner.width.saturating_sub(prefix_width + clear_width) as usize;

        let mut spans = vec![Span::styled(SEARCH_GLYPH, self.theme.muted)];
        if query.is_empty() {
            if focused {
                spans.push(Span::styled(" ", self.theme.text_cursor));
            }
            spans.push(Span::styled(PLACEHOLDER, self.theme.placeholder));
        } else {
            spans.extend(text_spans(query, self.state.cursor, focused, text_width, self.theme));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if show_clear {
            let x = inner.x + inner.width.saturating_sub(clear_width);
            buf.set_string(x, inner.y, CLEAR_GLYPH, self.theme.clear_button);
        }
    }
}

/// Spans for the visible part of `text`, with a highlighted cursor cell when
/// focused. Scrolls horizontally so the cursor stays inside `width` columns.
fn text_spans<'t>(
    text: &'t str,
    cursor: usize,
    focused: bool,
    width: usize,
    theme: &Theme,
) -> Vec<Span<'t>> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let start = first_visible_char(&chars, cursor, width);
    let visible: Vec<char> = chars[start..].to_vec();
    let rel_cursor = cursor - start;

    if !focused {
        return vec![Span::raw(visible.into_iter().collect::<String>())];
    }

    let before: String = visible[..rel_cursor].iter().collect();
    let (at, after) = match visible.get(rel_cursor) {
        Some(ch) => (ch.to_string(), visible[rel_cursor + 1..].iter().collect()),
        None => (" ".to_string(), String::new()),
    };
    vec![
        Span::raw(before),
        Span::styled(at, theme.text_cursor),
        Span::raw(after),
    ]
}

/// Smallest start index such that the text from `start` through the cursor
/// cell fits in `width` display columns.
fn first_visible_char(chars: &[char], cursor: usize, width: usize) -> usize {
    let cell = |i: usize| chars.get(i).and_then(|c| c.width()).unwrap_or(1);
    let mut used = cell(cursor);
    let mut start = cursor;
    while start > 0 {
        let w = cell(start - 1);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crate::state::{Focus, SearchView, DEFAULT_DEBOUNCE};
    use crate::view::test_support::buffer_to_string;
    use std::time::Instant;

    fn state_with_query(query: &str) -> AppState {
        let search = SearchView::new(Dataset::sample(), DEFAULT_DEBOUNCE);
        let mut state = AppState::new(search, Vec::new());
        state.set_query(Instant::now(), query);
        state
    }

    fn render(state: &AppState, width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        SearchInput::new(state, &theme).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn empty_query_shows_placeholder_without_clear() {
        let state = state_with_query("");
        let out = render(&state, 60);
        assert!(out.contains(PLACEHOLDER));
        assert!(!out.contains(CLEAR_GLYPH));
    }

    #[test]
    fn non_empty_query_shows_text_and_clear() {
        let state = state_with_query("saas");
        let out = render(&state, 60);
        assert!(out.contains("saas"));
        assert!(out.contains(CLEAR_GLYPH));
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn border_title_is_search() {
        let out = render(&state_with_query(""), 40);
        assert!(out.lines().next().unwrap().contains("Search"));
    }

    #[test]
    fn blurred_field_renders_plain_text() {
        let mut state = state_with_query("dash");
        state.focus = Focus::Results;
        let out = render(&state, 40);
        assert!(out.contains("dash"));
    }

    #[test]
    fn long_query_scrolls_to_keep_cursor_visible() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let state = state_with_query(long);
        let out = render(&state, 20);
        assert!(out.contains("789"), "tail should be visible: {out}");
        assert!(!out.contains("abc"));
    }

    #[test]
    fn first_visible_char_keeps_cursor_in_window() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(first_visible_char(&chars, 10, 4), 7);
        assert_eq!(first_visible_char(&chars, 2, 4), 0);
        assert_eq!(first_visible_char(&chars, 0, 4), 0);
    }
}
