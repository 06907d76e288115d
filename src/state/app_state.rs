//! UI state around the search controller.
//!
//! Tracks which region holds focus, whether the filter panel is open, and the
//! cursors inside the suggestions list, the tag chips, and the results grid.
//! The search field counts as focused while the suggestions list is being
//! navigated, so the suggestions panel stays visible.

use crate::model::SortMode;
use crate::state::search_input_handler::{self as input, InputBuffer};
use crate::state::search_view::SearchView;
use std::time::Instant;
use tracing::debug;

/// Preset queries offered while the search field has focus.
pub const DEFAULT_SUGGESTIONS: [&str; 6] = [
    "Dashboard",
    "Landing page",
    "Auth flow",
    "Onboarding",
    "E-commerce",
    "Profile card",
];

/// Region holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search text field.
    #[default]
    Input,
    /// The suggestions list below the search field.
    Suggestions,
    /// Tag chips in the filter panel.
    Filters,
    /// The results grid. Also the "nothing focused" state.
    Results,
}

/// Entry under the cursor in the suggestions panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionItem {
    /// The panel's "Clear" action.
    Clear,
    /// Preset query at this index.
    Preset(usize),
}

/// Complete UI state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query state, debounce timer, and published results.
    pub search: SearchView,
    /// Region receiving key input.
    pub focus: Focus,
    /// Character index of the text cursor in the query.
    pub cursor: usize,
    /// Whether the filter panel is shown.
    pub filters_open: bool,
    /// Index into the tag pool.
    pub chip_cursor: usize,
    /// 0 is the Clear action, `i + 1` is preset `i`.
    pub suggestion_cursor: usize,
    /// First visible row of result cards.
    pub results_scroll: usize,
    suggestions: Vec<String>,
}

impl AppState {
    /// Fresh state: search field focused, filter panel closed.
    pub fn new(search: SearchView, suggestions: Vec<String>) -> Self {
        let cursor = search.query().chars().count();
        Self {
            search,
            focus: Focus::Input,
            cursor,
            filters_open: false,
            chip_cursor: 0,
            suggestion_cursor: 0,
            results_scroll: 0,
            suggestions,
        }
    }

    /// Preset queries offered below the search field.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// True while the search field holds focus (suggestions panel visible).
    pub fn input_focused(&self) -> bool {
        matches!(self.focus, Focus::Input | Focus::Suggestions)
    }

    /// True when the published results are empty.
    pub fn empty_state(&self) -> bool {
        self.search.is_empty_result()
    }

    /// Entry under the suggestion cursor.
    pub fn suggestion_item(&self) -> SuggestionItem {
        match self.suggestion_cursor {
            0 => SuggestionItem::Clear,
            n => SuggestionItem::Preset(n - 1),
        }
    }

    // ===== Focus =====

    /// Give the search field focus.
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.cursor = self.cursor.min(self.search.query().chars().count());
    }

    /// Global escape: blur the search field and close the filter panel,
    /// whatever currently holds focus.
    pub fn escape(&mut self) {
        self.focus = Focus::Results;
        self.filters_open = false;
    }

    /// Cycle Input → Filters (when open) → Results → Input.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input | Focus::Suggestions if self.filters_open => Focus::Filters,
            Focus::Input | Focus::Suggestions => Focus::Results,
            Focus::Filters => Focus::Results,
            Focus::Results => Focus::Input,
        };
    }

    /// Reverse of [`AppState::cycle_focus`].
    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            Focus::Input | Focus::Suggestions => Focus::Results,
            Focus::Results if self.filters_open => Focus::Filters,
            Focus::Results | Focus::Filters => Focus::Input,
        };
    }

    // ===== Search field =====

    fn edit(&mut self, now: Instant, f: impl FnOnce(InputBuffer) -> InputBuffer) {
        let buf = f(InputBuffer::new(self.search.query(), self.cursor));
        self.cursor = buf.cursor;
        self.search.set_query(now, buf.text);
    }

    /// Insert `ch` at the text cursor.
    pub fn insert_char(&mut self, now: Instant, ch: char) {
        self.edit(now, |b| input::handle_char_input(b, ch));
    }

    /// Delete the character before the text cursor.
    pub fn backspace(&mut self, now: Instant) {
        self.edit(now, input::handle_backspace);
    }

    /// Delete the character under the text cursor.
    pub fn delete(&mut self, now: Instant) {
        self.edit(now, input::handle_delete);
    }

    /// Delete the word before the text cursor.
    pub fn delete_word(&mut self, now: Instant) {
        self.edit(now, input::handle_delete_word);
    }

    /// Move the text cursor one character left.
    pub fn cursor_left(&mut self) {
        self.cursor = input::handle_cursor_left(self.buffer()).cursor;
    }

    /// Move the text cursor one character right.
    pub fn cursor_right(&mut self) {
        self.cursor = input::handle_cursor_right(self.buffer()).cursor;
    }

    /// Move the text cursor to the start of the query.
    pub fn cursor_home(&mut self) {
        self.cursor = input::handle_home(self.buffer()).cursor;
    }

    /// Move the text cursor to the end of the query.
    pub fn cursor_end(&mut self) {
        self.cursor = input::handle_end(self.buffer()).cursor;
    }

    fn buffer(&self) -> InputBuffer {
        InputBuffer::new(self.search.query(), self.cursor)
    }

    /// Replace the query, leaving the cursor at the end.
    pub fn set_query(&mut self, now: Instant, text: impl Into<String>) {
        let buf = InputBuffer::at_end(text);
        self.cursor = buf.cursor;
        self.search.set_query(now, buf.text);
    }

    /// Reset query, tags, and sort mode, then focus the search field.
    /// Calling it again changes nothing further.
    pub fn clear(&mut self, now: Instant) {
        self.search.clear(now);
        self.cursor = 0;
        self.results_scroll = 0;
        self.focus_input();
        debug!("Search cleared");
    }

    // ===== Suggestions =====

    /// Move from the search field into the suggestions list.
    pub fn enter_suggestions(&mut self) {
        self.focus = Focus::Suggestions;
        self.suggestion_cursor = if self.suggestions.is_empty() { 0 } else { 1 };
    }

    /// Move the suggestion cursor up; leaving the top returns to the field.
    pub fn suggestion_up(&mut self) {
        if self.suggestion_cursor == 0 {
            self.focus = Focus::Input;
        } else {
            self.suggestion_cursor -= 1;
        }
    }

    /// Move the suggestion cursor down, stopping at the last preset.
    pub fn suggestion_down(&mut self) {
        self.suggestion_cursor = (self.suggestion_cursor + 1).min(self.suggestions.len());
    }

    /// Activate the entry under the suggestion cursor.
    pub fn select_suggestion(&mut self, now: Instant) {
        match self.suggestion_item() {
            SuggestionItem::Clear => self.clear_recent(now),
            SuggestionItem::Preset(i) => self.choose_suggestion(now, i),
        }
    }

    /// Set the query to preset `index` and return focus to the field.
    /// Out-of-range indices are ignored.
    pub fn choose_suggestion(&mut self, now: Instant, index: usize) {
        let Some(preset) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.set_query(now, preset);
        self.focus_input();
    }

    /// The suggestions panel's Clear action: empties the query only.
    pub fn clear_recent(&mut self, now: Instant) {
        self.set_query(now, "");
        self.focus_input();
    }

    // ===== Filter panel =====

    /// Open or close the filter panel. Opening moves focus to the chips.
    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
        if self.filters_open {
            self.focus = Focus::Filters;
        } else if self.focus == Focus::Filters {
            self.focus = Focus::Results;
        }
    }

    /// Move the chip cursor to the previous tag.
    pub fn chip_left(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    /// Move the chip cursor to the next tag.
    pub fn chip_right(&mut self) {
        let last = self.search.tag_pool().len().saturating_sub(1);
        self.chip_cursor = (self.chip_cursor + 1).min(last);
    }

    /// Toggle the tag under the chip cursor.
    pub fn toggle_chip(&mut self, now: Instant) {
        let Some(tag) = self.search.tag_pool().get(self.chip_cursor).cloned() else {
            return;
        };
        self.search.toggle_tag(now, &tag);
        self.results_scroll = 0;
    }

    /// Switch to the other sort mode.
    pub fn cycle_sort(&mut self, now: Instant) {
        let next = self.search.sort_mode().next();
        self.set_sort_mode(now, next);
    }

    /// Choose a sort mode and scroll back to the first row.
    pub fn set_sort_mode(&mut self, now: Instant, mode: SortMode) {
        self.search.set_sort_mode(now, mode);
        self.results_scroll = 0;
    }

    // ===== Results =====

    /// Scroll results up by `rows`.
    pub fn scroll_up(&mut self, rows: usize) {
        self.results_scroll = self.results_scroll.saturating_sub(rows);
    }

    /// Scroll results down by `rows`. Clamped by the view.
    pub fn scroll_down(&mut self, rows: usize) {
        self.results_scroll = self.results_scroll.saturating_add(rows);
    }

    /// Keep the scroll offset within `0..=max_scroll`.
    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        self.results_scroll = self.results_scroll.min(max_scroll);
    }

    // ===== Timer =====

    /// Advance the debounce timer. Returns `true` if results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let published = self.search.tick(now);
        if published {
            self.results_scroll = 0;
        }
        published
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
