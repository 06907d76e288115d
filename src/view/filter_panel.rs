//! Filter button and the collapsible filter panel (tag chips, sort, count).

use crate::state::{AppState, Focus};
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Button label while the panel is closed.
pub const FILTER_BUTTON_LABEL: &str = "Filters ▾";
const FILTER_BUTTON_LABEL_OPEN: &str = "Filters ▴";

/// Label for the live result count.
pub fn result_count_label(count: usize) -> String {
    format!("{count} results")
}

fn chip_text(tag: &str, selected: bool) -> String {
    if selected {
        format!(" ✓ {tag} ")
    } else {
        format!(" {tag} ")
    }
}

/// Break chips into rows of at most `width` columns, one space between chips.
/// Returns the tag-pool indices on each row. A chip wider than `width` gets a
/// row to itself.
pub fn chip_rows(state: &AppState, width: u16) -> Vec<Vec<usize>> {
    let width = width as usize;
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (i, tag) in state.search.tag_pool().iter().enumerate() {
        let w = chip_text(tag, state.search.state().is_tag_selected(tag)).width();
        let needed = if current.is_empty() { w } else { used + 1 + w };
        if !current.is_empty() && needed > width {
            rows.push(std::mem::take(&mut current));
            used = w;
        } else {
            used = needed;
        }
        current.push(i);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Height of the open panel for a given width, borders included.
pub fn panel_height(state: &AppState, width: u16) -> u16 {
    let chip_lines = chip_rows(state, width.saturating_sub(2)).len().max(1) as u16;
    chip_lines + 3
}

/// The `Filters ▾` button next to the search field.
pub struct FilterButton<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> FilterButton<'a> {
    /// Button reflecting the panel state and selected-tag count.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for FilterButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = if self.state.filters_open {
            FILTER_BUTTON_LABEL_OPEN
        } else {
            FILTER_BUTTON_LABEL
        };
        let selected = self.state.search.state().selected_tags().len();
        let mut spans = vec![Span::raw(label)];
        if selected > 0 {
            spans.push(Span::styled(format!(" {selected}"), self.theme.chip_selected));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_for(self.state.filters_open)),
            )
            .render(area, buf);
    }
}

/// Tag chips, the sort selector, and the live result count.
pub struct FilterPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    /// Panel for the tag pool of `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn chip_style(&self, index: usize, selected: bool) -> Style {
        let base = if selected {
            self.theme.chip_selected
        } else {
            self.theme.chip
        };
        if self.state.focus == Focus::Filters && index == self.state.chip_cursor {
            base.patch(self.theme.cursor_highlight)
        } else {
            base
        }
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(self.theme.border_for(self.state.focus == Focus::Filters));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let pool = self.state.search.tag_pool();
        let search = self.state.search.state();
        let mut lines: Vec<Line> = chip_rows(self.state, inner.width)
            .into_iter()
            .map(|row| {
                let mut spans = Vec::with_capacity(row.len() * 2);
                for (n, i) in row.into_iter().enumerate() {
                    if n > 0 {
                        spans.push(Span::raw(" "));
                    }
                    let tag = &pool[i];
                    let selected = search.is_tag_selected(tag);
                    spans.push(Span::styled(
                        chip_text(tag, selected),
                        self.chip_style(i, selected),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No tags", self.theme.muted)));
        }
        lines.push(Line::default());

        let chips_height = (lines.len() as u16).min(inner.height);
        Paragraph::new(lines).render(
            Rect::new(inner.x, inner.y, inner.width, chips_height),
            buf,
        );

        // Sort selector and count share the last line.
        let footer = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
        Paragraph::new(Line::from(vec![
            Span::styled("Sort: ", self.theme.muted),
            Span::raw(self.state.search.sort_mode().label()),
            Span::styled(" (s)", self.theme.muted),
        ]))
        .render(footer, buf);
        let count = result_count_label(self.state.search.result_count());
        let count_width = (count.width() as u16).min(footer.width);
        Paragraph::new(Line::from(Span::styled(count, self.theme.muted))).render(
            Rect::new(
                footer.right().saturating_sub(count_width),
                footer.y,
                count_width,
                1,
            ),
            buf,
        );
    }
}
