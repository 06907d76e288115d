//! Results grid: record cards laid out in 1 to 3 columns, scrolled by rows.

use crate::model::{Rating, Record};
use crate::state::{AppState, Focus};
use crate::view::constants::{CARD_GAP, CARD_HEIGHT, THREE_COLUMN_MIN_WIDTH, TWO_COLUMN_MIN_WIDTH};
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Shown in place of the grid when no record matches.
pub const EMPTY_STATE_MESSAGE: &str = "No results. Try different keywords or filters.";

const IMAGE_GLYPH: &str = "▣ ";

/// Card columns for a grid `width` cells wide.
pub fn columns_for_width(width: u16) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Number of card rows that fit in `height`. Always at least one.
pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// Largest useful scroll offset (in rows) for `count` results in `area`.
pub fn max_scroll(count: usize, area: Rect) -> usize {
    let inner = grid_inner(area);
    let rows = count.div_ceil(columns_for_width(inner.width));
    rows.saturating_sub(visible_rows(inner.height))
}

/// Card rows per page for a grid rendered into `area`.
pub fn page_rows(area: Rect) -> usize {
    visible_rows(grid_inner(area).height)
}

/// `4.5 ★`, or `– ★` for records without a rating.
pub fn rating_label(rating: Option<Rating>) -> String {
    match rating {
        Some(r) => format!("{r} ★"),
        None => "– ★".to_string(),
    }
}

fn grid_block<'a>(state: &AppState, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::TOP)
        .title(" Results ")
        .border_style(theme.border_for(state.focus == Focus::Results))
}

fn grid_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::TOP).inner(area)
}

/// Scrollable grid of result cards, or the empty-state message.
pub struct ResultsGrid<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> ResultsGrid<'a> {
    /// Grid over the published results of `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ResultsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = grid_block(self.state, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.state.empty_state() {
            let message_area = Rect::new(inner.x, inner.y + inner.height / 3, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(EMPTY_STATE_MESSAGE, self.theme.muted)))
                .alignment(Alignment::Center)
                .render(message_area, buf);
            return;
        }

        let columns = columns_for_width(inner.width);
        let column_areas = Layout::horizontal(vec![Constraint::Fill(1); columns])
            .spacing(CARD_GAP)
            .split(inner);

        let records: Vec<&Record> = self.state.search.results().collect();
        let first_row = self.state.results_scroll;
        for (slot, row) in (first_row..).take(visible_rows(inner.height)).enumerate() {
            let y = inner.y + slot as u16 * CARD_HEIGHT;
            if y >= inner.bottom() {
                break;
            }
            let height = CARD_HEIGHT.min(inner.bottom() - y);
            for (col, column) in column_areas.iter().enumerate() {
                let Some(record) = records.get(row * columns + col) else {
                    return;
                };
                let card_area = Rect::new(column.x, y, column.width, height);
                Card::new(record, self.theme).render(card_area, buf);
            }
        }
    }
}

/// One record rendered as a bordered card.
pub struct Card<'a> {
    record: &'a Record,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    /// Card for `record`.
    pub fn new(record: &'a Record, theme: &'a Theme) -> Self {
        Self { record, theme }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let record = self.record;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(Span::styled(
                format!(" {} ", record.title),
                self.theme.card_title,
            ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [image, author, excerpt, _, meta] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(IMAGE_GLYPH, self.theme.card_image),
            Span::styled(record.image.as_str(), self.theme.card_image),
        ]))
        .render(image, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("by ", self.theme.muted),
            Span::styled(record.author.as_str(), self.theme.card_author),
        ]))
        .render(author, buf);

        Paragraph::new(record.excerpt.as_str())
            .wrap(Wrap { trim: true })
            .render(excerpt, buf);

        let rating = rating_label(record.rating);
        let rating_width = (rating.width() as u16).min(meta.width);
        let [tags_area, rating_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(rating_width),
        ])
        .spacing(1)
        .areas(meta);

        let mut tag_spans = Vec::with_capacity(record.tags.len() * 2);
        for (i, tag) in record.tags.iter().enumerate() {
            if i > 0 {
                tag_spans.push(Span::raw(" "));
            }
            tag_spans.push(Span::styled(format!("#{tag}"), self.theme.tag));
        }
        Paragraph::new(Line::from(tag_spans)).render(tags_area, buf);
        Paragraph::new(Line::from(Span::styled(rating, self.theme.rating))).render(rating_area, buf);
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
