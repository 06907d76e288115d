//! Screen layout.
//!
//! Pure layout logic: computes the region of each widget from the frame size
//! and the UI state, then renders the widgets into a frame.

use crate::state::{AppState, Focus};
use crate::view::constants::{FILTER_BUTTON_WIDTH, FOOTER_HEIGHT, SEARCH_BAR_HEIGHT};
use crate::view::filter_panel::{self, FilterButton, FilterPanel};
use crate::view::results::ResultsGrid;
use crate::view::search_input::SearchInput;
use crate::view::styles::Theme;
use crate::view::suggestions::{self, SuggestionsPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Region of each widget for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search field.
    pub search: Rect,
    /// `Filters` toggle beside the search field.
    pub filter_button: Rect,
    /// Present while the filter panel is open.
    pub filter_panel: Option<Rect>,
    /// Results grid or empty-state message.
    pub results: Rect,
    /// Key hints line.
    pub footer: Rect,
    /// Overlay below the search field, present while the field has focus.
    pub suggestions: Option<Rect>,
}

/// Compute widget regions for a frame of size `area`.
pub fn compute_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let panel_height = if state.filters_open {
        filter_panel::panel_height(state, area.width)
    } else {
        0
    };

    let [top, panel, results, footer] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(panel_height),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let [search, filter_button] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(FILTER_BUTTON_WIDTH)])
            .areas(top);

    let suggestions = state.input_focused().then(|| {
        let wanted = suggestions::panel_height(state.suggestions().len());
        let available = footer.y.saturating_sub(search.bottom());
        Rect::new(search.x, search.bottom(), search.width, wanted.min(available))
    });

    ScreenAreas {
        search,
        filter_button,
        filter_panel: state.filters_open.then_some(panel),
        results,
        footer,
        suggestions: suggestions.filter(|r| r.height > 0),
    }
}

/// Render the whole screen: search bar, optional filter panel, results grid,
/// footer, and the suggestions overlay on top.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let areas = compute_areas(frame.area(), state);

    frame.render_widget(SearchInput::new(state, theme), areas.search);
    frame.render_widget(FilterButton::new(state, theme), areas.filter_button);
    if let Some(panel) = areas.filter_panel {
        frame.render_widget(FilterPanel::new(state, theme), panel);
    }
    frame.render_widget(ResultsGrid::new(state, theme), areas.results);
    render_footer(frame, areas.footer, state, theme);

    if let Some(overlay) = areas.suggestions {
        frame.render_widget(SuggestionsPanel::new(state, theme), overlay);
    }
}

/// Keyboard hints for the region holding focus.
pub fn keyboard_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => {
            "type to search | ↓ suggestions | Enter results | Tab focus | ^O filters | ^L reset | Esc blur"
        }
        Focus::Suggestions => "↑/↓ move | Enter pick | Esc blur",
        Focus::Filters => "←/→ move | Space toggle | s sort | Tab focus | ^O close | Esc close",
        Focus::Results => {
            "/ search | j/k scroll | PgUp/PgDn page | ^O filters | s sort | ^L reset | q quit"
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = Paragraph::new(Line::from(Span::styled(
        keyboard_hints(state.focus),
        theme.muted,
    )));
    frame.render_widget(hints, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
