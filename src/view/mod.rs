//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_panel;
mod layout;
mod results;
mod search_input;
mod styles;
mod suggestions;

pub use filter_panel::{result_count_label, FilterButton, FilterPanel, FILTER_BUTTON_LABEL};
pub use layout::{compute_areas, keyboard_hints, render_layout, ScreenAreas};
pub use results::{
    columns_for_width, rating_label, Card, ResultsGrid, EMPTY_STATE_MESSAGE,
};
pub use search_input::{SearchInput, CLEAR_GLYPH, PLACEHOLDER};
pub use styles::{ColorConfig, Theme};
pub use suggestions::{SuggestionsPanel, CLEAR_ACTION, SUGGESTIONS_HEADER};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{AppState, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Poll timeout while no search is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(source) => AppError::Terminal(source),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
    /// Last rendered results area (for paging)
    last_results_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on stdout.
    ///
    /// The terminal must already be in raw mode on the alternate screen, see
    /// [`TerminalGuard`].
    pub fn new(app_state: AppState, theme: Theme) -> Result<Self, TuiError> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            theme,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q outside the search field, or Ctrl+C).
    /// Waits for input no longer than the pending debounce deadline, then
    /// advances the timer and redraws if anything changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let mut dirty = false;

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.app_state.tick(Instant::now()) {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            theme,
            last_results_area: None,
        }
    }

    /// How long to wait for input: until the debounce deadline, capped by
    /// the idle tick.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.app_state
            .search
            .time_until_due(now)
            .map_or(IDLE_TICK, |remaining| remaining.min(IDLE_TICK))
    }

    /// Handle keyboard input
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, whatever holds focus.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = self.key_bindings.get(key);

        // Esc is global: handled before focus-specific dispatch.
        if action == Some(KeyAction::Escape) {
            self.app_state.escape();
            return false;
        }

        let consumed = match self.app_state.focus {
            Focus::Input => self.handle_input_key(key, now),
            Focus::Suggestions => self.handle_suggestions_key(key, now),
            Focus::Filters | Focus::Results => false,
        };
        if consumed {
            return false;
        }

        match action {
            Some(action) => self.dispatch(action, now),
            None => false,
        }
    }

    /// Text editing while the search field has focus. Returns true if the
    /// key was consumed.
    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let state = &mut self.app_state;
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match key.code {
            KeyCode::Char(ch) if plain => state.insert_char(now, ch),
            KeyCode::Char('w') if key.modifiers == KeyModifiers::CONTROL => state.delete_word(now),
            KeyCode::Backspace => state.backspace(now),
            KeyCode::Delete => state.delete(now),
            KeyCode::Left => state.cursor_left(),
            KeyCode::Right => state.cursor_right(),
            KeyCode::Home => state.cursor_home(),
            KeyCode::End => state.cursor_end(),
            KeyCode::Down => state.enter_suggestions(),
            KeyCode::Enter => state.focus = Focus::Results,
            _ => return false,
        }
        true
    }

    /// Navigation inside the suggestions list. Typing returns to the field.
    fn handle_suggestions_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let state = &mut self.app_state;
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match key.code {
            KeyCode::Up => state.suggestion_up(),
            KeyCode::Down => state.suggestion_down(),
            KeyCode::Enter => state.select_suggestion(now),
            KeyCode::Char(ch) if plain => {
                state.focus_input();
                state.insert_char(now, ch);
            }
            KeyCode::Backspace => {
                state.focus_input();
                state.backspace(now);
            }
            _ => return false,
        }
        true
    }

    /// Apply a bound action. Returns true if the app should quit.
    fn dispatch(&mut self, action: KeyAction, now: Instant) -> bool {
        let focus = self.app_state.focus;
        let state = &mut self.app_state;

        match action {
            KeyAction::Quit => return true,
            KeyAction::FocusSearch => state.focus_input(),
            KeyAction::CycleFocus => state.cycle_focus(),
            KeyAction::CycleFocusBack => state.cycle_focus_back(),
            KeyAction::Escape => state.escape(),
            KeyAction::ClearAll => state.clear(now),
            KeyAction::ToggleFilters => state.toggle_filters(),
            KeyAction::CycleSort => state.cycle_sort(now),
            KeyAction::MoveLeft if focus == Focus::Filters => state.chip_left(),
            KeyAction::MoveRight if focus == Focus::Filters => state.chip_right(),
            KeyAction::Select if focus == Focus::Filters => state.toggle_chip(now),
            KeyAction::MoveUp if focus == Focus::Results => state.scroll_up(1),
            KeyAction::MoveDown if focus == Focus::Results => {
                state.scroll_down(1);
                self.clamp_scroll();
            }
            KeyAction::PageUp => {
                let page = self.page_rows();
                self.app_state.scroll_up(page);
            }
            KeyAction::PageDown => {
                let page = self.page_rows();
                self.app_state.scroll_down(page);
                self.clamp_scroll();
            }
            KeyAction::ScrollToTop => state.results_scroll = 0,
            KeyAction::ScrollToBottom => {
                state.results_scroll = usize::MAX;
                self.clamp_scroll();
            }
            KeyAction::MoveUp
            | KeyAction::MoveDown
            | KeyAction::MoveLeft
            | KeyAction::MoveRight
            | KeyAction::Select => {}
        }
        false
    }

    /// Current frame area, falling back to 80x24 if the backend cannot report it.
    fn frame_area(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        }
    }

    fn results_area(&self) -> Rect {
        self.last_results_area
            .unwrap_or_else(|| compute_areas(self.frame_area(), &self.app_state).results)
    }

    fn page_rows(&self) -> usize {
        results::page_rows(self.results_area())
    }

    fn clamp_scroll(&mut self) {
        let max = results::max_scroll(self.app_state.search.result_count(), self.results_area());
        self.app_state.clamp_scroll(max);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let areas = compute_areas(self.frame_area(), &self.app_state);
        self.last_results_area = Some(areas.results);
        self.clamp_scroll();

        let state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, theme);
        })?;

        Ok(())
    }

    /// Cancel pending work. Called once when the application tears down.
    fn shutdown(&mut self) {
        self.app_state.search.shutdown();
        info!("Search view shut down");
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::with_terminal(terminal, app_state, KeyBindings::default(), Theme::default())
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}


// ===== Terminal lifecycle =====

/// Scoped terminal acquisition.
///
/// Enables raw mode and enters the alternate screen; both are released when
/// the guard is dropped, including on early return or panic unwinding.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enable raw mode and enter the alternate screen.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = io::stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { active: true })
    }

    /// Restore the terminal now, reporting failures.
    pub fn release(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Initialize and run the TUI application.
///
/// Acquires the terminal, runs the event loop, then cancels any pending
/// search and restores the terminal, whether the loop succeeded or not.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, theme: Theme) -> Result<(), TuiError> {
    let guard = TerminalGuard::acquire()?;
    let mut app = TuiApp::new(app_state, theme)?;

    let result = app.run();

    app.shutdown();
    guard.release()?;
    result
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
