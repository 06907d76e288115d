//! Tests for TuiApp key dispatch and rendering.

use super::*;
use crate::model::{Dataset, SortMode};
use crate::state::{SearchView, DEFAULT_DEBOUNCE, DEFAULT_SUGGESTIONS};
use crate::view::test_support::buffer_to_string;
use ratatui::backend::TestBackend;

// ===== Test Helpers =====

fn create_test_app(width: u16, height: u16) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let search = SearchView::new(Dataset::sample(), DEFAULT_DEBOUNCE);
    let suggestions = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    TuiApp::new_for_test(terminal, AppState::new(search, suggestions))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str, now: Instant) {
    for ch in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch)), now));
    }
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.draw().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

const AFTER_DEBOUNCE: Duration = Duration::from_millis(300);

// ===== Quitting =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn ctrl_c_quits_even_while_typing() {
    let mut app = create_test_app(100, 30);
    assert_eq!(app.app_state().focus, Focus::Input);
    assert!(app.handle_key(ctrl('c'), Instant::now()));
}

#[test]
fn q_is_typed_into_focused_search_field() {
    let mut app = create_test_app(100, 30);
    assert!(!app.handle_key(key(KeyCode::Char('q')), Instant::now()));
    assert_eq!(app.app_state().search.query(), "q");
}

#[test]
fn q_quits_when_search_field_is_blurred() {
    let mut app = create_test_app(100, 30);
    app.handle_key(key(KeyCode::Esc), Instant::now());
    assert!(app.handle_key(key(KeyCode::Char('q')), Instant::now()));
}

#[test]
fn key_release_events_are_ignored() {
    let mut app = create_test_app(100, 30);
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    assert!(!app.handle_key(release, Instant::now()));
    assert_eq!(app.app_state().search.query(), "");
}

// ===== Typing and debounce =====

#[test]
fn typing_defers_results_until_debounce_elapses() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    type_text(&mut app, "saas", t0);

    assert_eq!(app.app_state().search.result_count(), 12);
    assert!(!app.app_state.tick(t0 + Duration::from_millis(100)));
    assert!(app.app_state.tick(t0 + AFTER_DEBOUNCE));
    assert_eq!(app.app_state().search.result_positions(), &[1, 5, 9]);
}

#[test]
fn poll_timeout_tracks_pending_deadline() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    assert_eq!(app.poll_timeout(t0), IDLE_TICK);

    type_text(&mut app, "d", t0);
    let timeout = app.poll_timeout(t0 + Duration::from_millis(100));
    assert_eq!(timeout, DEFAULT_DEBOUNCE - Duration::from_millis(100));
}

#[test]
fn uppercase_letters_are_typed() {
    let mut app = create_test_app(100, 30);
    let shifted = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
    app.handle_key(shifted, Instant::now());
    assert_eq!(app.app_state().search.query(), "S");
}

#[test]
fn editing_keys_move_cursor_and_delete() {
    let mut app = create_test_app(100, 30);
    let now = Instant::now();
    type_text(&mut app, "auth flow", now);
    app.handle_key(ctrl('w'), now);
    assert_eq!(app.app_state().search.query(), "auth ");
    app.handle_key(key(KeyCode::Home), now);
    app.handle_key(key(KeyCode::Delete), now);
    assert_eq!(app.app_state().search.query(), "uth ");
    app.handle_key(key(KeyCode::End), now);
    app.handle_key(key(KeyCode::Backspace), now);
    assert_eq!(app.app_state().search.query(), "uth");
}

// ===== Global Esc =====

#[test]
fn esc_blurs_input_and_closes_filters() {
    let mut app = create_test_app(100, 30);
    let now = Instant::now();
    app.handle_key(ctrl('o'), now);
    assert!(app.app_state().filters_open);

    app.handle_key(key(KeyCode::Char('/')), now);
    assert_eq!(app.app_state().focus, Focus::Input);

    app.handle_key(key(KeyCode::Esc), now);
    assert_eq!(app.app_state().focus, Focus::Results);
    assert!(!app.app_state().filters_open);
}

#[test]
fn esc_from_suggestions_also_blurs() {
    let mut app = create_test_app(100, 30);
    app.handle_key(key(KeyCode::Down), Instant::now());
    assert_eq!(app.app_state().focus, Focus::Suggestions);
    app.handle_key(key(KeyCode::Esc), Instant::now());
    assert_eq!(app.app_state().focus, Focus::Results);
}

// ===== Suggestions =====

#[test]
fn enter_on_suggestion_sets_query() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    app.handle_key(key(KeyCode::Down), t0);
    app.handle_key(key(KeyCode::Enter), t0);

    assert_eq!(app.app_state().search.query(), "Dashboard");
    assert_eq!(app.app_state().focus, Focus::Input);
    app.app_state.tick(t0 + AFTER_DEBOUNCE);
    assert_eq!(app.app_state().search.result_positions(), &[2, 6, 10]);
}

#[test]
fn up_past_clear_row_returns_to_input() {
    let mut app = create_test_app(100, 30);
    let now = Instant::now();
    app.handle_key(key(KeyCode::Down), now);
    app.handle_key(key(KeyCode::Up), now);
    assert_eq!(app.app_state().focus, Focus::Suggestions);
    app.handle_key(key(KeyCode::Up), now);
    assert_eq!(app.app_state().focus, Focus::Input);
}

#[test]
fn typing_in_suggestions_returns_to_field() {
    let mut app = create_test_app(100, 30);
    let now = Instant::now();
    app.handle_key(key(KeyCode::Down), now);
    app.handle_key(key(KeyCode::Char('x')), now);
    assert_eq!(app.app_state().focus, Focus::Input);
    assert_eq!(app.app_state().search.query(), "x");
}

// ===== Filters and sort =====

#[test]
fn filter_chips_toggle_with_arrows_and_space() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    app.handle_key(ctrl('o'), t0);
    assert_eq!(app.app_state().focus, Focus::Filters);

    app.handle_key(key(KeyCode::Right), t0);
    app.handle_key(key(KeyCode::Right), t0);
    app.handle_key(key(KeyCode::Right), t0);
    app.handle_key(key(KeyCode::Char(' ')), t0);
    assert!(app.app_state().search.state().is_tag_selected("Animation"));

    app.app_state.tick(t0 + AFTER_DEBOUNCE);
    assert_eq!(app.app_state().search.result_positions(), &[3, 7, 11]);
}

#[test]
fn s_cycles_sort_outside_the_search_field() {
    let mut app = create_test_app(100, 30);
    let now = Instant::now();
    app.handle_key(key(KeyCode::Esc), now);
    app.handle_key(key(KeyCode::Char('s')), now);
    assert_eq!(app.app_state().search.sort_mode(), SortMode::RatingDescending);
    app.handle_key(key(KeyCode::Char('s')), now);
    assert_eq!(app.app_state().search.sort_mode(), SortMode::Relevance);
}

#[test]
fn ctrl_l_resets_everything() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    type_text(&mut app, "dp", t0);
    app.handle_key(key(KeyCode::Esc), t0);
    app.handle_key(key(KeyCode::Char('s')), t0);

    app.handle_key(ctrl('l'), t0);
    assert!(app.app_state().search.state().is_default());
    assert_eq!(app.app_state().focus, Focus::Input);
}

// ===== Scrolling =====

#[test]
fn scrolling_is_clamped_to_last_row() {
    // 60 wide: one column, 12 rows of cards.
    let mut app = create_test_app(60, 30);
    let now = Instant::now();
    app.handle_key(key(KeyCode::Esc), now);
    app.draw().unwrap();

    app.handle_key(key(KeyCode::Char('G')), now);
    let bottom = app.app_state().results_scroll;
    assert!(bottom > 0);

    app.handle_key(key(KeyCode::Char('j')), now);
    assert_eq!(app.app_state().results_scroll, bottom);

    app.handle_key(key(KeyCode::Char('g')), now);
    assert_eq!(app.app_state().results_scroll, 0);
}

#[test]
fn page_down_moves_by_visible_rows() {
    let mut app = create_test_app(60, 30);
    let now = Instant::now();
    app.handle_key(key(KeyCode::Esc), now);
    app.draw().unwrap();

    app.handle_key(key(KeyCode::PageDown), now);
    let page = app.app_state().results_scroll;
    assert!(page >= 1);
    app.handle_key(key(KeyCode::PageUp), now);
    assert_eq!(app.app_state().results_scroll, 0);
}

// ===== Rendering =====

#[test]
fn clear_glyph_only_shown_for_non_empty_query() {
    let mut app = create_test_app(100, 30);
    assert!(!screen(&mut app).contains(CLEAR_GLYPH));

    type_text(&mut app, "ui", Instant::now());
    assert!(screen(&mut app).contains(CLEAR_GLYPH));
}

#[test]
fn suggestions_visible_only_while_input_focused() {
    let mut app = create_test_app(100, 30);
    assert!(screen(&mut app).contains(SUGGESTIONS_HEADER));

    app.handle_key(key(KeyCode::Esc), Instant::now());
    assert!(!screen(&mut app).contains(SUGGESTIONS_HEADER));
}

#[test]
fn empty_state_rendered_after_debounce() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    type_text(&mut app, "zzz", t0);
    app.handle_key(key(KeyCode::Esc), t0);
    assert!(!screen(&mut app).contains(EMPTY_STATE_MESSAGE));

    app.app_state.tick(t0 + AFTER_DEBOUNCE);
    assert!(screen(&mut app).contains(EMPTY_STATE_MESSAGE));
}

#[test]
fn shutdown_cancels_pending_search() {
    let mut app = create_test_app(100, 30);
    let t0 = Instant::now();
    type_text(&mut app, "react", t0);
    assert!(app.app_state().search.is_pending());

    app.shutdown();
    assert!(!app.app_state().search.is_pending());
    assert!(!app.app_state.tick(t0 + AFTER_DEBOUNCE));
    assert_eq!(app.app_state().search.result_count(), 12);
}

#[test]
fn tui_error_converts_to_terminal_app_error() {
    let err: AppError = TuiError::Io(io::Error::other("gone")).into();
    assert!(matches!(err, AppError::Terminal(_)));
    assert!(err.to_string().starts_with("Terminal error:"));
}
