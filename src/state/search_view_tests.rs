//! Tests for the search controller.

use super::*;

const INTERVAL: Duration = Duration::from_millis(220);

fn view() -> SearchView {
    SearchView::new(Dataset::sample(), INTERVAL)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn ids(view: &SearchView) -> Vec<u32> {
    view.results().map(|r| r.id.get()).collect()
}

// ===== construction =====

#[test]
fn new_view_shows_whole_dataset() {
    let v = view();
    assert_eq!(v.result_positions(), (0..12).collect::<Vec<_>>());
    assert_eq!(v.filter_runs(), 0);
    assert!(!v.is_pending());
}

#[test]
fn with_state_computes_results_immediately() {
    let mut state = SearchState::new();
    state.set_query("saas");
    let v = SearchView::with_state(Dataset::sample(), state, INTERVAL);
    assert_eq!(v.result_positions(), [1, 5, 9]);
    assert!(!v.is_pending());
}

// ===== debounce =====

#[test]
fn results_update_only_after_interval() {
    let mut v = view();
    let t0 = Instant::now();
    v.set_query(t0, "saas");

    assert!(v.is_pending());
    assert!(!v.tick(t0 + ms(219)));
    assert_eq!(v.result_count(), 12, "stale results until the timer fires");

    assert!(v.tick(t0 + ms(220)));
    assert_eq!(v.result_positions(), [1, 5, 9]);
    assert_eq!(v.filter_runs(), 1);
}

#[test]
fn rapid_changes_coalesce_into_one_run() {
    let mut v = view();
    let t0 = Instant::now();
    let mut t = t0;
    for prefix in ["s", "sa", "saa", "saas"] {
        v.set_query(t, prefix);
        assert!(!v.tick(t));
        t += ms(100);
    }
    v.toggle_tag(t, "Design");

    assert!(!v.tick(t + ms(219)));
    assert!(v.tick(t + ms(220)));
    assert_eq!(v.filter_runs(), 1);
    // Uses the state present when the timer fired.
    assert_eq!(v.result_positions(), [1, 5, 9]);
}

#[test]
fn unchanged_input_does_not_schedule() {
    let mut v = view();
    let t0 = Instant::now();
    v.set_query(t0, "");
    v.set_sort_mode(t0, SortMode::Relevance);
    v.clear(t0);
    assert!(!v.is_pending());
}

#[test]
fn sort_and_tag_changes_are_tracked() {
    let mut v = view();
    let t0 = Instant::now();

    v.set_sort_mode(t0, SortMode::RatingDescending);
    assert!(v.is_pending());
    v.tick(t0 + INTERVAL);
    assert_eq!(v.result_positions(), [2, 7, 0, 5, 11, 8, 1, 3, 9, 6, 4, 10]);

    v.toggle_tag(t0 + INTERVAL, "Animation");
    assert!(v.is_pending());
    v.tick(t0 + INTERVAL * 2);
    assert_eq!(v.result_positions(), [7, 11, 3]);
}

#[test]
fn toggling_back_before_timer_still_recomputes_once() {
    let mut v = view();
    let t0 = Instant::now();
    v.toggle_tag(t0, "UI");
    v.toggle_tag(t0 + ms(10), "UI");
    assert!(v.is_pending());
    assert!(v.tick(t0 + ms(230)));
    assert_eq!(v.filter_runs(), 1);
    assert_eq!(v.result_count(), 12);
}

#[test]
fn time_until_due_reports_remaining_interval() {
    let mut v = view();
    let t0 = Instant::now();
    assert_eq!(v.time_until_due(t0), None);
    v.set_query(t0, "x");
    assert_eq!(v.time_until_due(t0 + ms(20)), Some(ms(200)));
}

// ===== sort mode boundary =====

#[test]
fn select_sort_mode_rejects_unknown_name() {
    let mut v = view();
    let t0 = Instant::now();
    let err = v.select_sort_mode(t0, "alphabetical").unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidSortMode {
            value: "alphabetical".to_string()
        }
    );
    assert_eq!(v.sort_mode(), SortMode::Relevance);
    assert!(!v.is_pending());
}

#[test]
fn select_sort_mode_accepts_rating() {
    let mut v = view();
    let t0 = Instant::now();
    v.select_sort_mode(t0, "rating").unwrap();
    assert_eq!(v.sort_mode(), SortMode::RatingDescending);
    assert!(v.is_pending());
}

// ===== clear =====

#[test]
fn clear_restores_full_dataset_order() {
    let mut v = view();
    let t0 = Instant::now();
    v.set_query(t0, "react");
    v.toggle_tag(t0, "UI");
    v.set_sort_mode(t0, SortMode::RatingDescending);
    v.tick(t0 + INTERVAL);
    assert_ne!(v.result_count(), 12);

    let t1 = t0 + INTERVAL;
    v.clear(t1);
    assert!(v.state().is_default());
    v.tick(t1 + INTERVAL);
    assert_eq!(ids(&v), (1..=12).collect::<Vec<_>>());
}

// ===== empty state =====

#[test]
fn no_match_publishes_empty_result() {
    let mut v = view();
    let t0 = Instant::now();
    v.set_query(t0, "zzz_no_match");
    v.tick(t0 + INTERVAL);
    assert!(v.is_empty_result());
    assert_eq!(v.results().len(), 0);
}

#[test]
fn empty_dataset_is_empty_without_error() {
    let mut v = SearchView::new(Dataset::empty(), INTERVAL);
    assert!(v.is_empty_result());
    let t0 = Instant::now();
    v.set_query(t0, "x");
    assert!(v.tick(t0 + INTERVAL));
    assert!(v.is_empty_result());
}

// ===== shutdown =====

#[test]
fn shutdown_cancels_pending_run() {
    let mut v = view();
    let t0 = Instant::now();
    v.set_query(t0, "saas");
    v.shutdown();

    assert!(!v.is_pending());
    assert!(!v.tick(t0 + Duration::from_secs(5)));
    assert_eq!(v.filter_runs(), 0);
    assert_eq!(v.result_count(), 12);
}

#[test]
fn shutdown_ignores_later_mutations() {
    let mut v = view();
    v.shutdown();
    let t0 = Instant::now();
    v.set_query(t0, "saas");
    assert!(!v.is_pending());
    assert_eq!(v.query(), "");
    assert!(v.is_shut_down());
}

// ===== dataset immutability =====

#[test]
fn sorting_never_reorders_dataset() {
    let dataset = Dataset::sample();
    let mut v = SearchView::new(dataset.clone(), INTERVAL);
    let t0 = Instant::now();
    v.set_sort_mode(t0, SortMode::RatingDescending);
    v.tick(t0 + INTERVAL);

    let order: Vec<u32> = v.dataset().records().iter().map(|r| r.id.get()).collect();
    assert_eq!(order, (1..=12).collect::<Vec<_>>());
    assert!(std::ptr::eq(v.dataset().records(), dataset.records()));
}
