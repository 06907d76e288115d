//! Search controller: query state, debounce timer, and published results.
//!
//! Every mutation compares the tracked inputs before and after. A change
//! (re)starts the debounce timer; [`SearchView::tick`] runs the filter engine
//! once the timer expires and publishes the new result positions. Between a
//! change and the next publication, `results` still reflects the previous
//! inputs.

use crate::filter;
use crate::model::{Dataset, Record, SearchError, SortMode};
use crate::state::debounce::Debouncer;
use crate::state::search::SearchState;
use std::time::{Duration, Instant};
use tracing::debug;

/// The searchable component's core.
#[derive(Debug, Clone)]
pub struct SearchView {
    dataset: Dataset,
    state: SearchState,
    debouncer: Debouncer,
    /// Positions into `dataset`, in display order.
    results: Vec<usize>,
    filter_runs: u64,
    shut_down: bool,
}

impl SearchView {
    /// Create a view with default inputs. Results start as the whole dataset.
    pub fn new(dataset: Dataset, debounce: Duration) -> Self {
        Self::with_state(dataset, SearchState::new(), debounce)
    }

    /// Create a view with pre-set inputs. Results are computed immediately,
    /// without waiting for the debounce interval.
    pub fn with_state(dataset: Dataset, state: SearchState, debounce: Duration) -> Self {
        let results = filter::filter_indices(
            dataset.records(),
            state.query(),
            state.selected_tags(),
            state.sort_mode(),
        );
        Self {
            dataset,
            state,
            debouncer: Debouncer::new(debounce),
            results,
            filter_runs: 0,
            shut_down: false,
        }
    }

    /// The dataset being searched.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Current query state. May be ahead of the published results.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.state.query()
    }

    /// Current sort mode.
    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode()
    }

    /// Distinct dataset tags, computed once at dataset construction.
    pub fn tag_pool(&self) -> &[String] {
        self.dataset.tag_pool()
    }

    /// Published results, in display order.
    pub fn results(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.results.iter().map(|&i| &self.dataset.records()[i])
    }

    /// Published results as dataset positions.
    pub fn result_positions(&self) -> &[usize] {
        &self.results
    }

    /// Number of published results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// True when the published result list is empty.
    pub fn is_empty_result(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of times the filter engine ran after construction.
    pub fn filter_runs(&self) -> u64 {
        self.filter_runs
    }

    /// True when a recomputation is scheduled but has not run yet.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time left before the pending recomputation, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// True once `shutdown` has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    // ===== Mutations =====

    /// Replace the query and restart the debounce timer if it changed.
    pub fn set_query(&mut self, now: Instant, text: impl Into<String>) {
        let text = text.into();
        self.mutate(now, |s| s.set_query(text));
    }

    /// Toggle a tag filter and restart the debounce timer.
    pub fn toggle_tag(&mut self, now: Instant, tag: &str) {
        self.mutate(now, |s| s.toggle_tag(tag));
    }

    /// Set the sort mode and restart the debounce timer if it changed.
    pub fn set_sort_mode(&mut self, now: Instant, mode: SortMode) {
        self.mutate(now, |s| s.set_sort_mode(mode));
    }

    /// Set the sort mode by name. Unknown names change nothing.
    pub fn select_sort_mode(&mut self, now: Instant, name: &str) -> Result<(), SearchError> {
        let mode: SortMode = name.parse()?;
        self.set_sort_mode(now, mode);
        Ok(())
    }

    /// Reset query, tags, and sort mode.
    pub fn clear(&mut self, now: Instant) {
        self.mutate(now, SearchState::clear);
    }

    fn mutate(&mut self, now: Instant, f: impl FnOnce(&mut SearchState)) {
        if self.shut_down {
            return;
        }
        let before = self.state.clone();
        f(&mut self.state);
        if self.state != before {
            let superseded = self.debouncer.schedule(now);
            debug!(
                query = self.state.query(),
                tags = ?self.state.selected_tags(),
                sort = %self.state.sort_mode(),
                superseded,
                "Search recomputation scheduled"
            );
        }
    }

    // ===== Timer =====

    /// Run the filter engine if the debounce interval has elapsed.
    ///
    /// Returns `true` when new results were published.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.shut_down || !self.debouncer.fire_if_due(now) {
            return false;
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.results = filter::filter_indices(
            self.dataset.records(),
            self.state.query(),
            self.state.selected_tags(),
            self.state.sort_mode(),
        );
        self.filter_runs += 1;
        debug!(
            results = self.results.len(),
            runs = self.filter_runs,
            "Search results published"
        );
    }

    /// Cancel any pending recomputation. After shutdown the view never runs
    /// the filter engine again and ignores further mutations.
    pub fn shutdown(&mut self) {
        if self.debouncer.cancel() {
            debug!("Pending search recomputation canceled on shutdown");
        }
        self.shut_down = true;
    }
}

#[cfg(test)]
#[path = "search_view_tests.rs"]
mod tests;
