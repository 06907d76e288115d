//! Query state holder.
//!
//! Owns the three tracked inputs of a search: free-text query, selected tag
//! set, and sort mode. Mutations are plain setters; derived results live in
//! [`crate::state::SearchView`].

use crate::model::{SearchError, SortMode};
use std::collections::BTreeSet;

/// Tracked search inputs. Two states compare equal when a recomputation
/// would produce the same results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    selected_tags: BTreeSet<String>,
    sort_mode: SortMode,
}

impl SearchState {
    /// Defaults: empty query, no tags, Relevance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Tags a record must all carry.
    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    /// Current result ordering.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// True when `tag` is selected.
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Replace the query verbatim. Trimming happens in the filter engine.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Add the tag if absent, remove it if present.
    ///
    /// Any string is accepted. A tag no record carries can never match.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Replace the sort mode.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Set the sort mode from its textual name.
    ///
    /// Unknown names are rejected and leave the current mode untouched.
    pub fn select_sort_mode(&mut self, name: &str) -> Result<(), SearchError> {
        self.sort_mode = name.parse()?;
        Ok(())
    }

    /// Reset every field to its default. Idempotent.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tags.clear();
        self.sort_mode = SortMode::Relevance;
    }

    /// True when every field holds its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
