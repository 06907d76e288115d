//! searchview
//!
//! Terminal search view over a catalog of design records: debounced free-text
//! search, tag filters, sorting, and a grid of result cards.
//!
//! Follows a Pure Core / Impure Shell split. `model`, `filter`, and `state`
//! are deterministic (time is passed in as an `Instant`); `view` owns the
//! terminal and the event loop.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
