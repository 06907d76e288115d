//! Application state (pure core).
//!
//! Nothing in this module touches the terminal or reads the clock. Time is
//! passed in by the event loop, which keeps every transition deterministic.

pub mod app_state;
pub mod debounce;
pub mod search;
pub mod search_input_handler;
pub mod search_view;

pub use app_state::{AppState, Focus, SuggestionItem, DEFAULT_SUGGESTIONS};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use search::SearchState;
pub use search_input_handler::InputBuffer;
pub use search_view::SearchView;
