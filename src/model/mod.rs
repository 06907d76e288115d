//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod dataset;
pub mod error;
pub mod key_action;
pub mod record;
pub mod sort_mode;

// Re-export for convenience
pub use dataset::Dataset;
pub use error::{AppError, DatasetError, SearchError};
pub use key_action::KeyAction;
pub use record::{InvalidRating, Rating, Record, RecordId, MAX_RATING};
pub use sort_mode::SortMode;
