//! Searchable records and their rating.
//!
//! Records are immutable once loaded. Field validation that spans records
//! (unique ids) lives in [`crate::model::Dataset`]; per-field validation
//! (rating range) lives here in smart constructors.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

// ===== RecordId =====

/// Unique identifier of a record within its dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    /// Wrap a raw id.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== Rating =====

/// Upper bound of the rating scale.
pub const MAX_RATING: f32 = 5.0;

/// Rating outside `[0, 5]` or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("rating {0} is outside the range 0.0..=5.0")]
pub struct InvalidRating(pub f32);

/// A rating in `[0, 5]`. NaN is rejected so ratings are totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f32);

impl Rating {
    /// Smart constructor: rejects NaN and values outside `[0, 5]`.
    pub fn new(value: f32) -> Result<Self, InvalidRating> {
        if (0.0..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating(value))
        }
    }

    /// The rating as a number in `0.0..=5.0`.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Ratings arrive either as numbers or as pre-formatted strings ("4.3").
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n,
            Raw::Text(s) => s
                .trim()
                .parse::<f32>()
                .map_err(|e| serde::de::Error::custom(format!("rating {s:?}: {e}")))?,
        };
        Rating::new(value).map_err(serde::de::Error::custom)
    }
}

// ===== Record =====

/// One searchable item of the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Unique within the dataset.
    pub id: RecordId,
    /// Display title, matched by the search query.
    pub title: String,
    /// Author handle, matched by the search query.
    pub author: String,
    /// Facet tags in display order. Never empty.
    pub tags: Vec<String>,
    /// Short description shown on the card.
    pub excerpt: String,
    /// Missing ratings sort below every present rating.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Opaque image reference shown on the card.
    pub image: String,
}

impl Record {
    /// Sort key for rating order. Missing ratings map to negative infinity.
    pub fn rating_key(&self) -> f32 {
        self.rating.map_or(f32::NEG_INFINITY, Rating::value)
    }

    /// True when the record carries `tag` (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(rating: &str) -> String {
        format!(
            r#"{{"id": 7, "title": "T", "author": "a", "tags": ["UI"],
                "excerpt": "e", "image": "/i.jpg"{rating}}}"#
        )
    }

    #[test]
    fn rating_accepts_bounds() {
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
        assert!(Rating::new(2.5).is_ok());
    }

    #[test]
    fn rating_rejects_out_of_range_and_nan() {
        assert_eq!(Rating::new(5.1), Err(InvalidRating(5.1)));
        assert_eq!(Rating::new(-0.5), Err(InvalidRating(-0.5)));
        assert!(Rating::new(f32::NAN).is_err());
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(Rating::new(4.0).unwrap().to_string(), "4.0");
        assert_eq!(Rating::new(3.24).unwrap().to_string(), "3.2");
    }

    #[test]
    fn record_deserializes_numeric_rating() {
        let r: Record = serde_json::from_str(&record_json(r#", "rating": 4.5"#)).unwrap();
        assert_eq!(r.id, RecordId::new(7));
        assert_eq!(r.rating, Some(Rating::new(4.5).unwrap()));
    }

    #[test]
    fn record_deserializes_string_rating() {
        let r: Record = serde_json::from_str(&record_json(r#", "rating": "3.8""#)).unwrap();
        assert_eq!(r.rating, Some(Rating::new(3.8).unwrap()));
    }

    #[test]
    fn record_without_rating_sorts_lowest() {
        let r: Record = serde_json::from_str(&record_json("")).unwrap();
        assert_eq!(r.rating, None);
        assert_eq!(r.rating_key(), f32::NEG_INFINITY);

        let null: Record = serde_json::from_str(&record_json(r#", "rating": null"#)).unwrap();
        assert_eq!(null.rating, None);
    }

    #[test]
    fn record_rejects_out_of_range_rating() {
        let result: Result<Record, _> = serde_json::from_str(&record_json(r#", "rating": 9"#));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("outside the range"), "got: {err}");
    }

    #[test]
    fn has_tag_is_exact_match() {
        let r: Record = serde_json::from_str(&record_json("")).unwrap();
        assert!(r.has_tag("UI"));
        assert!(!r.has_tag("ui"));
    }
}
