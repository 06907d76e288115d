//! The immutable record collection a search view runs over.

use super::error::DatasetError;
use super::record::{Rating, Record, RecordId};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Excerpt shared by every record of the sample dataset.
const SAMPLE_EXCERPT: &str = "Beautifully crafted component with micro-interactions and clean \
layout, perfect for modern dashboards.";

const SAMPLE_TITLES: [&str; 4] = [
    "Minimal UI Kit",
    "SaaS Landing",
    "Marketplace Dashboard",
    "Onboarding Flow",
];
const SAMPLE_AUTHORS: [&str; 4] = ["dpz", "dp", "deepz", "deepika"];
const SAMPLE_TAGS: [&str; 4] = ["UI", "Design", "React", "Animation"];
const SAMPLE_IMAGES: [&str; 4] = [
    "/images/ui.jpg",
    "/images/saas.jpg",
    "/images/dashboard.jpg",
    "/images/onboarding.jpg",
];
/// Fixed ratings for the sample records. Ties are intentional.
const SAMPLE_RATINGS: [f32; 12] = [4.5, 3.9, 4.8, 3.9, 2.7, 4.5, 3.1, 4.8, 4.0, 3.9, 1.6, 4.5];

/// Ordered, immutable set of records plus the distinct tags they carry.
///
/// Cloning is cheap: records are shared behind an `Arc`. Nothing exposes
/// mutable access, so every view over the same dataset sees the same order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
    tag_pool: Arc<[String]>,
}

impl Dataset {
    /// Validate records and build the dataset.
    ///
    /// Ids must be unique and every record needs at least one tag.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId { id: record.id });
            }
            if record.tags.is_empty() {
                return Err(DatasetError::MissingTags { id: record.id });
            }
        }

        let tag_pool = collect_tag_pool(&records);
        Ok(Self {
            records: records.into(),
            tag_pool: tag_pool.into(),
        })
    }

    /// Dataset with no records.
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            tag_pool: Arc::from(Vec::new()),
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|e| DatasetError::InvalidJson {
                message: e.to_string(),
            })?;
        Self::new(records)
    }

    /// Read and parse a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            tags = dataset.tag_pool().len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Built-in dataset: 12 records cycling four templates.
    pub fn sample() -> Self {
        let records = (0..SAMPLE_RATINGS.len())
            .map(|i| {
                let t = i % 4;
                Record {
                    id: RecordId::new(i as u32 + 1),
                    title: SAMPLE_TITLES[t].to_string(),
                    author: SAMPLE_AUTHORS[t].to_string(),
                    tags: SAMPLE_TAGS[..=t].iter().map(|s| s.to_string()).collect(),
                    excerpt: SAMPLE_EXCERPT.to_string(),
                    rating: Rating::new(SAMPLE_RATINGS[i]).ok(),
                    image: SAMPLE_IMAGES[t].to_string(),
                }
            })
            .collect::<Vec<_>>();
        let tag_pool = collect_tag_pool(&records);
        Self {
            records: records.into(),
            tag_pool: tag_pool.into(),
        }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct tags across all records, in first-seen order.
    pub fn tag_pool(&self) -> &[String] {
        &self.tag_pool
    }
}

fn collect_tag_pool(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if seen.insert(tag.as_str()) {
            pool.push(tag.clone());
        }
    }
    pool
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
