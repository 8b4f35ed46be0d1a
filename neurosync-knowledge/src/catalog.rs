//! Catalog loading and flattening.
//!
//! The catalog is a JSON object mapping category names to activity lists.
//! A missing or malformed catalog is a configuration error: startup aborts,
//! nothing tries to recover.

use std::collections::BTreeMap;
use std::path::Path;

use neurosync_core::constants::CRISIS_RESOURCES_CATEGORY;
use neurosync_core::errors::{KnowledgeError, NeuroResult};
use neurosync_core::models::Activity;
use tracing::info;

/// The raw activity catalog, grouped by category.
///
/// Categories iterate in lexicographic order, which fixes the insertion
/// order that similarity ties fall back to.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<Activity>>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> NeuroResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| KnowledgeError::CatalogNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(input: &str) -> NeuroResult<Self> {
        let categories: BTreeMap<String, Vec<Activity>> =
            serde_json::from_str(input).map_err(|e| KnowledgeError::CatalogMalformed {
                reason: e.to_string(),
            })?;

        for (category, activities) in &categories {
            for activity in activities {
                if activity.name.is_empty() {
                    return Err(KnowledgeError::InvalidEntry {
                        category: category.clone(),
                        reason: "activity has an empty name".to_string(),
                    }
                    .into());
                }
            }
        }

        info!(categories = categories.len(), "knowledge catalog loaded");
        Ok(Self { categories })
    }

    /// Number of categories, the reserved one included.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Flatten into a single activity list with category tags attached.
    ///
    /// The reserved `crisis_resources` category is never surfaced by
    /// retrieval and is skipped here.
    pub fn flatten(&self) -> Vec<Activity> {
        let mut activities = Vec::new();
        for (category, items) in &self.categories {
            if category == CRISIS_RESOURCES_CATEGORY {
                continue;
            }
            for item in items {
                let mut activity = item.clone();
                activity.category = category.clone();
                activities.push(activity);
            }
        }
        info!(activities = activities.len(), "catalog flattened for retrieval");
        activities
    }
}
