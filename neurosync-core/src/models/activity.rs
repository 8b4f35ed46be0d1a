use serde::{Deserialize, Serialize};

/// A self-help activity from the knowledge catalog.
///
/// Immutable after load. Owned by the `ActivityIndex`; retrieval hands out
/// clones, never mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered instructions; may be empty for free-form activities.
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    /// Tags describing which states this activity helps with.
    #[serde(default)]
    pub best_for: Vec<String>,
    /// Catalog category, attached during flattening.
    #[serde(default)]
    pub category: String,
}

fn default_duration() -> u32 {
    5
}

impl Activity {
    /// Text representation used to place the activity in the TF-IDF space:
    /// name, description, and the `best_for` tags joined by spaces.
    pub fn document_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.best_for.join(" "))
    }
}
