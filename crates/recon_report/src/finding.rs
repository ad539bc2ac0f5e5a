//! Canonical finding.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One detected technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Technology name, e.g. `Nginx`
    pub name: String,
    /// Detected version, empty when the tool could not tell
    pub version: String,
    /// Detection confidence as reported by the tool
    pub confidence: i64,
    /// Category tags in the order the tool listed them
    pub categories: IndexSet<Category>,
}

impl Finding {
    /// Create a finding without categories
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, confidence: i64) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            confidence,
            categories: IndexSet::new(),
        }
    }

    /// Add categories, keeping first-seen order
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }
}
