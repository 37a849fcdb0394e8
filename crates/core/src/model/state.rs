use serde::{Deserialize, Serialize};

/// The sentinel key a chip uses to clear the category filter.
pub const ALL_KEY: &str = "all";

/// Active category filter: everything, or one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Build a filter from a chip's key. `"all"` is the sentinel; any other
    /// string is a category key (any configured category is legal).
    pub fn from_key(key: &str) -> Self {
        if key == ALL_KEY {
            Filter::All
        } else {
            Filter::Category(key.to_owned())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Filter::All => ALL_KEY,
            Filter::Category(key) => key,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

/// The page's single query state. Mutated only by the input adapters; read
/// synchronously by every render, so no render ever observes a stale value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub filter: Filter,
    /// Raw search-box value; normalization happens at match time.
    pub query: String,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chip activation adapter. Infallible by design.
    pub fn set_filter(&mut self, key: &str) {
        self.filter = Filter::from_key(key);
    }

    /// Search-box adapter. A missing control value maps to the empty string.
    pub fn set_query(&mut self, value: Option<&str>) {
        self.query = value.unwrap_or_default().to_owned();
    }

    /// Trimmed, lower-cased query used for matching. Empty means the text
    /// test is vacuously true.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}
