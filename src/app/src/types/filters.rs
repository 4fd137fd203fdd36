use serde::{Deserialize, Serialize};

/// Category filter value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Listing sort order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending date
    #[default]
    Soonest,
    /// Descending date
    Latest,
    /// Most seats left first
    Availability,
}

impl SortOrder {
    /// Parse a sort control value; unknown values mean the default order.
    pub fn from_value(value: &str) -> Self {
        match value {
            "latest" => Self::Latest,
            "availability" => Self::Availability,
            _ => Self::Soonest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soonest => "soonest",
            Self::Latest => "latest",
            Self::Availability => "availability",
        }
    }
}

/// Current values of the listing page's filter controls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: String,
    /// Calendar date `YYYY-MM-DD`, empty when unset
    pub date: String,
    pub category: String,
    pub sort: SortOrder,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            date: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortOrder::Soonest,
        }
    }
}

impl ListingFilters {
    /// Lowercased, trimmed search term
    pub fn search_term(&self) -> String {
        self.search.trim().to_lowercase()
    }

    pub fn category_filter(&self) -> Option<&str> {
        match self.category.as_str() {
            "" | ALL_CATEGORIES => None,
            category => Some(category),
        }
    }

    pub fn date_filter(&self) -> Option<&str> {
        Some(self.date.as_str()).filter(|date| !date.is_empty())
    }
}
