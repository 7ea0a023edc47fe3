use serde::{Deserialize, Serialize};

/// Canonical skill categories offered in the filter modal
pub const SKILL_CATEGORIES: [&str; 10] = [
    "Technology",
    "Creative",
    "Education",
    "Home & DIY",
    "Business",
    "Cooking",
    "Fitness",
    "Languages",
    "Music",
    "Arts & Crafts",
];

/// Fixed enumeration of availability windows candidates self-report
pub const AVAILABILITY_TAGS: [&str; 5] = ["Weekdays", "Weekends", "Evenings", "Mornings", "Flexible"];

/// Default distance cap in miles
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 50.0;

/// The combined set of active filter/search parameters
///
/// A criteria value is built wholesale by the presentation layer and handed
/// to the evaluator; it is never partially mutated mid-evaluation. Empty
/// `search_term`, `categories`, or `availability` mean "no filtering on that
/// dimension".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(rename = "maxDistance", default = "default_max_distance")]
    pub max_distance_miles: f64,
    #[serde(default)]
    pub availability: Vec<String>,
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE_MILES
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            categories: Vec::new(),
            max_distance_miles: DEFAULT_MAX_DISTANCE_MILES,
            availability: Vec::new(),
        }
    }
}

impl FilterCriteria {
    /// Add the category if absent, remove it if present (filter chip toggle)
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Add the availability tag if absent, remove it if present
    pub fn toggle_availability(&mut self, tag: &str) {
        if let Some(pos) = self.availability.iter().position(|t| t == tag) {
            self.availability.remove(pos);
        } else {
            self.availability.push(tag.to_string());
        }
    }

    /// Whether any category or availability filters are selected
    ///
    /// Drives the "Active Filters" chip row; the search term and distance cap
    /// do not count.
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty() || !self.availability.is_empty()
    }
}
