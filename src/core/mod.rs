// Core engine exports
pub mod criteria;
pub mod evaluator;
pub mod timeago;

pub use criteria::{FilterCriteria, AVAILABILITY_TAGS, DEFAULT_MAX_DISTANCE_MILES, SKILL_CATEGORIES};
pub use evaluator::{filter_candidates, matches_availability, matches_category, matches_criteria, matches_search, within_distance};
pub use timeago::{clock_label, time_ago};
