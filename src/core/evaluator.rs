use crate::core::FilterCriteria;
use crate::models::Candidate;

/// Check if a candidate matches a free-text search term
///
/// `term` must already be lowercased; an empty term matches everything.
/// The term is looked up as a substring of name, skills, description, and
/// category.
#[inline]
pub fn matches_search(candidate: &Candidate, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    candidate.skill_offered.to_lowercase().contains(term)
        || candidate.skill_needed.to_lowercase().contains(term)
        || candidate.name.to_lowercase().contains(term)
        || candidate.description.to_lowercase().contains(term)
        || candidate.category.to_lowercase().contains(term)
}

/// Check if a candidate's category is among the selected ones
///
/// An empty selection passes every candidate.
#[inline]
pub fn matches_category(candidate: &Candidate, categories: &[String]) -> bool {
    categories.is_empty() || categories.iter().any(|c| c == &candidate.category)
}

/// Check if a candidate is within the distance cap
///
/// A negative or non-finite cap excludes every candidate; callers are
/// expected to prevent such values, but malformed criteria never raise.
#[inline]
pub fn within_distance(candidate: &Candidate, max_distance_miles: f64) -> bool {
    max_distance_miles.is_finite()
        && max_distance_miles >= 0.0
        && candidate.distance_miles <= max_distance_miles
}

/// Check if a candidate's availability overlaps the selected tags
///
/// OR semantics: any shared tag passes. An empty selection passes every
/// candidate; unrecognized tags in the selection simply never intersect.
#[inline]
pub fn matches_availability(candidate: &Candidate, tags: &[String]) -> bool {
    tags.is_empty() || candidate.availability.iter().any(|a| tags.contains(a))
}

/// Check if a candidate satisfies every active criterion (logical AND)
pub fn matches_criteria(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term.to_lowercase();

    matches_search(candidate, &term)
        && matches_category(candidate, &criteria.categories)
        && within_distance(candidate, criteria.max_distance_miles)
        && matches_availability(candidate, &criteria.availability)
}

/// Filter an ordered candidate sequence through the active criteria
///
/// Pure and stateless: inputs are never mutated, surviving candidates keep
/// their relative order, and the same inputs always produce the same output.
/// Runs in a single O(n) pass over the candidates.
pub fn filter_candidates(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    let term = criteria.search_term.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| {
            matches_search(candidate, &term)
                && matches_category(candidate, &criteria.categories)
                && within_distance(candidate, criteria.max_distance_miles)
                && matches_availability(candidate, &criteria.availability)
        })
        .cloned()
        .collect()
}
