// Unit tests for the SkillSwap engine public API

use chrono::{Duration, TimeZone, Utc};
use skillswap_engine::core::{
    clock_label, filter_candidates, matches_availability, matches_category, matches_criteria,
    matches_search, time_ago, within_distance, FilterCriteria, AVAILABILITY_TAGS,
    SKILL_CATEGORIES,
};
use skillswap_engine::models::{Candidate, SkillLevel};
use skillswap_engine::services::CandidateStore;

fn create_test_candidate(id: &str, distance_miles: f64, category: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        avatar: String::new(),
        distance_miles,
        category: category.to_string(),
        availability: vec!["Weekends".to_string()],
        skill_offered: "Woodworking".to_string(),
        skill_offered_level: SkillLevel::Intermediate,
        skill_needed: "Baking".to_string(),
        skill_needed_level: SkillLevel::Beginner,
        description: "Happy to trade".to_string(),
        rating: 4.0,
        review_count: 5,
    }
}

#[test]
fn test_identity_under_defaults() {
    let store = CandidateStore::with_seed_data();

    let filtered = filter_candidates(store.candidates(), &FilterCriteria::default());

    assert_eq!(filtered, store.candidates());
}

#[test]
fn test_identity_holds_when_max_distance_covers_all() {
    let store = CandidateStore::with_seed_data();
    let farthest = store
        .candidates()
        .iter()
        .map(|c| c.distance_miles)
        .fold(0.0_f64, f64::max);
    let criteria = FilterCriteria {
        max_distance_miles: farthest,
        ..FilterCriteria::default()
    };

    let filtered = filter_candidates(store.candidates(), &criteria);

    assert_eq!(filtered.len(), store.len());
}

#[test]
fn test_negative_distance_yields_empty() {
    let store = CandidateStore::with_seed_data();
    let criteria = FilterCriteria {
        max_distance_miles: -1.0,
        ..FilterCriteria::default()
    };

    assert!(filter_candidates(store.candidates(), &criteria).is_empty());
}

#[test]
fn test_idempotence() {
    let store = CandidateStore::with_seed_data();
    let criteria = FilterCriteria {
        search_term: "design".to_string(),
        categories: vec!["Creative".to_string()],
        ..FilterCriteria::default()
    };

    let first = filter_candidates(store.candidates(), &criteria);
    let second = filter_candidates(store.candidates(), &criteria);

    assert_eq!(first, second);
}

#[test]
fn test_order_preservation() {
    let candidates = vec![
        create_test_candidate("a", 1.0, "Music"),
        create_test_candidate("b", 2.0, "Creative"),
        create_test_candidate("c", 3.0, "Music"),
        create_test_candidate("d", 4.0, "Music"),
    ];
    let criteria = FilterCriteria {
        categories: vec!["Music".to_string()],
        ..FilterCriteria::default()
    };

    let filtered = filter_candidates(&candidates, &criteria);

    let ids: Vec<_> = filtered.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn test_availability_or_semantics() {
    let candidate = create_test_candidate("w", 1.0, "Creative");

    assert!(matches_availability(
        &candidate,
        &["Weekends".to_string(), "Mornings".to_string()]
    ));
    assert!(!matches_availability(&candidate, &["Mornings".to_string()]));
    assert!(matches_availability(&candidate, &[]));
}

#[test]
fn test_scenario_music_category() {
    let store = CandidateStore::with_seed_data();
    let criteria = FilterCriteria {
        categories: vec!["Music".to_string()],
        ..FilterCriteria::default()
    };

    let filtered = filter_candidates(store.candidates(), &criteria);

    let names: Vec<_> = filtered.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Michael Chen", "James Rodriguez"]);
}

#[test]
fn test_scenario_two_mile_cap() {
    let store = CandidateStore::with_seed_data();
    let criteria = FilterCriteria {
        max_distance_miles: 2.0,
        ..FilterCriteria::default()
    };

    let filtered = filter_candidates(store.candidates(), &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Emma Wilson");
}

#[test]
fn test_scenario_guitar_search() {
    let store = CandidateStore::with_seed_data();
    let criteria = FilterCriteria {
        search_term: "guitar".to_string(),
        ..FilterCriteria::default()
    };

    let filtered = filter_candidates(store.candidates(), &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "James Rodriguez");
}

#[test]
fn test_scenario_defaults_return_everything() {
    let store = CandidateStore::with_seed_data();

    let filtered = filter_candidates(store.candidates(), &FilterCriteria::default());

    assert_eq!(filtered.len(), 4);
    assert_eq!(filtered[0].name, "Sarah Johnson");
    assert_eq!(filtered[3].name, "James Rodriguez");
}

#[test]
fn test_search_covers_all_text_fields() {
    let store = CandidateStore::with_seed_data();

    // name
    assert!(matches_search(&store.candidates()[0], "sarah"));
    // skill needed
    assert!(matches_search(&store.candidates()[1], "photography"));
    // description
    assert!(matches_search(&store.candidates()[2], "vinyasa"));
    // category
    assert!(matches_search(&store.candidates()[3], "music"));
    // no match
    assert!(!matches_search(&store.candidates()[0], "juggling"));
}

#[test]
fn test_predicates_are_per_dimension() {
    let candidate = create_test_candidate("p", 10.0, "Fitness");

    assert!(matches_category(&candidate, &[]));
    assert!(!matches_category(&candidate, &["Music".to_string()]));
    assert!(within_distance(&candidate, 10.0));
    assert!(!within_distance(&candidate, 9.9));

    let criteria = FilterCriteria {
        categories: vec!["Fitness".to_string()],
        max_distance_miles: 20.0,
        ..FilterCriteria::default()
    };
    assert!(matches_criteria(&candidate, &criteria));
}

#[test]
fn test_canonical_tag_lists() {
    assert_eq!(SKILL_CATEGORIES.len(), 10);
    assert!(SKILL_CATEGORIES.contains(&"Arts & Crafts"));
    assert_eq!(
        AVAILABILITY_TAGS,
        ["Weekdays", "Weekends", "Evenings", "Mornings", "Flexible"]
    );
}

#[test]
fn test_time_ago_labels() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    assert_eq!(time_ago(now - Duration::seconds(10), now), "Just now");
    assert_eq!(time_ago(now - Duration::minutes(35), now), "35m ago");
    assert_eq!(time_ago(now - Duration::hours(5), now), "5h ago");
    assert_eq!(time_ago(now - Duration::days(3), now), "3d ago");
    assert_eq!(time_ago(now - Duration::weeks(2), now), "2w ago");
}

#[test]
fn test_clock_labels() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    assert_eq!(
        clock_label(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap(), now),
        "10:30 AM"
    );
    assert_eq!(clock_label(now - Duration::days(1), now), "Yesterday");
    assert_eq!(clock_label(now - Duration::days(6), now), "Mon");
    assert_eq!(
        clock_label(Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap(), now),
        "3/2/25"
    );
}
