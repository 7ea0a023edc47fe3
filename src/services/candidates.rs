use crate::models::{Candidate, SkillLevel};
use std::collections::HashSet;

/// Read-only snapshot of discovery candidates
///
/// The store owns an ordered, immutable candidate list and hands out
/// snapshots for the evaluator to filter. In a real deployment this would be
/// populated from a backend query result; today it carries seed data.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    /// Build a store from externally supplied records
    ///
    /// Candidate ids must be unique within a snapshot; on collision the
    /// first occurrence wins and later duplicates are dropped.
    pub fn new(records: Vec<Candidate>) -> Self {
        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(records.len());

        for candidate in records {
            if seen.insert(candidate.id.clone()) {
                candidates.push(candidate);
            } else {
                tracing::warn!("Dropping candidate with duplicate id: {}", candidate.id);
            }
        }

        Self { candidates }
    }

    /// Seed store matching the mock discovery data
    pub fn with_seed_data() -> Self {
        Self::new(seed_candidates())
    }

    /// The ordered candidate sequence
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Owned copy of the candidate sequence (for session snapshots)
    pub fn snapshot(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            avatar: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            distance_miles: 2.5,
            category: "Creative".to_string(),
            availability: vec!["Weekends".to_string(), "Evenings".to_string()],
            skill_offered: "Graphic Design".to_string(),
            skill_offered_level: SkillLevel::Expert,
            skill_needed: "Spanish Language".to_string(),
            skill_needed_level: SkillLevel::Beginner,
            description: "Ive been working as a professional graphic designer for 5 years. \
                I can teach you everything from basic principles to advanced techniques \
                in Adobe Creative Suite."
                .to_string(),
            rating: 4.8,
            review_count: 12,
        },
        Candidate {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            distance_miles: 4.7,
            category: "Music".to_string(),
            availability: vec!["Weekdays".to_string(), "Mornings".to_string()],
            skill_offered: "Piano Lessons".to_string(),
            skill_offered_level: SkillLevel::Advanced,
            skill_needed: "Photography".to_string(),
            skill_needed_level: SkillLevel::Intermediate,
            description: "Classical pianist with 10+ years of experience. I can help you \
                master piano techniques, music theory, and performance skills."
                .to_string(),
            rating: 4.9,
            review_count: 24,
        },
        Candidate {
            id: "3".to_string(),
            name: "Emma Wilson".to_string(),
            avatar: "https://randomuser.me/api/portraits/women/63.jpg".to_string(),
            distance_miles: 1.2,
            category: "Fitness".to_string(),
            availability: vec!["Flexible".to_string()],
            skill_offered: "Yoga Instruction".to_string(),
            skill_offered_level: SkillLevel::Expert,
            skill_needed: "Web Development".to_string(),
            skill_needed_level: SkillLevel::Beginner,
            description: "Certified yoga instructor specializing in Hatha and Vinyasa. \
                I can help you improve flexibility, strength, and mindfulness through \
                personalized sessions."
                .to_string(),
            rating: 4.7,
            review_count: 18,
        },
        Candidate {
            id: "4".to_string(),
            name: "James Rodriguez".to_string(),
            avatar: "https://randomuser.me/api/portraits/men/74.jpg".to_string(),
            distance_miles: 3.8,
            category: "Music".to_string(),
            availability: vec!["Weekends".to_string(), "Evenings".to_string()],
            skill_offered: "Guitar Playing".to_string(),
            skill_offered_level: SkillLevel::Advanced,
            skill_needed: "Cooking".to_string(),
            skill_needed_level: SkillLevel::Intermediate,
            description: "Experienced guitarist offering lessons in acoustic, electric, \
                and bass guitar. I can teach various styles including rock, blues, jazz, \
                and classical."
                .to_string(),
            rating: 4.6,
            review_count: 9,
        },
    ]
}
