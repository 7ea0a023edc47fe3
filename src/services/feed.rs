use crate::models::BarterPost;
use chrono::{Duration, Utc};

/// In-memory store of community barter posts, newest first
#[derive(Debug, Clone)]
pub struct FeedStore {
    posts: Vec<BarterPost>,
}

impl FeedStore {
    /// Build a store from supplied posts, ordered most recent first
    pub fn new(mut posts: Vec<BarterPost>) -> Self {
        posts.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Self { posts }
    }

    /// Seed store with mock barter posts
    pub fn with_seed_data() -> Self {
        let now = Utc::now();

        Self::new(vec![
            BarterPost {
                id: "1".to_string(),
                title: "Trade web dev help for guitar lessons".to_string(),
                user_name: "Chris Taylor".to_string(),
                user_avatar: "https://randomuser.me/api/portraits/men/22.jpg".to_string(),
                skill_offered: "Web Development".to_string(),
                skill_needed: "Guitar Lessons".to_string(),
                description: "Full-stack developer happy to build or fix your website in \
                    exchange for beginner guitar lessons. Flexible on timing."
                    .to_string(),
                location: "Downtown".to_string(),
                posted_at: now - Duration::minutes(35),
            },
            BarterPost {
                id: "2".to_string(),
                title: "Spanish conversation for photography basics".to_string(),
                user_name: "Lucia Gomez".to_string(),
                user_avatar: "https://randomuser.me/api/portraits/women/29.jpg".to_string(),
                skill_offered: "Spanish Language".to_string(),
                skill_needed: "Photography".to_string(),
                description: "Native Spanish speaker offering weekly conversation practice. \
                    Looking for someone to teach me how to use my DSLR properly."
                    .to_string(),
                location: "Riverside".to_string(),
                posted_at: now - Duration::hours(5),
            },
            BarterPost {
                id: "3".to_string(),
                title: "Home-cooked meals for yoga sessions".to_string(),
                user_name: "Priya Patel".to_string(),
                user_avatar: "https://randomuser.me/api/portraits/women/56.jpg".to_string(),
                skill_offered: "Cooking".to_string(),
                skill_needed: "Yoga Instruction".to_string(),
                description: "I cook a mean curry and can teach you three weeknight recipes. \
                    Hoping to trade for a few private yoga sessions."
                    .to_string(),
                location: "Eastside".to_string(),
                posted_at: now - Duration::days(2),
            },
        ])
    }

    /// Posts in feed order (most recent first)
    pub fn posts(&self) -> &[BarterPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
