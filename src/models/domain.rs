use serde::{Deserialize, Serialize};

/// Self-reported proficiency for an offered or needed skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A prospective skill-exchange match shown on the discovery screen
///
/// Records are supplied by the candidate source (mock data today, a backend
/// query result later) and are never mutated by the engine. `distance_miles`
/// and `rating` are opaque precomputed values; nothing here computes
/// geodistance or match scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
    pub category: String,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(rename = "skillOffered")]
    pub skill_offered: String,
    #[serde(rename = "skillOfferedLevel")]
    pub skill_offered_level: SkillLevel,
    #[serde(rename = "skillNeeded")]
    pub skill_needed: String,
    #[serde(rename = "skillNeededLevel")]
    pub skill_needed_level: SkillLevel,
    pub description: String,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

impl Candidate {
    /// Display label for the distance, e.g. "2.5 miles away"
    pub fn distance_label(&self) -> String {
        format!("{} miles away", self.distance_miles)
    }
}

/// A conversation entry in the chat list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    #[serde(rename = "lastActivity")]
    pub last_activity: chrono::DateTime<chrono::Utc>,
    pub unread: u32,
}

/// Which side of a thread a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Me,
    Other,
}

/// A single message within a conversation thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    #[serde(rename = "sentAt")]
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

/// The viewing user's own profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Summary counters shown under the profile header (opaque mock values)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileStats {
    pub skills: u32,
    pub matches: u32,
    pub sessions: u32,
}

/// Profile settings toggles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub notifications: bool,
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
    #[serde(rename = "privateProfile")]
    pub private_profile: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            private_profile: false,
        }
    }
}

/// A barter post in the community feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarterPost {
    pub id: String,
    pub title: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userAvatar")]
    pub user_avatar: String,
    #[serde(rename = "skillOffered")]
    pub skill_offered: String,
    #[serde(rename = "skillNeeded")]
    pub skill_needed: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "postedAt")]
    pub posted_at: chrono::DateTime<chrono::Utc>,
}
