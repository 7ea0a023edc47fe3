use crate::models::{ProfileSettings, ProfileStats, ViewerProfile};

/// In-memory store for the viewing user's profile tab
///
/// Owns the profile, its summary stats, and the settings toggles. Stats are
/// opaque mock values; nothing here recomputes them.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: ViewerProfile,
    stats: ProfileStats,
    settings: ProfileSettings,
}

impl ProfileStore {
    pub fn new(profile: ViewerProfile, stats: ProfileStats) -> Self {
        Self {
            profile,
            stats,
            settings: ProfileSettings::default(),
        }
    }

    /// Seed store matching the mock profile data
    pub fn with_seed_data() -> Self {
        Self::new(
            ViewerProfile {
                name: "Jane Doe".to_string(),
                email: "jane.doe@example.com".to_string(),
                avatar: "https://randomuser.me/api/portraits/women/43.jpg".to_string(),
                bio: "Passionate about learning new skills and sharing knowledge with others."
                    .to_string(),
                skills: vec![
                    "Web Development".to_string(),
                    "Graphic Design".to_string(),
                    "Language Teaching".to_string(),
                ],
                interests: vec![
                    "Photography".to_string(),
                    "Cooking".to_string(),
                    "Hiking".to_string(),
                ],
            },
            ProfileStats {
                skills: 12,
                matches: 24,
                sessions: 8,
            },
        )
    }

    pub fn profile(&self) -> &ViewerProfile {
        &self.profile
    }

    pub fn stats(&self) -> ProfileStats {
        self.stats
    }

    pub fn settings(&self) -> ProfileSettings {
        self.settings
    }

    pub fn update_bio(&mut self, bio: &str) {
        self.profile.bio = bio.to_string();
    }

    /// Add a skill; blank or duplicate entries are rejected
    pub fn add_skill(&mut self, skill: &str) -> bool {
        add_entry(&mut self.profile.skills, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        remove_entry(&mut self.profile.skills, skill)
    }

    /// Add an interest; blank or duplicate entries are rejected
    pub fn add_interest(&mut self, interest: &str) -> bool {
        add_entry(&mut self.profile.interests, interest)
    }

    pub fn remove_interest(&mut self, interest: &str) -> bool {
        remove_entry(&mut self.profile.interests, interest)
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.settings.notifications = enabled;
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.settings.dark_mode = enabled;
    }

    pub fn set_private_profile(&mut self, enabled: bool) {
        self.settings.private_profile = enabled;
    }
}

fn add_entry(entries: &mut Vec<String>, entry: &str) -> bool {
    let entry = entry.trim();
    if entry.is_empty() || entries.iter().any(|e| e == entry) {
        return false;
    }
    entries.push(entry.to_string());
    true
}

fn remove_entry(entries: &mut Vec<String>, entry: &str) -> bool {
    if let Some(pos) = entries.iter().position(|e| e == entry) {
        entries.remove(pos);
        true
    } else {
        false
    }
}
