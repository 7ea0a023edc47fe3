mod config;
mod core;
mod models;
mod services;
mod session;

use config::Settings;
use models::SignupRequest;
use services::{AuthService, CandidateStore, ConversationStore, FeedStore, ProfileStore};
use session::{ChatSession, DiscoverySession};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting SkillSwap engine demo...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");
    if let Ok(rendered) = settings.to_toml() {
        debug!("Effective settings:\n{}", rendered);
    }

    // Simulated signup flow
    let auth = AuthService::new(settings.auth.simulated_latency_ms);
    let session = auth
        .sign_up(&SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            password: "correct-horse-battery".to_string(),
            confirm_password: "correct-horse-battery".to_string(),
        })
        .await?;

    info!("Signed up as {} (token {})", session.display_name, session.token);

    // Discovery flow
    let candidates = if settings.discovery.seed_data {
        CandidateStore::with_seed_data()
    } else {
        CandidateStore::new(Vec::new())
    };

    let mut discovery = DiscoverySession::new(candidates.snapshot());
    info!(
        "Discovery opened: {} candidates, outcome {:?}",
        candidates.len(),
        discovery.outcome()
    );
    println!("{}", serde_json::to_string_pretty(discovery.results())?);

    discovery.search("guitar");
    info!("Search 'guitar': {} results", discovery.results().len());

    discovery.begin_editing();
    discovery.toggle_draft_category("Music");
    discovery.toggle_draft_availability("Weekends");
    discovery.set_draft_max_distance(settings.discovery.default_max_distance_miles);
    discovery.apply();
    info!(
        "Applied Music + Weekends filters: {} results after {} evaluations",
        discovery.results().len(),
        discovery.evaluations()
    );

    discovery.reset();
    info!("Reset filters: {} results", discovery.results().len());

    // Chat flow
    let mut chat = ChatSession::new(ConversationStore::with_seed_data());
    info!(
        "Chat opened: {} conversations, {} unread",
        chat.conversations().len(),
        chat.total_unread()
    );

    chat.open_conversation("1")?;
    chat.set_composer("Sounds great, let's start this weekend!");
    if let Some(sent) = chat.send_message()? {
        info!("Sent message: {}", sent.text);
    }
    chat.close_thread();
    info!("Back to list, {} unread remaining", chat.total_unread());

    // Profile flow
    let mut profile = ProfileStore::with_seed_data();
    profile.add_skill("Rust");
    profile.set_dark_mode(true);
    info!(
        "Profile for {}: {} skills",
        profile.profile().name,
        profile.profile().skills.len()
    );

    // Feed
    let feed = FeedStore::with_seed_data();
    let now = chrono::Utc::now();
    for post in feed.posts() {
        info!(
            "Feed: {} ({}, {})",
            post.title,
            post.location,
            core::time_ago(post.posted_at, now)
        );
    }

    info!("Demo walkthrough complete");
    Ok(())
}
