// Integration tests for the SkillSwap engine: full screen-level flows

use skillswap_engine::models::{LoginRequest, SignupRequest};
use skillswap_engine::services::{
    AuthError, AuthService, CandidateStore, ConversationStore, FeedStore, ProfileStore,
};
use skillswap_engine::session::{ChatSession, ChatView, DiscoveryOutcome, DiscoverySession};

#[test]
fn test_discovery_filter_modal_flow() {
    let store = CandidateStore::with_seed_data();
    let mut session = DiscoverySession::new(store.snapshot());

    // Screen mounts showing everything
    assert_eq!(session.outcome(), DiscoveryOutcome::Matches(4));
    let evaluations_at_mount = session.evaluations();

    // User opens the modal and picks filters; nothing re-evaluates yet
    session.begin_editing();
    session.toggle_draft_category("Music");
    session.toggle_draft_availability("Weekends");
    assert_eq!(session.evaluations(), evaluations_at_mount);

    // Apply runs exactly one evaluation
    session.apply();
    assert_eq!(session.evaluations(), evaluations_at_mount + 1);

    // Music AND weekend availability leaves only James
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].name, "James Rodriguez");

    // Reset restores the full list with one more evaluation
    session.reset();
    assert_eq!(session.evaluations(), evaluations_at_mount + 2);
    assert_eq!(session.outcome(), DiscoveryOutcome::Matches(4));
}

#[test]
fn test_discovery_search_then_refine() {
    let store = CandidateStore::with_seed_data();
    let mut session = DiscoverySession::new(store.snapshot());

    session.search("lessons");
    // Piano Lessons and guitar "lessons in acoustic..." both match
    assert_eq!(session.results().len(), 2);

    session.begin_editing();
    session.set_draft_max_distance(4.0);
    session.apply();

    // Michael (4.7 mi) drops out, James stays
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].name, "James Rodriguez");
}

#[test]
fn test_discovery_empty_states_are_distinguished() {
    let mut populated = DiscoverySession::new(CandidateStore::with_seed_data().snapshot());
    populated.search("no such skill anywhere");
    assert_eq!(populated.outcome(), DiscoveryOutcome::NoMatches);

    populated.reset();
    assert_eq!(populated.outcome(), DiscoveryOutcome::Matches(4));

    let empty = DiscoverySession::new(Vec::new());
    assert_eq!(empty.outcome(), DiscoveryOutcome::EmptyStore);
}

#[test]
fn test_chat_thread_flow() {
    let mut chat = ChatSession::new(ConversationStore::with_seed_data());
    assert_eq!(chat.total_unread(), 3);

    // Open the Alex Johnson thread; its two unread messages clear
    chat.open_conversation("1").unwrap();
    assert_eq!(chat.total_unread(), 1);

    // Type and send a reply
    chat.set_composer("Let's schedule the first session!");
    let sent = chat.send_message().unwrap().unwrap();
    assert_eq!(sent.text, "Let's schedule the first session!");

    // Preview reflects the new message back on the list view
    chat.close_thread();
    assert_eq!(chat.view(), &ChatView::List);
    assert_eq!(
        chat.conversations()[0].last_message,
        "Let's schedule the first session!"
    );

    // Messages accumulated in the thread log
    assert_eq!(chat.messages("1").unwrap().len(), 7);
}

#[test]
fn test_chat_unknown_conversation_keeps_state() {
    let mut chat = ChatSession::new(ConversationStore::with_seed_data());

    chat.open_conversation("1").unwrap();
    assert!(chat.open_conversation("nope").is_err());

    // Still in the previously opened thread
    assert_eq!(
        chat.view(),
        &ChatView::Thread {
            conversation_id: "1".to_string()
        }
    );
}

#[tokio::test]
async fn test_signup_then_browse() {
    let auth = AuthService::new(0);

    let session = auth
        .sign_up(&SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            password: "a-long-password".to_string(),
            confirm_password: "a-long-password".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.display_name, "Jane Doe");

    // After signup the user lands on discovery
    let discovery = DiscoverySession::new(CandidateStore::with_seed_data().snapshot());
    assert_eq!(discovery.results().len(), 4);
}

#[tokio::test]
async fn test_login_validation_failures() {
    let auth = AuthService::new(0);

    let bad_email = LoginRequest {
        email: "nope".to_string(),
        password: "pw".to_string(),
    };
    assert!(matches!(
        auth.log_in(&bad_email).await,
        Err(AuthError::Validation(_))
    ));

    let empty_password = LoginRequest {
        email: "jane@example.com".to_string(),
        password: String::new(),
    };
    assert!(matches!(
        auth.log_in(&empty_password).await,
        Err(AuthError::Validation(_))
    ));
}

#[test]
fn test_profile_management_flow() {
    let mut profile = ProfileStore::with_seed_data();

    assert!(profile.add_skill("Rust"));
    assert!(profile.add_interest("Chess"));
    assert!(!profile.add_interest("Chess"));
    profile.update_bio("Trading code reviews for cooking lessons.");
    profile.set_private_profile(true);

    assert!(profile.profile().skills.contains(&"Rust".to_string()));
    assert_eq!(
        profile.profile().bio,
        "Trading code reviews for cooking lessons."
    );
    assert!(profile.settings().private_profile);
}

#[test]
fn test_feed_is_reverse_chronological() {
    let feed = FeedStore::with_seed_data();

    assert!(!feed.is_empty());
    for pair in feed.posts().windows(2) {
        assert!(pair[0].posted_at >= pair[1].posted_at);
    }
}
