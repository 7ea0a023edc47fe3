//! SkillSwap Engine - Discovery and session logic for the SkillSwap bartering app
//!
//! This library provides the client-side core of the SkillSwap app: the pure
//! discovery filtering engine, the criteria and chat view-state machines the
//! screens drive, and the in-memory stores that stand in for a backend.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use core::{filter_candidates, FilterCriteria};
pub use models::{Candidate, Conversation, Message, SkillLevel};
pub use services::{AuthService, CandidateStore, ConversationStore, FeedStore, ProfileStore};
pub use session::{ChatSession, ChatView, DiscoveryOutcome, DiscoverySession};
