// Session exports
pub mod chat;
pub mod discovery;

pub use chat::{ChatError, ChatSession, ChatView};
pub use discovery::{CriteriaState, DiscoveryOutcome, DiscoverySession};
