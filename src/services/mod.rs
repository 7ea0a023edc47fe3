// Service exports
pub mod auth;
pub mod candidates;
pub mod conversations;
pub mod feed;
pub mod profile;

pub use auth::{AuthError, AuthService, AuthSession};
pub use candidates::CandidateStore;
pub use conversations::{ConversationError, ConversationStore};
pub use feed::FeedStore;
pub use profile::ProfileStore;
