// Model exports
pub mod domain;
pub mod requests;

pub use domain::{BarterPost, Candidate, Conversation, Message, MessageSender, ProfileSettings, ProfileStats, SkillLevel, ViewerProfile};
pub use requests::{LoginRequest, SignupRequest};
