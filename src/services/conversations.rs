use crate::models::{Conversation, Message, MessageSender};
use chrono::{Duration, Utc};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from conversation store operations
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Conversation not found: {0}")]
    NotFound(String),
}

/// In-memory store of conversations and their message logs
///
/// Holds the chat-tab data: the conversation list with previews and unread
/// counters, plus a per-conversation message history. All state is local;
/// there is no messaging transport behind it.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    messages: HashMap<String, Vec<Message>>,
}

impl ConversationStore {
    pub fn new(conversations: Vec<Conversation>, messages: HashMap<String, Vec<Message>>) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    /// Seed store matching the mock chat data
    pub fn with_seed_data() -> Self {
        let now = Utc::now();

        let conversations = vec![
            Conversation {
                id: "1".to_string(),
                name: "Alex Johnson".to_string(),
                avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
                last_message: "I can help you with React Native development".to_string(),
                last_activity: now - Duration::hours(2),
                unread: 2,
            },
            Conversation {
                id: "2".to_string(),
                name: "Sarah Williams".to_string(),
                avatar: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
                last_message: "When are you available for the cooking lesson?".to_string(),
                last_activity: now - Duration::days(1),
                unread: 0,
            },
            Conversation {
                id: "3".to_string(),
                name: "Michael Brown".to_string(),
                avatar: "https://randomuser.me/api/portraits/men/67.jpg".to_string(),
                last_message: "Thanks for the photography tips!".to_string(),
                last_activity: now - Duration::days(1) - Duration::hours(3),
                unread: 0,
            },
            Conversation {
                id: "4".to_string(),
                name: "Emily Davis".to_string(),
                avatar: "https://randomuser.me/api/portraits/women/17.jpg".to_string(),
                last_message: "I would love to exchange skills with you".to_string(),
                last_activity: now - Duration::days(4),
                unread: 1,
            },
            Conversation {
                id: "5".to_string(),
                name: "David Wilson".to_string(),
                avatar: "https://randomuser.me/api/portraits/men/91.jpg".to_string(),
                last_message: "Let me know when you want to start the Spanish lessons"
                    .to_string(),
                last_activity: now - Duration::days(5),
                unread: 0,
            },
        ];

        let thread_texts: [(&str, MessageSender); 6] = [
            (
                "Hi there! I saw you're interested in learning React Native.",
                MessageSender::Other,
            ),
            (
                "Yes, I've been wanting to build mobile apps for a while now!",
                MessageSender::Me,
            ),
            (
                "I can help you with that. I've been developing with React Native for 3 years.",
                MessageSender::Other,
            ),
            (
                "That would be great! I can offer cooking lessons in exchange if you're interested?",
                MessageSender::Me,
            ),
            (
                "Sounds perfect! I've been wanting to improve my cooking skills.",
                MessageSender::Other,
            ),
            ("When would you like to start?", MessageSender::Other),
        ];

        let thread: Vec<Message> = thread_texts
            .iter()
            .enumerate()
            .map(|(i, (text, sender))| Message {
                id: (i + 1).to_string(),
                text: text.to_string(),
                sender: *sender,
                sent_at: now - Duration::hours(2) - Duration::minutes(5 * (5 - i as i64)),
            })
            .collect();

        let mut messages = HashMap::new();
        for conversation in &conversations {
            messages.insert(conversation.id.clone(), Vec::new());
        }
        messages.insert("1".to_string(), thread);

        Self::new(conversations, messages)
    }

    /// Conversations in list order
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Result<&Conversation, ConversationError> {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.conversations.iter().any(|c| c.id == id)
    }

    /// Message log for a conversation, oldest first
    pub fn messages(&self, id: &str) -> Result<&[Message], ConversationError> {
        self.messages
            .get(id)
            .map(|m| m.as_slice())
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))
    }

    /// Append a message, updating the conversation preview and activity time
    pub fn append_message(&mut self, id: &str, message: Message) -> Result<(), ConversationError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))?;

        conversation.last_message = message.text.clone();
        conversation.last_activity = message.sent_at;

        self.messages.entry(id.to_string()).or_default().push(message);

        Ok(())
    }

    /// Clear a conversation's unread counter
    pub fn mark_read(&mut self, id: &str) -> Result<(), ConversationError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))?;

        if conversation.unread > 0 {
            tracing::debug!(
                "Clearing {} unread messages for conversation {}",
                conversation.unread,
                id
            );
        }
        conversation.unread = 0;

        Ok(())
    }

    /// Sum of unread counters across conversations (chat tab badge)
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }
}
