use crate::models::{Conversation, Message, MessageSender};
use crate::services::{ConversationError, ConversationStore};
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

/// Errors from chat session operations
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Conversation(#[from] ConversationError),

    #[error("No conversation is open")]
    NoActiveThread,
}

/// Which chat screen is showing: the conversation list or a single thread
///
/// An explicit two-variant state rather than a nullable selection, so
/// transitions stay exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatView {
    List,
    Thread { conversation_id: String },
}

/// Chat tab session: view state, composer buffer, and the conversation store
///
/// The composer buffer belongs to the session, not to a thread, so its
/// content survives switching between the list and a thread.
#[derive(Debug, Clone)]
pub struct ChatSession {
    store: ConversationStore,
    view: ChatView,
    composer: String,
}

impl ChatSession {
    pub fn new(store: ConversationStore) -> Self {
        Self {
            store,
            view: ChatView::List,
            composer: String::new(),
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn conversations(&self) -> &[Conversation] {
        self.store.conversations()
    }

    pub fn messages(&self, conversation_id: &str) -> Result<&[Message], ConversationError> {
        self.store.messages(conversation_id)
    }

    pub fn total_unread(&self) -> u32 {
        self.store.total_unread()
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: &str) {
        self.composer = text.to_string();
    }

    /// Open a thread, clearing its unread counter
    ///
    /// An unknown id leaves the view unchanged.
    pub fn open_conversation(&mut self, conversation_id: &str) -> Result<(), ChatError> {
        self.store.mark_read(conversation_id)?;
        self.view = ChatView::Thread {
            conversation_id: conversation_id.to_string(),
        };
        Ok(())
    }

    /// Back to the conversation list; the composer keeps its content
    pub fn close_thread(&mut self) {
        self.view = ChatView::List;
    }

    /// Send the composer content into the open thread
    ///
    /// A whitespace-only composer is a no-op returning `Ok(None)`. Outside a
    /// thread sending is an error. On success the trimmed text is appended
    /// as a new message, the composer is cleared, and the message returned.
    pub fn send_message(&mut self) -> Result<Option<Message>, ChatError> {
        let text = self.composer.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let conversation_id = match &self.view {
            ChatView::Thread { conversation_id } => conversation_id.clone(),
            ChatView::List => return Err(ChatError::NoActiveThread),
        };

        let message = Message {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sender: MessageSender::Me,
            sent_at: Utc::now(),
        };

        self.store.append_message(&conversation_id, message.clone())?;
        self.composer.clear();

        tracing::debug!("Sent message to conversation {}", conversation_id);
        Ok(Some(message))
    }
}
