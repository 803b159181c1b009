//! Typed view of the chat export element stream.

/// One node of a chat export that the extractor cares about.
///
/// Everything else in the document (headers, timestamps, wrappers) is
/// discarded while the document is parsed, so matching on this enum is
/// exhaustive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatNode {
    /// Start of a conversation thread. Carries the participant list as it
    /// appears in the export, e.g. `"Alice, Bob"`.
    Thread { participants: Option<String> },
    /// Announces who sent the messages that follow.
    Speaker { name: Option<String> },
    /// Body of a single message. `None` for attachments, stickers and other
    /// messages without text.
    Message { text: Option<String> },
}

impl ChatNode {
    /// Create a thread boundary node.
    pub fn thread(participants: &str) -> Self {
        Self::Thread {
            participants: Some(participants.to_string()),
        }
    }

    /// Create a speaker marker node.
    pub fn speaker(name: &str) -> Self {
        Self::Speaker {
            name: Some(name.to_string()),
        }
    }

    /// Create a message node with text.
    pub fn message(text: &str) -> Self {
        Self::Message {
            text: Some(text.to_string()),
        }
    }

    /// Create a message node without text.
    pub fn attachment() -> Self {
        Self::Message { text: None }
    }

    /// Whether the participant list of a thread node names more than two
    /// people. Only thread nodes can be group threads.
    pub fn is_group_thread(&self) -> bool {
        match self {
            Self::Thread { participants } => participants
                .as_deref()
                .map(|p| p.matches(',').count() > 1)
                .unwrap_or(false),
            _ => false,
        }
    }
}
