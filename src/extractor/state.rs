//! Message selection over the chat node stream.
//!
//! Selection is a fold of [`ExtractionState`] over the nodes. The state only
//! resets at thread boundaries:
//!
//! - a thread whose participant list has more than one comma is skipped
//!   entirely (group conversation)
//! - messages from the target are always kept
//! - messages from the owner are kept once the target has spoken anywhere
//!   earlier in the same thread

use super::node::ChatNode;

/// Who to extract messages for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractQuery {
    /// Participant whose messages are always extracted.
    pub target: String,
    /// Export owner, whose messages are extracted in threads the target spoke in.
    pub owner: Option<String>,
}

impl ExtractQuery {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    fn is_target(&self, speaker: &str) -> bool {
        speaker == self.target
    }

    fn is_owner(&self, speaker: &str) -> bool {
        self.owner.as_deref() == Some(speaker)
    }
}

/// Traversal state carried from node to node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionState {
    /// Most recent speaker seen in a thread that is not skipped.
    pub current_speaker: Option<String>,
    /// Whether the target has spoken in the current thread.
    pub target_active: bool,
    /// Whether the current thread is a group thread.
    pub skip_thread: bool,
}

impl ExtractionState {
    /// Consume one node, returning the next state and the message to emit, if any.
    ///
    /// Messages without text that pass selection are emitted as empty strings.
    pub fn advance(self, node: &ChatNode, query: &ExtractQuery) -> (Self, Option<String>) {
        match node {
            ChatNode::Thread { .. } => (
                Self {
                    skip_thread: node.is_group_thread(),
                    target_active: false,
                    ..self
                },
                None,
            ),
            _ if self.skip_thread => (self, None),
            ChatNode::Speaker { name } => {
                let target_active = self.target_active
                    || name.as_deref().map(|n| query.is_target(n)).unwrap_or(false);
                (
                    Self {
                        current_speaker: name.clone(),
                        target_active,
                        ..self
                    },
                    None,
                )
            }
            ChatNode::Message { text } => {
                let selected = self.current_speaker.as_deref().is_some_and(|speaker| {
                    query.is_target(speaker) || (query.is_owner(speaker) && self.target_active)
                });
                let emitted = selected.then(|| text.clone().unwrap_or_default());
                (self, emitted)
            }
        }
    }
}

/// Counters gathered while extracting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Thread boundaries seen.
    pub threads: usize,
    /// Threads skipped for having more than two participants.
    pub group_threads: usize,
    /// Message nodes seen, selected or not.
    pub messages_seen: usize,
}

/// Result of running a query over a chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Selected message bodies in document order. May contain empty strings
    /// for selected messages that had no text.
    pub messages: Vec<String>,
    pub stats: ExtractionStats,
}

impl Extraction {
    /// True when nothing matched the query.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Selected messages with empty bodies removed.
    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }
}

/// Select the messages matching `query` from `nodes`, in order.
pub fn extract(nodes: &[ChatNode], query: &ExtractQuery) -> Extraction {
    let initial = (ExtractionState::default(), Extraction::default());

    let (_, extraction) = nodes.iter().fold(initial, |(state, mut acc), node| {
        match node {
            ChatNode::Thread { .. } => {
                acc.stats.threads += 1;
                if node.is_group_thread() {
                    acc.stats.group_threads += 1;
                }
            }
            ChatNode::Message { .. } => acc.stats.messages_seen += 1,
            ChatNode::Speaker { .. } => {}
        }

        let (state, emitted) = state.advance(node, query);
        acc.messages.extend(emitted);
        (state, acc)
    });

    extraction
}
