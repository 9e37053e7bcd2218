use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Unique identifier for a post.
///
/// Ids are handed out by the posts store from a monotonic counter; they are
/// never reused and never derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Denormalized author identity carried on every post.
///
/// There is no user table; the pair is copied into each entry at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name (e.g., "Sarah Chen").
    pub name: String,
    /// Handle without the leading "@" (e.g., "sarahchen").
    pub username: String,
}

/// A single timeline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub content: String,
    /// Fixed at creation; never mutated afterwards.
    pub timestamp: SystemTime,
    pub likes: u32,
    pub retweets: u32,
    pub replies: u32,
}

impl Post {
    /// Combined engagement score used by the "Top" feed ordering.
    pub fn engagement(&self) -> u64 {
        self.likes as u64 + self.retweets as u64 + self.replies as u64
    }
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Retweet,
    Reply,
    Follow,
}

impl NotificationKind {
    /// Single-cell glyph shown in front of the notification row.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Like => "♥",
            Self::Retweet => "⟲",
            Self::Reply => "↩",
            Self::Follow => "+",
        }
    }
}

/// A seeded notification entry. Read-only; no mutation operations exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub actor: Author,
    pub text: String,
    pub timestamp: SystemTime,
}

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// True when the local user wrote it.
    pub from_me: bool,
    pub text: String,
    pub timestamp: SystemTime,
}

/// A seeded direct-message thread. Read-only; no mutation operations exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: u64,
    pub with: Author,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Most recent message, for the conversation list preview.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// A trending topic shown on the explore page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub topic: String,
    /// Mock post count attributed to the topic.
    pub posts: u64,
}
