//! Seed fixtures for the in-memory stores.
//!
//! All data lives and dies with the process; the fixture only exists so the
//! UI has something to render before the user interacts. Timestamps are
//! stored as `minutes_ago` offsets and resolved against the wall clock at
//! load so relative ages stay sensible in any session.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use thiserror::Error;

use crate::store::handle::Stores;
use crate::store::posts::PostsStore;
use crate::store::types::{
    Author, Conversation, Message, Notification, NotificationKind, Post, PostId, Trend,
};

/// Fixture bundled into the binary. `SeedData::bundled` parses it.
const BUNDLED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
pub struct SeedData {
    posts: Vec<SeedPost>,
    #[serde(default)]
    notifications: Vec<SeedNotification>,
    #[serde(default)]
    conversations: Vec<SeedConversation>,
    #[serde(default)]
    trends: Vec<Trend>,
}

#[derive(Debug, Deserialize)]
struct SeedPost {
    id: u64,
    author: Author,
    content: String,
    minutes_ago: u64,
    #[serde(default)]
    likes: u32,
    #[serde(default)]
    retweets: u32,
    #[serde(default)]
    replies: u32,
}

#[derive(Debug, Deserialize)]
struct SeedNotification {
    id: u64,
    kind: NotificationKind,
    actor: Author,
    text: String,
    minutes_ago: u64,
}

#[derive(Debug, Deserialize)]
struct SeedConversation {
    id: u64,
    with: Author,
    messages: Vec<SeedMessage>,
}

#[derive(Debug, Deserialize)]
struct SeedMessage {
    from_me: bool,
    text: String,
    minutes_ago: u64,
}

impl SeedData {
    /// The fixture shipped with the binary.
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED).expect("bundled seed fixture is valid JSON")
    }

    /// Load a user-provided fixture of the same shape.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve offsets against `now` and build the store set.
    pub fn into_stores(self, now: SystemTime) -> Stores {
        let posts = self
            .posts
            .into_iter()
            .map(|post| Post {
                id: PostId(post.id),
                author: post.author,
                content: post.content,
                timestamp: minutes_before(now, post.minutes_ago),
                likes: post.likes,
                retweets: post.retweets,
                replies: post.replies,
            })
            .collect();

        let notifications = self
            .notifications
            .into_iter()
            .map(|entry| Notification {
                id: entry.id,
                kind: entry.kind,
                actor: entry.actor,
                text: entry.text,
                timestamp: minutes_before(now, entry.minutes_ago),
            })
            .collect();

        let conversations = self
            .conversations
            .into_iter()
            .map(|thread| Conversation {
                id: thread.id,
                with: thread.with,
                messages: thread
                    .messages
                    .into_iter()
                    .map(|message| Message {
                        from_me: message.from_me,
                        text: message.text,
                        timestamp: minutes_before(now, message.minutes_ago),
                    })
                    .collect(),
            })
            .collect();

        Stores {
            posts: PostsStore::with_seed(posts),
            notifications,
            conversations,
            trends: self.trends,
        }
    }
}

fn minutes_before(now: SystemTime, minutes: u64) -> SystemTime {
    now.checked_sub(Duration::from_secs(minutes * 60))
        .unwrap_or(now)
}
