//! Single source of truth for timeline posts.
//!
//! The store owns the canonical list and is the only writer. Every read
//! hands out a cloned snapshot, so consumers can sort and filter freely
//! without touching shared state. Mutations run synchronously to completion
//! under the write lock; the UI delivers one event at a time, so no partial
//! update is ever observable.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use crate::store::types::{Author, Post, PostId};

pub struct PostsStore {
    posts: RwLock<Vec<Post>>,
    /// Next id to hand out. Monotonic; seeded at `max(seed ids) + 1`.
    next_id: AtomicU64,
}

impl PostsStore {
    /// Build a store holding `seed` in the given order (newest first).
    pub fn with_seed(seed: Vec<Post>) -> Self {
        let next_id = seed.iter().map(|post| post.id.0).max().unwrap_or(0) + 1;
        Self {
            posts: RwLock::new(seed),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Cloned snapshot of the canonical list, newest insert first.
    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }

    /// Create a post and insert it at the front of the list.
    ///
    /// No validation happens here: empty or over-long content is a
    /// view-layer concern. Returns the id assigned to the new post.
    pub fn add(&self, author: Author, content: impl Into<String>) -> PostId {
        let id = PostId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let post = Post {
            id,
            author,
            content: content.into(),
            timestamp: SystemTime::now(),
            likes: 0,
            retweets: 0,
            replies: 0,
        };
        self.posts.write().insert(0, post);
        tracing::debug!(%id, "post added");
        id
    }

    /// Increment the like counter of the matching post by exactly one.
    ///
    /// An unknown id is a silent no-op: the caller may hold a stale id and
    /// that is expected, benign traffic rather than an error.
    pub fn like(&self, id: PostId) {
        let mut posts = self.posts.write();
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => post.likes += 1,
            None => tracing::debug!(%id, "like for unknown post ignored"),
        }
    }

    /// Increment the retweet counter; same unknown-id policy as [`like`].
    ///
    /// [`like`]: PostsStore::like
    pub fn retweet(&self, id: PostId) {
        let mut posts = self.posts.write();
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => post.retweets += 1,
            None => tracing::debug!(%id, "retweet for unknown post ignored"),
        }
    }
}
