//! Shared test utilities.

#![allow(dead_code)]

use chirp::store::types::{Author, Post, PostId};
use chirp::store::{SeedData, StoreHandle};
use std::time::{Duration, SystemTime};

/// Handle over the bundled 20-post fixture, initialized and ready.
pub fn seeded_handle() -> StoreHandle {
    let handle = StoreHandle::detached();
    handle.initialize(SeedData::bundled().into_stores(SystemTime::now()));
    handle
}

pub fn test_author() -> Author {
    Author {
        name: "Test User".to_string(),
        username: "testuser".to_string(),
    }
}

/// A post with the given id, age, and like count; other counters zero.
pub fn post(id: u64, minutes_ago: u64, likes: u32) -> Post {
    Post {
        id: PostId(id),
        author: test_author(),
        content: format!("post {id}"),
        timestamp: SystemTime::now() - Duration::from_secs(minutes_ago * 60),
        likes,
        retweets: 0,
        replies: 0,
    }
}
