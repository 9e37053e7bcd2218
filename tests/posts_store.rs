mod common;

use chirp::store::types::PostId;
use common::{seeded_handle, test_author};
use std::collections::HashSet;

#[test]
fn seed_has_twenty_posts_with_unique_ids() {
    let handle = seeded_handle();
    let posts = handle.posts().snapshot();
    assert_eq!(posts.len(), 20);

    let ids: HashSet<u64> = posts.iter().map(|post| post.id.0).collect();
    assert_eq!(ids.len(), 20, "seed ids must be unique");
}

#[test]
fn seed_post_one_has_forty_two_likes() {
    let handle = seeded_handle();
    let posts = handle.posts().snapshot();
    let first = posts
        .iter()
        .find(|post| post.id == PostId(1))
        .expect("seed contains post id 1");
    assert_eq!(first.likes, 42);
}

#[test]
fn add_increases_length_by_one_with_new_post_at_head() {
    let handle = seeded_handle();
    let before = handle.posts().len();

    handle.posts().add(test_author(), "Test post content");

    let posts = handle.posts().snapshot();
    assert_eq!(posts.len(), before + 1);
    assert_eq!(posts[0].content, "Test post content");
    assert_eq!(posts[0].author.username, "testuser");
    assert_eq!(posts[0].likes, 0);
    assert_eq!(posts[0].retweets, 0);
    assert_eq!(posts[0].replies, 0);
}

#[test]
fn add_assigns_a_fresh_unique_id() {
    let handle = seeded_handle();
    let id = handle.posts().add(test_author(), "fresh");
    let posts = handle.posts().snapshot();
    assert_eq!(
        posts.iter().filter(|post| post.id == id).count(),
        1,
        "new id appears exactly once"
    );
    assert!(posts[1..].iter().all(|post| post.id != id));
}

#[test]
fn add_preserves_existing_entries() {
    let handle = seeded_handle();
    let before = handle.posts().snapshot();

    handle.posts().add(test_author(), "newcomer");

    let after = handle.posts().snapshot();
    assert_eq!(&after[1..], &before[..], "prior entries unchanged, in order");
}

#[test]
fn like_increments_exactly_one_counter() {
    let handle = seeded_handle();
    let before = handle.posts().snapshot();

    handle.posts().like(PostId(1));

    let after = handle.posts().snapshot();
    assert_eq!(after.len(), 20);
    for (post_before, post_after) in before.iter().zip(after.iter()) {
        assert_eq!(post_before.id, post_after.id);
        if post_after.id == PostId(1) {
            assert_eq!(post_after.likes, post_before.likes + 1);
            assert_eq!(post_after.likes, 43);
        } else {
            assert_eq!(post_after.likes, post_before.likes);
        }
        assert_eq!(post_after.retweets, post_before.retweets);
        assert_eq!(post_after.replies, post_before.replies);
    }
}

#[test]
fn retweet_increments_exactly_one_counter() {
    let handle = seeded_handle();
    let before = handle.posts().snapshot();

    handle.posts().retweet(PostId(5));

    let after = handle.posts().snapshot();
    for (post_before, post_after) in before.iter().zip(after.iter()) {
        if post_after.id == PostId(5) {
            assert_eq!(post_after.retweets, post_before.retweets + 1);
        } else {
            assert_eq!(post_after.retweets, post_before.retweets);
        }
        assert_eq!(post_after.likes, post_before.likes);
    }
}

#[test]
fn missing_id_is_a_silent_noop() {
    let handle = seeded_handle();
    let before = handle.posts().snapshot();

    handle.posts().like(PostId(9999));
    handle.posts().retweet(PostId(9999));

    assert_eq!(handle.posts().snapshot(), before);
}

#[test]
fn repeated_likes_accumulate() {
    let handle = seeded_handle();
    let initial = handle
        .posts()
        .snapshot()
        .iter()
        .find(|post| post.id == PostId(3))
        .map(|post| post.likes)
        .expect("seed contains post id 3");

    handle.posts().like(PostId(3));
    handle.posts().like(PostId(3));
    handle.posts().like(PostId(3));

    let likes = handle
        .posts()
        .snapshot()
        .iter()
        .find(|post| post.id == PostId(3))
        .map(|post| post.likes)
        .unwrap();
    assert_eq!(likes, initial + 3);
}

#[test]
fn mutations_apply_in_invocation_order() {
    let handle = seeded_handle();

    let id = handle.posts().add(test_author(), "ordered");
    handle.posts().like(id);
    handle.posts().like(id);
    handle.posts().retweet(id);

    let posts = handle.posts().snapshot();
    assert_eq!(posts[0].id, id);
    assert_eq!(posts[0].likes, 2);
    assert_eq!(posts[0].retweets, 1);
}
