//! Fail-fast initialization contract: a never-initialized handle panics
//! immediately on access, while unknown post ids inside mutations stay
//! silent no-ops.

mod common;

use chirp::store::StoreHandle;
use common::seeded_handle;

#[test]
#[should_panic(expected = "store handle used before initialization")]
fn posts_access_on_detached_handle_panics() {
    StoreHandle::detached().posts();
}

#[test]
#[should_panic(expected = "store handle used before initialization")]
fn notifications_access_on_detached_handle_panics() {
    StoreHandle::detached().notifications();
}

#[test]
#[should_panic(expected = "store handle used before initialization")]
fn conversations_access_on_detached_handle_panics() {
    StoreHandle::detached().conversations();
}

#[test]
#[should_panic(expected = "store handle used before initialization")]
fn trends_access_on_detached_handle_panics() {
    StoreHandle::detached().trends();
}

#[test]
fn initialized_handle_serves_every_collection() {
    let handle = seeded_handle();
    assert!(handle.is_initialized());
    assert_eq!(handle.posts().len(), 20);
    assert!(!handle.notifications().is_empty());
    assert!(!handle.conversations().is_empty());
    assert!(!handle.trends().is_empty());
}

#[test]
fn clones_observe_mutations_through_the_shared_store() {
    let handle = seeded_handle();
    let clone = handle.clone();

    let id = handle.posts().add(common::test_author(), "shared");

    let seen = clone.posts().snapshot();
    assert_eq!(seen.len(), 21);
    assert_eq!(seen[0].id, id);
}
