//! App-level flows: pages consuming the store through the handle, with
//! every mutation going through add/like/retweet and every read through
//! snapshots.

mod common;

use chirp::config::{Config, ConfigStore};
use chirp::ui::app::{App, Page};
use chirp::ui::notifications::NotificationsState;
use common::seeded_handle;
use std::path::PathBuf;

fn test_app() -> App {
    test_app_with(Config::default())
}

fn test_app_with(config: Config) -> App {
    let store = ConfigStore::new(config, PathBuf::from("unused-config.toml"));
    App::new(seeded_handle(), store)
}

#[test]
fn starts_on_the_timeline_with_the_seeded_feed() {
    let app = test_app();
    assert_eq!(app.page(), Page::Timeline);
    assert_eq!(app.timeline().posts.len(), 20);
    assert_eq!(app.timeline().selected, 0);
}

#[test]
fn liking_the_selected_post_shows_up_in_the_feed() {
    let mut app = test_app();
    let id = app.timeline().selected_id().expect("feed is non-empty");
    let before = app.timeline().posts[0].likes;

    app.like_selected();

    assert_eq!(app.timeline().posts[0].id, id);
    assert_eq!(app.timeline().posts[0].likes, before + 1);
    assert_eq!(app.stores().posts().len(), 20, "no posts added or removed");
}

#[test]
fn retweeting_from_explore_updates_the_store() {
    let mut app = test_app();
    app.switch_page(Page::Explore);
    let id = app.explore().selected_id().expect("explore list non-empty");
    let before: u32 = app
        .stores()
        .posts()
        .snapshot()
        .iter()
        .find(|post| post.id == id)
        .map(|post| post.retweets)
        .unwrap();

    app.retweet_selected();

    let after = app
        .stores()
        .posts()
        .snapshot()
        .iter()
        .find(|post| post.id == id)
        .map(|post| post.retweets)
        .unwrap();
    assert_eq!(after, before + 1);
}

#[test]
fn composing_a_post_adds_it_to_the_head_of_the_feed() {
    let mut app = test_app();
    app.open_compose();
    for ch in "Hello from the test suite".chars() {
        app.compose_input(ch);
    }
    app.submit_compose();

    assert!(!app.compose_open(), "dialog closes after posting");
    assert_eq!(app.stores().posts().len(), 21);
    assert_eq!(app.timeline().posts[0].content, "Hello from the test suite");
    assert_eq!(app.timeline().posts[0].likes, 0);
    assert_eq!(app.timeline().posts[0].author.username, "jordan");
}

#[test]
fn empty_drafts_are_rejected_by_the_view_layer() {
    let mut app = test_app();
    app.open_compose();
    app.compose_input(' ');
    app.submit_compose();

    assert!(app.compose_open(), "dialog stays open");
    assert_eq!(app.stores().posts().len(), 20, "nothing was added");
}

#[test]
fn over_budget_drafts_are_rejected_by_the_view_layer() {
    let mut config = Config::default();
    config.ui.char_budget = 5;
    let mut app = test_app_with(config);

    app.open_compose();
    for ch in "too long for five".chars() {
        app.compose_input(ch);
    }
    app.submit_compose();

    assert!(app.compose_open());
    assert_eq!(app.stores().posts().len(), 20);
}

#[test]
fn notifications_page_simulates_loading_then_settles() {
    let mut config = Config::default();
    config.ui.loading_ticks = 2;
    let mut app = test_app_with(config);

    app.switch_page(Page::Notifications);
    assert!(app.notifications().is_loading());

    app.on_tick();
    assert!(app.notifications().is_loading());

    app.on_tick();
    match app.notifications() {
        NotificationsState::Ready { items, .. } => assert!(!items.is_empty()),
        other => panic!("expected Ready, got {other:?}"),
    }

    // Leaving and coming back does not reload.
    app.switch_page(Page::Timeline);
    app.switch_page(Page::Notifications);
    assert!(!app.notifications().is_loading());
}

#[test]
fn profile_partition_covers_the_whole_feed() {
    let mut app = test_app();
    app.switch_page(Page::Profile);
    let profile = app.profile();
    assert_eq!(profile.mine.len() + profile.liked.len(), 20);
    assert!(profile.mine.iter().all(|post| post.id.0 % 2 == 0));
    assert!(profile.liked.iter().all(|post| post.id.0 % 2 == 1));
}
