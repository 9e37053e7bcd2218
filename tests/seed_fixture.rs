use chirp::store::types::PostId;
use chirp::store::{SeedData, SeedError};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use tempfile::TempDir;

#[test]
fn bundled_fixture_matches_the_documented_shape() {
    let stores = SeedData::bundled().into_stores(SystemTime::now());
    let posts = stores.posts.snapshot();

    assert_eq!(posts.len(), 20);
    assert!(posts.iter().any(|post| post.id == PostId(1) && post.likes == 42));
    assert!(!stores.notifications.is_empty());
    assert!(!stores.conversations.is_empty());
    assert!(!stores.trends.is_empty());
}

#[test]
fn bundled_fixture_is_ordered_newest_first() {
    let stores = SeedData::bundled().into_stores(SystemTime::now());
    let posts = stores.posts.snapshot();
    for pair in posts.windows(2) {
        assert!(
            pair[0].timestamp >= pair[1].timestamp,
            "seed order must match the store's newest-first contract"
        );
    }
}

#[test]
fn ids_continue_above_the_seed_range() {
    let stores = SeedData::bundled().into_stores(SystemTime::now());
    let id = stores.posts.add(
        chirp::store::types::Author {
            name: "Test User".to_string(),
            username: "testuser".to_string(),
        },
        "next id check",
    );
    assert_eq!(id, PostId(21));
}

#[test]
fn custom_fixture_loads_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{
  "posts": [
    {
      "id": 7,
      "author": { "name": "Solo", "username": "solo" },
      "content": "only post",
      "minutes_ago": 10,
      "likes": 3
    }
  ]
}"#,
    )
    .unwrap();

    let stores = SeedData::from_path(&path)
        .expect("fixture should parse")
        .into_stores(SystemTime::now());
    let posts = stores.posts.snapshot();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, PostId(7));
    assert_eq!(posts[0].likes, 3);
    assert_eq!(posts[0].retweets, 0, "omitted counters default to zero");
    assert!(stores.notifications.is_empty());
    assert!(stores.trends.is_empty());
}

#[test]
fn missing_fixture_file_is_a_read_error() {
    let err = SeedData::from_path(&PathBuf::from("/nonexistent/seed.json")).unwrap_err();
    assert!(matches!(err, SeedError::Read { .. }));
}

#[test]
fn malformed_fixture_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(&path, "{ not json").unwrap();

    let err = SeedData::from_path(&path).unwrap_err();
    assert!(matches!(err, SeedError::Parse { .. }));
}
