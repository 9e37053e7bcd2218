//! Pure projections over post snapshots.
//!
//! Views never write back into the store; they take a snapshot and derive
//! whatever ordering or partition they need. Everything here is a pure
//! function over an owned copy.

use crate::store::types::Post;

/// Newest first by creation timestamp.
pub fn by_recency(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Highest combined engagement first; recency breaks ties.
pub fn by_engagement(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| {
        b.engagement()
            .cmp(&a.engagement())
            .then(b.timestamp.cmp(&a.timestamp))
    });
    sorted
}

/// The profile page's mock partition: even ids are "mine", odd ids are
/// "liked". A display fiction over denormalized data; no follow or like
/// edges exist anywhere.
pub fn split_mine_liked(posts: &[Post]) -> (Vec<Post>, Vec<Post>) {
    posts.iter().cloned().partition(|post| post.id.0 % 2 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{Author, PostId};
    use std::time::{Duration, SystemTime};

    fn post(id: u64, minutes_ago: u64, likes: u32) -> Post {
        Post {
            id: PostId(id),
            author: Author {
                name: "A".to_string(),
                username: "a".to_string(),
            },
            content: format!("post {id}"),
            timestamp: SystemTime::now() - Duration::from_secs(minutes_ago * 60),
            likes,
            retweets: 0,
            replies: 0,
        }
    }

    #[test]
    fn recency_orders_newest_first() {
        let posts = vec![post(1, 30, 0), post(2, 5, 0), post(3, 90, 0)];
        let sorted = by_recency(&posts);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn engagement_orders_by_score() {
        let posts = vec![post(1, 10, 5), post(2, 20, 50), post(3, 30, 20)];
        let sorted = by_engagement(&posts);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn engagement_ties_break_by_recency() {
        let posts = vec![post(1, 60, 10), post(2, 5, 10)];
        let sorted = by_engagement(&posts);
        assert_eq!(sorted[0].id.0, 2);
    }

    #[test]
    fn parity_split_covers_every_post() {
        let posts = vec![post(1, 1, 0), post(2, 2, 0), post(3, 3, 0), post(4, 4, 0)];
        let (mine, liked) = split_mine_liked(&posts);
        assert_eq!(mine.iter().map(|p| p.id.0).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(liked.iter().map(|p| p.id.0).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn projections_leave_input_untouched() {
        let posts = vec![post(1, 30, 0), post(2, 5, 0)];
        let before = posts.clone();
        by_recency(&posts);
        by_engagement(&posts);
        split_mine_liked(&posts);
        assert_eq!(posts, before);
    }
}
