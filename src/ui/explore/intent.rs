use crate::store::types::{Post, Trend};
use crate::ui::mvi::Intent;

pub enum ExploreIntent {
    /// Fresh snapshot; the reducer applies the engagement ordering.
    Refresh { trends: Vec<Trend>, posts: Vec<Post> },
    MoveUp,
    MoveDown,
}

impl Intent for ExploreIntent {}
