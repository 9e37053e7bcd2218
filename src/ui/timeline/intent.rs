use crate::store::types::Post;
use crate::ui::mvi::Intent;

pub enum TimelineIntent {
    /// Fresh snapshot from the store; the reducer applies the current
    /// ordering and keeps the cursor on the same post where possible.
    Refresh { posts: Vec<Post> },
    MoveUp,
    MoveDown,
    ToggleOrder,
}

impl Intent for TimelineIntent {}
