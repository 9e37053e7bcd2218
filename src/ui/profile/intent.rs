use crate::store::types::Post;
use crate::ui::mvi::Intent;

pub enum ProfileIntent {
    /// Fresh snapshot; the reducer partitions and sorts it.
    Refresh { posts: Vec<Post> },
    SwitchTab,
    MoveUp,
    MoveDown,
}

impl Intent for ProfileIntent {}
