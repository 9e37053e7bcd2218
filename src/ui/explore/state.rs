use crate::store::types::{Post, PostId, Trend};
use crate::ui::mvi::UiState;

/// Explore page: trending topics plus the feed re-sorted by engagement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExploreState {
    pub trends: Vec<Trend>,
    pub top: Vec<Post>,
    pub selected: usize,
}

impl UiState for ExploreState {}

impl ExploreState {
    pub fn selected_id(&self) -> Option<PostId> {
        self.top.get(self.selected).map(|post| post.id)
    }
}
