use crate::store::types::{Post, PostId};
use crate::ui::mvi::UiState;

/// Which projection the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Highest engagement first.
    Top,
}

impl FeedOrder {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Top => "Top",
        }
    }
}

/// Timeline view state: a derived copy of the feed plus cursor position.
/// The canonical list lives in the store; this is a projection that gets
/// replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineState {
    pub posts: Vec<Post>,
    pub order: FeedOrder,
    pub selected: usize,
}

impl UiState for TimelineState {}

impl TimelineState {
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<PostId> {
        self.selected_post().map(|post| post.id)
    }
}
