use crate::store::types::Post;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Likes,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Likes => "Likes",
        }
    }
}

/// Profile page: two derived partitions of the feed plus cursor position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub mine: Vec<Post>,
    pub liked: Vec<Post>,
    pub tab: ProfileTab,
    pub selected: usize,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn visible_posts(&self) -> &[Post] {
        match self.tab {
            ProfileTab::Posts => &self.mine,
            ProfileTab::Likes => &self.liked,
        }
    }
}
