use crate::store::types::Conversation;
use crate::ui::mvi::UiState;

/// Messages page: seeded conversation list on the left, the selected
/// thread on the right. Read-only; no send operation exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagesState {
    pub conversations: Vec<Conversation>,
    pub selected: usize,
}

impl UiState for MessagesState {}

impl MessagesState {
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.conversations.get(self.selected)
    }
}
