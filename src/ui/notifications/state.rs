use crate::store::types::Notification;
use crate::ui::mvi::UiState;

/// Notifications page state.
///
/// The loading phase is a display-only simulation: the data is already in
/// memory, the page just spends a few ticks on a spinner before showing
/// it. The store itself has no pending or loading states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationsState {
    #[default]
    Unopened,
    Loading {
        ticks_left: u8,
    },
    Ready {
        items: Vec<Notification>,
        selected: usize,
    },
}

impl UiState for NotificationsState {}

impl NotificationsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
