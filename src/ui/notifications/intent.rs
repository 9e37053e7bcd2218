use crate::store::types::Notification;
use crate::ui::mvi::Intent;

pub enum NotificationsIntent {
    /// First visit starts the simulated load; later visits keep state.
    Open { loading_ticks: u8 },
    /// Tick while loading counts down; the payload lands when it reaches
    /// zero. Ignored once ready.
    Tick { items: Vec<Notification> },
    MoveUp,
    MoveDown,
}

impl Intent for NotificationsIntent {}
