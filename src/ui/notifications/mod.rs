mod intent;
mod reducer;
mod state;
mod view;

pub use intent::NotificationsIntent;
pub use reducer::NotificationsReducer;
pub use state::NotificationsState;
pub use view::render_notifications;
