mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TimelineIntent;
pub use reducer::TimelineReducer;
pub use state::{FeedOrder, TimelineState};
pub use view::render_timeline;
