use crate::ui::app::{App, Page};
use crate::ui::compose::render_compose;
use crate::ui::explore::render_explore;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::messages::render_messages;
use crate::ui::notifications::render_notifications;
use crate::ui::profile::render_profile;
use crate::ui::timeline::render_timeline;
use ratatui::widgets::Clear;
use ratatui::Frame;
use std::time::SystemTime;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let now = SystemTime::now();
    let config = app.config().get();

    frame.render_widget(Header::new(app.page()).widget(), header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Timeline => render_timeline(frame, body, app.timeline(), now),
        Page::Explore => render_explore(frame, body, app.explore(), now),
        Page::Notifications => render_notifications(frame, body, app.notifications(), now),
        Page::Messages => render_messages(frame, body, app.messages(), now),
        Page::Profile => render_profile(frame, body, app.profile(), &config.user, now),
    }
    frame.render_widget(Footer::new().widget(footer), footer);

    // Dialog last so it paints over the page.
    render_compose(frame, app.compose(), config.ui.char_budget);
}
