use crate::ui::post_list::render_post_list;
use crate::ui::theme::{ACCENT, DIM_TEXT};
use crate::ui::timeline::state::{FeedOrder, TimelineState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::SystemTime;

pub fn render_timeline(frame: &mut Frame<'_>, area: Rect, state: &TimelineState, now: SystemTime) {
    if area.height == 0 {
        return;
    }

    let order_bar = Rect { height: 1, ..area };
    let list = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };

    let mut spans = vec![Span::styled(" Feed: ", Style::default().fg(DIM_TEXT))];
    for order in [FeedOrder::Latest, FeedOrder::Top] {
        let style = if order == state.order {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        spans.push(Span::styled(order.label(), style));
        spans.push(Span::styled("  ", Style::default()));
    }
    spans.push(Span::styled("(o toggles)", Style::default().fg(DIM_TEXT)));
    frame.render_widget(Paragraph::new(Line::from(spans)), order_bar);

    render_post_list(frame, list, &state.posts, state.selected, now);
}
