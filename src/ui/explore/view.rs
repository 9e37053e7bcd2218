use crate::feed::format::compact_count;
use crate::ui::explore::state::ExploreState;
use crate::ui::post_list::render_post_list;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::SystemTime;

pub fn render_explore(frame: &mut Frame<'_>, area: Rect, state: &ExploreState, now: SystemTime) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_trends(frame, panes[0], state);
    render_post_list(frame, panes[1], &state.top, state.selected, now);
}

fn render_trends(frame: &mut Frame<'_>, area: Rect, state: &ExploreState) {
    let mut lines = vec![Line::from(Span::styled(
        " Trending",
        Style::default()
            .fg(PRIMARY_TEXT)
            .add_modifier(Modifier::BOLD),
    ))];
    for trend in &state.trends {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", trend.topic), Style::default().fg(ACCENT)),
            Span::styled(
                format!("  {} posts", compact_count(trend.posts)),
                Style::default().fg(DIM_TEXT),
            ),
        ]));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(list, area);
}
