use crate::feed::format::humanize;
use crate::store::types::NotificationKind;
use crate::ui::notifications::state::NotificationsState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, LIKE, PRIMARY_TEXT, RETWEET};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::SystemTime;

pub fn render_notifications(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &NotificationsState,
    now: SystemTime,
) {
    match state {
        NotificationsState::Unopened => {}
        NotificationsState::Loading { .. } => {
            let spinner = Paragraph::new(Line::from(Span::styled(
                " Loading notifications…",
                Style::default().fg(DIM_TEXT),
            )));
            frame.render_widget(spinner, area);
        }
        NotificationsState::Ready { items, selected } => {
            if items.is_empty() {
                let empty = Paragraph::new(Line::from(Span::styled(
                    " No notifications.",
                    Style::default().fg(DIM_TEXT),
                )));
                frame.render_widget(empty, area);
                return;
            }

            let visible = (area.height as usize).max(1);
            let first = if *selected >= visible {
                selected + 1 - visible
            } else {
                0
            };

            let lines: Vec<Line> = items
                .iter()
                .enumerate()
                .skip(first)
                .take(visible)
                .map(|(index, item)| {
                    let glyph_color = match item.kind {
                        NotificationKind::Like => LIKE,
                        NotificationKind::Retweet => RETWEET,
                        NotificationKind::Reply | NotificationKind::Follow => ACCENT,
                    };
                    let mut line = Line::from(vec![
                        Span::styled(
                            format!(" {} ", item.kind.glyph()),
                            Style::default().fg(glyph_color),
                        ),
                        Span::styled(
                            item.actor.name.clone(),
                            Style::default()
                                .fg(PRIMARY_TEXT)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" {} · {}", item.text, humanize(item.timestamp, now)),
                            Style::default().fg(DIM_TEXT),
                        ),
                    ]);
                    if index == *selected {
                        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                    }
                    line
                })
                .collect();

            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}
