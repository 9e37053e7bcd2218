use crate::feed::format::humanize;
use crate::ui::messages::state::MessagesState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use std::time::SystemTime;

pub fn render_messages(frame: &mut Frame<'_>, area: Rect, state: &MessagesState, now: SystemTime) {
    if state.conversations.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No conversations.",
            Style::default().fg(DIM_TEXT),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_conversation_list(frame, panes[0], state, now);
    render_thread(frame, panes[1], state, now);
}

fn render_conversation_list(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &MessagesState,
    now: SystemTime,
) {
    let lines: Vec<Line> = state
        .conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            let preview = conversation
                .last_message()
                .map(|message| message.text.as_str())
                .unwrap_or("");
            let age = conversation
                .last_message()
                .map(|message| humanize(message.timestamp, now))
                .unwrap_or_default();
            let mut line = Line::from(vec![
                Span::styled(
                    format!(" {} ", conversation.with.name),
                    Style::default()
                        .fg(PRIMARY_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{age} "), Style::default().fg(DIM_TEXT)),
                Span::styled(preview.to_string(), Style::default().fg(DIM_TEXT)),
            ]);
            if index == state.selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            line
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(list, area);
}

fn render_thread(frame: &mut Frame<'_>, area: Rect, state: &MessagesState, now: SystemTime) {
    let Some(conversation) = state.selected_conversation() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for message in &conversation.messages {
        let (who, style) = if message.from_me {
            ("me", Style::default().fg(ACCENT))
        } else {
            (
                conversation.with.username.as_str(),
                Style::default().fg(PRIMARY_TEXT),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {who}: "), style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), Style::default().fg(PRIMARY_TEXT)),
            Span::styled(
                format!("  {}", humanize(message.timestamp, now)),
                Style::default().fg(DIM_TEXT),
            ),
        ]));
    }

    // Show the tail of the thread when it is taller than the pane.
    let overflow = lines.len().saturating_sub(area.height as usize);
    let thread = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((overflow as u16, 0));
    frame.render_widget(thread, area);
}
