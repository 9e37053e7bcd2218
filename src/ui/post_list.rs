//! Shared post-row rendering used by the timeline, explore, and profile
//! pages. Three lines per post: author, content, counters.

use crate::feed::format::{compact_count, humanize};
use crate::store::types::Post;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, LIKE, PRIMARY_TEXT, RETWEET};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::SystemTime;

const ROWS_PER_POST: usize = 3;

pub fn render_post_list(
    frame: &mut Frame<'_>,
    area: Rect,
    posts: &[Post],
    selected: usize,
    now: SystemTime,
) {
    if posts.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " Nothing here yet.",
            Style::default().fg(DIM_TEXT),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height as usize / ROWS_PER_POST).max(1);
    let first = if selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (offset, post) in posts.iter().skip(first).take(visible).enumerate() {
        let highlighted = first + offset == selected;
        lines.extend(post_lines(post, now, width, highlighted));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn post_lines(post: &Post, now: SystemTime, width: usize, highlighted: bool) -> Vec<Line<'static>> {
    let name_style = Style::default()
        .fg(PRIMARY_TEXT)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(DIM_TEXT);

    let header = Line::from(vec![
        Span::styled(format!(" {}", post.author.name), name_style),
        Span::styled(
            format!(" @{} · {}", post.author.username, humanize(post.timestamp, now)),
            dim_style,
        ),
    ]);

    let content = Line::from(Span::styled(
        format!(" {}", truncate(&post.content, width.saturating_sub(2))),
        Style::default().fg(PRIMARY_TEXT),
    ));

    let counters = Line::from(vec![
        Span::styled(" ♥ ", Style::default().fg(LIKE)),
        Span::styled(compact_count(post.likes as u64), dim_style),
        Span::styled("  ⟲ ", Style::default().fg(RETWEET)),
        Span::styled(compact_count(post.retweets as u64), dim_style),
        Span::styled("  ↩ ", Style::default().fg(ACCENT)),
        Span::styled(compact_count(post.replies as u64), dim_style),
    ]);

    let mut lines = vec![header, content, counters];
    if highlighted {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }
    lines
}

/// Cut at a character boundary and mark the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
