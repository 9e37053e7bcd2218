use crate::config::UserConfig;
use crate::ui::post_list::render_post_list;
use crate::ui::profile::state::{ProfileState, ProfileTab};
use crate::ui::theme::{ACCENT, DIM_TEXT, PRIMARY_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::SystemTime;

pub fn render_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ProfileState,
    user: &UserConfig,
    now: SystemTime,
) {
    if area.height < 4 {
        return;
    }

    let header = Rect { height: 3, ..area };
    let list = Rect {
        y: area.y + 3,
        height: area.height - 3,
        ..area
    };

    let mut header_lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}", user.name),
            Style::default()
                .fg(PRIMARY_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" @{}", user.username), Style::default().fg(DIM_TEXT)),
    ])];
    if user.bio.is_empty() {
        header_lines.push(Line::from(""));
    } else {
        header_lines.push(Line::from(Span::styled(
            format!(" {}", user.bio),
            Style::default().fg(DIM_TEXT),
        )));
    }

    let mut tab_spans = vec![Span::styled(" ", Style::default())];
    for tab in [ProfileTab::Posts, ProfileTab::Likes] {
        let style = if tab == state.tab {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        tab_spans.push(Span::styled(tab.label(), style));
        tab_spans.push(Span::styled("  ", Style::default()));
    }
    tab_spans.push(Span::styled("(←/→ switch)", Style::default().fg(DIM_TEXT)));
    header_lines.push(Line::from(tab_spans));

    frame.render_widget(Paragraph::new(header_lines), header);
    render_post_list(frame, list, state.visible_posts(), state.selected, now);
}
