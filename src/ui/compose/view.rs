use crate::ui::compose::state::ComposeState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{DIM_TEXT, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 10;

pub fn render_compose(frame: &mut Frame<'_>, state: &ComposeState, char_budget: usize) {
    let ComposeState::Visible {
        text,
        confirm_discard,
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Post ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let status = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1.min(inner.height),
        ..inner
    };

    let draft = Paragraph::new(format!("{text}▏"))
        .style(Style::default().fg(PRIMARY_TEXT))
        .wrap(Wrap { trim: false });
    frame.render_widget(draft, body);

    let used = text.chars().count();
    let counter_style = if used > char_budget {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    let hint = if *confirm_discard {
        Span::styled(
            "Draft not posted. Esc again to discard",
            Style::default().fg(STATUS_ERROR),
        )
    } else {
        Span::styled("Enter: post │ Esc: cancel", Style::default().fg(DIM_TEXT))
    };
    let counter = format!("{used}/{char_budget}");
    let padding = (status.width as usize)
        .saturating_sub(hint.width())
        .saturating_sub(counter.chars().count());
    let line = Line::from(vec![
        hint,
        Span::styled(" ".repeat(padding), Style::default()),
        Span::styled(counter, counter_style),
    ]);
    frame.render_widget(Paragraph::new(line), status);
}
