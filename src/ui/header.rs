use crate::ui::app::Page;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    active: Page,
}

impl Header {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let brand_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(DIM_TEXT);

        let mut spans = vec![
            Span::styled("  chirp", brand_style),
            Span::styled("  │ ", separator_style),
        ];
        for (index, page) in Page::ALL.iter().enumerate() {
            let style = if *page == self.active {
                Style::default()
                    .fg(PRIMARY_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DIM_TEXT)
            };
            spans.push(Span::styled(format!("{} {}", index + 1, page.title()), style));
            spans.push(Span::styled("  ", separator_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
