use crate::ui::app::{App, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The compose dialog captures everything while open so typed characters
    // never fall through to page shortcuts.
    if app.compose_open() {
        handle_compose_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.next_page(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(page) = ch.to_digit(10).and_then(Page::from_digit) {
                app.switch_page(page);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::Right => app.switch_profile_tab(),
        KeyCode::Char('o') => app.toggle_feed_order(),
        KeyCode::Char('l') => app.like_selected(),
        KeyCode::Char('t') => app.retweet_selected(),
        KeyCode::Char('n') => app.open_compose(),
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.request_close_compose(),
        KeyCode::Enter => app.submit_compose(),
        KeyCode::Backspace => app.compose_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.compose_input(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
