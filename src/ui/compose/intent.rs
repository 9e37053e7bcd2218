use crate::ui::mvi::Intent;

pub enum ComposeIntent {
    Open,
    Input(char),
    Backspace,
    Paste(String),
    /// Escape: close immediately when the draft is empty, otherwise ask for
    /// confirmation first.
    RequestClose,
    /// Unconditional close (submit finished, or discard confirmed).
    Close,
}

impl Intent for ComposeIntent {}
