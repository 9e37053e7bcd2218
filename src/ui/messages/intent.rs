use crate::store::types::Conversation;
use crate::ui::mvi::Intent;

pub enum MessagesIntent {
    Refresh { conversations: Vec<Conversation> },
    MoveUp,
    MoveDown,
}

impl Intent for MessagesIntent {}
