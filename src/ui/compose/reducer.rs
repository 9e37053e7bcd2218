use crate::ui::compose::intent::ComposeIntent;
use crate::ui::compose::state::ComposeState;
use crate::ui::mvi::Reducer;

pub struct ComposeReducer;

impl Reducer for ComposeReducer {
    type State = ComposeState;
    type Intent = ComposeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposeIntent::Open => match state {
                // Reopening keeps an existing draft.
                visible @ ComposeState::Visible { .. } => visible,
                ComposeState::Hidden => ComposeState::Visible {
                    text: String::new(),
                    confirm_discard: false,
                },
            },
            ComposeIntent::Input(ch) => match state {
                ComposeState::Visible { mut text, .. } => {
                    text.push(ch);
                    ComposeState::Visible {
                        text,
                        confirm_discard: false,
                    }
                }
                hidden => hidden,
            },
            ComposeIntent::Backspace => match state {
                ComposeState::Visible { mut text, .. } => {
                    text.pop();
                    ComposeState::Visible {
                        text,
                        confirm_discard: false,
                    }
                }
                hidden => hidden,
            },
            ComposeIntent::Paste(pasted) => match state {
                ComposeState::Visible { mut text, .. } => {
                    text.push_str(&pasted);
                    ComposeState::Visible {
                        text,
                        confirm_discard: false,
                    }
                }
                hidden => hidden,
            },
            ComposeIntent::RequestClose => match state {
                ComposeState::Visible {
                    text,
                    confirm_discard: false,
                } if !text.is_empty() => {
                    // First Escape with a draft: ask before discarding.
                    ComposeState::Visible {
                        text,
                        confirm_discard: true,
                    }
                }
                _ => ComposeState::Hidden,
            },
            ComposeIntent::Close => ComposeState::Hidden,
        }
    }
}
