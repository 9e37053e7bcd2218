use crate::ui::messages::intent::MessagesIntent;
use crate::ui::messages::state::MessagesState;
use crate::ui::mvi::Reducer;

pub struct MessagesReducer;

impl Reducer for MessagesReducer {
    type State = MessagesState;
    type Intent = MessagesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessagesIntent::Refresh { conversations } => {
                let selected = state.selected.min(conversations.len().saturating_sub(1));
                MessagesState {
                    conversations,
                    selected,
                }
            }
            MessagesIntent::MoveUp => MessagesState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            MessagesIntent::MoveDown => {
                let selected = (state.selected + 1).min(state.conversations.len().saturating_sub(1));
                MessagesState { selected, ..state }
            }
        }
    }
}
