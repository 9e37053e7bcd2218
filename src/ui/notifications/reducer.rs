use crate::ui::mvi::Reducer;
use crate::ui::notifications::intent::NotificationsIntent;
use crate::ui::notifications::state::NotificationsState;

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Intent = NotificationsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationsIntent::Open { loading_ticks } => match state {
                NotificationsState::Unopened => NotificationsState::Loading {
                    ticks_left: loading_ticks,
                },
                opened => opened,
            },
            NotificationsIntent::Tick { items } => match state {
                NotificationsState::Loading { ticks_left } => {
                    if ticks_left <= 1 {
                        NotificationsState::Ready { items, selected: 0 }
                    } else {
                        NotificationsState::Loading {
                            ticks_left: ticks_left - 1,
                        }
                    }
                }
                other => other,
            },
            NotificationsIntent::MoveUp => match state {
                NotificationsState::Ready { items, selected } => NotificationsState::Ready {
                    items,
                    selected: selected.saturating_sub(1),
                },
                other => other,
            },
            NotificationsIntent::MoveDown => match state {
                NotificationsState::Ready { items, selected } => {
                    let selected = (selected + 1).min(items.len().saturating_sub(1));
                    NotificationsState::Ready { items, selected }
                }
                other => other,
            },
        }
    }
}
