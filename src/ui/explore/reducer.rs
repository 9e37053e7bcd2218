use crate::feed::projection;
use crate::ui::explore::intent::ExploreIntent;
use crate::ui::explore::state::ExploreState;
use crate::ui::mvi::Reducer;

pub struct ExploreReducer;

impl Reducer for ExploreReducer {
    type State = ExploreState;
    type Intent = ExploreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ExploreIntent::Refresh { trends, posts } => {
                let previous = state.selected_id();
                let top = projection::by_engagement(&posts);
                let selected = previous
                    .and_then(|id| top.iter().position(|post| post.id == id))
                    .unwrap_or_else(|| state.selected.min(top.len().saturating_sub(1)));
                ExploreState {
                    trends,
                    top,
                    selected,
                }
            }
            ExploreIntent::MoveUp => ExploreState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            ExploreIntent::MoveDown => {
                let selected = (state.selected + 1).min(state.top.len().saturating_sub(1));
                ExploreState { selected, ..state }
            }
        }
    }
}
