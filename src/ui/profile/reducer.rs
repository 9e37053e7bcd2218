use crate::feed::projection;
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::{ProfileState, ProfileTab};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Refresh { posts } => {
                let (mine, liked) = projection::split_mine_liked(&posts);
                let mine = projection::by_recency(&mine);
                let liked = projection::by_recency(&liked);
                let visible_len = match state.tab {
                    ProfileTab::Posts => mine.len(),
                    ProfileTab::Likes => liked.len(),
                };
                ProfileState {
                    mine,
                    liked,
                    tab: state.tab,
                    selected: state.selected.min(visible_len.saturating_sub(1)),
                }
            }
            ProfileIntent::SwitchTab => {
                let tab = match state.tab {
                    ProfileTab::Posts => ProfileTab::Likes,
                    ProfileTab::Likes => ProfileTab::Posts,
                };
                ProfileState {
                    tab,
                    selected: 0,
                    ..state
                }
            }
            ProfileIntent::MoveUp => ProfileState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            ProfileIntent::MoveDown => {
                let selected = (state.selected + 1).min(state.visible_posts().len().saturating_sub(1));
                ProfileState { selected, ..state }
            }
        }
    }
}
