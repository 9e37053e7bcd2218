use crate::feed::projection;
use crate::store::types::Post;
use crate::ui::mvi::Reducer;
use crate::ui::timeline::intent::TimelineIntent;
use crate::ui::timeline::state::{FeedOrder, TimelineState};

pub struct TimelineReducer;

impl Reducer for TimelineReducer {
    type State = TimelineState;
    type Intent = TimelineIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TimelineIntent::Refresh { posts } => {
                let previous = state.selected_id();
                let posts = apply_order(&posts, state.order);
                let selected = previous
                    .and_then(|id| posts.iter().position(|post| post.id == id))
                    .unwrap_or_else(|| clamp(state.selected, posts.len()));
                TimelineState {
                    posts,
                    order: state.order,
                    selected,
                }
            }
            TimelineIntent::MoveUp => TimelineState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            TimelineIntent::MoveDown => {
                let selected = clamp(state.selected + 1, state.posts.len());
                TimelineState { selected, ..state }
            }
            TimelineIntent::ToggleOrder => {
                let order = match state.order {
                    FeedOrder::Latest => FeedOrder::Top,
                    FeedOrder::Top => FeedOrder::Latest,
                };
                let posts = apply_order(&state.posts, order);
                TimelineState {
                    posts,
                    order,
                    // Cursor restarts at the top: the list just reshuffled.
                    selected: 0,
                }
            }
        }
    }
}

fn apply_order(posts: &[Post], order: FeedOrder) -> Vec<Post> {
    match order {
        FeedOrder::Latest => projection::by_recency(posts),
        FeedOrder::Top => projection::by_engagement(posts),
    }
}

fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
