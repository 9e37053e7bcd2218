use crate::config::ConfigStore;
use crate::store::StoreHandle;
use crate::ui::compose::{ComposeIntent, ComposeReducer, ComposeState};
use crate::ui::explore::{ExploreIntent, ExploreReducer, ExploreState};
use crate::ui::messages::{MessagesIntent, MessagesReducer, MessagesState};
use crate::ui::mvi::Reducer;
use crate::ui::notifications::{NotificationsIntent, NotificationsReducer, NotificationsState};
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::timeline::{TimelineIntent, TimelineReducer, TimelineState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Timeline,
    Explore,
    Notifications,
    Messages,
    Profile,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Timeline,
        Page::Explore,
        Page::Notifications,
        Page::Messages,
        Page::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Explore => "Explore",
            Self::Notifications => "Notifications",
            Self::Messages => "Messages",
            Self::Profile => "Profile",
        }
    }

    pub fn from_digit(digit: u32) -> Option<Page> {
        Self::ALL.get(digit.checked_sub(1)? as usize).copied()
    }

    fn next(&self) -> Page {
        let index = Self::ALL.iter().position(|page| page == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Aggregate of all per-page view states plus the injected store handle.
///
/// Reducers own every view-state transition; the `App` methods around them
/// execute the side effects (store mutations, config reload) and feed the
/// results back in as refresh intents.
pub struct App {
    should_quit: bool,
    page: Page,
    stores: StoreHandle,
    config: ConfigStore,
    timeline: TimelineState,
    compose: ComposeState,
    notifications: NotificationsState,
    messages: MessagesState,
    profile: ProfileState,
    explore: ExploreState,
}

impl App {
    pub fn new(stores: StoreHandle, config: ConfigStore) -> Self {
        let mut app = Self {
            should_quit: false,
            page: Page::Timeline,
            stores,
            config,
            timeline: TimelineState::default(),
            compose: ComposeState::default(),
            notifications: NotificationsState::default(),
            messages: MessagesState::default(),
            profile: ProfileState::default(),
            explore: ExploreState::default(),
        };
        app.refresh_page_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn stores(&self) -> &StoreHandle {
        &self.stores
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn compose_open(&self) -> bool {
        self.compose.is_visible()
    }

    pub fn notifications(&self) -> &NotificationsState {
        &self.notifications
    }

    pub fn messages(&self) -> &MessagesState {
        &self.messages
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn explore(&self) -> &ExploreState {
        &self.explore
    }

    pub fn switch_page(&mut self, page: Page) {
        self.page = page;
        if page == Page::Notifications {
            let loading_ticks = self.config.get().ui.loading_ticks;
            dispatch_mvi!(
                self,
                notifications,
                NotificationsReducer,
                NotificationsIntent::Open { loading_ticks }
            );
        }
        self.refresh_page_data();
    }

    pub fn next_page(&mut self) {
        self.switch_page(self.page.next());
    }

    pub fn on_tick(&mut self) {
        if self.page == Page::Notifications && self.notifications.is_loading() {
            let items = self.stores.notifications();
            dispatch_mvi!(
                self,
                notifications,
                NotificationsReducer,
                NotificationsIntent::Tick { items }
            );
        }
        self.refresh_page_data();
    }

    /// Push fresh snapshots into the active page's state. Views re-derive
    /// their projections from these copies; nothing is written back.
    fn refresh_page_data(&mut self) {
        match self.page {
            Page::Timeline => {
                let posts = self.stores.posts().snapshot();
                dispatch_mvi!(self, timeline, TimelineReducer, TimelineIntent::Refresh {
                    posts
                });
            }
            Page::Explore => {
                let trends = self.stores.trends();
                let posts = self.stores.posts().snapshot();
                dispatch_mvi!(self, explore, ExploreReducer, ExploreIntent::Refresh {
                    trends,
                    posts
                });
            }
            Page::Notifications => {}
            Page::Messages => {
                let conversations = self.stores.conversations();
                dispatch_mvi!(self, messages, MessagesReducer, MessagesIntent::Refresh {
                    conversations
                });
            }
            Page::Profile => {
                let posts = self.stores.posts().snapshot();
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Refresh {
                    posts
                });
            }
        }
    }

    // -- selection movement -------------------------------------------------

    pub fn move_up(&mut self) {
        match self.page {
            Page::Timeline => {
                dispatch_mvi!(self, timeline, TimelineReducer, TimelineIntent::MoveUp);
            }
            Page::Explore => {
                dispatch_mvi!(self, explore, ExploreReducer, ExploreIntent::MoveUp);
            }
            Page::Notifications => {
                dispatch_mvi!(
                    self,
                    notifications,
                    NotificationsReducer,
                    NotificationsIntent::MoveUp
                );
            }
            Page::Messages => {
                dispatch_mvi!(self, messages, MessagesReducer, MessagesIntent::MoveUp);
            }
            Page::Profile => {
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::MoveUp);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.page {
            Page::Timeline => {
                dispatch_mvi!(self, timeline, TimelineReducer, TimelineIntent::MoveDown);
            }
            Page::Explore => {
                dispatch_mvi!(self, explore, ExploreReducer, ExploreIntent::MoveDown);
            }
            Page::Notifications => {
                dispatch_mvi!(
                    self,
                    notifications,
                    NotificationsReducer,
                    NotificationsIntent::MoveDown
                );
            }
            Page::Messages => {
                dispatch_mvi!(self, messages, MessagesReducer, MessagesIntent::MoveDown);
            }
            Page::Profile => {
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::MoveDown);
            }
        }
    }

    pub fn toggle_feed_order(&mut self) {
        if self.page == Page::Timeline {
            dispatch_mvi!(self, timeline, TimelineReducer, TimelineIntent::ToggleOrder);
        }
    }

    pub fn switch_profile_tab(&mut self) {
        if self.page == Page::Profile {
            dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::SwitchTab);
        }
    }

    // -- store mutations ----------------------------------------------------

    /// Like the post under the cursor. Timeline and explore only; other
    /// pages have no post cursor.
    pub fn like_selected(&mut self) {
        let id = match self.page {
            Page::Timeline => self.timeline.selected_id(),
            Page::Explore => self.explore.selected_id(),
            _ => None,
        };
        if let Some(id) = id {
            self.stores.posts().like(id);
            self.refresh_page_data();
        }
    }

    /// Repost the post under the cursor. Same pages as [`like_selected`].
    ///
    /// [`like_selected`]: App::like_selected
    pub fn retweet_selected(&mut self) {
        let id = match self.page {
            Page::Timeline => self.timeline.selected_id(),
            Page::Explore => self.explore.selected_id(),
            _ => None,
        };
        if let Some(id) = id {
            self.stores.posts().retweet(id);
            self.refresh_page_data();
        }
    }

    // -- compose dialog -----------------------------------------------------

    pub fn open_compose(&mut self) {
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Open);
    }

    pub fn compose_input(&mut self, ch: char) {
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Input(ch));
    }

    pub fn compose_backspace(&mut self) {
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Backspace);
    }

    pub fn compose_paste(&mut self, text: String) {
        if self.compose_open() {
            dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Paste(text));
        }
    }

    pub fn request_close_compose(&mut self) {
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::RequestClose);
    }

    /// Validate the draft and add it to the store. Empty or over-budget
    /// drafts stay open; the store itself would accept them either way.
    pub fn submit_compose(&mut self) {
        let config = self.config.get();
        let draft = self.compose.text().trim().to_string();
        if draft.is_empty() || draft.chars().count() > config.ui.char_budget {
            return;
        }

        let author = crate::store::types::Author {
            name: config.user.name,
            username: config.user.username,
        };
        self.stores.posts().add(author, draft);
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Close);
        self.refresh_page_data();
    }

    // -- config -------------------------------------------------------------

    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => tracing::info!("config reloaded"),
            Err(err) => tracing::warn!(error = %err, "config reload failed; keeping old config"),
        }
    }
}
