use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ComposeState {
    #[default]
    Hidden,
    Visible {
        text: String,
        /// When true, the next Escape discards the draft. Set on the first
        /// Escape while the draft is non-empty.
        confirm_discard: bool,
    },
}

impl UiState for ComposeState {}

impl ComposeState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Hidden => "",
            Self::Visible { text, .. } => text,
        }
    }
}
