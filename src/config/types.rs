use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The local user identity: author of composed posts and the profile page
/// header. Purely presentational; there is no authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Display name (e.g., "Jordan Reyes").
    #[serde(default = "default_user_name")]
    pub name: String,
    /// Handle without the leading "@".
    #[serde(default = "default_user_username")]
    pub username: String,
    /// Short bio shown on the profile page.
    #[serde(default)]
    pub bio: String,
}

/// Presentation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Display-time character budget for composed posts (default: 280).
    /// The store itself accepts any length.
    #[serde(default = "default_char_budget")]
    pub char_budget: usize,
    /// Ticks the notifications page spends in its simulated loading state
    /// (default: 3).
    #[serde(default = "default_loading_ticks")]
    pub loading_ticks: u8,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            username: default_user_username(),
            bio: String::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            char_budget: default_char_budget(),
            loading_ticks: default_loading_ticks(),
        }
    }
}

fn default_user_name() -> String {
    "Jordan Reyes".to_string()
}

fn default_user_username() -> String {
    "jordan".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_char_budget() -> usize {
    280
}

fn default_loading_ticks() -> u8 {
    3
}
