//! Sidebar settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Key of the sidebar settings row in the settings table
pub const SIDEBAR_SETTINGS_KEY: &str = "sidebar";

/// User-tunable sidebar settings, stored as JSON in the settings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarSettings {
    /// Delay between the width transition and the label fade
    pub transition_delay_ms: u64,
    /// Whether the sidebar opens expanded
    pub start_expanded: bool,
    /// Maximum number of history entries kept
    pub max_history: usize,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            transition_delay_ms: 100,
            start_expanded: true,
            max_history: 50,
        }
    }
}

impl SidebarSettings {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}
