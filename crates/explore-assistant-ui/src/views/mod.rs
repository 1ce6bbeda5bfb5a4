//! Main view compositions

mod settings_dialog;
mod sidebar;

pub use settings_dialog::SettingsDialog;
pub use sidebar::{SidebarEvent, SidebarView};
