//! Explore Assistant UI Library
//!
//! GPUI-based desktop UI for the Explore Assistant.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Window                                                       │
//! ├───────────────┬──────────────────────────────────────────────┤
//! │ Sidebar       │  MainPanel                                   │
//! │ (320px / 64px)│  (flex-1)                                    │
//! │               │                                              │
//! │  ☰ Menu       │  ┌────────────────────────────────────────┐  │
//! │  + New Chat   │  │ Explore header (model / explore)       │  │
//! │               │  └────────────────────────────────────────┘  │
//! │  Recent       │  ┌────────────────────────────────────────┐  │
//! │   ▢ item      │  │ Active query / suggested questions     │  │
//! │   ▢ item      │  │                                        │  │
//! │               │  └────────────────────────────────────────┘  │
//! │  ⚙ Settings   │                                              │
//! └───────────────┴──────────────────────────────────────────────┘
//! ```

pub mod components;
pub mod state;
pub mod theme;
pub mod views;

// Re-exports
pub use state::AppStore;
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors};
pub use views::{SettingsDialog, SidebarEvent, SidebarView};
