//! Explore Assistant Core Library
//!
//! This crate provides the logic behind the Explore Assistant sidebar:
//! - The shared chat store (actions, reducer, batched dispatch)
//! - The sidebar controller (expansion animation, history selection,
//!   auto-resume of a pending history message)
//! - SQLite-based persistence for history and settings
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  explore-assistant-core                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  store/        - Actions, reducer, AssistantStore           │
//! │  sidebar/      - SidebarController, expansion, resume       │
//! │  storage/      - SQLite database, queries                   │
//! │  types/        - History items, explore ids, settings       │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod sidebar;
pub mod storage;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Error, ExploreIdError, Result};
pub use types::*;

// Re-export store components
pub use store::{reduce, Action, AssistantState, AssistantStore, Dispatch, Effect, PendingMessage};

// Re-export sidebar components
pub use sidebar::{
    ContainerWidthToggle, ExpansionAnimator, ExpansionPhase, HistoryRow, ResumeGuard,
    SidebarController, SidebarModel,
};

// Re-export storage
pub use storage::Storage;
