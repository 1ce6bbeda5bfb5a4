//! Shared chat store
//!
//! This module provides:
//! - The action contract the sidebar dispatches
//! - A pure reducer producing persistence effects
//! - `AssistantStore`, which applies batches atomically

mod action;
mod assistant_store;
mod reducer;
mod state;

pub use action::{Action, Effect};
pub use assistant_store::{AssistantStore, Dispatch};
pub use reducer::reduce;
pub use state::{AssistantState, PendingMessage};
