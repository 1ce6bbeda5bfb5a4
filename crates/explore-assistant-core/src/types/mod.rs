//! Core type definitions for Explore Assistant
//!
//! Shared types used by the store, the sidebar controller and the
//! persistence layer.

mod history_types;
mod settings_types;

pub use history_types::*;
pub use settings_types::*;
