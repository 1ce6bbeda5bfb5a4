//! Application state management

mod app_store;

pub use app_store::*;
