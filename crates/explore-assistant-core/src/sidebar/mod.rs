//! Sidebar logic
//!
//! This module provides:
//! - The two-phase expand/collapse state machine
//! - The auto-resume guard for pending history messages
//! - `SidebarController`, which turns sidebar clicks into store actions

mod controller;
mod expansion;
mod resume;

pub use controller::{HistoryRow, SidebarController, SidebarModel};
pub use expansion::{ContainerWidthToggle, ExpansionAnimator, ExpansionPhase};
pub use resume::ResumeGuard;

#[cfg(test)]
pub use expansion::MockContainerWidthToggle;
