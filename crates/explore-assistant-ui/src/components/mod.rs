//! Reusable UI components

pub mod icon;
pub mod tooltip;

pub use icon::{svg_icon, IconName, IconSize};
pub use tooltip::TextTooltip;
