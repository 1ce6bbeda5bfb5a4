//! Expand/collapse sequencing
//!
//! The container width and the label fade never animate together: expanding
//! widens the container first and shows labels after a short delay,
//! collapsing hides labels first and narrows the container after the delay.

use std::time::{Duration, Instant};
use tracing::debug;

/// Parent-owned callback that flips the container between its two widths
#[cfg_attr(test, mockall::automock)]
pub trait ContainerWidthToggle {
    fn toggle_container_width(&mut self);
}

/// Phase of the sidebar expansion animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionPhase {
    Collapsed,
    /// Container is wide, labels appear at the deadline
    Expanding,
    Expanded,
    /// Labels are hidden, container narrows at the deadline
    Collapsing,
}

impl ExpansionPhase {
    /// Whether the container currently has its expanded width
    pub fn container_expanded(self) -> bool {
        !matches!(self, ExpansionPhase::Collapsed)
    }

    pub fn labels_visible(self) -> bool {
        matches!(self, ExpansionPhase::Expanded)
    }
}

/// Two-phase expansion state machine with a cancelable deadline
#[derive(Debug, Clone)]
pub struct ExpansionAnimator {
    phase: ExpansionPhase,
    due: Option<Instant>,
    delay: Duration,
}

impl ExpansionAnimator {
    pub fn new(expanded: bool, delay: Duration) -> Self {
        Self {
            phase: if expanded {
                ExpansionPhase::Expanded
            } else {
                ExpansionPhase::Collapsed
            },
            due: None,
            delay,
        }
    }

    pub fn phase(&self) -> ExpansionPhase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When `advance` next has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.due
    }

    /// Start (or reverse) a transition.
    ///
    /// Toggling while a transition is pending cancels it and restores the
    /// settled state it started from.
    pub fn toggle(&mut self, now: Instant, container: &mut dyn ContainerWidthToggle) {
        let from = self.phase;
        match from {
            ExpansionPhase::Collapsed => {
                container.toggle_container_width();
                self.phase = ExpansionPhase::Expanding;
                self.due = Some(now + self.delay);
            }
            ExpansionPhase::Expanded => {
                self.phase = ExpansionPhase::Collapsing;
                self.due = Some(now + self.delay);
            }
            ExpansionPhase::Expanding => {
                container.toggle_container_width();
                self.phase = ExpansionPhase::Collapsed;
                self.due = None;
            }
            ExpansionPhase::Collapsing => {
                self.phase = ExpansionPhase::Expanded;
                self.due = None;
            }
        }
        debug!("Sidebar expansion {:?} -> {:?}", from, self.phase);
    }

    /// Complete the pending transition if its deadline has passed.
    ///
    /// Returns true when the phase changed.
    pub fn advance(&mut self, now: Instant, container: &mut dyn ContainerWidthToggle) -> bool {
        match self.due {
            Some(due) if due <= now => {}
            _ => return false,
        }

        let from = self.phase;
        self.due = None;
        match from {
            ExpansionPhase::Expanding => self.phase = ExpansionPhase::Expanded,
            ExpansionPhase::Collapsing => {
                container.toggle_container_width();
                self.phase = ExpansionPhase::Collapsed;
            }
            ExpansionPhase::Collapsed | ExpansionPhase::Expanded => return false,
        }
        debug!("Sidebar expansion {:?} -> {:?}", from, self.phase);
        true
    }
}
