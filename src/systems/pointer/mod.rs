//! Pointer Interaction - drag, momentum hand-off, click discrimination, hover
//!
//! The host forwards discrete pointer events with host-clock timestamps;
//! this module keeps an explicit gesture state machine instead of leaning on
//! any native event-dispatch mechanism:
//!
//! Idle -> (pointer-down on a bubble) -> Dragging -> (pointer-up) -> Idle
//!
//! While Dragging, the held bubble's position is pointer-driven and its
//! velocity frozen at zero; on release the recorded pointer history decides
//! between a momentum throw, a small drift, or nothing. A parallel click
//! cooldown suppresses the trailing click event a drag produces.

mod cooldown;
mod history;
mod momentum;

pub use cooldown::ClickCooldown;
pub use history::{PointerHistory, PointerSample};
pub use momentum::{drift_velocity, release_velocity, Release};

use crate::core::Vec2;
use crate::domain::BubbleId;

/// Transient drag state; exists only between pointer-down and pointer-up.
pub struct DragSession {
    /// The held bubble
    pub bubble: BubbleId,
    /// Pointer minus bubble center at press, so the bubble does not jump
    /// under the cursor
    pub offset: Vec2,
    /// Press timestamp (host clock ms), for tap-vs-drag classification
    pub pressed_at_ms: f64,
    /// Recent pointer samples for release-velocity estimation
    pub history: PointerHistory,
}

/// Per-gesture state machine.
#[derive(Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    /// Id of the held bubble, if any.
    pub fn dragged_bubble(&self) -> Option<BubbleId> {
        match self {
            GestureState::Dragging(session) => Some(session.bubble),
            GestureState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    /// End the gesture, handing the session (and its history) to the caller.
    pub fn take_session(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }
}
