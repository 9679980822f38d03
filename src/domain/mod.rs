//! Domain types: bubble bodies, scene bundles and gesture tuning.

pub mod bubble;
pub mod tuning;

pub use bubble::{Bubble, BubbleId, BubbleSpec, SceneBundle};
pub use tuning::Tuning;
