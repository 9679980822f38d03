//! Physics System - continuous motion inside a bounded container
//!
//! Key concepts:
//! - Bubbles carry a velocity in pixels per simulated frame
//! - Containment clamps each center so the full extent stays inside
//! - Wall hits reflect one velocity component per axis, perfectly elastic
//! - Bubble pairs resolve as 2D elastic collisions weighted by mass
//!
//! Sizes are never assumed: the rendered diameter is refreshed from host
//! measurements every step, so CSS-driven size changes (hover scaling,
//! responsive layouts) are contained and collided correctly on the next tick.

mod collision;
mod integrate;

pub use collision::resolve_pair;
pub use integrate::{clamp_center, integrate_and_contain};
