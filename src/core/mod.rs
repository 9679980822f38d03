//! Core math primitives shared by the physics and pointer systems.

mod vec2;

pub use vec2::Vec2;
