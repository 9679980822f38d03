//! Simulation systems: per-frame physics and pointer-gesture handling.

pub mod physics;
pub mod pointer;
