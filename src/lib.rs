//! Bubblenav Engine - physics for draggable navigation bubbles in WASM
//!
//! A small fixed set of circular bodies drifts and bounces inside a bounded
//! container. Each bubble links to a navigation destination; dragging a
//! bubble throws it with momentum, tapping it asks the host to navigate.
//!
//! Architecture:
//! - core/       - Math primitives
//! - domain/     - Bubble bodies, scene bundles, gesture tuning
//! - systems/    - Physics step and pointer-gesture state machine
//! - simulation/ - Orchestration + wasm facade
//!
//! The JS host owns the DOM: it measures rendered bubble sizes every frame,
//! forwards pointer events with timestamps, calls `step` from its
//! requestAnimationFrame chain, and performs the navigations the engine
//! queues. The engine owns every byte of simulation and gesture state.

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

// Compatibility re-exports (keeps call sites short)
pub use domain::bubble;
pub use domain::tuning;
pub use systems::physics;
pub use systems::pointer;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Bubblenav WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{Engine, EngineCore};
