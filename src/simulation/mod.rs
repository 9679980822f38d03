//! EngineCore - orchestration of the bubble simulation
//!
//! Single Responsibility: the core only owns state and delegates; the
//! per-frame pipeline lives in step/, input handling in commands/, output
//! publishing in render/. Everything is owned by one object so multiple
//! engines coexist (tests rely on this).
//!
//! The host drives the loop: one `step` call per animation frame with the
//! container's current dimensions and every bubble's measured rendered
//! size, pointer events forwarded as they arrive (interleaved, never
//! concurrent, with steps), and queued navigations pulled out afterwards.

use crate::core::Vec2;
use crate::domain::bubble::{Bubble, BubbleId, SceneBundle};
use crate::domain::tuning::Tuning;
use crate::systems::pointer::{ClickCooldown, GestureState};

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::Engine;

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    random::xorshift32(state)
}

/// The simulation core
pub struct EngineCore {
    bubbles: Vec<Bubble>,
    tuning: Tuning,

    // Gesture state
    gesture: GestureState,
    cooldown: ClickCooldown,

    // Effects out
    pending_navigation: Option<String>,
    /// Flat [left, top] f32 pairs in bubble order, host-visible zero-copy
    positions: Vec<f32>,

    // State
    next_id: BubbleId,
    frame: u64,
    rng_state: u32,
}

impl EngineCore {
    /// Create an engine with the built-in default scene.
    pub fn new() -> Self {
        init::create_engine_core(&SceneBundle::from_generated())
    }

    /// Create an engine with no bubbles; the host spawns its own.
    pub fn empty() -> Self {
        init::create_engine_core(&SceneBundle::default())
    }

    pub fn from_scene(scene: &SceneBundle) -> Self {
        init::create_engine_core(scene)
    }

    /// Replace the current bubble set from a JSON scene bundle.
    /// On parse failure the previous scene is left intact.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene = SceneBundle::from_json(json)?;
        commands::load_scene(self, &scene);
        Ok(())
    }

    /// Replace the gesture/momentum tuning from JSON (absent fields keep
    /// their defaults). On parse failure the previous tuning is kept.
    pub fn load_tuning_json(&mut self, json: &str) -> Result<(), String> {
        self.tuning = Tuning::from_json(json)?;
        Ok(())
    }

    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    // === TUNABLE SETTERS ===

    pub fn set_tap_timeout_ms(&mut self, ms: f64) {
        settings::set_tap_timeout_ms(self, ms);
    }

    /// Applies to the next gesture; an in-flight drag keeps its ring.
    pub fn set_history_capacity(&mut self, capacity: usize) {
        settings::set_history_capacity(self, capacity);
    }

    pub fn set_min_release_speed(&mut self, speed: f32) {
        settings::set_min_release_speed(self, speed);
    }

    pub fn set_momentum_factor(&mut self, factor: f32) {
        settings::set_momentum_factor(self, factor);
    }

    pub fn set_max_release_speed(&mut self, speed: f32) {
        settings::set_max_release_speed(self, speed);
    }

    pub fn set_drift_bias(&mut self, bias: f32) {
        settings::set_drift_bias(self, bias);
    }

    pub fn set_drift_scale(&mut self, scale: f32) {
        settings::set_drift_scale(self, scale);
    }

    // === SCENE COMMANDS ===

    /// Spawn a bubble; returns its stable id.
    pub fn spawn_bubble(
        &mut self,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        mass: f32,
        destination: String,
    ) -> BubbleId {
        commands::spawn_bubble(self, x, y, dx, dy, mass, destination)
    }

    /// Remove a bubble by id. Ends the drag if it was held.
    pub fn remove_bubble(&mut self, id: BubbleId) -> bool {
        commands::remove_bubble(self, id)
    }

    /// Remove all bubbles and reset gesture state.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === POINTER COMMANDS ===

    /// Pointer pressed on a bubble: zero its velocity, open a drag session
    /// and start the click cooldown. Unknown ids are ignored.
    pub fn pointer_down(&mut self, id: BubbleId, px: f32, py: f32, time_ms: f64) {
        commands::pointer_down(self, id, px, py, time_ms);
    }

    /// Pointer moved: drive the held bubble, clamped into the container.
    /// No-op outside a drag.
    pub fn pointer_move(
        &mut self,
        px: f32,
        py: f32,
        container_w: f32,
        container_h: f32,
        time_ms: f64,
    ) {
        commands::pointer_move(self, px, py, container_w, container_h, time_ms);
    }

    /// Pointer released: classify tap vs drag and hand off momentum.
    /// No-op outside a drag.
    pub fn pointer_up(&mut self, time_ms: f64) {
        commands::pointer_up(self, time_ms);
    }

    /// Click on a bubble: queue a navigation unless suppressed by the
    /// post-drag cooldown.
    pub fn click(&mut self, id: BubbleId, time_ms: f64) {
        commands::click(self, id, time_ms);
    }

    pub fn hover_enter(&mut self, id: BubbleId) {
        commands::set_hover(self, id, true);
    }

    pub fn hover_leave(&mut self, id: BubbleId) {
        commands::set_hover(self, id, false);
    }

    /// Pop the queued navigation destination, if any. The host performs
    /// the actual navigation; the engine only decides when.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }

    /// Step the simulation one frame.
    ///
    /// `sizes[i]` is the measured rendered diameter of the bubble at index
    /// `i` (see [`EngineCore::bubble_id_at`]); missing or non-finite
    /// entries read as 0. Container dimensions are re-supplied every call,
    /// never cached, so resizes need no separate listener.
    pub fn step(&mut self, container_w: f32, container_h: f32, sizes: &[f32]) {
        step::step(self, container_w, container_h, sizes);
    }

    // === READ SIDE ===

    /// Pointer to the flat [left, top] buffer (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    /// Length of the positions buffer in f32 elements (2 per bubble)
    pub fn positions_len(&self) -> usize {
        self.positions.len()
    }

    pub fn bubble_id_at(&self, index: usize) -> Option<BubbleId> {
        self.bubbles.get(index).map(|b| b.id)
    }

    pub fn bubble_x(&self, id: BubbleId) -> Option<f32> {
        self.bubble(id).map(|b| b.pos.x)
    }

    pub fn bubble_y(&self, id: BubbleId) -> Option<f32> {
        self.bubble(id).map(|b| b.pos.y)
    }

    pub fn bubble_velocity(&self, id: BubbleId) -> Option<Vec2> {
        self.bubble(id).map(|b| b.velocity)
    }

    pub fn bubble_size(&self, id: BubbleId) -> Option<f32> {
        self.bubble(id).map(|b| b.size)
    }

    /// Top-left offset the host applies to the element.
    pub fn bubble_left(&self, id: BubbleId) -> Option<f32> {
        self.bubble(id).map(|b| b.top_left().x)
    }

    pub fn bubble_top(&self, id: BubbleId) -> Option<f32> {
        self.bubble(id).map(|b| b.top_left().y)
    }

    pub fn is_hovered(&self, id: BubbleId) -> bool {
        self.bubble(id).map(|b| b.hovered).unwrap_or(false)
    }

    pub fn destination(&self, id: BubbleId) -> Option<String> {
        self.bubble(id).map(|b| b.destination.clone())
    }

    fn bubble(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubble_index(id).map(|i| &self.bubbles[i])
    }

    fn bubble_index(&self, id: BubbleId) -> Option<usize> {
        self.bubbles.iter().position(|b| b.id == id)
    }

    fn rand01(&mut self) -> f32 {
        (xorshift32(&mut self.rng_state) as f32) / (u32::MAX as f32)
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
