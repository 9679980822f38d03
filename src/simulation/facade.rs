use wasm_bindgen::prelude::*;

use super::EngineCore;

/// WASM facade over [`EngineCore`].
///
/// The JS host wires DOM events to the pointer methods (passing
/// `performance.now()`-style timestamps), calls `step` from its
/// requestAnimationFrame chain with fresh container dimensions and
/// per-bubble measured sizes, applies the published [left, top] offsets to
/// the elements, and performs whatever `take_navigation` hands back.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the built-in default scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EngineCore::new(),
        }
    }

    /// Create an engine with no bubbles
    #[wasm_bindgen(js_name = newEmpty)]
    pub fn new_empty() -> Self {
        Self {
            core: EngineCore::empty(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn bubble_count(&self) -> usize {
        self.core.bubble_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }

    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_tuning(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tuning_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === SCENE API ===

    /// Spawn a bubble at center (x, y); returns its stable id
    pub fn spawn_bubble(
        &mut self,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        mass: f32,
        destination: String,
    ) -> u32 {
        self.core.spawn_bubble(x, y, dx, dy, mass, destination)
    }

    /// Remove a bubble by id
    pub fn remove_bubble(&mut self, id: u32) -> bool {
        self.core.remove_bubble(id)
    }

    /// Remove all bubbles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === SIMULATION ===

    /// Step the simulation one frame.
    /// `sizes[i]` is the measured rendered diameter of the bubble at index
    /// `i` (see `bubble_id_at`); the host measures fresh every frame.
    pub fn step(&mut self, container_w: f32, container_h: f32, sizes: &[f32]) {
        self.core.step(container_w, container_h, sizes);
    }

    // === POINTER EVENTS ===

    pub fn pointer_down(&mut self, id: u32, px: f32, py: f32, time_ms: f64) {
        self.core.pointer_down(id, px, py, time_ms);
    }

    pub fn pointer_move(
        &mut self,
        px: f32,
        py: f32,
        container_w: f32,
        container_h: f32,
        time_ms: f64,
    ) {
        self.core
            .pointer_move(px, py, container_w, container_h, time_ms);
    }

    pub fn pointer_up(&mut self, time_ms: f64) {
        self.core.pointer_up(time_ms);
    }

    pub fn click(&mut self, id: u32, time_ms: f64) {
        self.core.click(id, time_ms);
    }

    pub fn hover_enter(&mut self, id: u32) {
        self.core.hover_enter(id);
    }

    pub fn hover_leave(&mut self, id: u32) {
        self.core.hover_leave(id);
    }

    /// Pop the queued navigation destination (if any) for the host to act on
    pub fn take_navigation(&mut self) -> Option<String> {
        self.core.take_navigation()
    }

    // === RENDER OUTPUT ===

    /// Pointer to the flat [left, top] f32 buffer (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    /// Positions buffer length in f32 elements (2 per bubble)
    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    pub fn bubble_id_at(&self, index: usize) -> Option<u32> {
        self.core.bubble_id_at(index)
    }

    pub fn bubble_x(&self, id: u32) -> Option<f32> {
        self.core.bubble_x(id)
    }

    pub fn bubble_y(&self, id: u32) -> Option<f32> {
        self.core.bubble_y(id)
    }

    pub fn bubble_size(&self, id: u32) -> Option<f32> {
        self.core.bubble_size(id)
    }

    pub fn bubble_left(&self, id: u32) -> Option<f32> {
        self.core.bubble_left(id)
    }

    pub fn bubble_top(&self, id: u32) -> Option<f32> {
        self.core.bubble_top(id)
    }

    pub fn is_hovered(&self, id: u32) -> bool {
        self.core.is_hovered(id)
    }

    pub fn destination(&self, id: u32) -> Option<String> {
        self.core.destination(id)
    }

    // === TUNABLES ===

    pub fn set_tap_timeout_ms(&mut self, ms: f64) {
        self.core.set_tap_timeout_ms(ms);
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.core.set_history_capacity(capacity);
    }

    pub fn set_min_release_speed(&mut self, speed: f32) {
        self.core.set_min_release_speed(speed);
    }

    pub fn set_momentum_factor(&mut self, factor: f32) {
        self.core.set_momentum_factor(factor);
    }

    pub fn set_max_release_speed(&mut self, speed: f32) {
        self.core.set_max_release_speed(speed);
    }

    pub fn set_drift_bias(&mut self, bias: f32) {
        self.core.set_drift_bias(bias);
    }

    pub fn set_drift_scale(&mut self, scale: f32) {
        self.core.set_drift_scale(scale);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
