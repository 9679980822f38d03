use crate::core::Vec2;
use crate::domain::bubble::{Bubble, BubbleId, BubbleSpec, SceneBundle};
use crate::systems::physics::clamp_center;
use crate::systems::pointer::{
    drift_velocity, release_velocity, DragSession, GestureState, PointerHistory, Release,
};

use super::{render_extract, EngineCore};

pub(super) fn spawn_bubble(
    engine: &mut EngineCore,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    mass: f32,
    destination: String,
) -> BubbleId {
    let spec = BubbleSpec {
        x,
        y,
        dx,
        dy,
        mass,
        destination,
    };
    spawn_from_spec(engine, &spec)
}

pub(super) fn spawn_from_spec(engine: &mut EngineCore, spec: &BubbleSpec) -> BubbleId {
    let id = engine.next_id;
    engine.next_id += 1;
    engine.bubbles.push(Bubble::from_spec(id, spec));
    render_extract::sync_positions(engine, None);
    id
}

pub(super) fn remove_bubble(engine: &mut EngineCore, id: BubbleId) -> bool {
    let Some(idx) = engine.bubble_index(id) else {
        return false;
    };

    // A held bubble takes its gesture down with it
    if engine.gesture.dragged_bubble() == Some(id) {
        engine.gesture = GestureState::Idle;
    }

    engine.bubbles.remove(idx);
    render_extract::sync_positions(engine, None);
    true
}

pub(super) fn clear(engine: &mut EngineCore) {
    engine.bubbles.clear();
    engine.gesture = GestureState::Idle;
    engine.pending_navigation = None;
    render_extract::sync_positions(engine, None);
}

/// Replace the bubble set with a scene bundle's.
pub(super) fn load_scene(engine: &mut EngineCore, scene: &SceneBundle) {
    clear(engine);
    for spec in &scene.bubbles {
        spawn_from_spec(engine, spec);
    }
}

pub(super) fn pointer_down(engine: &mut EngineCore, id: BubbleId, px: f32, py: f32, time_ms: f64) {
    let Some(idx) = engine.bubble_index(id) else {
        return;
    };

    // Stop natural motion while held; the pointer drives position now
    let bubble = &mut engine.bubbles[idx];
    bubble.velocity = Vec2::zero();
    let offset = Vec2::new(px - bubble.pos.x, py - bubble.pos.y);

    engine.gesture = GestureState::Dragging(DragSession {
        bubble: id,
        offset,
        pressed_at_ms: time_ms,
        history: PointerHistory::new(engine.tuning.history_capacity),
    });

    // Suppress the trailing click this gesture will synthesize
    engine
        .cooldown
        .begin_gesture(time_ms, engine.tuning.tap_timeout_ms);
}

pub(super) fn pointer_move(
    engine: &mut EngineCore,
    px: f32,
    py: f32,
    container_w: f32,
    container_h: f32,
    time_ms: f64,
) {
    // A move outside a drag session is a no-op, not an error
    let (id, target) = {
        let Some(session) = engine.gesture.session_mut() else {
            return;
        };
        session.history.push(Vec2::new(px, py), time_ms);
        (
            session.bubble,
            Vec2::new(px - session.offset.x, py - session.offset.y),
        )
    };

    let Some(idx) = engine.bubble_index(id) else {
        return;
    };

    // Constrain the bubble within the container
    let half = engine.bubbles[idx].radius();
    engine.bubbles[idx].pos = clamp_center(target, half, container_w, container_h);

    // Visual position updates immediately, without waiting for a step
    render_extract::sync_bubble(engine, idx);
}

pub(super) fn pointer_up(engine: &mut EngineCore, time_ms: f64) {
    // A release outside a drag session is a no-op, not an error
    let Some(session) = engine.gesture.take_session() else {
        return;
    };

    // Tap-classified release re-arms the click path
    if time_ms - session.pressed_at_ms <= engine.tuning.tap_timeout_ms {
        engine.cooldown.rearm();
    }

    // Independent of tap/drag: hand the observed pointer velocity to the
    // bubble (momentum), or a small drift when the drag was too slow
    let Some(idx) = engine.bubble_index(session.bubble) else {
        return;
    };
    match release_velocity(&session.history, &engine.tuning) {
        Release::Momentum(velocity) => engine.bubbles[idx].velocity = velocity,
        Release::Drift => {
            let rand_x = engine.rand01();
            let rand_y = engine.rand01();
            engine.bubbles[idx].velocity = drift_velocity(&engine.tuning, rand_x, rand_y);
        }
        Release::None => {}
    }
}

pub(super) fn click(engine: &mut EngineCore, id: BubbleId, time_ms: f64) {
    // Trailing click of a drag: suppressed by the cooldown
    if !engine.cooldown.is_armed(time_ms) {
        return;
    }
    let Some(idx) = engine.bubble_index(id) else {
        return;
    };
    engine.pending_navigation = Some(engine.bubbles[idx].destination.clone());
}

pub(super) fn set_hover(engine: &mut EngineCore, id: BubbleId, hovered: bool) {
    // Presentation-only; the size change it causes feeds back through the
    // per-step measurements
    if let Some(idx) = engine.bubble_index(id) {
        engine.bubbles[idx].hovered = hovered;
    }
}
