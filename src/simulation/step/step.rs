use crate::systems::physics::{integrate_and_contain, resolve_pair};

use super::{render_extract, EngineCore};

/// One simulation frame.
///
/// `sizes[i]` is the host-measured rendered diameter of the bubble at
/// index `i`. A bubble held by the drag skips integration, containment and
/// its own collision pass, but still participates as a zero-velocity
/// obstacle when other bubbles scan for contacts.
pub(super) fn step(engine: &mut EngineCore, container_w: f32, container_h: f32, sizes: &[f32]) {
    // 1. Refresh every bubble's size from this frame's measurements.
    // Missing or non-finite entries read as 0 so a not-yet-rendered
    // element cannot take down the frame.
    for (i, bubble) in engine.bubbles.iter_mut().enumerate() {
        let measured = sizes.get(i).copied().unwrap_or(0.0);
        bubble.size = if measured.is_finite() && measured > 0.0 {
            measured
        } else {
            0.0
        };
    }

    let held = engine.gesture.dragged_bubble();

    for i in 0..engine.bubbles.len() {
        if held == Some(engine.bubbles[i].id) {
            continue;
        }

        // 2-4. Integrate, contain, reflect off walls
        integrate_and_contain(&mut engine.bubbles[i], container_w, container_h);

        // 5. Collisions with every other bubble. Ordered pairs on purpose:
        // a colliding pair is evaluated from both members' perspective in
        // the same tick (see resolve_pair).
        for j in 0..engine.bubbles.len() {
            if j != i {
                resolve_pair(&mut engine.bubbles, i, j);
            }
        }
    }

    // 6. Publish [left, top] offsets to the host-visible buffer. The held
    // bubble's pair is left alone even if a collision shoved its center;
    // only pointer moves update it while the drag lasts.
    render_extract::sync_positions(engine, held);

    engine.frame += 1;
}
