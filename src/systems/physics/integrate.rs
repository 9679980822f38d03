use crate::core::Vec2;
use crate::domain::Bubble;

/// Move a bubble by its per-frame velocity, then keep it inside the
/// container and reflect off any wall it touches.
///
/// Order matters: the clamp runs first so a bubble stuck outside (container
/// shrank, size grew under the cursor) is pushed back in, and the reflection
/// check then sees the bubble's edge resting on the boundary.
pub fn integrate_and_contain(bubble: &mut Bubble, container_w: f32, container_h: f32) {
    let half = bubble.size / 2.0;

    // 1. Integrate position (velocity is px per frame)
    bubble.pos.x += bubble.velocity.x;
    bubble.pos.y += bubble.velocity.y;

    // 2. Push the bubble back inside if any edge ended up past a wall
    if bubble.pos.x - half < 0.0 {
        bubble.pos.x = half;
    }
    if bubble.pos.x + half > container_w {
        bubble.pos.x = container_w - half;
    }
    if bubble.pos.y - half < 0.0 {
        bubble.pos.y = half;
    }
    if bubble.pos.y + half > container_h {
        bubble.pos.y = container_h - half;
    }

    // 3. Elastic wall reflection, axes independent: a corner hit flips
    // both components in the same tick
    if bubble.pos.x - half <= 0.0 || bubble.pos.x + half >= container_w {
        bubble.velocity.x = -bubble.velocity.x;
    }
    if bubble.pos.y - half <= 0.0 || bubble.pos.y + half >= container_h {
        bubble.velocity.y = -bubble.velocity.y;
    }
}

/// Clamp a center position so a body of diameter `2 * half` stays fully
/// inside the container. Used for pointer-driven placement while dragging.
pub fn clamp_center(pos: Vec2, half: f32, container_w: f32, container_h: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(half, (container_w - half).max(half)),
        pos.y.clamp(half, (container_h - half).max(half)),
    )
}
