use crate::domain::Bubble;

/// Resolve one ordered bubble pair as a 2D elastic collision.
///
/// No-op when the centers are at least sum-of-radii apart. On contact, both
/// velocities are rotated into the collision-normal frame, the normal
/// components exchange via the mass-weighted 1D elastic formula
/// `((m1 - m2)*v1 + 2*m2*v2) / (m1 + m2)`, the tangential components pass
/// through untouched, and the overlap is split evenly along the normal so
/// the pair cannot stick together.
///
/// NOTE: The step loop evaluates every ordered pair, not unique pairs, so a
/// colliding pair is visited from both sides in one tick. The separation
/// nudge normally pushes the pair to exactly sum-of-radii, which makes the
/// second visit a no-op; do not "fix" the iteration to unique pairs, it
/// changes observable physics.
pub fn resolve_pair(bubbles: &mut [Bubble], i: usize, j: usize) {
    if i == j || i >= bubbles.len() || j >= bubbles.len() {
        return;
    }
    let (a, b) = if i < j {
        let (lo, hi) = bubbles.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bubbles.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    };

    let dx = b.pos.x - a.pos.x;
    let dy = b.pos.y - a.pos.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let min_distance = (a.size + b.size) / 2.0;

    if distance >= min_distance {
        return;
    }

    // Collision detected: rotate velocities into the normal frame
    let angle = dy.atan2(dx);
    let (sin, cos) = angle.sin_cos();

    let vx1 = a.velocity.x * cos + a.velocity.y * sin;
    let vy1 = a.velocity.y * cos - a.velocity.x * sin;
    let vx2 = b.velocity.x * cos + b.velocity.y * sin;
    let vy2 = b.velocity.y * cos - b.velocity.x * sin;

    // 1D elastic exchange on the normal components, weighted by mass
    let vx1_final = ((a.mass - b.mass) * vx1 + 2.0 * b.mass * vx2) / (a.mass + b.mass);
    let vx2_final = ((b.mass - a.mass) * vx2 + 2.0 * a.mass * vx1) / (a.mass + b.mass);

    // Rotate velocities back
    a.velocity.x = vx1_final * cos - vy1 * sin;
    a.velocity.y = vy1 * cos + vx1_final * sin;
    b.velocity.x = vx2_final * cos - vy2 * sin;
    b.velocity.y = vy2 * cos + vx2_final * sin;

    // Move the bubbles apart along the normal to prevent sticking
    let overlap = min_distance - distance;
    let move_x = overlap * cos / 2.0;
    let move_y = overlap * sin / 2.0;
    a.pos.x -= move_x;
    a.pos.y -= move_y;
    b.pos.x += move_x;
    b.pos.y += move_y;
}
