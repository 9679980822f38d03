use super::EngineCore;
use crate::domain::BubbleId;

/// Rebuild the host-visible positions buffer: one [left, top] f32 pair per
/// bubble, in bubble order (top-left = center minus half-size).
///
/// A bubble in `skip` keeps its previous pair: while held, its published
/// position is owned by pointer moves, not the step.
pub(super) fn sync_positions(engine: &mut EngineCore, skip: Option<BubbleId>) {
    engine.positions.resize(engine.bubbles.len() * 2, 0.0);
    for (i, bubble) in engine.bubbles.iter().enumerate() {
        if skip == Some(bubble.id) {
            continue;
        }
        let top_left = bubble.top_left();
        engine.positions[i * 2] = top_left.x;
        engine.positions[i * 2 + 1] = top_left.y;
    }
}

/// Refresh a single bubble's pair (used by drag moves, which must show up
/// immediately instead of waiting for the next step).
pub(super) fn sync_bubble(engine: &mut EngineCore, idx: usize) {
    if idx >= engine.bubbles.len() || engine.positions.len() < (idx + 1) * 2 {
        return;
    }
    let top_left = engine.bubbles[idx].top_left();
    engine.positions[idx * 2] = top_left.x;
    engine.positions[idx * 2 + 1] = top_left.y;
}
