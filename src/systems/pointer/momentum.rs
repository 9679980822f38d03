use crate::core::Vec2;
use crate::domain::Tuning;

use super::history::PointerHistory;

/// Outcome of classifying a drag release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Fast drag: scaled, speed-capped momentum velocity (px/frame).
    Momentum(Vec2),
    /// Slow drag, or unusable timing: caller assigns a drift velocity.
    Drift,
    /// Fewer than two samples: nothing to estimate, velocity stays as-is.
    None,
}

/// Decide the release velocity from a gesture's pointer history.
///
/// Velocity is Δposition / Δtime between the oldest and newest samples
/// (px/ms). Δt must be > 0 or the computation is skipped in favor of the
/// drift branch. Speeds above the tuned minimum are scaled by the momentum
/// factor and capped at the maximum release speed.
pub fn release_velocity(history: &PointerHistory, tuning: &Tuning) -> Release {
    let (Some(oldest), Some(newest)) = (history.oldest(), history.newest()) else {
        return Release::None;
    };
    if history.len() < 2 {
        return Release::None;
    }

    let dt_ms = (newest.time_ms - oldest.time_ms) as f32;
    if dt_ms <= 0.0 {
        return Release::Drift;
    }

    let velocity = (newest.pos - oldest.pos) * (1.0 / dt_ms);
    if velocity.length() > tuning.min_release_speed {
        let thrown = velocity * tuning.momentum_factor;
        Release::Momentum(thrown.clamp_length(tuning.max_release_speed))
    } else {
        Release::Drift
    }
}

/// Small pseudo-random velocity so a slow-released bubble drifts instead of
/// stopping dead. The bias is asymmetric on purpose (skews up-and-left with
/// the default tuning); this matches the shipped behavior.
pub fn drift_velocity(tuning: &Tuning, rand_x: f32, rand_y: f32) -> Vec2 {
    Vec2::new(
        (rand_x - tuning.drift_bias) * tuning.drift_scale,
        (rand_y - tuning.drift_bias) * tuning.drift_scale,
    )
}
