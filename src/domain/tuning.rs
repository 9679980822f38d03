use serde::{Deserialize, Serialize};

/// Gesture and momentum tunables.
///
/// Values are in logical pixels and milliseconds of the host clock, except
/// where noted as pixels per simulated frame. Defaults reproduce the tuning
/// the engine shipped with; hosts may override any subset via JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Press-to-release duration at or below which a gesture counts as a
    /// tap (fires navigation) instead of a drag. Also the length of the
    /// click-suppression cooldown after a gesture starts.
    pub tap_timeout_ms: f64,
    /// Number of recent pointer samples kept for release-velocity
    /// estimation; oldest samples are evicted beyond this.
    pub history_capacity: usize,
    /// Minimum observed drag speed (px/ms) for momentum to apply.
    /// Slower releases get the drift fallback instead.
    pub min_release_speed: f32,
    /// Scalar converting observed px/ms drag speed into px/frame
    /// simulation velocity on release.
    pub momentum_factor: f32,
    /// Cap on release speed in px/frame; faster throws are rescaled down.
    pub max_release_speed: f32,
    /// Bias of the slow-release drift velocity: each axis gets
    /// `(rand01 - drift_bias) * drift_scale`, so bias > 0.5 skews the
    /// drift up-and-left. Deliberately asymmetric.
    pub drift_bias: f32,
    /// Magnitude scale of the drift velocity (px/frame).
    pub drift_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tap_timeout_ms: 80.0,
            history_capacity: 20,
            min_release_speed: 0.2,
            momentum_factor: 100.0,
            max_release_speed: 5.0,
            drift_bias: 0.8,
            drift_scale: 2.0,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
