use super::EngineCore;

pub(super) fn set_tap_timeout_ms(engine: &mut EngineCore, ms: f64) {
    engine.tuning.tap_timeout_ms = ms.max(0.0);
}

pub(super) fn set_history_capacity(engine: &mut EngineCore, capacity: usize) {
    engine.tuning.history_capacity = capacity;
}

pub(super) fn set_min_release_speed(engine: &mut EngineCore, speed: f32) {
    engine.tuning.min_release_speed = speed.max(0.0);
}

pub(super) fn set_momentum_factor(engine: &mut EngineCore, factor: f32) {
    engine.tuning.momentum_factor = factor;
}

pub(super) fn set_max_release_speed(engine: &mut EngineCore, speed: f32) {
    engine.tuning.max_release_speed = speed.max(0.0);
}

pub(super) fn set_drift_bias(engine: &mut EngineCore, bias: f32) {
    engine.tuning.drift_bias = bias;
}

pub(super) fn set_drift_scale(engine: &mut EngineCore, scale: f32) {
    engine.tuning.drift_scale = scale;
}
