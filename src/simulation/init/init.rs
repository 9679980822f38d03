use crate::domain::bubble::SceneBundle;
use crate::domain::tuning::Tuning;
use crate::systems::pointer::{ClickCooldown, GestureState};

use super::{commands, EngineCore};

pub(super) fn create_engine_core(scene: &SceneBundle) -> EngineCore {
    let mut engine = EngineCore {
        bubbles: Vec::with_capacity(scene.bubbles.len()),
        tuning: Tuning::default(),
        gesture: GestureState::Idle,
        cooldown: ClickCooldown::new(),
        pending_navigation: None,
        positions: Vec::new(),
        next_id: 0,
        frame: 0,
        rng_state: 12345,
    };
    commands::load_scene(&mut engine, scene);
    engine
}
