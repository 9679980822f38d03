use super::*;
use crate::core::Vec2 as V;
use crate::domain::bubble::Bubble;
use crate::systems::physics::resolve_pair;

const W: f32 = 600.0;
const H: f32 = 400.0;

fn test_bubble(id: u32, x: f32, y: f32, vx: f32, vy: f32, mass: f32, size: f32) -> Bubble {
    Bubble {
        id,
        pos: V::new(x, y),
        velocity: V::new(vx, vy),
        mass,
        size,
        hovered: false,
        destination: format!("pages/{}.html", id),
    }
}

#[test]
fn zero_frames_leave_positions_unchanged() {
    let engine = EngineCore::new();
    assert_eq!(engine.bubble_count(), 3);
    assert_eq!(engine.frame(), 0);
    assert_eq!(engine.bubble_x(0), Some(300.0));
    assert_eq!(engine.bubble_y(0), Some(300.0));
    assert_eq!(engine.bubble_x(2), Some(700.0));
    // Sizes are 0 until the first measurement, so left == center
    assert_eq!(engine.bubble_left(0), Some(300.0));
    assert_eq!(engine.positions_len(), 6);
}

#[test]
fn step_integrates_velocity_in_px_per_frame() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(100.0, 100.0, 2.0, -1.5, 1.0, "a".into());
    engine.step(W, H, &[40.0]);
    assert_eq!(engine.bubble_x(id), Some(102.0));
    assert_eq!(engine.bubble_y(id), Some(98.5));
    assert_eq!(engine.frame(), 1);
}

#[test]
fn containment_holds_after_many_steps() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(100.0, 100.0, 37.0, -23.0, 1.0, "a".into());
    for _ in 0..200 {
        engine.step(W, H, &[60.0]);
        let x = engine.bubble_x(id).unwrap();
        let y = engine.bubble_y(id).unwrap();
        assert!((30.0..=W - 30.0).contains(&x), "x out of bounds: {x}");
        assert!((30.0..=H - 30.0).contains(&y), "y out of bounds: {y}");
    }
}

#[test]
fn wall_hit_clamps_and_reflects_one_axis() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(590.0, 200.0, 20.0, 0.0, 1.0, "a".into());
    engine.step(W, H, &[60.0]);
    // 610 overshoots; clamped to 570 with the x velocity negated
    assert_eq!(engine.bubble_x(id), Some(570.0));
    assert_eq!(engine.bubble_velocity(id), Some(V::new(-20.0, 0.0)));
}

#[test]
fn corner_hit_reflects_both_axes_in_one_tick() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(590.0, 390.0, 20.0, 20.0, 1.0, "a".into());
    engine.step(W, H, &[60.0]);
    assert_eq!(engine.bubble_velocity(id), Some(V::new(-20.0, -20.0)));
    assert_eq!(engine.bubble_x(id), Some(570.0));
    assert_eq!(engine.bubble_y(id), Some(370.0));
}

#[test]
fn missing_or_bad_measurements_read_as_size_zero() {
    let mut engine = EngineCore::empty();
    let a = engine.spawn_bubble(100.0, 100.0, 1.0, 0.0, 1.0, "a".into());
    let b = engine.spawn_bubble(200.0, 100.0, 1.0, 0.0, 1.0, "b".into());
    // One entry short, and the provided one is NaN
    engine.step(W, H, &[f32::NAN]);
    assert_eq!(engine.bubble_size(a), Some(0.0));
    assert_eq!(engine.bubble_size(b), Some(0.0));
    // The frame still ran
    assert_eq!(engine.bubble_x(a), Some(101.0));
    assert_eq!(engine.bubble_x(b), Some(201.0));
}

#[test]
fn collision_exchanges_normal_velocity_by_mass() {
    let mut pair = vec![
        test_bubble(0, 100.0, 100.0, 2.0, 0.0, 1.0, 60.0),
        test_bubble(1, 150.0, 100.0, -1.0, 0.0, 2.0, 60.0),
    ];
    resolve_pair(&mut pair, 0, 1);

    // ((m1-m2)v1 + 2 m2 v2)/(m1+m2) = -2, ((m2-m1)v2 + 2 m1 v1)/(m1+m2) = 1
    assert!((pair[0].velocity.x - -2.0).abs() < 1e-4);
    assert!((pair[1].velocity.x - 1.0).abs() < 1e-4);
    assert!(pair[0].velocity.y.abs() < 1e-4);
    assert!(pair[1].velocity.y.abs() < 1e-4);

    // Overlap of 10 split evenly along the normal
    assert!((pair[0].pos.x - 95.0).abs() < 1e-3);
    assert!((pair[1].pos.x - 155.0).abs() < 1e-3);
}

#[test]
fn collision_conserves_momentum_along_normal() {
    let mut pair = vec![
        test_bubble(0, 100.0, 100.0, 1.7, 0.4, 1.5, 50.0),
        test_bubble(1, 130.0, 120.0, -0.9, -1.1, 2.5, 50.0),
    ];
    let before = pair[0].velocity * pair[0].mass + pair[1].velocity * pair[1].mass;
    resolve_pair(&mut pair, 0, 1);
    let after = pair[0].velocity * pair[0].mass + pair[1].velocity * pair[1].mass;
    assert!((before.x - after.x).abs() < 1e-3, "{} vs {}", before.x, after.x);
    assert!((before.y - after.y).abs() < 1e-3, "{} vs {}", before.y, after.y);
}

#[test]
fn equal_masses_swap_normal_components() {
    let mut pair = vec![
        test_bubble(0, 100.0, 100.0, 1.5, 0.0, 1.0, 60.0),
        test_bubble(1, 140.0, 100.0, -0.5, 0.0, 1.0, 60.0),
    ];
    resolve_pair(&mut pair, 0, 1);
    assert!((pair[0].velocity.x - -0.5).abs() < 1e-4);
    assert!((pair[1].velocity.x - 1.5).abs() < 1e-4);
}

#[test]
fn disjoint_bubbles_do_not_collide() {
    let mut pair = vec![
        test_bubble(0, 100.0, 100.0, 2.0, 0.0, 1.0, 60.0),
        test_bubble(1, 300.0, 100.0, -1.0, 0.0, 1.0, 60.0),
    ];
    resolve_pair(&mut pair, 0, 1);
    assert_eq!(pair[0].velocity, V::new(2.0, 0.0));
    assert_eq!(pair[1].velocity, V::new(-1.0, 0.0));
    assert_eq!(pair[0].pos, V::new(100.0, 100.0));
    assert_eq!(pair[1].pos, V::new(300.0, 100.0));
}

#[test]
fn second_evaluation_of_a_separated_pair_is_a_no_op() {
    let mut pair = vec![
        test_bubble(0, 100.0, 100.0, 2.0, 0.0, 1.0, 60.0),
        test_bubble(1, 150.0, 100.0, -1.0, 0.0, 2.0, 60.0),
    ];
    resolve_pair(&mut pair, 0, 1);
    let (v0, v1) = (pair[0].velocity, pair[1].velocity);
    let (p0, p1) = (pair[0].pos, pair[1].pos);

    // The separation nudge pushed the pair to exactly sum-of-radii, so the
    // reverse-order evaluation in the same tick finds no overlap
    resolve_pair(&mut pair, 1, 0);
    assert_eq!(pair[0].velocity, v0);
    assert_eq!(pair[1].velocity, v1);
    assert_eq!(pair[0].pos, p0);
    assert_eq!(pair[1].pos, p1);
}

#[test]
fn step_conserves_momentum_through_a_collision() {
    let mut engine = EngineCore::empty();
    let a = engine.spawn_bubble(300.0, 200.0, 1.0, 0.0, 1.0, "a".into());
    let b = engine.spawn_bubble(358.0, 200.0, -1.0, 0.0, 2.0, "b".into());
    let before = engine.bubble_velocity(a).unwrap() * 1.0 + engine.bubble_velocity(b).unwrap() * 2.0;
    engine.step(W, H, &[60.0, 60.0]);
    let after = engine.bubble_velocity(a).unwrap() * 1.0 + engine.bubble_velocity(b).unwrap() * 2.0;
    assert!((before.x - after.x).abs() < 1e-3);
    assert!((before.y - after.y).abs() < 1e-3);
    // They did collide
    assert!(engine.bubble_velocity(a).unwrap().x < 0.0);
}

// === GESTURES ===

#[test]
fn tap_fires_exactly_one_navigation() {
    let mut engine = EngineCore::new();
    engine.pointer_down(0, 300.0, 300.0, 1000.0);
    assert!(engine.is_dragging());
    engine.pointer_up(1050.0);
    assert!(!engine.is_dragging());
    engine.click(0, 1055.0);
    assert_eq!(engine.take_navigation().as_deref(), Some("pages/about me.html"));
    assert_eq!(engine.take_navigation(), None);
}

#[test]
fn long_drag_suppresses_the_trailing_click() {
    let mut engine = EngineCore::new();
    engine.pointer_down(0, 300.0, 300.0, 1000.0);
    engine.pointer_move(320.0, 300.0, W, H, 1100.0);
    engine.pointer_move(360.0, 300.0, W, H, 1300.0);
    engine.pointer_up(1400.0);
    engine.click(0, 1401.0);
    assert_eq!(engine.take_navigation(), None);
}

#[test]
fn click_with_no_prior_gesture_navigates() {
    let mut engine = EngineCore::new();
    engine.click(1, 5.0);
    assert_eq!(engine.take_navigation().as_deref(), Some("pages/contact.html"));
}

#[test]
fn quick_tap_right_after_a_drag_still_navigates() {
    let mut engine = EngineCore::new();
    // A full drag, click suppressed
    engine.pointer_down(0, 300.0, 300.0, 0.0);
    engine.pointer_move(340.0, 300.0, W, H, 100.0);
    engine.pointer_up(200.0);
    engine.click(0, 201.0);
    assert_eq!(engine.take_navigation(), None);
    // Then an immediate tap on another bubble
    engine.pointer_down(1, 250.0, 250.0, 210.0);
    engine.pointer_up(260.0);
    engine.click(1, 265.0);
    assert_eq!(engine.take_navigation().as_deref(), Some("pages/contact.html"));
}

#[test]
fn release_momentum_is_scaled_and_capped() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    engine.pointer_down(id, 300.0, 300.0, 0.0);
    engine.pointer_move(300.0, 300.0, W, H, 0.0);
    engine.pointer_move(350.0, 300.0, W, H, 100.0);
    engine.pointer_up(100.0);
    // 50 px over 100 ms = 0.5 px/ms, x100 = 50, capped at 5
    let v = engine.bubble_velocity(id).unwrap();
    assert!((v.x - 5.0).abs() < 1e-3, "vx = {}", v.x);
    assert!(v.y.abs() < 1e-3);
}

#[test]
fn release_momentum_below_cap_passes_through() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    engine.set_momentum_factor(4.0);
    engine.pointer_down(id, 300.0, 300.0, 0.0);
    engine.pointer_move(300.0, 300.0, W, H, 0.0);
    engine.pointer_move(350.0, 300.0, W, H, 100.0);
    engine.pointer_up(100.0);
    let v = engine.bubble_velocity(id).unwrap();
    assert!((v.x - 2.0).abs() < 1e-3, "vx = {}", v.x);
}

#[test]
fn slow_release_gets_biased_drift() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    engine.pointer_down(id, 300.0, 300.0, 0.0);
    engine.pointer_move(300.0, 300.0, W, H, 0.0);
    engine.pointer_move(302.0, 300.0, W, H, 1000.0);
    engine.pointer_up(1000.0);
    // (rand01 - 0.8) * 2.0 per axis: within [-1.6, 0.4]
    let v = engine.bubble_velocity(id).unwrap();
    assert!((-1.6..=0.4).contains(&v.x), "vx = {}", v.x);
    assert!((-1.6..=0.4).contains(&v.y), "vy = {}", v.y);
}

#[test]
fn zero_elapsed_history_falls_back_to_drift() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    engine.pointer_down(id, 300.0, 300.0, 500.0);
    engine.pointer_move(300.0, 300.0, W, H, 500.0);
    engine.pointer_move(400.0, 300.0, W, H, 500.0);
    engine.pointer_up(500.0);
    // Huge displacement but dt = 0: never a momentum throw
    let v = engine.bubble_velocity(id).unwrap();
    assert!((-1.6..=0.4).contains(&v.x), "vx = {}", v.x);
    assert!((-1.6..=0.4).contains(&v.y), "vy = {}", v.y);
}

#[test]
fn release_without_movement_keeps_velocity_zeroed() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 1.0, 1.0, 1.0, "a".into());
    engine.pointer_down(id, 300.0, 300.0, 0.0);
    engine.pointer_up(50.0);
    assert_eq!(engine.bubble_velocity(id), Some(V::zero()));
}

#[test]
fn stray_move_and_up_are_no_ops() {
    let mut engine = EngineCore::new();
    engine.pointer_move(10.0, 10.0, W, H, 0.0);
    engine.pointer_up(1.0);
    assert!(!engine.is_dragging());
    assert_eq!(engine.bubble_x(0), Some(300.0));
    assert_eq!(engine.bubble_y(0), Some(300.0));
}

#[test]
fn held_bubble_is_frozen_while_others_move() {
    let mut engine = EngineCore::new();
    engine.pointer_down(0, 300.0, 300.0, 0.0);
    engine.step(900.0, 600.0, &[60.0, 60.0, 60.0]);
    assert_eq!(engine.bubble_x(0), Some(300.0));
    assert_eq!(engine.bubble_y(0), Some(300.0));
    // Bubble 1 integrated its (0.45, 0.3) velocity
    assert!((engine.bubble_x(1).unwrap() - 250.45).abs() < 1e-3);
    assert!((engine.bubble_y(1).unwrap() - 250.3).abs() < 1e-3);
}

#[test]
fn held_bubble_still_blocks_as_an_obstacle() {
    let mut engine = EngineCore::empty();
    let held = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    let free = engine.spawn_bubble(340.0, 300.0, -1.0, 0.0, 1.0, "b".into());
    engine.pointer_down(held, 300.0, 300.0, 0.0);
    engine.step(W, H, &[60.0, 60.0]);
    // Equal masses: the free bubble's incoming normal velocity transfers
    // to the held obstacle
    let v = engine.bubble_velocity(free).unwrap();
    assert!(v.x.abs() < 1e-3, "vx = {}", v.x);
}

#[test]
fn held_bubble_keeps_its_published_pair_until_the_next_pointer_move() {
    let mut engine = EngineCore::empty();
    let held = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    let free = engine.spawn_bubble(330.0, 300.0, 0.0, 0.0, 1.0, "b".into());
    engine.pointer_down(held, 300.0, 300.0, 0.0);

    // Overlapping pair: the separation nudge shoves the held center to 285
    engine.step(W, H, &[60.0, 60.0]);
    assert!((engine.bubble_x(held).unwrap() - 285.0).abs() < 1e-3);

    // ...but the step never rewrites the held pair in the buffer
    let buf = unsafe { std::slice::from_raw_parts(engine.positions_ptr(), 4) };
    assert_eq!(&buf[..2], &[300.0, 300.0]);
    assert!((buf[2] - 315.0).abs() < 1e-3);

    // The next pointer move owns the held pair again
    engine.pointer_move(310.0, 310.0, W, H, 16.0);
    let buf = unsafe { std::slice::from_raw_parts(engine.positions_ptr(), 4) };
    assert_eq!(&buf[..2], &[280.0, 280.0]);
}

#[test]
fn drag_position_is_clamped_into_the_container() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(100.0, 100.0, 0.0, 0.0, 1.0, "a".into());
    engine.step(W, H, &[60.0]);
    engine.pointer_down(id, 100.0, 100.0, 0.0);
    engine.pointer_move(-50.0, -50.0, W, H, 16.0);
    assert_eq!(engine.bubble_x(id), Some(30.0));
    assert_eq!(engine.bubble_y(id), Some(30.0));
    engine.pointer_move(5000.0, 5000.0, W, H, 32.0);
    assert_eq!(engine.bubble_x(id), Some(W - 30.0));
    assert_eq!(engine.bubble_y(id), Some(H - 30.0));
}

#[test]
fn pointer_down_keeps_the_grab_offset() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(100.0, 100.0, 0.0, 0.0, 1.0, "a".into());
    // Grab 10px right of center; the bubble must not jump under the pointer
    engine.pointer_down(id, 110.0, 100.0, 0.0);
    engine.pointer_move(210.0, 100.0, W, H, 16.0);
    assert_eq!(engine.bubble_x(id), Some(200.0));
}

#[test]
fn hover_toggles_presentation_flag_only() {
    let mut engine = EngineCore::new();
    assert!(!engine.is_hovered(0));
    engine.hover_enter(0);
    assert!(engine.is_hovered(0));
    let v_before = engine.bubble_velocity(0);
    engine.hover_leave(0);
    assert!(!engine.is_hovered(0));
    assert_eq!(engine.bubble_velocity(0), v_before);
}

#[test]
fn history_ring_keeps_only_the_newest_samples() {
    let mut engine = EngineCore::empty();
    let id = engine.spawn_bubble(300.0, 300.0, 0.0, 0.0, 1.0, "a".into());
    engine.set_history_capacity(4);
    engine.pointer_down(id, 300.0, 300.0, 0.0);
    // 20 samples, only the last 4 survive: oldest kept is (316, t=160)
    for i in 0..20u32 {
        let t = f64::from(i) * 10.0;
        engine.pointer_move(300.0 + i as f32, 300.0, W, H, t);
    }
    engine.pointer_up(190.0);
    // (319 - 316) / (190 - 160) = 0.1 px/ms: below the 0.2 threshold, so
    // the whole-gesture displacement never enters the estimate
    let v = engine.bubble_velocity(id).unwrap();
    assert!((-1.6..=0.4).contains(&v.x), "vx = {}", v.x);
}

// === SCENE & CONFIG ===

#[test]
fn spawn_assigns_stable_incrementing_ids() {
    let mut engine = EngineCore::empty();
    let a = engine.spawn_bubble(10.0, 10.0, 0.0, 0.0, 1.0, "a".into());
    let b = engine.spawn_bubble(20.0, 20.0, 0.0, 0.0, 1.0, "b".into());
    assert_eq!((a, b), (0, 1));
    assert!(engine.remove_bubble(a));
    let c = engine.spawn_bubble(30.0, 30.0, 0.0, 0.0, 1.0, "c".into());
    assert_eq!(c, 2);
    assert_eq!(engine.bubble_id_at(0), Some(b));
    assert_eq!(engine.bubble_id_at(1), Some(c));
    assert!(!engine.remove_bubble(a));
}

#[test]
fn removing_the_held_bubble_ends_the_drag() {
    let mut engine = EngineCore::new();
    engine.pointer_down(1, 250.0, 250.0, 0.0);
    assert!(engine.is_dragging());
    engine.remove_bubble(1);
    assert!(!engine.is_dragging());
    // The now-dangling release is a no-op
    engine.pointer_up(50.0);
}

#[test]
fn load_scene_json_replaces_the_bubble_set() {
    let mut engine = EngineCore::new();
    let json = r#"{"bubbles":[{"x":50,"y":60,"dx":1,"dy":0,"mass":2,"destination":"pages/one.html"}]}"#;
    engine.load_scene_json(json).unwrap();
    assert_eq!(engine.bubble_count(), 1);
    let id = engine.bubble_id_at(0).unwrap();
    assert_eq!(engine.bubble_x(id), Some(50.0));
    assert_eq!(engine.destination(id).as_deref(), Some("pages/one.html"));
}

#[test]
fn bad_scene_json_is_rejected_and_state_kept() {
    let mut engine = EngineCore::new();
    assert!(engine.load_scene_json("{not json").is_err());
    assert_eq!(engine.bubble_count(), 3);
}

#[test]
fn tuning_json_fills_missing_fields_with_defaults() {
    let mut engine = EngineCore::new();
    engine
        .load_tuning_json(r#"{"momentum_factor": 3.0, "tap_timeout_ms": 120}"#)
        .unwrap();
    assert_eq!(engine.tuning().momentum_factor, 3.0);
    assert_eq!(engine.tuning().tap_timeout_ms, 120.0);
    assert_eq!(engine.tuning().history_capacity, 20);
    assert_eq!(engine.tuning().max_release_speed, 5.0);
    assert!(engine.load_tuning_json("[]").is_err());
}

#[test]
fn positions_buffer_publishes_top_left_offsets() {
    let mut engine = EngineCore::empty();
    engine.spawn_bubble(100.0, 80.0, 0.0, 0.0, 1.0, "a".into());
    engine.spawn_bubble(200.0, 90.0, 0.0, 0.0, 1.0, "b".into());
    engine.step(W, H, &[60.0, 40.0]);
    assert_eq!(engine.positions_len(), 4);
    let buf = unsafe { std::slice::from_raw_parts(engine.positions_ptr(), 4) };
    assert_eq!(buf, &[70.0, 50.0, 180.0, 70.0]);
}
