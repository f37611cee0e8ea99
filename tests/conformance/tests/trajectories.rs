#![allow(clippy::float_cmp)]

//! End-to-end trajectory conformance: whole drag → release → settle
//! runs, asserted frame by frame.

use rubber::{
    Animation, Axis, ConfigUpdate, DragDelta, Phase, Rubber, RubberConfig, SpringParams,
    TweenParams, Vec2,
};
use rubber_conformance::{Op, release_and_settle, run_script, trajectory_json};

fn linear_config(duration_ms: f64) -> RubberConfig {
    RubberConfig::new().with_animation(Animation::Linear(TweenParams { duration_ms }))
}

#[test]
fn none_mode_trajectory_is_drag_frames_plus_one_reset() {
    let script = [
        Op::drag_y(40.0),
        Op::drag_y(40.0),
        Op::Release,
        // Stale scheduler callbacks after an instant reset do nothing.
        Op::Advance(16.0),
        Op::Advance(32.0),
    ];
    let frames = run_script(RubberConfig::default(), &script).unwrap();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].stretch.y, 40.0);
    assert_eq!(frames[0].phase, Phase::Dragging);
    assert_eq!(frames[1].stretch.y, 68.0);
    assert_eq!(frames[2].phase, Phase::Idle);
    assert_eq!(frames[2].stretch, Vec2::ZERO);
    assert_eq!(frames[2].progress, 0.0);
}

#[test]
fn linear_tween_trajectory_matches_the_timeline() {
    let script = [
        Op::drag_y(40.0),
        Op::Release,
        Op::Advance(1000.0), // establishes the epoch, no frame
        Op::Advance(1075.0), // 25%
        Op::Advance(1150.0), // 50%
        Op::Advance(1225.0), // 75%
        Op::Advance(1300.0), // complete: final frame + forced idle frame
    ];
    let frames = run_script(linear_config(300.0), &script).unwrap();

    assert_eq!(frames.len(), 6);
    assert_eq!(frames[0].stretch.y, 40.0);
    assert_eq!(frames[1].stretch.y, 30.0);
    assert_eq!(frames[2].stretch.y, 20.0);
    assert_eq!(frames[3].stretch.y, 10.0);
    assert_eq!(frames[4].stretch.y, 0.0);
    assert_eq!(frames[4].phase, Phase::Animating);
    assert_eq!(frames[5].stretch, Vec2::ZERO);
    assert_eq!(frames[5].phase, Phase::Idle);

    // Progress tracks the stretch against max_stretch = 80.
    assert_eq!(frames[1].progress, 0.375);
    assert_eq!(frames[3].progress, 0.125);

    // Tweens are kinematic: velocity is zero on every frame.
    for frame in &frames {
        assert_eq!(frame.velocity, Vec2::ZERO);
    }
}

#[test]
fn eased_tween_decays_faster_than_linear_early_on() {
    let script = [
        Op::drag_y(40.0),
        Op::Release,
        Op::Advance(0.0),
        Op::Advance(150.0),
    ];
    let eased = run_script(
        RubberConfig::new().with_animation(Animation::Ease(TweenParams { duration_ms: 300.0 })),
        &script,
    )
    .unwrap();
    let linear = run_script(linear_config(300.0), &script).unwrap();

    // 1 - (1 - 0.5)^3 = 0.875 of the way home vs 0.5 for linear.
    assert_eq!(eased[1].stretch.y, 5.0);
    assert_eq!(linear[1].stretch.y, 20.0);
}

#[test]
fn spring_trajectory_decays_monotonically_in_envelope() {
    let config = RubberConfig::new().with_animation(Animation::Spring(SpringParams::default()));
    let mut band: Rubber = Rubber::new(config).unwrap();
    band.drag(DragDelta::y(50.0));

    let frames = release_and_settle(&mut band, 0.0, 1000.0 / 60.0, 300);
    assert!(frames <= 300, "settled in {frames} frames");

    let state = band.state();
    assert_eq!(state.stretch, Vec2::ZERO);
    assert_eq!(state.velocity, Vec2::ZERO);
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn both_axes_settle_together() {
    let config = RubberConfig::new()
        .with_axis(Axis::Both)
        .with_animation(Animation::Spring(SpringParams::default()));
    let mut band: Rubber = Rubber::new(config).unwrap();
    band.drag(DragDelta::xy(30.0, -50.0));
    assert!(band.state().progress > 0.0);

    release_and_settle(&mut band, 0.0, 16.0, 600);
    assert_eq!(band.state().stretch, Vec2::ZERO);
}

#[test]
fn preemption_trajectory_has_no_dropped_or_duplicated_frames() {
    let script = [
        Op::drag_y(60.0),
        Op::Release,
        Op::Advance(0.0),  // epoch
        Op::Advance(16.0), // one spring frame
        Op::drag_y(0.0),   // pre-empt
        Op::Advance(32.0), // stale, must not fire
        Op::drag_y(5.0),
    ];
    let config = RubberConfig::new().with_animation(Animation::Spring(SpringParams::default()));
    let frames = run_script(config, &script).unwrap();

    // drag, spring frame, pre-empting drag, second drag. Nothing else.
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].phase, Phase::Dragging);
    assert_eq!(frames[1].phase, Phase::Animating);
    assert_eq!(frames[2].phase, Phase::Dragging);
    assert_eq!(frames[2].stretch.y, frames[1].stretch.y);
    assert!(frames[3].stretch.y > frames[2].stretch.y);
}

#[test]
fn reconfigure_mid_script_changes_only_future_behavior() {
    let script = [
        Op::drag_y(40.0),
        Op::Configure(ConfigUpdate::new().with_max_stretch(160.0)),
        Op::drag_y(0.0),
    ];
    let frames = run_script(RubberConfig::default(), &script).unwrap();

    assert_eq!(frames[0].progress, 0.5);
    // Same stretch, new limit.
    assert_eq!(frames[1].stretch.y, 40.0);
    assert_eq!(frames[1].progress, 0.25);
}

#[test]
fn destroy_cuts_the_trajectory_short() {
    let script = [
        Op::drag_y(60.0),
        Op::Release,
        Op::Advance(0.0),
        Op::Advance(16.0),
        Op::Destroy,
        Op::Advance(32.0),
        Op::Advance(48.0),
    ];
    let config = RubberConfig::new().with_animation(Animation::Spring(SpringParams::default()));
    let frames = run_script(config, &script).unwrap();

    // drag + one spring frame; destroy emits nothing and stale frames
    // are no-ops.
    assert_eq!(frames.len(), 2);
}

#[test]
fn trajectory_serializes_with_stable_field_names() {
    let script = [Op::drag_y(40.0), Op::Release];
    let frames = run_script(RubberConfig::default(), &script).unwrap();
    let json = trajectory_json(&frames);

    assert!(json.contains("\"stretch\""));
    assert!(json.contains("\"velocity\""));
    assert!(json.contains("\"progress\""));
    assert!(json.contains("\"phase\""));
    assert!(json.contains("\"Dragging\""));
    assert!(json.contains("\"Idle\""));

    // Round-trips losslessly.
    let decoded: Vec<rubber::RubberState> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, frames);
}

#[test]
fn single_frame_snapshot_shape_is_stable() {
    let frames = run_script(RubberConfig::default(), &[Op::drag_y(0.0)]).unwrap();
    let json = serde_json::to_string(&frames[0]).unwrap();
    assert_eq!(
        json,
        r#"{"stretch":{"x":0.0,"y":0.0},"velocity":{"x":0.0,"y":0.0},"progress":0.0,"phase":"Dragging"}"#
    );
}
