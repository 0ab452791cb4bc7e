//! End-to-end controller scenarios.
//!
//! Each scenario scripts the probe answers for one tick and checks the
//! defuzzified command against the firing rule consequents.

mod common;

use approx::assert_relative_eq;
use common::{ScriptedProbe, SingleFanProbe};
use trina_nav::fuzzy::BalanceTerm;
use trina_nav::{
    Agent, ControllerConfig, InferenceResult, MotionCommand, NavigationController, Point3, Pose,
    RayHit,
};

const N: usize = 50;

fn per_side() -> NavigationController {
    NavigationController::new(ControllerConfig::default()).unwrap()
}

// ============================================================================
// Scenario A: nothing in view
// ============================================================================

#[test]
fn test_nothing_hit_searches() {
    let controller = per_side();
    let probe = ScriptedProbe::empty(N);

    let sample = controller.perceive(&probe, &Pose::default());
    assert!(sample.is_empty());
    assert_eq!(sample.coverage_difference(), None);

    let inference = controller.decide(&sample);
    assert_eq!(inference.active().count(), 1);
    assert_eq!(inference.strength_of("search"), Some(1.0));
    assert_eq!(
        inference.result,
        InferenceResult::Command(MotionCommand::new(0.0, 90.0))
    );
}

// ============================================================================
// Scenario B: left side covered, right side empty, terrain far away
// ============================================================================

#[test]
fn test_full_left_far_turns_hard_left_at_speed() {
    let controller = per_side();
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(6.0)), None);

    let sample = controller.perceive(&probe, &Pose::default());
    assert_eq!(sample.left_coverage, Some(1.0));
    assert_eq!(sample.right_coverage, None);
    assert_eq!(sample.coverage_difference(), Some(1.0));
    assert_eq!(sample.avg_terrain_distance, Some(6.0));

    let fuzzifier = controller.fuzzifier();
    assert_eq!(fuzzifier.balance(BalanceTerm::FullLeft, Some(1.0)), 1.0);
    assert_eq!(fuzzifier.balance(BalanceTerm::PartialLeft, Some(1.0)), 0.0);

    let inference = controller.decide(&sample);
    assert_eq!(inference.active().count(), 1);
    assert_eq!(inference.strength_of("full-left-far"), Some(1.0));
    assert_eq!(inference.result.command(), Some(MotionCommand::new(5.0, 90.0)));
}

// ============================================================================
// Scenario C: balanced coverage at medium range
// ============================================================================

#[test]
fn test_balanced_medium_goes_straight_at_half_speed() {
    let controller = per_side();
    let terrain = Some(RayHit::terrain(2.0));
    let probe = ScriptedProbe::uniform(N, terrain, terrain);

    let sample = controller.perceive(&probe, &Pose::default());
    assert_eq!(sample.coverage_difference(), Some(0.0));

    let inference = controller.decide(&sample);
    assert_eq!(inference.active().count(), 1);
    assert_eq!(inference.strength_of("balanced-medium"), Some(1.0));
    assert_eq!(inference.result.command(), Some(MotionCommand::new(2.5, 0.0)));
}

#[test]
fn test_near_balanced_is_not_balanced() {
    // One extra right-side hit: difference -0.02, which the exact-point
    // Balanced category does not catch
    let controller = per_side();
    let terrain = Some(RayHit::terrain(2.0));
    let probe = ScriptedProbe::uniform(N, terrain, terrain).with_left(0, None);

    let sample = controller.perceive(&probe, &Pose::default());
    let inference = controller.decide(&sample);

    assert_eq!(inference.strength_of("balanced-medium"), Some(0.0));
    assert!(inference.strength_of("partial-right-medium").unwrap() > 0.0);
    let cmd = inference.result.command().unwrap();
    assert!(cmd.turn_rate < 0.0);
}

// ============================================================================
// Scenario D: close obstacle while terrain pulls elsewhere
// ============================================================================

#[test]
fn test_avoidance_weight_applied_before_summation() {
    let controller = per_side();
    // Grass fills the left fan, one right ray sees an obstacle at 0.2 m
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(6.0)), None)
        .with_right(10, Some(RayHit::obstacle(0.2)));

    let sample = controller.perceive(&probe, &Pose::default());
    assert_eq!(sample.obstacle_right, Some(0.2));
    assert_eq!(sample.obstacle_left, None);

    let inference = controller.decide(&sample);
    assert_eq!(inference.strength_of("full-left-far"), Some(1.0));
    assert_eq!(inference.strength_of("avoid-right"), Some(5.0));
    assert_relative_eq!(inference.total_strength, 6.0);

    let cmd = inference.result.command().unwrap();
    assert_relative_eq!(cmd.speed, 5.0 / 6.0, epsilon = 1e-6);
    assert_relative_eq!(cmd.turn_rate, 90.0, epsilon = 1e-4);
}

#[test]
fn test_obstacle_dominates_conflicting_terrain() {
    let controller = per_side();
    // Grass on the left, obstacle on the extreme left ray
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(6.0)), None)
        .with_left(0, Some(RayHit::obstacle(0.2)));

    let sample = controller.perceive(&probe, &Pose::default());
    let difference = sample.coverage_difference().unwrap();
    assert_relative_eq!(difference, 49.0 / 50.0);

    let fuzzifier = controller.fuzzifier();
    let full = fuzzifier.balance(BalanceTerm::FullLeft, Some(difference));
    let partial = fuzzifier.balance(BalanceTerm::PartialLeft, Some(difference));
    let avoid = 5.0;

    let inference = controller.decide(&sample);
    let cmd = inference.result.command().unwrap();

    let total = full + partial + avoid;
    let speed = (full * 5.0 + partial * 5.0) / total;
    let turn = (full * 90.0 + partial * 90.0 / 8.0 - avoid * 90.0) / total;

    assert_relative_eq!(cmd.speed, speed, epsilon = 1e-4);
    assert_relative_eq!(cmd.turn_rate, turn, epsilon = 1e-3);
    // Avoidance wins: turning right, away from the obstacle
    assert!(cmd.turn_rate < 0.0);
    assert!(cmd.speed < 1.0);
}

#[test]
fn test_wall_ahead_breaks_side_tie() {
    let controller = per_side();
    // Balanced grass at medium range, the same obstacle distance on both flanks
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(2.0)), Some(RayHit::terrain(2.0)))
        .with_left(0, Some(RayHit::obstacle(0.6)))
        .with_right(0, Some(RayHit::obstacle(0.6)));

    let sample = controller.perceive(&probe, &Pose::default());
    assert_eq!(sample.coverage_difference(), Some(0.0));
    assert_eq!(sample.obstacle_left, sample.obstacle_right);

    let inference = controller.decide(&sample);
    assert_eq!(inference.strength_of("balanced-medium"), Some(1.0));
    assert_eq!(inference.strength_of("avoid-left"), Some(5.0));
    assert_eq!(inference.strength_of("avoid-right"), Some(5.0));
    assert_eq!(inference.strength_of("avoid-ahead"), Some(5.0));

    // The side rules cancel; the tie-break still turns the agent off the wall
    let cmd = inference.result.command().unwrap();
    assert_relative_eq!(cmd.speed, 2.5 / 16.0, epsilon = 1e-6);
    assert_relative_eq!(cmd.turn_rate, 450.0 / 16.0, epsilon = 1e-4);
}

// ============================================================================
// Variants
// ============================================================================

#[test]
fn test_unified_obstacle_turns_left_regardless_of_side() {
    // Grass on the right, obstacle on the left
    let probe = ScriptedProbe::uniform(N, None, Some(RayHit::terrain(6.0)))
        .with_left(0, Some(RayHit::obstacle(0.2)));

    let outcome = per_side().tick(&probe, &mut Agent::default(), 0.1);
    let cmd = outcome.command().unwrap();
    assert_relative_eq!(cmd.speed, 5.0 / 6.0, epsilon = 1e-6);
    assert_relative_eq!(cmd.turn_rate, -90.0, epsilon = 1e-4);

    let unified = NavigationController::new(ControllerConfig::bilateral_unified()).unwrap();
    let cmd = unified
        .tick(&probe, &mut Agent::default(), 0.1)
        .command()
        .unwrap();
    assert_relative_eq!(cmd.speed, 5.0 / 6.0, epsilon = 1e-6);
    assert_relative_eq!(cmd.turn_rate, 60.0, epsilon = 1e-4);
}

#[test]
fn test_single_sided_legacy_table() {
    let controller = NavigationController::new(ControllerConfig::single_sided()).unwrap();

    // Full coverage at 4 m: halfway between medium (3) and far (5)
    let probe = SingleFanProbe::uniform(100, Some(RayHit::terrain(4.0)));
    let sample = controller.perceive(&probe, &Pose::default());
    assert_eq!(sample.overall_coverage, Some(1.0));

    let inference = controller.decide(&sample);
    assert_relative_eq!(inference.strength_of("far-full").unwrap(), 0.5);
    assert_relative_eq!(inference.strength_of("medium-full").unwrap(), 0.5);

    let cmd = inference.result.command().unwrap();
    assert_relative_eq!(cmd.speed, 4.25, epsilon = 1e-5);
    assert_eq!(cmd.turn_rate, 0.0);

    // Nothing in view: search
    let probe = SingleFanProbe::uniform(100, None);
    let outcome = controller.tick(&probe, &mut Agent::default(), 0.1);
    assert_eq!(outcome.command(), Some(MotionCommand::new(0.0, 90.0)));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_repeated_ticks_are_bit_identical() {
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(3.3)), None)
        .with_right(4, Some(RayHit::terrain(1.7)))
        .with_right(7, Some(RayHit::obstacle(1.2)))
        .with_left(2, Some(RayHit::obstacle(0.9)));
    let pose = Pose::new(Point3::new(2.0, -1.0, 0.15), 0.7);

    let first = per_side();
    let second = per_side();

    let reference = first.tick(&probe, &mut Agent::new(pose), 0.02);
    let reference = reference.command().unwrap();

    for controller in [&first, &second, &first] {
        let mut agent = Agent::new(pose);
        let cmd = controller.tick(&probe, &mut agent, 0.02).command().unwrap();
        assert_eq!(cmd.speed.to_bits(), reference.speed.to_bits());
        assert_eq!(cmd.turn_rate.to_bits(), reference.turn_rate.to_bits());
    }
}

#[test]
fn test_tick_moves_agent_by_command() {
    let controller = per_side();
    let probe = ScriptedProbe::uniform(N, Some(RayHit::terrain(6.0)), None);
    let mut agent = Agent::at(Point3::new(0.0, 0.0, 0.15), 0.0);

    controller.tick(&probe, &mut agent, 0.1);

    // 90 deg/s for 0.1 s, then 0.5 m along the new heading
    let yaw = 9.0f32.to_radians();
    assert_relative_eq!(agent.pose.yaw, yaw, epsilon = 1e-6);
    assert_relative_eq!(agent.pose.position.x, 0.5 * yaw.cos(), epsilon = 1e-5);
    assert_relative_eq!(agent.pose.position.y, 0.5 * yaw.sin(), epsilon = 1e-5);
    assert_eq!(agent.command(), MotionCommand::new(5.0, 90.0));
}
