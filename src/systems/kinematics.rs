//! Kinematics - input and gravity to velocity
//!
//! Only velocity changes here. Position is advanced by the collision resolver,
//! which needs to move one axis at a time.

use serde::{Deserialize, Serialize};

use crate::core::config::PhysicsConfig;

use super::actor::Actor;

/// Input flags sampled once per frame by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Sampled but not used by the platformer controls
    pub move_down: bool,
}

impl InputState {
    /// -1, 0 or +1. Both or neither pressed cancel out.
    #[inline]
    pub fn direction(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Integrate one step of velocity.
///
/// `dt` must already be clamped by the driver; nothing here bounds it.
pub fn step(actor: &mut Actor, input: &InputState, physics: &PhysicsConfig, dt: f32) {
    actor.velocity.x = physics.move_speed * input.direction();

    actor.velocity.y += physics.gravity * dt;
    if let Some(cap) = physics.max_fall_speed {
        actor.velocity.y = actor.velocity.y.min(cap);
    }

    if input.jump && actor.grounded {
        actor.velocity.y = -physics.jump_speed;
        actor.grounded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(0.0, 0.0, 32.0, 48.0)
    }

    #[test]
    fn horizontal_velocity_is_set_not_accumulated() {
        let physics = PhysicsConfig::default();
        let mut a = actor();
        let right = InputState { move_right: true, ..Default::default() };

        step(&mut a, &right, &physics, 1.0 / 60.0);
        step(&mut a, &right, &physics, 1.0 / 60.0);
        assert_eq!(a.velocity.x, physics.move_speed);

        let both = InputState { move_left: true, move_right: true, ..Default::default() };
        step(&mut a, &both, &physics, 1.0 / 60.0);
        assert_eq!(a.velocity.x, 0.0);

        let left = InputState { move_left: true, ..Default::default() };
        step(&mut a, &left, &physics, 1.0 / 60.0);
        assert_eq!(a.velocity.x, -physics.move_speed);
    }

    #[test]
    fn gravity_accumulates_every_step() {
        let physics = PhysicsConfig::default();
        let mut a = actor();
        a.grounded = true;

        step(&mut a, &InputState::default(), &physics, 0.01);
        step(&mut a, &InputState::default(), &physics, 0.01);
        assert!((a.velocity.y - 2.0 * physics.gravity * 0.01).abs() < 1e-3);
        // Grounded is only cleared by a jump or the resolver
        assert!(a.grounded);
    }

    #[test]
    fn jump_requires_grounded() {
        let physics = PhysicsConfig::default();
        let jump = InputState { jump: true, ..Default::default() };

        let mut airborne = actor();
        airborne.velocity.y = 10.0;
        step(&mut airborne, &jump, &physics, 0.0);
        assert_eq!(airborne.velocity.y, 10.0);
        assert!(!airborne.grounded);

        let mut standing = actor();
        standing.grounded = true;
        step(&mut standing, &jump, &physics, 1.0 / 60.0);
        assert_eq!(standing.velocity.y, -physics.jump_speed);
        assert!(!standing.grounded);

        // Holding jump mid-air does nothing more
        step(&mut standing, &jump, &physics, 1.0 / 60.0);
        assert_eq!(standing.velocity.y, -physics.jump_speed + physics.gravity * (1.0 / 60.0));
    }

    #[test]
    fn fall_speed_cap_is_optional() {
        let mut physics = PhysicsConfig::default();
        let mut a = actor();
        for _ in 0..100 {
            step(&mut a, &InputState::default(), &physics, 0.033);
        }
        assert!(a.velocity.y > 5000.0);

        physics.max_fall_speed = Some(900.0);
        step(&mut a, &InputState::default(), &physics, 0.033);
        assert_eq!(a.velocity.y, 900.0);
    }
}
