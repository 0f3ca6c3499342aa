//! Mutable controller state and state marker components.

use bevy::prelude::*;

/// Kinematic state of a single controller.
///
/// Created once with an explicit initial grounded flag and mutated every
/// tick for the lifetime of the session.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// World position. `y` never rests below the ground plane.
    pub position: Vec2,
    /// `y` drives the jump, `x` drives auto-run.
    pub velocity: Vec2,
    pub is_grounded: bool,
    /// True while the jump button is held and the hold budget remains.
    pub is_holding_jump: bool,
    /// Seconds of hold accumulated since the last jump start.
    pub jump_time: f32,
    /// Horizontal distance traveled.
    pub distance: f32,
    /// Horizontal acceleration from the last grounded tick.
    pub acceleration: f32,
}

impl PlayerState {
    /// Create a state at rest at `position`.
    pub fn new(position: Vec2, grounded: bool) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            is_grounded: grounded,
            is_holding_jump: false,
            jump_time: 0.0,
            distance: 0.0,
            acceleration: 0.0,
        }
    }

    /// Absolute vertical distance to the ground plane at `ground_height`.
    pub fn height_above(&self, ground_height: f32) -> f32 {
        (self.position.y - ground_height).abs()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Vec2::ZERO, false)
    }
}

/// Marker: the controller rests on the ground plane.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Grounded;

/// Marker: the controller is in the air.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Airborne;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_at_rest() {
        let state = PlayerState::new(Vec2::new(3.0, 10.0), true);
        assert_eq!(state.position, Vec2::new(3.0, 10.0));
        assert_eq!(state.velocity, Vec2::ZERO);
        assert!(state.is_grounded);
        assert!(!state.is_holding_jump);
        assert_eq!(state.jump_time, 0.0);
        assert_eq!(state.distance, 0.0);
    }

    #[test]
    fn default_state_starts_airborne() {
        assert!(!PlayerState::default().is_grounded);
    }

    #[test]
    fn height_above_is_absolute() {
        let state = PlayerState::new(Vec2::new(0.0, 9.5), false);
        assert_eq!(state.height_above(10.0), 0.5);
    }
}
