//! Controller configuration.
//!
//! Tunables are grouped by concern and aggregated in [`ControllerConfig`].
//! They are constants for a run and are reflected so they can be edited
//! from an inspector.

mod ground;
mod jumping;
mod running;

pub use ground::GroundConfig;
pub use jumping::JumpingConfig;
pub use running::RunningConfig;

use bevy::prelude::*;

/// All tunables of a [`RunnerController`](crate::controller::RunnerController).
///
/// `running` is optional: without it the controller only jumps and never
/// moves horizontally or accumulates distance.
///
/// # Example
///
/// ```rust
/// use runner_controller::prelude::*;
///
/// let config = ControllerConfig::default()
///     .with_ground_height(0.0)
///     .with_jump_force(12.0)
///     .with_running(RunningConfig { max_x_velocity: 8.0, max_acceleration: 2.0 });
/// assert_eq!(config.ground.height, 0.0);
/// assert!(config.running.is_some());
/// ```
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub ground: GroundConfig,
    pub jumping: JumpingConfig,
    pub running: Option<RunningConfig>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ground: GroundConfig::default(),
            jumping: JumpingConfig::default(),
            running: Some(RunningConfig::default()),
        }
    }
}

impl ControllerConfig {
    /// Jump-only configuration with no horizontal motion.
    pub fn vertical_only() -> Self {
        Self {
            running: None,
            ..default()
        }
    }

    pub fn with_ground_height(mut self, height: f32) -> Self {
        self.ground.height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.jumping.gravity = gravity;
        self
    }

    pub fn with_jump_force(mut self, jump_force: f32) -> Self {
        self.jumping.jump_force = jump_force;
        self
    }

    pub fn with_max_jump_time(mut self, seconds: f32) -> Self {
        self.jumping.max_jump_time = seconds;
        self
    }

    pub fn with_ground_threshold(mut self, threshold: f32) -> Self {
        self.jumping.ground_threshold = threshold;
        self
    }

    pub fn with_running(mut self, running: RunningConfig) -> Self {
        self.running = Some(running);
        self
    }

    pub fn without_running(mut self) -> Self {
        self.running = None;
        self
    }

    /// Panics if a tunable would make the integration ill-defined.
    pub(crate) fn assert_valid(&self) {
        assert!(
            self.jumping.max_jump_time >= 0.0,
            "max_jump_time must be non-negative, got {}",
            self.jumping.max_jump_time
        );
        if let Some(running) = &self.running {
            assert!(
                running.max_x_velocity > 0.0,
                "max_x_velocity must be positive, got {}",
                running.max_x_velocity
            );
            assert!(
                running.max_acceleration >= 0.0,
                "max_acceleration must be non-negative, got {}",
                running.max_acceleration
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_tuning() {
        let config = ControllerConfig::default();
        assert_eq!(config.ground.height, 10.0);
        assert_eq!(config.jumping.jump_force, 20.0);
        assert_eq!(config.jumping.max_jump_time, 0.4);
        assert_eq!(config.jumping.ground_threshold, 1.0);
        assert!(config.jumping.gravity < 0.0);
        assert!(config.running.is_some());
    }

    #[test]
    fn vertical_only_has_no_running() {
        let config = ControllerConfig::vertical_only();
        assert!(config.running.is_none());
        assert_eq!(config.jumping, JumpingConfig::default());
    }

    #[test]
    fn builders_override_fields() {
        let config = ControllerConfig::default()
            .with_ground_height(-3.0)
            .with_gravity(-9.0)
            .with_max_jump_time(0.25)
            .with_ground_threshold(0.5)
            .without_running();

        assert_eq!(config.ground.height, -3.0);
        assert_eq!(config.jumping.gravity, -9.0);
        assert_eq!(config.jumping.max_jump_time, 0.25);
        assert_eq!(config.jumping.ground_threshold, 0.5);
        assert!(config.running.is_none());
    }

    #[test]
    #[should_panic(expected = "max_x_velocity must be positive")]
    fn zero_speed_cap_is_rejected() {
        ControllerConfig::default()
            .with_running(RunningConfig {
                max_x_velocity: 0.0,
                max_acceleration: 1.0,
            })
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "max_jump_time must be non-negative")]
    fn negative_hold_time_is_rejected() {
        ControllerConfig::default()
            .with_max_jump_time(-1.0)
            .assert_valid();
    }
}
