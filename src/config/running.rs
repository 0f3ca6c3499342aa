//! Configuration for horizontal auto-run.

use bevy::prelude::*;

/// Configuration for the horizontal auto-run model.
///
/// Acceleration decays linearly as speed approaches `max_x_velocity`.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct RunningConfig {
    /// Speed cap for horizontal motion (units/second). Must be positive.
    pub max_x_velocity: f32,

    /// Acceleration at standstill (units/second^2).
    pub max_acceleration: f32,
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self {
            max_x_velocity: 100.0,
            max_acceleration: 10.0,
        }
    }
}
