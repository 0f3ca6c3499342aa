//! Horizontal auto-run model.

use crate::config::RunningConfig;
use crate::state::PlayerState;

/// Acceleration for the current speed: full at standstill, zero at the cap.
pub fn acceleration_at(velocity_x: f32, running: &RunningConfig) -> f32 {
    let ratio = velocity_x / running.max_x_velocity;
    running.max_acceleration * (1.0 - ratio)
}

/// Advance one step of auto-run.
///
/// Distance always accumulates from the current speed; acceleration and
/// speed only change while grounded.
pub fn advance(state: &mut PlayerState, running: &RunningConfig, dt: f32) {
    state.distance += state.velocity.x * dt;

    if !state.is_grounded {
        return;
    }

    state.acceleration = acceleration_at(state.velocity.x, running);
    state.velocity.x += state.acceleration * dt;
    state.velocity.x = state.velocity.x.min(running.max_x_velocity);
}
