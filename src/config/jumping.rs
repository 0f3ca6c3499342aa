//! Configuration for the jump state machine.

use bevy::prelude::*;

/// Configuration for core jump mechanics.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct JumpingConfig {
    /// Vertical acceleration applied while airborne and not holding jump
    /// (units/second^2). Expected to be negative.
    pub gravity: f32,

    /// Upward velocity set when a jump starts (units/second).
    pub jump_force: f32,

    /// Maximum duration (seconds) the jump button can suspend gravity.
    pub max_jump_time: f32,

    /// Distance from the ground plane within which a new jump may start,
    /// even when not grounded.
    pub ground_threshold: f32,
}

impl Default for JumpingConfig {
    fn default() -> Self {
        Self {
            gravity: -40.0,
            jump_force: 20.0,
            max_jump_time: 0.4,
            ground_threshold: 1.0,
        }
    }
}
