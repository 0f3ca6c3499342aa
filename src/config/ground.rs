//! Configuration for the ground plane.

use bevy::prelude::*;

/// The fixed horizontal plane the controller lands on.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct GroundConfig {
    /// World-space height of the ground plane.
    pub height: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self { height: 10.0 }
    }
}
