//! Messages emitted by the controller systems.

use bevy::prelude::*;

/// A controller started a jump this frame.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct JumpStarted {
    pub entity: Entity,
    /// Position at takeoff.
    pub position: Vec2,
}

/// A controller touched down on the ground plane this step.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Landed {
    pub entity: Entity,
    /// Vertical velocity carried through the landing; it is not zeroed.
    pub vertical_velocity: f32,
}
