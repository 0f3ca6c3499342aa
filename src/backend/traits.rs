//! Backend abstraction.
//!
//! The controller integrates its own kinematics; a backend only supplies the
//! fixed step and receives the resulting position. This lets the same
//! controller drive a plain `Transform` or a physics body.

use bevy::prelude::*;

/// Trait for position-sink backends.
///
/// Implement this trait to let the controller write into a different
/// position representation. All functions are static and operate on the
/// `World`, so the controller systems can stay generic over the backend.
pub trait RunnerBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// Write the controller position for an entity.
    ///
    /// Entities without the backend's position component are skipped.
    fn set_position(world: &mut World, entity: Entity, position: Vec2);

    /// Get the fixed simulation step in seconds.
    fn fixed_timestep(world: &World) -> f32 {
        world
            .get_resource::<Time<Fixed>>()
            .map(|t| t.timestep().as_secs_f32())
            .filter(|&d| d > 0.0)
            .unwrap_or(1.0 / 64.0)
    }
}
