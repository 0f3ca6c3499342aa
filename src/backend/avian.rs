//! Avian2D backend implementation.
//!
//! Controllers become kinematic bodies: the controller owns their motion and
//! writes Avian's `Position` directly, so other bodies still collide with
//! them. Enable with the `avian2d` feature.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::backend::RunnerBackend;
use crate::controller::RunnerController;

/// Avian2D backend for the runner controller.
pub struct Avian2dBackend;

impl RunnerBackend for Avian2dBackend {
    fn plugin() -> impl Plugin {
        Avian2dBackendPlugin
    }

    fn set_position(world: &mut World, entity: Entity, position: Vec2) {
        // Try Avian's Position component first, then fall back to Transform
        if let Some(mut pos) = world.get_mut::<Position>(entity) {
            pos.0 = position;
        } else if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
    }
}

/// Plugin that sets up Avian2D-specific systems for the runner controller.
pub struct Avian2dBackendPlugin;

impl Plugin for Avian2dBackendPlugin {
    fn build(&self, app: &mut App) {
        use crate::RunnerControllerSet;

        app.add_systems(
            FixedUpdate,
            insert_kinematic_bodies.in_set(RunnerControllerSet::Preparation),
        );
    }
}

/// Give new controllers without a rigid body a kinematic one.
///
/// Kinematic bodies ignore Avian gravity and forces, leaving the controller
/// in charge of motion.
pub fn insert_kinematic_bodies(
    mut commands: Commands,
    q_new: Query<Entity, (Added<RunnerController>, Without<RigidBody>)>,
) {
    for entity in &q_new {
        commands.entity(entity).insert(RigidBody::Kinematic);
    }
}
