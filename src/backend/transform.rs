//! `Transform` backend.

use bevy::prelude::*;

use super::{NoOpBackendPlugin, RunnerBackend};

/// Writes the controller position into the entity's `Transform`.
///
/// The `z` component is preserved so sprites keep their draw order.
pub struct TransformBackend;

impl RunnerBackend for TransformBackend {
    fn plugin() -> impl Plugin {
        NoOpBackendPlugin
    }

    fn set_position(world: &mut World, entity: Entity, position: Vec2) {
        if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn writes_xy_and_keeps_z() {
        let mut world = World::new();
        let entity = world.spawn(Transform::from_xyz(0.0, 0.0, 5.0)).id();

        TransformBackend::set_position(&mut world, entity, Vec2::new(3.0, 4.0));

        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn missing_transform_is_skipped() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        TransformBackend::set_position(&mut world, entity, Vec2::ONE);
        assert!(world.get::<Transform>(entity).is_none());
    }

    #[test]
    fn fixed_timestep_reads_time_fixed() {
        let mut world = World::new();
        world.insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(100)));

        assert!((TransformBackend::fixed_timestep(&world) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn fixed_timestep_falls_back_without_clock() {
        let world = World::new();
        assert_eq!(TransformBackend::fixed_timestep(&world), 1.0 / 64.0);
    }
}
