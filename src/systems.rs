//! Controller systems.
//!
//! Input edges are handled every render frame in `Update`; kinematics advance
//! in `FixedUpdate`. The systems are thin adapters around
//! [`RunnerController`]; they are generic over the backend where they touch
//! the clock or the position sink.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::backend::RunnerBackend;
use crate::controller::RunnerController;
use crate::intent::{JumpBinding, JumpInput};
use crate::messages::{JumpStarted, Landed};
use crate::state::{Airborne, Grounded};

/// Copy keyboard edges for bound keys into each entity's [`JumpInput`].
///
/// Edges accumulate until consumed, so a press followed by a release in the
/// same frame is kept as both edges.
pub fn poll_jump_bindings(keys: Res<ButtonInput<KeyCode>>, mut q: Query<(&JumpBinding, &mut JumpInput)>) {
    for (binding, mut input) in &mut q {
        let edges = binding.poll(&keys);
        if edges.pressed {
            input.press();
        }
        if edges.released {
            input.release();
        }
    }
}

/// Apply pending input edges to controllers.
pub fn apply_jump_input(
    mut q: Query<(Entity, &mut JumpInput, &mut RunnerController)>,
    mut started: MessageWriter<JumpStarted>,
) {
    for (entity, mut input, mut controller) in &mut q {
        if !input.has_edges() {
            continue;
        }

        let edges = input.take();
        if controller.handle_input(edges) {
            let position = controller.position();
            debug!("{entity} jumped from {position}");
            started.write(JumpStarted { entity, position });
        }
    }
}

/// Advance every controller one fixed step and write its position to the
/// backend.
pub fn advance_controllers<B: RunnerBackend>(world: &mut World) {
    let dt = B::fixed_timestep(world);

    let mut positions = Vec::new();
    let mut landings = Vec::new();

    let mut q = world.query::<(Entity, &mut RunnerController)>();
    for (entity, mut controller) in q.iter_mut(world) {
        let outcome = controller.step(dt);
        positions.push((entity, controller.position()));

        if outcome.landed {
            trace!("{entity} landed with vertical velocity {}", outcome.vertical_velocity);
            landings.push(Landed {
                entity,
                vertical_velocity: outcome.vertical_velocity,
            });
        }
    }

    for (entity, position) in positions {
        B::set_position(world, entity, position);
    }

    if let Some(mut messages) = world.get_resource_mut::<Messages<Landed>>() {
        for landed in landings {
            messages.write(landed);
        }
    }
}

/// Keep [`Grounded`] / [`Airborne`] markers in sync with controller state.
pub fn sync_state_markers(
    mut commands: Commands,
    q: Query<(Entity, &RunnerController, Has<Grounded>, Has<Airborne>)>,
) {
    for (entity, controller, has_grounded, has_airborne) in &q {
        if controller.is_grounded() {
            if !has_grounded {
                commands.entity(entity).insert(Grounded);
            }
            if has_airborne {
                commands.entity(entity).remove::<Airborne>();
            }
        } else {
            if !has_airborne {
                commands.entity(entity).insert(Airborne);
            }
            if has_grounded {
                commands.entity(entity).remove::<Grounded>();
            }
        }
    }
}
