//! Integration tests for the runner controller with the Avian2D backend.
//!
//! Only `FixedUpdate` is run, so Avian's own step never moves the bodies and
//! `Position` reflects exactly what the controller wrote.

#![cfg(feature = "avian2d")]

use avian2d::prelude::*;
use bevy::prelude::*;
use runner_controller::avian::Avian2dBackend;
use runner_controller::prelude::*;

const FIXED_UPDATE_HZ: f64 = 10.0;
const EPS: f32 = 1e-3;

/// Create a minimal test app with physics and the runner controller.
fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(TransformPlugin);
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default());
    app.add_plugins(RunnerControllerPlugin::<Avian2dBackend>::default());
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_UPDATE_HZ));

    app.finish();
    app.cleanup();
    app
}

fn reference_config() -> ControllerConfig {
    ControllerConfig::default()
        .with_ground_height(10.0)
        .with_jump_force(20.0)
        .with_gravity(-40.0)
        .with_max_jump_time(0.4)
        .without_running()
}

fn spawn_runner(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Transform::default(),
            RunnerController::grounded(reference_config(), 0.0),
        ))
        .id()
}

fn fixed_step(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn position(app: &App, entity: Entity) -> Vec2 {
    app.world().get::<Position>(entity).unwrap().0
}

#[test]
fn controller_becomes_kinematic_body() {
    let mut app = create_test_app();
    let runner = spawn_runner(&mut app);

    fixed_step(&mut app);

    assert!(matches!(app.world().get::<RigidBody>(runner), Some(RigidBody::Kinematic)));
}

#[test]
fn existing_rigid_body_is_kept() {
    let mut app = create_test_app();
    let runner = spawn_runner(&mut app);
    app.world_mut().entity_mut(runner).insert(RigidBody::Static);

    fixed_step(&mut app);

    assert!(matches!(app.world().get::<RigidBody>(runner), Some(RigidBody::Static)));
}

#[test]
fn position_follows_jump_arc() {
    let mut app = create_test_app();
    let runner = spawn_runner(&mut app);

    fixed_step(&mut app);
    fixed_step(&mut app);
    assert!((position(&app, runner).y - 10.0).abs() < EPS);

    app.world_mut()
        .get_mut::<JumpInput>(runner)
        .unwrap()
        .press();
    app.world_mut()
        .get_mut::<JumpInput>(runner)
        .unwrap()
        .release();
    app.world_mut().run_schedule(Update);

    fixed_step(&mut app);
    assert!((position(&app, runner).y - 12.0).abs() < EPS);

    fixed_step(&mut app);
    assert!((position(&app, runner).y - 13.6).abs() < EPS);

    let mut steps = 0;
    while !app.world().get::<RunnerController>(runner).unwrap().is_grounded() {
        fixed_step(&mut app);
        assert!(position(&app, runner).y >= 10.0);
        steps += 1;
        assert!(steps < 50, "runner never landed");
    }
    assert_eq!(position(&app, runner).y, 10.0);
}
