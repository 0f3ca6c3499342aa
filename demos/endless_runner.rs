//! Endless Runner Demo
//!
//! A runner on a flat ground plane. It accelerates on its own; the ground
//! markers scroll by with the distance traveled.
//!
//! ## Controls
//! - **Space** or **W/Up**: Jump (hold for a higher jump)
//!
//! ## Running
//! ```bash
//! cargo run --example endless_runner --features demos
//! ```

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use runner_controller::prelude::*;

// ==================== Constants ====================

const GROUND_HEIGHT: f32 = -150.0;
const PLAYER_SIZE: f32 = 32.0;
const MARKER_SPACING: f32 = 160.0;
const MARKER_COUNT: usize = 10;

/// Scroll units per meter of distance.
const UNITS_PER_METER: f32 = 16.0;

// ==================== Components ====================

#[derive(Component)]
struct Player;

/// Ground stripe that scrolls with the player's distance.
#[derive(Component)]
struct GroundMarker {
    index: usize,
}

// ==================== Main ====================

fn default_config() -> ControllerConfig {
    ControllerConfig::default()
        .with_ground_height(GROUND_HEIGHT + PLAYER_SIZE / 2.0)
        .with_gravity(-2400.0)
        .with_jump_force(600.0)
        .with_max_jump_time(0.25)
        .with_ground_threshold(8.0)
        .with_running(RunningConfig {
            max_x_velocity: 30.0,
            max_acceleration: 6.0,
        })
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Endless Runner - Runner Controller Demo".into(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .add_plugins(RunnerControllerPlugin::<TransformBackend>::default())
        .add_plugins(EguiPlugin::default())
        .add_systems(Startup, setup)
        .add_systems(Update, scroll_ground_markers.after(RunnerControllerSet::Input))
        .add_systems(EguiPrimaryContextPass, runner_settings_ui)
        .run();
}

// ==================== Setup ====================

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    // Ground
    commands.spawn((
        Sprite::from_color(Color::srgb(0.3, 0.25, 0.2), Vec2::new(2000.0, 300.0)),
        Transform::from_xyz(0.0, GROUND_HEIGHT - 150.0, 0.0),
    ));

    for index in 0..MARKER_COUNT {
        commands.spawn((
            GroundMarker { index },
            Sprite::from_color(Color::srgb(0.5, 0.45, 0.35), Vec2::new(8.0, 16.0)),
            Transform::from_xyz(0.0, GROUND_HEIGHT - 8.0, 0.5),
        ));
    }

    // Player
    let config = default_config();
    let player = commands
        .spawn((
            Player,
            Sprite::from_color(Color::srgb(0.9, 0.6, 0.2), Vec2::splat(PLAYER_SIZE)),
            Transform::from_xyz(-300.0, config.ground.height, 1.0),
            RunnerController::grounded(config, -300.0),
            JumpBinding::new([KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp]),
        ))
        .id();

    // Distance label
    commands.spawn((
        DistanceDisplay::new(player),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(20.0),
            ..default()
        },
    ));

    commands.spawn((
        Text::new("Space / W / Up: Jump (hold to jump higher)"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

// ==================== Systems ====================

fn scroll_ground_markers(
    q_player: Query<&RunnerController, With<Player>>,
    mut q_markers: Query<(&GroundMarker, &mut Transform)>,
) {
    let Ok(controller) = q_player.single() else {
        return;
    };

    let offset = (controller.distance() * UNITS_PER_METER) % MARKER_SPACING;
    let span = MARKER_SPACING * MARKER_COUNT as f32;
    for (marker, mut transform) in &mut q_markers {
        transform.translation.x = marker.index as f32 * MARKER_SPACING - offset - span / 2.0;
    }
}

fn runner_settings_ui(mut contexts: EguiContexts, mut q_player: Query<&mut RunnerController, With<Player>>) {
    let Ok(mut controller) = q_player.single_mut() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut config = *controller.config();
    let state = *controller.state();

    egui::Window::new("Runner Settings")
        .default_pos([10.0, 10.0])
        .default_width(280.0)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.heading("Jumping");
            ui.separator();
            drag(ui, "Gravity:", &mut config.jumping.gravity, -10000.0..=0.0);
            drag(ui, "Jump Force:", &mut config.jumping.jump_force, 0.0..=2000.0);
            drag(ui, "Max Jump Time:", &mut config.jumping.max_jump_time, 0.0..=2.0);
            drag(ui, "Ground Threshold:", &mut config.jumping.ground_threshold, 0.0..=64.0);

            if let Some(running) = config.running.as_mut() {
                ui.add_space(4.0);
                ui.heading("Running");
                ui.separator();
                drag(ui, "Max Speed:", &mut running.max_x_velocity, 1.0..=200.0);
                drag(ui, "Max Acceleration:", &mut running.max_acceleration, 0.0..=200.0);
            }

            ui.add_space(4.0);
            ui.heading("State");
            ui.separator();
            ui.label(format!("Grounded: {}", state.is_grounded));
            ui.label(format!("Holding Jump: {} ({:.2}s)", state.is_holding_jump, state.jump_time));
            ui.label(format!("Velocity: ({:.1}, {:.1})", state.velocity.x, state.velocity.y));
            ui.label(format!("Acceleration: {:.1}", state.acceleration));

            ui.add_space(4.0);
            if ui.button("Reset Settings").clicked() {
                config = default_config();
            }
        });

    if config != *controller.config() {
        controller.set_config(config);
    }
}

fn drag(ui: &mut egui::Ui, label: &str, value: &mut f32, range: std::ops::RangeInclusive<f32>) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).speed(1.0).range(range));
    });
}
