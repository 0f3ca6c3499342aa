//! Auto-running 2D platformer controller for Bevy.
//!
//! The controller runs on a fixed horizontal ground plane:
//! - **Jumping**: a press on or near the ground launches the controller;
//!   holding the button suspends gravity for up to `max_jump_time`.
//! - **Auto-run**: while grounded, horizontal speed approaches a cap with
//!   linearly decaying acceleration, and traveled distance accumulates.
//! - **Distance label**: a UI text mirroring the distance, e.g. `"42 m"`.
//!
//! The kinematics live in [`RunnerController`](controller::RunnerController),
//! which takes input edges and the time step explicitly. The plugin wires it
//! into `Update` (input) and `FixedUpdate` (simulation).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use runner_controller::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let player = commands
//!         .spawn((
//!             Transform::default(),
//!             RunnerController::grounded(ControllerConfig::default(), 0.0),
//!             JumpBinding::default(),
//!         ))
//!         .id();
//!     commands.spawn(DistanceDisplay::new(player));
//! }
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(RunnerControllerPlugin::<TransformBackend>::default())
//!     .add_systems(Startup, setup)
//!     .run();
//! ```

use std::marker::PhantomData;

use bevy::prelude::*;

pub mod backend;
pub mod config;
pub mod controller;
pub mod display;
pub mod horizontal;
pub mod intent;
pub mod messages;
pub mod state;
pub mod systems;
pub mod vertical;

#[cfg(feature = "avian2d")]
pub use backend::avian;

pub mod prelude {
    pub use crate::backend::{RunnerBackend, TransformBackend};
    pub use crate::config::{ControllerConfig, GroundConfig, JumpingConfig, RunningConfig};
    pub use crate::controller::{RunnerController, StepOutcome};
    pub use crate::display::{DistanceDisplay, format_distance};
    pub use crate::intent::{JumpBinding, JumpInput};
    pub use crate::messages::{JumpStarted, Landed};
    pub use crate::state::{Airborne, Grounded, PlayerState};
    pub use crate::{RunnerControllerPlugin, RunnerControllerSet};

    #[cfg(feature = "avian2d")]
    pub use crate::backend::Avian2dBackend;
}

/// System sets for controller ordering.
///
/// `Input` and `Display` run in `Update`; the others run in `FixedUpdate`,
/// in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunnerControllerSet {
    /// Poll and apply jump input edges.
    Input,
    /// Backend setup for new controllers.
    Preparation,
    /// Advance kinematics and write positions.
    Simulation,
    /// Sync state markers.
    Markers,
    /// Refresh distance labels.
    Display,
}

/// Plugin that adds the runner controller systems, generic over the
/// position backend.
pub struct RunnerControllerPlugin<B: backend::RunnerBackend> {
    _marker: PhantomData<B>,
}

impl<B: backend::RunnerBackend> Default for RunnerControllerPlugin<B> {
    fn default() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<B: backend::RunnerBackend> Plugin for RunnerControllerPlugin<B> {
    fn build(&self, app: &mut App) {
        app.register_type::<controller::RunnerController>()
            .register_type::<config::ControllerConfig>()
            .register_type::<state::PlayerState>()
            .register_type::<state::Grounded>()
            .register_type::<state::Airborne>()
            .register_type::<intent::JumpInput>()
            .register_type::<intent::JumpBinding>()
            .register_type::<display::DistanceDisplay>();

        app.add_message::<messages::JumpStarted>()
            .add_message::<messages::Landed>();

        // Keyboard polling works without InputPlugin in headless apps.
        app.init_resource::<ButtonInput<KeyCode>>();

        app.configure_sets(
            Update,
            (RunnerControllerSet::Input, RunnerControllerSet::Markers, RunnerControllerSet::Display).chain(),
        );
        app.configure_sets(
            FixedUpdate,
            (
                RunnerControllerSet::Preparation,
                RunnerControllerSet::Simulation,
                RunnerControllerSet::Markers,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (systems::poll_jump_bindings, systems::apply_jump_input)
                .chain()
                .in_set(RunnerControllerSet::Input),
        );
        app.add_systems(
            FixedUpdate,
            systems::advance_controllers::<B>.in_set(RunnerControllerSet::Simulation),
        );
        app.add_systems(Update, systems::sync_state_markers.in_set(RunnerControllerSet::Markers));
        app.add_systems(
            FixedUpdate,
            systems::sync_state_markers.in_set(RunnerControllerSet::Markers),
        );
        app.add_systems(
            Update,
            (display::check_display_sources, display::update_distance_text)
                .chain()
                .in_set(RunnerControllerSet::Display),
        );

        app.add_plugins(B::plugin());
    }
}
