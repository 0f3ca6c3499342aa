//! The runner controller component.
//!
//! [`RunnerController`] composes the vertical jump state machine with the
//! optional horizontal auto-run model. Input and time are passed in
//! explicitly, so the controller can be driven without an app.

use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::horizontal;
use crate::intent::JumpInput;
use crate::state::PlayerState;
use crate::vertical;

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    /// The controller touched down during this step.
    pub landed: bool,
    /// Vertical velocity carried through the landing.
    pub vertical_velocity: f32,
}

/// Auto-running platformer controller.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use runner_controller::prelude::*;
///
/// let mut controller = RunnerController::grounded(ControllerConfig::default(), 0.0);
/// assert!(controller.handle_input(JumpInput::pressed()));
/// assert!(!controller.is_grounded());
///
/// controller.step(1.0 / 60.0);
/// assert!(controller.position().y > controller.config().ground.height);
/// ```
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(JumpInput)]
pub struct RunnerController {
    config: ControllerConfig,
    state: PlayerState,
}

impl RunnerController {
    /// Create a controller at `position`.
    ///
    /// `grounded` is the explicit initial ground flag. A position below the
    /// ground plane is lifted onto it.
    ///
    /// # Panics
    /// Panics if `config` has a non-positive speed cap, negative
    /// acceleration, or negative hold time.
    pub fn new(config: ControllerConfig, position: Vec2, grounded: bool) -> Self {
        config.assert_valid();
        let mut state = PlayerState::new(position, grounded);
        state.position.y = state.position.y.max(config.ground.height);
        Self { config, state }
    }

    /// Create a controller resting on the ground at horizontal position `x`.
    pub fn grounded(config: ControllerConfig, x: f32) -> Self {
        let ground = config.ground.height;
        Self::new(config, Vec2::new(x, ground), true)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replace the tunables, keeping the current state.
    ///
    /// A grounded controller moves onto the new ground plane; an airborne one
    /// is lifted if the plane rose above it.
    ///
    /// # Panics
    /// Panics on the same invalid values as [`RunnerController::new`].
    pub fn set_config(&mut self, config: ControllerConfig) {
        config.assert_valid();
        self.config = config;

        let ground = self.config.ground.height;
        if self.state.is_grounded {
            self.state.position.y = ground;
        } else {
            self.state.position.y = self.state.position.y.max(ground);
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn distance(&self) -> f32 {
        self.state.distance
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn is_holding_jump(&self) -> bool {
        self.state.is_holding_jump
    }

    /// Apply input edges from one render frame.
    ///
    /// A press is applied before a release arriving in the same frame.
    /// Returns `true` if a jump started.
    pub fn handle_input(&mut self, input: JumpInput) -> bool {
        let mut started = false;
        if input.pressed {
            started = vertical::try_start_jump(&mut self.state, &self.config.jumping, &self.config.ground);
        }
        if input.released {
            vertical::release_jump(&mut self.state);
        }
        started
    }

    /// Advance one fixed simulation step of `dt` seconds.
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        let landed = vertical::integrate(&mut self.state, &self.config.jumping, &self.config.ground, dt);

        if let Some(running) = &self.config.running {
            horizontal::advance(&mut self.state, running, dt);
        }

        StepOutcome {
            landed,
            vertical_velocity: self.state.velocity.y,
        }
    }
}

impl Default for RunnerController {
    fn default() -> Self {
        Self::grounded(ControllerConfig::default(), 0.0)
    }
}
