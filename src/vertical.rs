//! Jump state machine and vertical integration.
//!
//! The update order inside [`integrate`] is fixed: hold governor, position,
//! gravity, ground check. Position uses the velocity from the previous tick.

use crate::config::{GroundConfig, JumpingConfig};
use crate::state::PlayerState;

/// Begin a jump if the state is grounded or within the ground threshold.
///
/// Returns `true` if the jump started. A press outside the threshold while
/// airborne is ignored.
pub fn try_start_jump(state: &mut PlayerState, jumping: &JumpingConfig, ground: &GroundConfig) -> bool {
    let near_ground = state.height_above(ground.height) <= jumping.ground_threshold;
    if !(state.is_grounded || near_ground) {
        return false;
    }

    state.is_grounded = false;
    state.velocity.y = jumping.jump_force;
    state.is_holding_jump = true;
    state.jump_time = 0.0;
    true
}

/// Stop suspending gravity. Idempotent.
pub fn release_jump(state: &mut PlayerState) {
    state.is_holding_jump = false;
}

/// Advance one airborne step. Does nothing while grounded.
///
/// Returns `true` when this step landed the state on the ground plane.
/// Vertical velocity is left untouched on landing.
pub fn integrate(state: &mut PlayerState, jumping: &JumpingConfig, ground: &GroundConfig, dt: f32) -> bool {
    if state.is_grounded {
        return false;
    }

    if state.is_holding_jump {
        state.jump_time += dt;
        if state.jump_time >= jumping.max_jump_time {
            state.is_holding_jump = false;
        }
    }

    state.position.y += state.velocity.y * dt;

    if !state.is_holding_jump {
        state.velocity.y += jumping.gravity * dt;
    }

    if state.position.y <= ground.height {
        state.position.y = ground.height;
        state.is_grounded = true;
        return true;
    }

    false
}
