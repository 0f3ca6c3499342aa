//! Jump input components.
//!
//! Input edges are buffered in [`JumpInput`] and consumed once per render
//! frame by the controller. Keyboard polling fills the buffer for entities
//! carrying a [`JumpBinding`]; AI or replay code can write it directly.

use bevy::prelude::*;

/// Edge-triggered jump input collected since the last input tick.
///
/// # Example
///
/// ```rust
/// use runner_controller::prelude::*;
///
/// let mut input = JumpInput::default();
/// input.press();
/// assert!(input.has_edges());
///
/// let edges = input.take();
/// assert!(edges.pressed);
/// assert!(!input.has_edges());
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component)]
pub struct JumpInput {
    /// The jump button went down.
    pub pressed: bool,
    /// The jump button went up.
    pub released: bool,
}

impl JumpInput {
    /// A press edge only.
    pub fn pressed() -> Self {
        Self {
            pressed: true,
            released: false,
        }
    }

    /// A release edge only.
    pub fn released() -> Self {
        Self {
            pressed: false,
            released: true,
        }
    }

    /// Record a press edge.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Record a release edge.
    pub fn release(&mut self) {
        self.released = true;
    }

    /// Whether any edge is pending.
    pub fn has_edges(&self) -> bool {
        self.pressed || self.released
    }

    /// Return the pending edges and clear the buffer.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drop pending edges.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keyboard keys that drive a controller's [`JumpInput`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(JumpInput)]
pub struct JumpBinding {
    pub keys: Vec<KeyCode>,
}

impl Default for JumpBinding {
    fn default() -> Self {
        Self {
            keys: vec![KeyCode::Space],
        }
    }
}

impl JumpBinding {
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Edges for this binding in the current frame.
    pub fn poll(&self, keys: &ButtonInput<KeyCode>) -> JumpInput {
        JumpInput {
            pressed: keys.any_just_pressed(self.keys.iter().copied()),
            released: keys.any_just_released(self.keys.iter().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== JumpInput Tests ====================

    #[test]
    fn jump_input_default_is_empty() {
        let input = JumpInput::default();
        assert!(!input.pressed);
        assert!(!input.released);
        assert!(!input.has_edges());
    }

    #[test]
    fn jump_input_accumulates_edges() {
        let mut input = JumpInput::default();
        input.press();
        input.release();
        assert_eq!(
            input,
            JumpInput {
                pressed: true,
                released: true
            }
        );
    }

    #[test]
    fn jump_input_take_clears() {
        let mut input = JumpInput::pressed();
        let taken = input.take();
        assert_eq!(taken, JumpInput::pressed());
        assert_eq!(input, JumpInput::default());
    }

    #[test]
    fn jump_input_clear() {
        let mut input = JumpInput::released();
        input.clear();
        assert!(!input.has_edges());
    }

    // ==================== JumpBinding Tests ====================

    #[test]
    fn binding_defaults_to_space() {
        assert_eq!(JumpBinding::default().keys, vec![KeyCode::Space]);
    }

    #[test]
    fn binding_polls_press_edge() {
        let binding = JumpBinding::new([KeyCode::Space, KeyCode::KeyW]);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);

        assert_eq!(binding.poll(&keys), JumpInput::pressed());
    }

    #[test]
    fn binding_polls_release_edge() {
        let binding = JumpBinding::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.clear();
        keys.release(KeyCode::Space);

        assert_eq!(binding.poll(&keys), JumpInput::released());
    }

    #[test]
    fn binding_ignores_held_keys() {
        let binding = JumpBinding::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.clear();

        assert!(keys.pressed(KeyCode::Space));
        assert!(!binding.poll(&keys).has_edges());
    }

    #[test]
    fn binding_ignores_unbound_keys() {
        let binding = JumpBinding::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Enter);

        assert!(!binding.poll(&keys).has_edges());
    }
}
