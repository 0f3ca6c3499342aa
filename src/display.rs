//! Distance label.
//!
//! A [`DistanceDisplay`] sits on a UI `Text` entity and mirrors the distance
//! of its source controller once per render frame.

use bevy::prelude::*;

use crate::controller::RunnerController;

/// Default unit suffix for distance labels.
pub const DISTANCE_UNIT: &str = "m";

/// Shows the distance of `source` as `"<int> <unit>"`.
///
/// The source must carry a [`RunnerController`] by the first frame the
/// display is seen; anything else is a wiring bug and panics.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Text)]
pub struct DistanceDisplay {
    pub source: Entity,
    pub unit: String,
}

impl DistanceDisplay {
    pub fn new(source: Entity) -> Self {
        Self {
            source,
            unit: DISTANCE_UNIT.to_string(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn label(&self, distance: f32) -> String {
        format_distance(distance, &self.unit)
    }
}

/// Format a distance truncated toward zero, e.g. `"42 m"`.
pub fn format_distance(distance: f32, unit: &str) -> String {
    format!("{} {unit}", distance.trunc() as i64)
}

/// Panic on displays whose source is not a controller.
pub fn check_display_sources(
    q_new: Query<(Entity, &DistanceDisplay), Added<DistanceDisplay>>,
    q_controllers: Query<(), With<RunnerController>>,
) {
    for (entity, distance_display) in &q_new {
        let source = distance_display.source;
        assert!(
            q_controllers.contains(source),
            "DistanceDisplay on {entity} points at {source}, which has no RunnerController"
        );
        debug!("{entity} displays the distance of {source}");
    }
}

/// Refresh every distance label from its controller.
pub fn update_distance_text(
    mut q_displays: Query<(&DistanceDisplay, &mut Text)>,
    q_controllers: Query<&RunnerController>,
) {
    for (distance_display, mut text) in &mut q_displays {
        let Ok(controller) = q_controllers.get(distance_display.source) else {
            continue;
        };

        let label = distance_display.label(controller.distance());
        if text.0 != label {
            text.0 = label;
        }
    }
}
