use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate, leg_geometry::LegGeometry, turn_instruction::TurnInstruction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointType {
    None,
    Depart,
    Arrive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepManeuver {
    pub location: Coordinate,
    pub bearing_before: f64,
    pub bearing_after: f64,
    pub instruction: TurnInstruction,
    pub waypoint_type: WaypointType,
    pub exit: Option<u32>,
}

impl StepManeuver {
    /// A maneuver that only knows where it happens, with both bearings zeroed.
    pub fn at_location(
        location: Coordinate,
        instruction: TurnInstruction,
        waypoint_type: WaypointType,
    ) -> Self {
        StepManeuver {
            location,
            bearing_before: 0.0,
            bearing_after: 0.0,
            instruction,
            waypoint_type,
            exit: None,
        }
    }
}

/// Builds the maneuver taken at the start of `segment_index`.
///
/// The maneuver is located on the first sample of the segment. Bearings are
/// taken from the samples right before and after it, and are zero where the
/// leg has no such sample. The exit ordinal is kept for roundabout turns only.
pub fn step_maneuver_from_geometry(
    instruction: TurnInstruction,
    waypoint_type: WaypointType,
    leg_geometry: &LegGeometry,
    segment_index: usize,
    exit: Option<u32>,
) -> StepManeuver {
    let locations = leg_geometry.locations();
    let turn_index = leg_geometry.front_index(segment_index);
    let turn_coordinate = locations[turn_index];

    let bearing_before = match turn_index.checked_sub(1) {
        Some(pre_turn_index) => locations[pre_turn_index].bearing(&turn_coordinate),
        None => 0.0,
    };

    let bearing_after = match locations.get(turn_index + 1) {
        Some(post_turn_coordinate) => turn_coordinate.bearing(post_turn_coordinate),
        None => 0.0,
    };

    StepManeuver {
        location: turn_coordinate,
        bearing_before,
        bearing_after,
        instruction,
        waypoint_type,
        exit: exit.filter(|_| instruction.turn_type.is_roundabout()),
    }
}
