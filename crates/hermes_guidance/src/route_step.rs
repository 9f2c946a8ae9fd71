use serde::{Deserialize, Serialize};

use crate::{
    meters::Meters, names::NameId, step_maneuver::StepManeuver, travel_mode::TravelMode,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub name_id: NameId,
    pub name: String,
    /// Seconds
    pub duration: f64,
    pub distance: Meters,
    pub travel_mode: TravelMode,
    pub maneuver: StepManeuver,
    /// Half-open range into the leg's locations.
    pub geometry_begin: usize,
    pub geometry_end: usize,
}

impl RouteStep {
    pub fn geometry_range(&self) -> std::ops::Range<usize> {
        self.geometry_begin..self.geometry_end
    }
}
