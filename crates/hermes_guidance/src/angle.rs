use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, turn_instruction::DirectionModifier};

/// Turn angle at `second` when travelling `first -> second -> third`, in
/// degrees on [0, 360). 180 is straight ahead, lower values turn right.
///
/// Longitudes are scaled by the cosine of the turn latitude so the angle is
/// measured in a locally equirectangular plane.
pub fn compute_angle(first: &Coordinate, second: &Coordinate, third: &Coordinate) -> f64 {
    let lon_scale = second.lat.to_radians().cos();

    let v1x = (first.lon - second.lon) * lon_scale;
    let v1y = first.lat - second.lat;
    let v2x = (third.lon - second.lon) * lon_scale;
    let v2y = third.lat - second.lat;

    let angle = (v2y.atan2(v2x) - v1y.atan2(v1x)).to_degrees();
    angle.rem_euclid(360.0)
}

/// Maps a turn formed by three consecutive coordinates onto a direction modifier.
pub trait AngleClassifier {
    fn classify_angle(&self, angle: f64) -> DirectionModifier;

    fn direction_modifier(
        &self,
        first: &Coordinate,
        second: &Coordinate,
        third: &Coordinate,
    ) -> DirectionModifier {
        self.classify_angle(compute_angle(first, second, third))
    }
}

/// Upper bounds, in degrees, of each direction modifier band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnAngleThresholds {
    pub sharp_right: f64,
    pub right: f64,
    pub slight_right: f64,
    pub straight: f64,
    pub slight_left: f64,
    pub left: f64,
}

impl Default for TurnAngleThresholds {
    fn default() -> Self {
        TurnAngleThresholds {
            sharp_right: 60.0,
            right: 140.0,
            slight_right: 160.0,
            straight: 200.0,
            slight_left: 220.0,
            left: 300.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThresholdClassifier {
    thresholds: TurnAngleThresholds,
}

impl ThresholdClassifier {
    pub fn new(thresholds: TurnAngleThresholds) -> Self {
        ThresholdClassifier { thresholds }
    }
}

impl AngleClassifier for ThresholdClassifier {
    fn classify_angle(&self, angle: f64) -> DirectionModifier {
        let t = &self.thresholds;

        if angle <= 0.0 || angle >= 360.0 {
            DirectionModifier::UTurn
        } else if angle < t.sharp_right {
            DirectionModifier::SharpRight
        } else if angle < t.right {
            DirectionModifier::Right
        } else if angle < t.slight_right {
            DirectionModifier::SlightRight
        } else if angle <= t.straight {
            DirectionModifier::Straight
        } else if angle <= t.slight_left {
            DirectionModifier::SlightLeft
        } else if angle <= t.left {
            DirectionModifier::Left
        } else {
            DirectionModifier::SharpLeft
        }
    }
}
