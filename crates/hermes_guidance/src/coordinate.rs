use geo::{Bearing, Distance, Haversine};
use serde::{Deserialize, Serialize};

use crate::meters::Meters;

/// A geodetic point, longitude first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate { lon, lat }
    }

    pub fn haversine_distance(&self, other: &Coordinate) -> Meters {
        Meters::new(Haversine.distance(geo::Point::from(self), geo::Point::from(other)))
    }

    /// Initial bearing towards `other`, in degrees on [0, 360) relative to due north.
    pub fn bearing(&self, other: &Coordinate) -> f64 {
        Haversine
            .bearing(geo::Point::from(self), geo::Point::from(other))
            .rem_euclid(360.0)
    }
}

impl From<&Coordinate> for geo::Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Coordinate::new(point.x(), point.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Coordinate::new(4.35, 50.85);

        let north = Coordinate::new(4.35, 50.86);
        assert!(origin.bearing(&north).abs() < 1e-6);

        let east = Coordinate::new(4.36, 50.85);
        assert!((origin.bearing(&east) - 90.0).abs() < 0.1);

        let south = Coordinate::new(4.35, 50.84);
        assert!((origin.bearing(&south) - 180.0).abs() < 1e-6);

        let west = Coordinate::new(4.34, 50.85);
        assert!((origin.bearing(&west) - 270.0).abs() < 0.1);
    }

    #[test]
    fn test_haversine_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);

        // One degree of latitude is roughly 111 km
        let distance = a.haversine_distance(&b).value();
        assert!((distance - 111_195.0).abs() < 100.0);
        assert_eq!(a.haversine_distance(&a).value(), 0.0);
    }

    #[test]
    fn test_geo_point_conversion() {
        let coordinate = Coordinate::new(4.35, 50.85);
        let point: geo::Point<f64> = (&coordinate).into();
        assert_eq!(point.x(), 4.35);
        assert_eq!(point.y(), 50.85);
        assert_eq!(Coordinate::from(point), coordinate);
    }
}
