use serde::Serialize;

use crate::{coordinate::Coordinate, error::GuidanceError, meters::Meters};

/// Sampled geometry of one leg, split into logical segments at turn boundaries.
///
/// Segment `i` owns the samples `[segment_offsets[i], segment_offsets[i + 1])`.
/// The sample at `segment_offsets[i + 1]` is both the end of segment `i` and
/// the turn point opening segment `i + 1`. The last offset is the index of the
/// final location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegGeometry {
    locations: Vec<Coordinate>,
    segment_offsets: Vec<usize>,
    segment_distances: Vec<Meters>,
}

impl LegGeometry {
    pub fn new(
        locations: Vec<Coordinate>,
        segment_offsets: Vec<usize>,
        segment_distances: Vec<Meters>,
    ) -> Result<LegGeometry, GuidanceError> {
        if locations.len() < 2 {
            return Err(GuidanceError::EmptyGeometry {
                locations: locations.len(),
            });
        }

        let contiguous = segment_offsets.len() >= 2
            && segment_offsets.first() == Some(&0)
            && segment_offsets.last() == Some(&(locations.len() - 1))
            && segment_offsets.windows(2).all(|w| w[0] < w[1]);

        if !contiguous {
            return Err(GuidanceError::InvalidSegmentOffsets);
        }

        let segments = segment_offsets.len() - 1;
        if segment_distances.len() != segments {
            return Err(GuidanceError::SegmentDistanceMismatch {
                segments,
                distances: segment_distances.len(),
            });
        }

        Ok(LegGeometry {
            locations,
            segment_offsets,
            segment_distances,
        })
    }

    /// Builds a leg from one polyline per segment. Consecutive polylines share
    /// their boundary point, which is kept once.
    pub fn from_segments(segments: &[Vec<Coordinate>]) -> Result<LegGeometry, GuidanceError> {
        let mut locations: Vec<Coordinate> = Vec::new();
        let mut segment_offsets = Vec::with_capacity(segments.len() + 1);
        let mut segment_distances = Vec::with_capacity(segments.len());

        for segment in segments {
            if segment.len() < 2 {
                return Err(GuidanceError::InvalidSegmentOffsets);
            }

            if locations.is_empty() {
                segment_offsets.push(0);
                locations.push(segment[0]);
            }

            segment_distances.push(compute_geometry_distance(segment));
            locations.extend_from_slice(&segment[1..]);
            segment_offsets.push(locations.len() - 1);
        }

        LegGeometry::new(locations, segment_offsets, segment_distances)
    }

    pub fn locations(&self) -> &[Coordinate] {
        &self.locations
    }

    /// One distance per segment, in segment order.
    pub fn segment_distances(&self) -> &[Meters] {
        &self.segment_distances
    }

    pub fn number_of_segments(&self) -> usize {
        self.segment_offsets.len() - 1
    }

    /// First location index of `segment`.
    pub fn front_index(&self, segment: usize) -> usize {
        self.segment_offsets[segment]
    }

    /// Last location index belonging to `segment`.
    pub fn back_index(&self, segment: usize) -> usize {
        self.segment_offsets[segment + 1] - 1
    }

    pub fn total_distance(&self) -> Meters {
        self.segment_distances.iter().copied().sum()
    }

    pub fn first_location(&self) -> Coordinate {
        self.locations[0]
    }

    pub fn last_location(&self) -> Coordinate {
        self.locations[self.locations.len() - 1]
    }
}

pub fn compute_geometry_distance(geometry: &[Coordinate]) -> Meters {
    geometry
        .windows(2)
        .map(|w| w[0].haversine_distance(&w[1]))
        .sum()
}
