use thiserror::Error;

use crate::duration::Deciseconds;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuidanceError {
    #[error("Leg geometry needs at least 2 locations, got {locations}")]
    EmptyGeometry { locations: usize },
    #[error("Leg geometry segment offsets are not contiguous")]
    InvalidSegmentOffsets,
    #[error("Leg geometry has {segments} segments but {distances} segment distances")]
    SegmentDistanceMismatch { segments: usize, distances: usize },
    #[error("Path data covers {actual} segments, leg geometry has {expected}")]
    SegmentCountMismatch { expected: usize, actual: usize },
    #[error("Step duration overflows while accumulating")]
    DurationOverflow,
    #[error("Step duration is negative: {duration}")]
    NegativeDuration { duration: Deciseconds },
    #[error(
        "Empty path data but source and target are on different segments ({source_position} != {target_position})"
    )]
    SegmentPositionMismatch {
        source_position: u16,
        target_position: u16,
    },
}
