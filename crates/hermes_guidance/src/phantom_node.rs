use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate, duration::Deciseconds, names::NameId, travel_mode::TravelMode,
};

/// A location snapped onto a graph edge.
///
/// `forward_weight` is the cost from the start of the edge to the snapped
/// location, `reverse_weight` the cost from the snapped location to the end
/// of the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhantomNode {
    pub name_id: NameId,
    pub location: Coordinate,
    pub forward_weight: Deciseconds,
    pub reverse_weight: Deciseconds,
    pub forward_travel_mode: TravelMode,
    pub backward_travel_mode: TravelMode,
    pub fwd_segment_position: u16,
}

impl PhantomNode {
    /// The endpoint duration used by step assembly, keyed by how the edge is traversed.
    pub fn duration_for(&self, traversed_in_reverse: bool) -> Deciseconds {
        if traversed_in_reverse {
            self.forward_weight
        } else {
            self.reverse_weight
        }
    }

    pub fn travel_mode_for(&self, traversed_in_reverse: bool) -> TravelMode {
        if traversed_in_reverse {
            self.backward_travel_mode
        } else {
            self.forward_travel_mode
        }
    }
}
