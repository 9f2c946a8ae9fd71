use crate::{
    angle::AngleClassifier,
    coordinate::Coordinate,
    duration::Deciseconds,
    leg_geometry::LegGeometry,
    names::{NameId, NameTable},
    path_data::PathData,
    phantom_node::PhantomNode,
    travel_mode::TravelMode,
    turn_instruction::{DirectionModifier, TurnInstruction, TurnType},
};

pub const MAIN_STREET: NameId = 1;
pub const SIDE_STREET: NameId = 2;
pub const HARBOUR_ROAD: NameId = 3;

pub fn test_names() -> NameTable {
    [
        (MAIN_STREET, "Main Street"),
        (SIDE_STREET, "Side Street"),
        (HARBOUR_ROAD, "Harbour Road"),
    ]
    .into_iter()
    .collect()
}

/// Fails the test if the assembler asks for a turn classification.
pub struct PanickingClassifier;

impl AngleClassifier for PanickingClassifier {
    fn classify_angle(&self, angle: f64) -> DirectionModifier {
        panic!("classifier should not be called, got angle {angle}")
    }
}

pub fn phantom(
    name_id: NameId,
    location: Coordinate,
    forward_weight: Deciseconds,
    reverse_weight: Deciseconds,
    fwd_segment_position: u16,
) -> PhantomNode {
    PhantomNode {
        name_id,
        location,
        forward_weight,
        reverse_weight,
        forward_travel_mode: TravelMode::Driving,
        backward_travel_mode: TravelMode::Driving,
        fwd_segment_position,
    }
}

pub fn edge(name_id: NameId, duration_until_turn: Deciseconds) -> PathData {
    PathData::new(
        name_id,
        duration_until_turn,
        TurnInstruction::NO_TURN,
        TravelMode::Driving,
    )
}

pub fn turn(
    name_id: NameId,
    duration_until_turn: Deciseconds,
    direction_modifier: DirectionModifier,
) -> PathData {
    PathData::new(
        name_id,
        duration_until_turn,
        TurnInstruction::new(TurnType::Turn, direction_modifier),
        TravelMode::Driving,
    )
}

/// Two samples on a single segment, heading north.
pub fn two_point_leg() -> LegGeometry {
    LegGeometry::from_segments(&[vec![
        Coordinate::new(4.35, 50.85),
        Coordinate::new(4.35, 50.851),
    ]])
    .unwrap()
}

/// Heads north for two samples, then turns left and heads west.
pub fn left_turn_leg() -> LegGeometry {
    LegGeometry::from_segments(&[
        vec![
            Coordinate::new(4.35, 50.85),
            Coordinate::new(4.35, 50.851),
            Coordinate::new(4.35, 50.852),
        ],
        vec![
            Coordinate::new(4.35, 50.852),
            Coordinate::new(4.349, 50.852),
            Coordinate::new(4.348, 50.852),
        ],
    ])
    .unwrap()
}

/// A zig-zag of `segments` segments with `samples` points each.
pub fn zig_zag_leg(segments: usize, samples: usize) -> LegGeometry {
    let mut current = Coordinate::new(4.35, 50.85);
    let polylines: Vec<Vec<Coordinate>> = (0..segments)
        .map(|segment| {
            let (dlon, dlat) = if segment % 2 == 0 {
                (0.0, 0.0005)
            } else {
                (0.0005, 0.0)
            };
            let polyline: Vec<Coordinate> = (0..samples)
                .map(|i| {
                    Coordinate::new(
                        current.lon + dlon * i as f64,
                        current.lat + dlat * i as f64,
                    )
                })
                .collect();
            current = polyline[polyline.len() - 1];
            polyline
        })
        .collect();

    LegGeometry::from_segments(&polylines).unwrap()
}
