use tracing::{debug, instrument, warn};

use crate::{
    angle::{AngleClassifier, ThresholdClassifier},
    coordinate::Coordinate,
    duration::{Deciseconds, to_seconds},
    error::GuidanceError,
    leg_geometry::LegGeometry,
    meters::Meters,
    names::{NameId, NameResolver},
    path_data::PathData,
    phantom_node::PhantomNode,
    route_step::RouteStep,
    step_maneuver::{StepManeuver, WaypointType, step_maneuver_from_geometry},
    travel_mode::TravelMode,
    turn_instruction::{DirectionModifier, TurnInstruction, TurnType},
};

/// Turns the edge-by-edge annotations of a leg into maneuver-by-maneuver steps.
pub struct StepAssembler<N, C = ThresholdClassifier> {
    names: N,
    classifier: C,
}

impl<N: NameResolver> StepAssembler<N> {
    pub fn new(names: N) -> Self {
        StepAssembler::with_classifier(names, ThresholdClassifier::default())
    }
}

impl<N: NameResolver, C: AngleClassifier> StepAssembler<N, C> {
    pub fn with_classifier(names: N, classifier: C) -> Self {
        StepAssembler { names, classifier }
    }

    /// Assembles the steps of one leg, closing with a zero-length arrival step.
    ///
    /// `leg_data` is empty only when source and target are on the same edge
    /// segment. Otherwise its turns must split the leg into exactly
    /// `leg_geometry.number_of_segments()` segments.
    #[instrument(
        level = "debug",
        skip_all,
        fields(edges = leg_data.len(), segments = leg_geometry.number_of_segments())
    )]
    pub fn assemble_steps(
        &self,
        leg_data: &[PathData],
        leg_geometry: &LegGeometry,
        source_node: &PhantomNode,
        target_node: &PhantomNode,
        source_traversed_in_reverse: bool,
        target_traversed_in_reverse: bool,
    ) -> Result<Vec<RouteStep>, GuidanceError> {
        let steps = self
            .assemble(
                leg_data,
                leg_geometry,
                source_node,
                target_node,
                source_traversed_in_reverse,
                target_traversed_in_reverse,
            )
            .inspect_err(|error| warn!(%error, "Failed to assemble leg steps"))?;

        debug!(steps = steps.len(), "Assembled leg steps");
        Ok(steps)
    }

    fn assemble(
        &self,
        leg_data: &[PathData],
        leg_geometry: &LegGeometry,
        source_node: &PhantomNode,
        target_node: &PhantomNode,
        source_traversed_in_reverse: bool,
        target_traversed_in_reverse: bool,
    ) -> Result<Vec<RouteStep>, GuidanceError> {
        let source_duration = source_node.duration_for(source_traversed_in_reverse);
        let source_mode = source_node.travel_mode_for(source_traversed_in_reverse);
        let target_duration = target_node.duration_for(target_traversed_in_reverse);
        let target_mode = target_node.travel_mode_for(target_traversed_in_reverse);

        let number_of_segments = leg_geometry.number_of_segments();
        let locations = leg_geometry.locations();

        let mut steps = Vec::with_capacity(number_of_segments + 1);

        let initial_modifier = self.boundary_modifier(locations.get(..3).unwrap_or_default());

        if !leg_data.is_empty() {
            let turns = leg_data.iter().filter(|p| p.ends_in_turn()).count();
            if turns + 1 != number_of_segments {
                return Err(GuidanceError::SegmentCountMismatch {
                    expected: number_of_segments,
                    actual: turns + 1,
                });
            }

            let mut segment_index = 0;
            let mut maneuver = step_maneuver_from_geometry(
                TurnInstruction::new(TurnType::NoTurn, initial_modifier),
                WaypointType::Depart,
                leg_geometry,
                segment_index,
                None,
            );

            // A path point bills the segment ending at its turn, while the
            // maneuver it carries belongs to the step starting there.
            let mut segment_duration: Deciseconds = 0;
            for path_point in leg_data {
                segment_duration = checked_duration(
                    segment_duration.checked_add(path_point.duration_until_turn),
                )?;

                if path_point.ends_in_turn() {
                    steps.push(self.route_step(
                        path_point.name_id,
                        segment_duration,
                        path_point.travel_mode,
                        maneuver,
                        leg_geometry,
                        segment_index,
                    )?);

                    segment_index += 1;
                    maneuver = step_maneuver_from_geometry(
                        path_point.turn_instruction,
                        WaypointType::None,
                        leg_geometry,
                        segment_index,
                        path_point.exit,
                    );
                    segment_duration = 0;
                }
            }

            steps.push(self.route_step(
                target_node.name_id,
                checked_duration(segment_duration.checked_add(target_duration))?,
                target_mode,
                maneuver,
                leg_geometry,
                segment_index,
            )?);
        } else {
            // Source and target on the same edge segment:
            //     s     t
            // u-------------v
            // |---| source_duration
            // |---------| target_duration
            if source_node.fwd_segment_position != target_node.fwd_segment_position {
                return Err(GuidanceError::SegmentPositionMismatch {
                    source_position: source_node.fwd_segment_position,
                    target_position: target_node.fwd_segment_position,
                });
            }

            if number_of_segments != 1 {
                return Err(GuidanceError::SegmentCountMismatch {
                    expected: number_of_segments,
                    actual: 1,
                });
            }

            let maneuver = StepManeuver::at_location(
                source_node.location,
                TurnInstruction::new(TurnType::NoTurn, initial_modifier),
                WaypointType::Depart,
            );

            steps.push(self.route_step(
                source_node.name_id,
                checked_duration(target_duration.checked_sub(source_duration))?,
                source_mode,
                maneuver,
                leg_geometry,
                0,
            )?);
        }

        let final_modifier = self.boundary_modifier(
            locations
                .len()
                .checked_sub(3)
                .map_or(&[][..], |start| &locations[start..]),
        );

        // Zero-length, only carries the target location
        steps.push(RouteStep {
            name_id: target_node.name_id,
            name: self.names.resolve(target_node.name_id).to_string(),
            duration: 0.0,
            distance: Meters::ZERO,
            travel_mode: target_mode,
            maneuver: StepManeuver::at_location(
                target_node.location,
                TurnInstruction::new(TurnType::NoTurn, final_modifier),
                WaypointType::Arrive,
            ),
            geometry_begin: locations.len(),
            geometry_end: locations.len(),
        });

        Ok(steps)
    }

    /// Direction modifier of the turn formed by three coordinates. Shorter
    /// geometries cannot express a direction and fall back to a U-turn.
    fn boundary_modifier(&self, locations: &[Coordinate]) -> DirectionModifier {
        match locations {
            [first, second, third] => self.classifier.direction_modifier(first, second, third),
            _ => DirectionModifier::UTurn,
        }
    }

    fn route_step(
        &self,
        name_id: NameId,
        duration: Deciseconds,
        travel_mode: TravelMode,
        maneuver: StepManeuver,
        leg_geometry: &LegGeometry,
        segment_index: usize,
    ) -> Result<RouteStep, GuidanceError> {
        if duration < 0 {
            return Err(GuidanceError::NegativeDuration { duration });
        }

        Ok(RouteStep {
            name_id,
            name: self.names.resolve(name_id).to_string(),
            duration: to_seconds(duration),
            distance: leg_geometry.segment_distances()[segment_index],
            travel_mode,
            maneuver,
            geometry_begin: leg_geometry.front_index(segment_index),
            geometry_end: leg_geometry.back_index(segment_index) + 1,
        })
    }
}

fn checked_duration(duration: Option<Deciseconds>) -> Result<Deciseconds, GuidanceError> {
    duration.ok_or(GuidanceError::DurationOverflow)
}
