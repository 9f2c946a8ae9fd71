use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::{
    angle::AngleClassifier, assemble_steps::StepAssembler, error::GuidanceError,
    leg_geometry::LegGeometry, meters::Meters, names::NameResolver, path_data::PathData,
    phantom_node::PhantomNode, route_step::RouteStep,
};

/// Everything the path search hands over for one leg.
#[derive(Debug, Clone)]
pub struct LegRequest {
    pub path_data: Vec<PathData>,
    pub geometry: LegGeometry,
    pub source: PhantomNode,
    pub target: PhantomNode,
    pub source_traversed_in_reverse: bool,
    pub target_traversed_in_reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    steps: Vec<RouteStep>,
    distance: Meters,
    duration: f64,
}

impl RouteLeg {
    pub fn new(steps: Vec<RouteStep>) -> RouteLeg {
        let distance = steps.iter().map(|step| step.distance).sum();
        let duration = steps.iter().map(|step| step.duration).sum();
        RouteLeg {
            steps,
            distance,
            duration,
        }
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    /// Seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    legs: Vec<RouteLeg>,
    distance: Meters,
    duration: f64,
}

impl Route {
    pub fn new(legs: Vec<RouteLeg>) -> Route {
        let distance = legs.iter().map(|leg| leg.distance()).sum();
        let duration = legs.iter().map(|leg| leg.duration()).sum();
        Route {
            legs,
            distance,
            duration,
        }
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.legs.iter().flat_map(|leg| leg.steps())
    }
}

impl<N: NameResolver, C: AngleClassifier> StepAssembler<N, C> {
    pub fn assemble_leg(&self, request: &LegRequest) -> Result<RouteLeg, GuidanceError> {
        let steps = self.assemble_steps(
            &request.path_data,
            &request.geometry,
            &request.source,
            &request.target,
            request.source_traversed_in_reverse,
            request.target_traversed_in_reverse,
        )?;

        Ok(RouteLeg::new(steps))
    }
}

impl<N, C> StepAssembler<N, C>
where
    N: NameResolver + Sync,
    C: AngleClassifier + Sync,
{
    /// Assembles all legs in parallel. A single failing leg fails the route.
    #[instrument(level = "debug", skip_all, fields(legs = requests.len()))]
    pub fn assemble_route(&self, requests: &[LegRequest]) -> Result<Route, GuidanceError> {
        let legs = requests
            .par_iter()
            .map(|request| self.assemble_leg(request))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route::new(legs))
    }
}
