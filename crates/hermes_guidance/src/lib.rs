pub mod angle;
pub mod assemble_steps;
pub mod coordinate;
pub mod duration;
pub mod error;
pub mod leg_geometry;
pub mod meters;
pub mod names;
pub mod path_data;
pub mod phantom_node;
pub mod route;
pub mod route_step;
pub mod step_maneuver;
pub mod travel_mode;
pub mod turn_instruction;

#[cfg(test)]
pub(crate) mod test_utils;
