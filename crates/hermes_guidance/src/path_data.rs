use serde::{Deserialize, Serialize};

use crate::{
    duration::Deciseconds, names::NameId, travel_mode::TravelMode,
    turn_instruction::TurnInstruction,
};

/// Annotation of one traversed graph edge, as produced by the path search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub name_id: NameId,
    /// Cost accumulated on this edge before reaching `turn_instruction`.
    pub duration_until_turn: Deciseconds,
    pub turn_instruction: TurnInstruction,
    pub travel_mode: TravelMode,
    /// Roundabout exit ordinal, 1-based.
    pub exit: Option<u32>,
}

impl PathData {
    pub fn new(
        name_id: NameId,
        duration_until_turn: Deciseconds,
        turn_instruction: TurnInstruction,
        travel_mode: TravelMode,
    ) -> Self {
        PathData {
            name_id,
            duration_until_turn,
            turn_instruction,
            travel_mode,
            exit: None,
        }
    }

    pub fn with_exit(mut self, exit: u32) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn ends_in_turn(&self) -> bool {
        !self.turn_instruction.is_no_turn()
    }
}
