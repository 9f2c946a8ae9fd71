use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnType {
    NoTurn,
    NewName,
    Continue,
    Turn,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    Notification,
    EnterRoundabout,
    EnterAndExitRoundabout,
    StayOnRoundabout,
    ExitRoundabout,
    EnterRotary,
    EnterAndExitRotary,
    ExitRotary,
}

impl TurnType {
    /// Turn types that carry an exit ordinal.
    pub fn is_roundabout(&self) -> bool {
        matches!(
            self,
            TurnType::EnterRoundabout
                | TurnType::EnterAndExitRoundabout
                | TurnType::StayOnRoundabout
                | TurnType::ExitRoundabout
                | TurnType::EnterRotary
                | TurnType::EnterAndExitRotary
                | TurnType::ExitRotary
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionModifier {
    UTurn,
    SharpRight,
    Right,
    SlightRight,
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnInstruction {
    pub turn_type: TurnType,
    pub direction_modifier: DirectionModifier,
}

impl TurnInstruction {
    /// Marks an edge that does not end in a maneuver.
    pub const NO_TURN: TurnInstruction = TurnInstruction {
        turn_type: TurnType::NoTurn,
        direction_modifier: DirectionModifier::UTurn,
    };

    pub fn new(turn_type: TurnType, direction_modifier: DirectionModifier) -> Self {
        TurnInstruction {
            turn_type,
            direction_modifier,
        }
    }

    pub fn is_no_turn(&self) -> bool {
        *self == Self::NO_TURN
    }
}

impl Default for TurnInstruction {
    fn default() -> Self {
        Self::NO_TURN
    }
}
