use crate::BoardPos;

/// The error type for geometric operations on [`TilePos::OffBoard`](crate::TilePos::OffBoard).
///
/// Getting this means the caller forgot to check for the sentinel, it never
/// results from a rules violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffBoardError;

impl std::error::Error for OffBoardError {}

impl std::fmt::Display for OffBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position is off the board")
    }
}

/// Distinguishes a bad argument from an action the current phase disallows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a position or target that fails the precondition.
    Argument,
    /// The action is not allowed in the current phase, whatever the argument.
    State,
}

/// The error type for every action the rules reject.
///
/// Rejected actions never change the value they were called on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalAction {
    TargetOffBoard,
    EmptyPosition { pos: BoardPos },
    OccupiedPosition { pos: BoardPos },
    StackEmpty,
    PlacementOnOccupied { pos: BoardPos },
    LeaderNotPlaced,
    PlacingGuards,
    CannotStep { origin: BoardPos, target: BoardPos },
    CannotCapture { origin: BoardPos, target: BoardPos },
    CannotPlace { target: BoardPos },
}

impl IllegalAction {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IllegalAction::StackEmpty
            | IllegalAction::PlacementOnOccupied { .. }
            | IllegalAction::LeaderNotPlaced
            | IllegalAction::PlacingGuards => ErrorKind::State,
            _ => ErrorKind::Argument,
        }
    }
}

impl std::error::Error for IllegalAction {}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::TargetOffBoard => write!(f, "The target position is off the board"),
            IllegalAction::EmptyPosition { pos } => write!(f, "There is no troop on {}", pos),
            IllegalAction::OccupiedPosition { pos } => {
                write!(f, "The position {} is already occupied", pos)
            }
            IllegalAction::StackEmpty => write!(f, "There are no troops left on the stack"),
            IllegalAction::PlacementOnOccupied { pos } => {
                write!(f, "Cannot place a troop from the stack on occupied {}", pos)
            }
            IllegalAction::LeaderNotPlaced => {
                write!(f, "Troops cannot move before the leader is placed")
            }
            IllegalAction::PlacingGuards => {
                write!(f, "Troops cannot move while guards are being placed")
            }
            IllegalAction::CannotStep { origin, target } => {
                write!(f, "Cannot step from {} to {}", origin, target)
            }
            IllegalAction::CannotCapture { origin, target } => {
                write!(f, "Cannot capture on {} from {}", target, origin)
            }
            IllegalAction::CannotPlace { target } => {
                write!(f, "Cannot place a troop from the stack on {}", target)
            }
        }
    }
}
