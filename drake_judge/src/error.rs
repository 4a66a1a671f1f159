use thedrake::{BoardPos, IllegalAction, Move, PlayingSide};

#[derive(Debug)]
/// A broken rule found while refereeing a game.
///
/// These point at bugs in the rules engine, not at bad moves: the judge only
/// plays moves the engine itself enumerated.
pub enum InvariantViolation {
    RejectedMove { mv: Move, err: IllegalAction },
    OverlappingArmies { pos: BoardPos },
    LeaderMissing { side: PlayingSide },
    TooManyGuards { side: PlayingSide, guards: u8 },
}

impl std::error::Error for InvariantViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvariantViolation::RejectedMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::RejectedMove { mv, err: _ } => {
                write!(f, "The valid move {} was rejected", mv)
            }
            InvariantViolation::OverlappingArmies { pos } => {
                write!(f, "Both armies have a troop on {}", pos)
            }
            InvariantViolation::LeaderMissing { side } => {
                write!(f, "The {} leader position holds no {} troop", side, side)
            }
            InvariantViolation::TooManyGuards { side, guards } => {
                write!(f, "The {} side has placed {} guards", side, guards)
            }
        }
    }
}
