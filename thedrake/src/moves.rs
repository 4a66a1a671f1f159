use crate::{BoardPos, GameState, IllegalAction};

/// A single action a player can take on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move a troop to an empty square. The troop is flipped.
    StepOnly { origin: BoardPos, target: BoardPos },
    /// Move a troop onto an enemy troop, removing it. The troop is flipped.
    StepAndCapture { origin: BoardPos, target: BoardPos },
    /// Remove an enemy troop without moving. The troop is flipped in place.
    CaptureOnly { origin: BoardPos, target: BoardPos },
    /// Put the next troop from the stack onto the board.
    PlaceFromStack { target: BoardPos },
}

impl Move {
    /// The troop's position before the move, `None` for placements.
    pub fn origin(&self) -> Option<BoardPos> {
        match self {
            Move::StepOnly { origin, .. }
            | Move::StepAndCapture { origin, .. }
            | Move::CaptureOnly { origin, .. } => Some(*origin),
            Move::PlaceFromStack { .. } => None,
        }
    }

    pub fn target(&self) -> BoardPos {
        match self {
            Move::StepOnly { target, .. }
            | Move::StepAndCapture { target, .. }
            | Move::CaptureOnly { target, .. }
            | Move::PlaceFromStack { target } => *target,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, Move::StepAndCapture { .. } | Move::CaptureOnly { .. })
    }

    /// Applies this move to `state`, returning the successor state.
    pub fn execute(&self, state: &GameState) -> Result<GameState, IllegalAction> {
        match *self {
            Move::StepOnly { origin, target } => state.step_only(origin, target),
            Move::StepAndCapture { origin, target } => state.step_and_capture(origin, target),
            Move::CaptureOnly { origin, target } => state.capture_only(origin, target),
            Move::PlaceFromStack { target } => state.place_from_stack(target),
        }
    }
}

/// `b1-b2` for a step, `b2xb3` for a step with capture, `b2x!c3` for a
/// capture without moving and `+b1` for a placement.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::StepOnly { origin, target } => write!(f, "{}-{}", origin, target),
            Move::StepAndCapture { origin, target } => write!(f, "{}x{}", origin, target),
            Move::CaptureOnly { origin, target } => write!(f, "{}x!{}", origin, target),
            Move::PlaceFromStack { target } => write!(f, "+{}", target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PositionFactory;

    #[test]
    fn notation() {
        let factory = PositionFactory::new(4);
        let (b1, b2, c3) = (
            factory.pos_at('b', 1),
            factory.pos_at('b', 2),
            factory.pos_at('c', 3),
        );
        assert_eq!(Move::StepOnly { origin: b1, target: b2 }.to_string(), "b1-b2");
        assert_eq!(Move::StepAndCapture { origin: b2, target: c3 }.to_string(), "b2xc3");
        assert_eq!(Move::CaptureOnly { origin: b2, target: c3 }.to_string(), "b2x!c3");
        assert_eq!(Move::PlaceFromStack { target: b1 }.to_string(), "+b1");
    }

    #[test]
    fn accessors() {
        let factory = PositionFactory::new(4);
        let strike = Move::CaptureOnly {
            origin: factory.pos_at('a', 1),
            target: factory.pos_at('b', 2),
        };
        assert_eq!(strike.origin(), Some(factory.pos_at('a', 1)));
        assert_eq!(strike.target(), factory.pos_at('b', 2));
        assert!(strike.is_capture());
        let place = Move::PlaceFromStack {
            target: factory.pos_at('c', 1),
        };
        assert_eq!(place.origin(), None);
        assert!(!place.is_capture());
    }
}
