use crate::{BoardPos, GameState, Move, Offset2D, PlayingSide, TilePos};

/// A move-generation strategy of a troop face.
///
/// Offsets are written from the blue side's point of view, see
/// [`BoardPos::step_by_playing_side()`]. Legality is always decided by the
/// [`GameState`], strategies only decide where to look.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TroopAction {
    /// Moves by the offset exactly once, stepping or capturing.
    Shift(Offset2D),
    /// Moves repeatedly by the offset until blocked, or until it captures.
    Slide(Offset2D),
    /// Captures the troop at the offset without moving.
    Strike(Offset2D),
}

impl TroopAction {
    pub fn offset(&self) -> Offset2D {
        match self {
            TroopAction::Shift(offset) | TroopAction::Slide(offset) | TroopAction::Strike(offset) => {
                *offset
            }
        }
    }

    pub fn moves_from(&self, origin: BoardPos, side: PlayingSide, state: &GameState) -> Vec<Move> {
        let offset = self.offset();
        let first = origin.step_by_playing_side(offset, side);
        match self {
            TroopAction::Shift(_) => shift_moves(origin, first, state),
            TroopAction::Slide(_) => slide_moves(origin, first, offset, side, state),
            TroopAction::Strike(_) => strike_moves(origin, first, state),
        }
    }
}

fn shift_moves(origin: BoardPos, target: TilePos, state: &GameState) -> Vec<Move> {
    let Some(target) = target.board_pos() else {
        return Vec::new();
    };
    if state.can_step(origin, target) {
        vec![Move::StepOnly { origin, target }]
    } else if state.can_capture(origin, target) {
        vec![Move::StepAndCapture { origin, target }]
    } else {
        Vec::new()
    }
}

fn slide_moves(
    origin: BoardPos,
    first: TilePos,
    offset: Offset2D,
    side: PlayingSide,
    state: &GameState,
) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut next = first;
    while let TilePos::OnBoard(target) = next {
        if state.can_step(origin, target) {
            moves.push(Move::StepOnly { origin, target });
        } else if state.can_capture(origin, target) {
            moves.push(Move::StepAndCapture { origin, target });
            break;
        } else {
            break;
        }
        next = target.step_by_playing_side(offset, side);
    }
    moves
}

fn strike_moves(origin: BoardPos, target: TilePos, state: &GameState) -> Vec<Move> {
    match target.board_pos() {
        Some(target) if state.can_capture(origin, target) => {
            vec![Move::CaptureOnly { origin, target }]
        }
        _ => Vec::new(),
    }
}
