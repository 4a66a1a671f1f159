use crate::{BoardPos, GameResult, GameState, Move};

/// Enumerates the moves available to the side on turn.
pub struct ValidMoves<'a> {
    state: &'a GameState,
}

impl<'a> ValidMoves<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// The moves of the troop on `pos`, if it belongs to the side on turn.
    pub fn board_moves(&self, pos: BoardPos) -> Vec<Move> {
        if self.state.result() != GameResult::InPlay {
            return Vec::new();
        }
        match self.state.army_on_turn().board_troops().at(pos) {
            Some(tile) => tile.moves_from(pos, self.state),
            None => Vec::new(),
        }
    }

    pub fn moves_from_stack(&self) -> Vec<Move> {
        self.state
            .board()
            .position_factory()
            .positions()
            .filter(|&target| self.state.can_place_from_stack(target))
            .map(|target| Move::PlaceFromStack { target })
            .collect()
    }

    pub fn all_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .state
            .army_on_turn()
            .board_troops()
            .troop_positions()
            .flat_map(|pos| self.board_moves(pos))
            .collect();
        moves.extend(self.moves_from_stack());
        moves
    }
}
