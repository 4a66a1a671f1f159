use std::sync::Arc;

use serde::Serialize;

use crate::{BoardPos, BoardTile, GameState, Move, PlayingSide, Troop, TroopFace};

/// A troop standing on the board, as seen by one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TroopTile {
    troop: Arc<Troop>,
    side: PlayingSide,
    face: TroopFace,
}

/// Anything that can be found on a square: plain terrain, or a troop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Board(BoardTile),
    Troop(TroopTile),
}

impl TroopTile {
    pub fn new(troop: Arc<Troop>, side: PlayingSide, face: TroopFace) -> Self {
        Self { troop, side, face }
    }

    pub fn troop(&self) -> &Arc<Troop> {
        &self.troop
    }

    pub fn side(&self) -> PlayingSide {
        self.side
    }

    pub fn face(&self) -> TroopFace {
        self.face
    }

    pub fn can_step_on(&self) -> bool {
        false
    }

    pub fn has_troop(&self) -> bool {
        true
    }

    /// All moves the troop could make from `pos`.
    ///
    /// The strategies of the current face are evaluated in order and their
    /// moves concatenated.
    pub fn moves_from(&self, pos: BoardPos, state: &GameState) -> Vec<Move> {
        self.troop
            .actions(self.face)
            .iter()
            .flat_map(|action| action.moves_from(pos, self.side, state))
            .collect()
    }

    pub fn flipped(&self) -> TroopTile {
        TroopTile {
            troop: Arc::clone(&self.troop),
            side: self.side,
            face: self.face.flipped(),
        }
    }
}

impl Tile {
    pub fn can_step_on(&self) -> bool {
        match self {
            Tile::Board(tile) => tile.can_step_on(),
            Tile::Troop(tile) => tile.can_step_on(),
        }
    }

    pub fn has_troop(&self) -> bool {
        match self {
            Tile::Board(tile) => tile.has_troop(),
            Tile::Troop(tile) => tile.has_troop(),
        }
    }

    /// Terrain never moves, so only troop tiles produce moves.
    pub fn moves_from(&self, pos: BoardPos, state: &GameState) -> Vec<Move> {
        match self {
            Tile::Board(_) => Vec::new(),
            Tile::Troop(tile) => tile.moves_from(pos, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Offset2D, TroopAction};

    fn spearman() -> Arc<Troop> {
        Arc::new(Troop::with_default_pivot(
            "Spearman",
            vec![TroopAction::Shift(Offset2D::new(0, 1))],
            vec![TroopAction::Shift(Offset2D::new(0, -1))],
        ))
    }

    #[test]
    fn flipping_keeps_troop_and_side() {
        let tile = TroopTile::new(spearman(), PlayingSide::Orange, TroopFace::Avers);
        let flipped = tile.flipped();
        assert_eq!(flipped.face(), TroopFace::Revers);
        assert_eq!(flipped.side(), PlayingSide::Orange);
        assert!(Arc::ptr_eq(flipped.troop(), tile.troop()));
        assert_eq!(flipped.flipped(), tile);
    }

    #[test]
    fn tiles_report_capabilities() {
        let troop = Tile::Troop(TroopTile::new(spearman(), PlayingSide::Blue, TroopFace::Avers));
        assert!(!troop.can_step_on());
        assert!(troop.has_troop());
        assert!(Tile::Board(BoardTile::Empty).can_step_on());
        assert!(!Tile::Board(BoardTile::Mountain).can_step_on());
        assert!(!Tile::Board(BoardTile::Mountain).has_troop());
    }

    #[test]
    fn serialize() {
        let tile = TroopTile::new(spearman(), PlayingSide::Blue, TroopFace::Revers);
        assert_eq!(
            serde_json::to_string(&tile).unwrap(),
            r#"{"troop":"Spearman","side":"BLUE","face":"REVERS"}"#
        );
    }
}
