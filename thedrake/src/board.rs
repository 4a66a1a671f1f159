use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{BoardPos, PositionFactory, TilePos};

/// The terrain of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardTile {
    Empty,
    Mountain,
}

impl BoardTile {
    pub fn can_step_on(&self) -> bool {
        match self {
            BoardTile::Empty => true,
            BoardTile::Mountain => false,
        }
    }

    pub fn has_troop(&self) -> bool {
        false
    }
}

/// A terrain tile together with the position it goes to, for [`Board::with_tiles()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileAt {
    pub pos: BoardPos,
    pub tile: BoardTile,
}

impl TileAt {
    pub fn new(pos: BoardPos, tile: BoardTile) -> Self {
        Self { pos, tile }
    }
}

/// The square terrain grid. Troops are not part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: i32,
    // Indexed by [i * dimension + j], i.e. column-major.
    tiles: Vec<BoardTile>,
}

impl Board {
    /// A board of `dimension` x `dimension` empty tiles.
    ///
    /// Panics if `dimension` is negative or above
    /// [`PositionFactory::MAX_DIMENSION`].
    pub fn new(dimension: i32) -> Self {
        let size = usize::try_from(PositionFactory::new(dimension).dimension())
            .expect("The dimension needs to be positive");
        Self {
            dimension,
            tiles: vec![BoardTile::Empty; size * size],
        }
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// The terrain at `pos`, or `None` if `pos` is not on this board.
    pub fn at(&self, pos: impl Into<TilePos>) -> Option<BoardTile> {
        let pos = pos.into().board_pos()?;
        self.index(pos.i(), pos.j()).map(|idx| self.tiles[idx])
    }

    /// Returns a copy of this board with some tiles replaced.
    ///
    /// Panics if a position is not on this board.
    pub fn with_tiles(&self, ats: &[TileAt]) -> Board {
        let mut tiles = self.tiles.clone();
        for at in ats {
            let idx = self
                .index(at.pos.i(), at.pos.j())
                .unwrap_or_else(|| panic!("{} is not on the board", at.pos));
            tiles[idx] = at.tile;
        }
        Board {
            dimension: self.dimension,
            tiles,
        }
    }

    pub fn position_factory(&self) -> PositionFactory {
        PositionFactory::new(self.dimension)
    }

    fn index(&self, i: i32, j: i32) -> Option<usize> {
        let range = 0..self.dimension;
        (range.contains(&i) && range.contains(&j)).then(|| (i * self.dimension + j) as usize)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Rows on the outside, columns on the inside.
        let tiles: Vec<BoardTile> = (0..self.dimension)
            .flat_map(|j| (0..self.dimension).map(move |i| (i, j)))
            .filter_map(|(i, j)| self.index(i, j).map(|idx| self.tiles[idx]))
            .collect();
        let mut state = serializer.serialize_struct("Board", 2)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.serialize_field("tiles", &tiles)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_board() {
        let board = Board::new(PositionFactory::MAX_DIMENSION);
        let factory = board.position_factory();
        assert_eq!(board.at(factory.pos_at('z', 26)), Some(BoardTile::Empty));
        assert!(serde_json::to_string(&board).is_ok());
    }

    #[test]
    #[should_panic]
    fn board_above_max_dimension_panics() {
        Board::new(PositionFactory::MAX_DIMENSION + 1);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(3);
        for pos in board.position_factory().positions() {
            assert_eq!(board.at(pos), Some(BoardTile::Empty));
        }
        assert_eq!(board.at(TilePos::OffBoard), None);
        assert_eq!(board.at(BoardPos::new(5, 4, 0)), None);
    }

    #[test]
    fn with_tiles_copies() {
        let board = Board::new(4);
        let factory = board.position_factory();
        let mountains = board.with_tiles(&[
            TileAt::new(factory.pos_at('b', 2), BoardTile::Mountain),
            TileAt::new(factory.pos_at('d', 4), BoardTile::Mountain),
        ]);
        assert_eq!(mountains.at(factory.pos_at('b', 2)), Some(BoardTile::Mountain));
        assert_eq!(mountains.at(factory.pos_at('d', 4)), Some(BoardTile::Mountain));
        assert_eq!(mountains.at(factory.pos_at('a', 2)), Some(BoardTile::Empty));
        // The original board is untouched
        assert_eq!(board.at(factory.pos_at('b', 2)), Some(BoardTile::Empty));
        assert_eq!(board, Board::new(4));
    }

    #[test]
    fn serialize_rows_first() {
        let board = Board::new(2);
        let factory = board.position_factory();
        let board = board.with_tiles(&[TileAt::new(factory.pos_at('b', 1), BoardTile::Mountain)]);
        assert_eq!(
            serde_json::to_string(&board).unwrap(),
            r#"{"dimension":2,"tiles":["empty","mountain","empty","empty"]}"#
        );
    }
}
