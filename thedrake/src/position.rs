use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::{OffBoardError, PlayingSide};

/// A signed displacement on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset2D {
    pub x: i32,
    pub y: i32,
}

impl Offset2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn equals_to(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    /// The same offset, mirrored along the row axis.
    pub fn y_flipped(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }
}

/// A position on a square board of a given dimension.
///
/// `i` is the column and `j` the row, both 0-based. The dimension only bounds
/// stepping; equality, hashing and ordering look at `(i, j)` alone.
#[derive(Clone, Copy, Debug)]
pub struct BoardPos {
    dimension: i32,
    i: i32,
    j: i32,
}

/// Either a position on the board, or the off-board sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TilePos {
    OnBoard(BoardPos),
    OffBoard,
}

impl BoardPos {
    /// Creates a position without checking it against the dimension.
    ///
    /// Prefer [`PositionFactory`](crate::PositionFactory), which does check.
    pub fn new(dimension: i32, i: i32, j: i32) -> Self {
        Self { dimension, i, j }
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn i(&self) -> i32 {
        self.i
    }

    pub fn j(&self) -> i32 {
        self.j
    }

    /// The column letter, `'a'` for the first column.
    ///
    /// `'?'` for columns without a letter, which only positions built with
    /// [`BoardPos::new()`] outside a checked dimension can have.
    pub fn column(&self) -> char {
        u8::try_from(i32::from(b'a') + self.i)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .map_or('?', char::from)
    }

    /// The 1-based row number.
    pub fn row(&self) -> i32 {
        self.j + 1
    }

    /// Moves by `(column_step, row_step)`, falling off the board if the
    /// result is outside `[0, dimension)` on either axis.
    pub fn step(&self, column_step: i32, row_step: i32) -> TilePos {
        let new_i = self.i + column_step;
        let new_j = self.j + row_step;
        if (0..self.dimension).contains(&new_i) && (0..self.dimension).contains(&new_j) {
            TilePos::OnBoard(BoardPos::new(self.dimension, new_i, new_j))
        } else {
            TilePos::OffBoard
        }
    }

    pub fn step_by(&self, offset: Offset2D) -> TilePos {
        self.step(offset.x, offset.y)
    }

    /// The orthogonally adjacent positions that are still on the board.
    pub fn neighbours(&self) -> Vec<BoardPos> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(|(di, dj)| self.step(di, dj).board_pos())
            .collect()
    }

    /// Does `pos` share a row or column with this position, one step away?
    pub fn is_next_to(&self, pos: TilePos) -> bool {
        match pos {
            TilePos::OnBoard(other) => {
                (self.i == other.i && (self.j - other.j).abs() == 1)
                    || (self.j == other.j && (self.i - other.i).abs() == 1)
            }
            TilePos::OffBoard => false,
        }
    }

    /// Steps by `offset` as seen from `side`.
    ///
    /// Offsets are written from the blue point of view; for orange the row
    /// component is mirrored, so "forward" means the same thing for both.
    pub fn step_by_playing_side(&self, offset: Offset2D, side: PlayingSide) -> TilePos {
        match side {
            PlayingSide::Blue => self.step_by(offset),
            PlayingSide::Orange => self.step_by(offset.y_flipped()),
        }
    }

    pub fn equals_to(&self, i: i32, j: i32) -> bool {
        self.i == i && self.j == j
    }
}

impl PartialEq for BoardPos {
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i && self.j == other.j
    }
}

impl Eq for BoardPos {}

impl Hash for BoardPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.i.hash(state);
        self.j.hash(state);
    }
}

impl PartialOrd for BoardPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoardPos {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.i, self.j).cmp(&(other.i, other.j))
    }
}

impl std::fmt::Display for BoardPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}

impl Serialize for BoardPos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Geometric operations on the sentinel fail with `OffBoardError`.
impl TilePos {
    pub fn board_pos(&self) -> Option<BoardPos> {
        match self {
            TilePos::OnBoard(pos) => Some(*pos),
            TilePos::OffBoard => None,
        }
    }

    pub fn is_off_board(&self) -> bool {
        matches!(self, TilePos::OffBoard)
    }

    pub fn i(&self) -> Result<i32, OffBoardError> {
        self.on_board().map(|pos| pos.i())
    }

    pub fn j(&self) -> Result<i32, OffBoardError> {
        self.on_board().map(|pos| pos.j())
    }

    pub fn column(&self) -> Result<char, OffBoardError> {
        self.on_board().map(|pos| pos.column())
    }

    pub fn row(&self) -> Result<i32, OffBoardError> {
        self.on_board().map(|pos| pos.row())
    }

    pub fn step(&self, offset: Offset2D) -> Result<TilePos, OffBoardError> {
        self.on_board().map(|pos| pos.step_by(offset))
    }

    pub fn neighbours(&self) -> Result<Vec<BoardPos>, OffBoardError> {
        self.on_board().map(|pos| pos.neighbours())
    }

    /// Fails for the sentinel itself; an on-board position is never next to
    /// the sentinel.
    pub fn is_next_to(&self, other: TilePos) -> Result<bool, OffBoardError> {
        self.on_board().map(|pos| pos.is_next_to(other))
    }

    pub fn step_by_playing_side(
        &self,
        offset: Offset2D,
        side: PlayingSide,
    ) -> Result<TilePos, OffBoardError> {
        self.on_board()
            .map(|pos| pos.step_by_playing_side(offset, side))
    }

    /// Never true for the sentinel.
    pub fn equals_to(&self, i: i32, j: i32) -> bool {
        match self {
            TilePos::OnBoard(pos) => pos.equals_to(i, j),
            TilePos::OffBoard => false,
        }
    }

    fn on_board(&self) -> Result<BoardPos, OffBoardError> {
        self.board_pos().ok_or(OffBoardError)
    }
}

impl From<BoardPos> for TilePos {
    fn from(pos: BoardPos) -> Self {
        TilePos::OnBoard(pos)
    }
}

impl PartialEq<BoardPos> for TilePos {
    fn eq(&self, other: &BoardPos) -> bool {
        self.board_pos().as_ref() == Some(other)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilePos::OnBoard(pos) => write!(f, "{}", pos),
            TilePos::OffBoard => write!(f, "off-board"),
        }
    }
}

impl Serialize for TilePos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
