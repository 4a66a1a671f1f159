use crate::BoardPos;

/// Creates [`BoardPos`] values for a board of one dimension, and parses
/// position labels like `"c4"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionFactory {
    dimension: i32,
}

/// The error type for [`PositionFactory::parse()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePositionError {
    Empty,
    InvalidColumn(char),
    InvalidRow(String),
    OutOfBounds { label: String, dimension: i32 },
}

impl std::error::Error for ParsePositionError {}

impl std::fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePositionError::Empty => write!(f, "Position label is empty"),
            ParsePositionError::InvalidColumn(c) => {
                write!(f, "'{}' is not a column letter", c)
            }
            ParsePositionError::InvalidRow(row) => write!(f, "'{}' is not a row number", row),
            ParsePositionError::OutOfBounds { label, dimension } => write!(
                f,
                "Position {} is outside of a board with dimension {}",
                label, dimension
            ),
        }
    }
}

impl PositionFactory {
    /// The largest dimension whose columns can all be labeled `'a'..='z'`.
    pub const MAX_DIMENSION: i32 = 26;

    /// Panics if `dimension` is negative or above [`Self::MAX_DIMENSION`].
    pub fn new(dimension: i32) -> Self {
        assert!(
            (0..=Self::MAX_DIMENSION).contains(&dimension),
            "The dimension needs to be between 0 and {}, got {}",
            Self::MAX_DIMENSION,
            dimension
        );
        Self { dimension }
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Returns `None` if `(i, j)` is not on the board.
    pub fn try_pos(&self, i: i32, j: i32) -> Option<BoardPos> {
        let range = 0..self.dimension;
        (range.contains(&i) && range.contains(&j)).then(|| BoardPos::new(self.dimension, i, j))
    }

    /// Panics if `(i, j)` is not on the board.
    pub fn pos(&self, i: i32, j: i32) -> BoardPos {
        self.try_pos(i, j).unwrap_or_else(|| {
            panic!(
                "({}, {}) is outside of a board with dimension {}",
                i, j, self.dimension
            )
        })
    }

    /// The position in `column` (`'a'` is the first) and 1-based `row`.
    ///
    /// Panics if it is not on the board.
    pub fn pos_at(&self, column: char, row: i32) -> BoardPos {
        self.pos(i_from_column(column), row - 1)
    }

    /// Parses a label such as `"a1"` or `"c11"`.
    ///
    /// Only the form produced by `Display` is accepted: the row is a plain
    /// decimal number without sign or leading zeros.
    pub fn parse(&self, label: &str) -> Result<BoardPos, ParsePositionError> {
        let mut chars = label.chars();
        let column = chars.next().ok_or(ParsePositionError::Empty)?;
        if !column.is_ascii_lowercase() {
            return Err(ParsePositionError::InvalidColumn(column));
        }
        let row_str = chars.as_str();
        let invalid_row = || ParsePositionError::InvalidRow(String::from(row_str));
        if !row_str.bytes().all(|b| b.is_ascii_digit()) || row_str.starts_with('0') {
            return Err(invalid_row());
        }
        let row: i32 = row_str.parse().map_err(|_| invalid_row())?;
        row.checked_sub(1)
            .and_then(|j| self.try_pos(i_from_column(column), j))
            .ok_or_else(|| ParsePositionError::OutOfBounds {
                label: String::from(label),
                dimension: self.dimension,
            })
    }

    /// Every position on the board, row by row starting at row 1.
    pub fn positions(&self) -> impl Iterator<Item = BoardPos> + '_ {
        (0..self.dimension)
            .flat_map(move |j| (0..self.dimension).map(move |i| BoardPos::new(self.dimension, i, j)))
    }
}

fn i_from_column(column: char) -> i32 {
    column as i32 - 'a' as i32
}
