use serde::Serialize;

/// The two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayingSide {
    Orange,
    /// Blue moves first, and piece offsets are written from its point of view.
    Blue,
}

impl PlayingSide {
    pub fn opponent(self) -> Self {
        match self {
            PlayingSide::Orange => PlayingSide::Blue,
            PlayingSide::Blue => PlayingSide::Orange,
        }
    }
}

impl std::fmt::Display for PlayingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayingSide::Orange => write!(f, "orange"),
            PlayingSide::Blue => write!(f, "blue"),
        }
    }
}
