use serde::{Serialize, Serializer};

use crate::{Offset2D, TroopAction};

/// The two faces of a troop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TroopFace {
    /// The front face. Troops are placed with this face up.
    Avers,
    Revers,
}

impl TroopFace {
    pub fn flipped(self) -> Self {
        match self {
            TroopFace::Avers => TroopFace::Revers,
            TroopFace::Revers => TroopFace::Avers,
        }
    }
}

/// The definition of a kind of troop.
///
/// Troops are immutable and shared behind an `Arc` by every tile that shows
/// them, and by the stacks and captured lists of the armies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Troop {
    name: String,
    avers_pivot: Offset2D,
    revers_pivot: Offset2D,
    avers_actions: Vec<TroopAction>,
    revers_actions: Vec<TroopAction>,
}

impl Troop {
    pub const DEFAULT_PIVOT: Offset2D = Offset2D::new(1, 1);

    pub fn new(
        name: impl Into<String>,
        avers_pivot: Offset2D,
        revers_pivot: Offset2D,
        avers_actions: Vec<TroopAction>,
        revers_actions: Vec<TroopAction>,
    ) -> Self {
        Self {
            name: name.into(),
            avers_pivot,
            revers_pivot,
            avers_actions,
            revers_actions,
        }
    }

    /// A troop with the same pivot on both faces.
    pub fn with_pivot(
        name: impl Into<String>,
        pivot: Offset2D,
        avers_actions: Vec<TroopAction>,
        revers_actions: Vec<TroopAction>,
    ) -> Self {
        Self::new(name, pivot, pivot, avers_actions, revers_actions)
    }

    /// A troop pivoting around [`Troop::DEFAULT_PIVOT`] on both faces.
    pub fn with_default_pivot(
        name: impl Into<String>,
        avers_actions: Vec<TroopAction>,
        revers_actions: Vec<TroopAction>,
    ) -> Self {
        Self::with_pivot(name, Self::DEFAULT_PIVOT, avers_actions, revers_actions)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pivot(&self, face: TroopFace) -> Offset2D {
        match face {
            TroopFace::Avers => self.avers_pivot,
            TroopFace::Revers => self.revers_pivot,
        }
    }

    /// The move strategies available with `face` up, in evaluation order.
    pub fn actions(&self, face: TroopFace) -> &[TroopAction] {
        match face {
            TroopFace::Avers => &self.avers_actions,
            TroopFace::Revers => &self.revers_actions,
        }
    }
}

impl Serialize for Troop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_select_actions() {
        let troop = Troop::new(
            "Archer",
            Offset2D::new(1, 1),
            Offset2D::new(1, 2),
            vec![TroopAction::Slide(Offset2D::new(0, 1))],
            vec![
                TroopAction::Strike(Offset2D::new(2, 0)),
                TroopAction::Shift(Offset2D::new(0, -1)),
            ],
        );
        assert_eq!(troop.actions(TroopFace::Avers).len(), 1);
        assert_eq!(troop.actions(TroopFace::Revers).len(), 2);
        assert_eq!(troop.pivot(TroopFace::Revers), Offset2D::new(1, 2));
        assert_eq!(
            Troop::with_default_pivot("Drake", vec![], vec![]).pivot(TroopFace::Avers),
            Offset2D::new(1, 1)
        );
        assert_eq!(serde_json::to_string(&troop).unwrap(), "\"Archer\"");
    }

    #[test]
    fn flip_twice() {
        assert_eq!(TroopFace::Avers.flipped(), TroopFace::Revers);
        assert_eq!(TroopFace::Avers.flipped().flipped(), TroopFace::Avers);
    }
}
