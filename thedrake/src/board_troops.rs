use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::{BoardPos, IllegalAction, PlayingSide, TilePos, Troop, TroopFace, TroopTile};

/// Where a side is in the opening placement sequence.
///
/// This is derived from the leader position and the guard count, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementPhase {
    /// The next troop placed becomes the leader.
    NoLeader,
    /// The next troops placed are guards next to the leader.
    PlacingGuards,
    /// Troops may move.
    Open,
}

/// The troops of one side that stand on the board.
///
/// All operations return a new value and leave the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardTroops {
    playing_side: PlayingSide,
    troop_map: BTreeMap<BoardPos, TroopTile>,
    leader_position: TilePos,
    guards: u8,
    /// How many guards must be placed before the side is open. Normally
    /// [`BoardTroops::GUARDS`], fewer for armies too small to field them.
    required_guards: u8,
}

impl BoardTroops {
    /// The number of guards placed next to the leader in a regular game.
    pub const GUARDS: u8 = 2;

    pub fn new(playing_side: PlayingSide) -> Self {
        Self::with_required_guards(playing_side, Self::GUARDS)
    }

    /// Like [`BoardTroops::new()`], for a side that places fewer guards.
    ///
    /// `required_guards` is capped at [`BoardTroops::GUARDS`].
    pub fn with_required_guards(playing_side: PlayingSide, required_guards: u8) -> Self {
        Self {
            playing_side,
            troop_map: BTreeMap::new(),
            leader_position: TilePos::OffBoard,
            guards: 0,
            required_guards: required_guards.min(Self::GUARDS),
        }
    }

    pub fn at(&self, pos: impl Into<TilePos>) -> Option<&TroopTile> {
        self.troop_map.get(&pos.into().board_pos()?)
    }

    pub fn playing_side(&self) -> PlayingSide {
        self.playing_side
    }

    pub fn leader_position(&self) -> TilePos {
        self.leader_position
    }

    pub fn guards(&self) -> u8 {
        self.guards
    }

    pub fn required_guards(&self) -> u8 {
        self.required_guards
    }

    pub fn is_leader_placed(&self) -> bool {
        !self.leader_position.is_off_board()
    }

    pub fn is_placing_guards(&self) -> bool {
        self.is_leader_placed() && self.guards < self.required_guards
    }

    pub fn phase(&self) -> PlacementPhase {
        if !self.is_leader_placed() {
            PlacementPhase::NoLeader
        } else if self.is_placing_guards() {
            PlacementPhase::PlacingGuards
        } else {
            PlacementPhase::Open
        }
    }

    /// The occupied positions, in `(column, row)` order.
    pub fn troop_positions(&self) -> impl Iterator<Item = BoardPos> + '_ {
        self.troop_map.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoardPos, &TroopTile)> + '_ {
        self.troop_map.iter().map(|(&pos, tile)| (pos, tile))
    }

    pub fn len(&self) -> usize {
        self.troop_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.troop_map.is_empty()
    }

    /// Puts `troop` on `target`, face up.
    ///
    /// The first troop placed becomes the leader, the ones placed while
    /// [placing guards](PlacementPhase::PlacingGuards) count as guards.
    pub fn place_troop(&self, troop: Arc<Troop>, target: BoardPos) -> Result<Self, IllegalAction> {
        if self.troop_map.contains_key(&target) {
            return Err(IllegalAction::OccupiedPosition { pos: target });
        }

        let mut troop_map = self.troop_map.clone();
        troop_map.insert(
            target,
            TroopTile::new(troop, self.playing_side, TroopFace::Avers),
        );

        let (leader_position, guards) = match self.phase() {
            PlacementPhase::NoLeader => (TilePos::OnBoard(target), self.guards),
            PlacementPhase::PlacingGuards => (self.leader_position, self.guards + 1),
            PlacementPhase::Open => (self.leader_position, self.guards),
        };

        Ok(Self {
            troop_map,
            leader_position,
            guards,
            ..*self
        })
    }

    /// Moves the troop on `origin` to `target` and flips it.
    pub fn troop_step(&self, origin: BoardPos, target: BoardPos) -> Result<Self, IllegalAction> {
        self.check_open()?;
        if !self.troop_map.contains_key(&origin) {
            return Err(IllegalAction::EmptyPosition { pos: origin });
        }
        if self.troop_map.contains_key(&target) {
            return Err(IllegalAction::OccupiedPosition { pos: target });
        }

        let mut troop_map = self.troop_map.clone();
        if let Some(tile) = troop_map.remove(&origin) {
            troop_map.insert(target, tile.flipped());
        }

        let leader_position = if self.leader_position == origin {
            TilePos::OnBoard(target)
        } else {
            self.leader_position
        };

        Ok(Self {
            troop_map,
            leader_position,
            ..*self
        })
    }

    /// Flips the troop on `origin` without moving it.
    pub fn troop_flip(&self, origin: BoardPos) -> Result<Self, IllegalAction> {
        self.check_open()?;
        let flipped = self
            .troop_map
            .get(&origin)
            .ok_or(IllegalAction::EmptyPosition { pos: origin })?
            .flipped();

        let mut troop_map = self.troop_map.clone();
        troop_map.insert(origin, flipped);

        Ok(Self { troop_map, ..*self })
    }

    /// Takes the troop on `target` off the board.
    ///
    /// Removing the leader puts the leader position off the board.
    pub fn remove_troop(&self, target: BoardPos) -> Result<Self, IllegalAction> {
        self.check_open()?;
        if !self.troop_map.contains_key(&target) {
            return Err(IllegalAction::EmptyPosition { pos: target });
        }

        let mut troop_map = self.troop_map.clone();
        troop_map.remove(&target);

        let leader_position = if self.leader_position == target {
            TilePos::OffBoard
        } else {
            self.leader_position
        };

        Ok(Self {
            troop_map,
            leader_position,
            ..*self
        })
    }

    fn check_open(&self) -> Result<(), IllegalAction> {
        match self.phase() {
            PlacementPhase::NoLeader => Err(IllegalAction::LeaderNotPlaced),
            PlacementPhase::PlacingGuards => Err(IllegalAction::PlacingGuards),
            PlacementPhase::Open => Ok(()),
        }
    }
}

// Keyed by position label, sorted as strings ("a10" comes before "a2").
struct TroopMapByLabel<'a>(&'a BTreeMap<BoardPos, TroopTile>);

impl Serialize for TroopMapByLabel<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(String, &TroopTile)> = self
            .0
            .iter()
            .map(|(pos, tile)| (pos.to_string(), tile))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (label, tile) in entries {
            map.serialize_entry(&label, tile)?;
        }
        map.end()
    }
}

impl Serialize for BoardTroops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoardTroops", 4)?;
        state.serialize_field("side", &self.playing_side)?;
        state.serialize_field("leaderPosition", &self.leader_position)?;
        state.serialize_field("guards", &self.guards)?;
        state.serialize_field("troopMap", &TroopMapByLabel(&self.troop_map))?;
        state.end()
    }
}
