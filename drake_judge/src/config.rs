use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use serde::Deserialize;
use thedrake::{
    Army, Board, BoardTile, GameState, Offset2D, PlayingSide, PositionFactory, TileAt, Troop,
    TroopAction,
};

/// The starting position of a game, as read from a JSON setup file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    pub dimension: i32,
    /// Labels of the mountain tiles, e.g. `"c3"`.
    #[serde(default)]
    pub mountains: Vec<String>,
    pub troops: Vec<TroopConfig>,
    /// Troop names, the first one is the leader.
    pub blue: Vec<String>,
    pub orange: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TroopConfig {
    pub name: String,
    pub avers_pivot: Option<[i32; 2]>,
    pub revers_pivot: Option<[i32; 2]>,
    #[serde(default)]
    pub avers: Vec<ActionConfig>,
    #[serde(default)]
    pub revers: Vec<ActionConfig>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionConfig {
    pub kind: ActionKind,
    pub offset: [i32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Shift,
    Slide,
    Strike,
}

impl ActionConfig {
    fn to_action(self) -> TroopAction {
        let [x, y] = self.offset;
        let offset = Offset2D::new(x, y);
        match self.kind {
            ActionKind::Shift => TroopAction::Shift(offset),
            ActionKind::Slide => TroopAction::Slide(offset),
            ActionKind::Strike => TroopAction::Strike(offset),
        }
    }
}

impl TroopConfig {
    fn build(&self) -> Troop {
        let pivot = |p: Option<[i32; 2]>| p.map_or(Troop::DEFAULT_PIVOT, |[x, y]| Offset2D::new(x, y));
        Troop::new(
            self.name.as_str(),
            pivot(self.avers_pivot),
            pivot(self.revers_pivot),
            self.avers.iter().map(|a| a.to_action()).collect(),
            self.revers.iter().map(|a| a.to_action()).collect(),
        )
    }
}

impl SetupConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read setup file '{}'", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid setup file '{}'", path.display()))
    }

    pub fn parse(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Creates the initial game state: empty armies, blue on turn.
    pub fn build(&self) -> anyhow::Result<GameState> {
        if !(2..=PositionFactory::MAX_DIMENSION).contains(&self.dimension) {
            bail!(
                "The board dimension must be between 2 and {}, got {}",
                PositionFactory::MAX_DIMENSION,
                self.dimension
            );
        }
        let factory = PositionFactory::new(self.dimension);

        let mountains = self
            .mountains
            .iter()
            .map(|label| {
                let pos = factory
                    .parse(label)
                    .with_context(|| format!("Invalid mountain position '{}'", label))?;
                Ok(TileAt::new(pos, BoardTile::Mountain))
            })
            .collect::<anyhow::Result<Vec<TileAt>>>()?;
        let board = Board::new(self.dimension).with_tiles(&mountains);

        let mut troops: HashMap<&str, Arc<Troop>> = HashMap::new();
        for troop in &self.troops {
            if troops.insert(&troop.name, Arc::new(troop.build())).is_some() {
                bail!("Troop '{}' is defined twice", troop.name);
            }
        }

        let blue = self.army(PlayingSide::Blue, &self.blue, &troops)?;
        let orange = self.army(PlayingSide::Orange, &self.orange, &troops)?;
        Ok(GameState::new(board, blue, orange))
    }

    fn army(
        &self,
        side: PlayingSide,
        names: &[String],
        troops: &HashMap<&str, Arc<Troop>>,
    ) -> anyhow::Result<Army> {
        if names.is_empty() {
            bail!("The {} stack is empty", side);
        }
        let stack = names
            .iter()
            .map(|name| match troops.get(name.as_str()) {
                Some(troop) => Ok(Arc::clone(troop)),
                None => bail!("Unknown troop '{}' in the {} stack", name, side),
            })
            .collect::<anyhow::Result<Vec<Arc<Troop>>>>()?;
        Ok(Army::new(side, stack))
    }
}
