use std::sync::Arc;

use serde::Serialize;

use crate::{BoardPos, BoardTroops, IllegalAction, PlayingSide, TilePos, Troop};

/// Everything one side owns: the troops on the board, the stack of troops
/// still to be placed, and the enemy troops it captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Army {
    board_troops: BoardTroops,
    /// The first troop is the next one to be placed.
    stack: Vec<Arc<Troop>>,
    /// In the order they were captured.
    captured: Vec<Arc<Troop>>,
}

impl Army {
    /// An army with no troops on the board yet.
    ///
    /// The first troop of `stack` will be the leader. Normally two guards
    /// follow it; with fewer troops in the stack, only as many as there are.
    pub fn new(playing_side: PlayingSide, stack: Vec<Arc<Troop>>) -> Self {
        let available_guards = u8::try_from(stack.len().saturating_sub(1)).unwrap_or(u8::MAX);
        Self {
            board_troops: BoardTroops::with_required_guards(playing_side, available_guards),
            stack,
            captured: Vec::new(),
        }
    }

    pub fn from_parts(
        board_troops: BoardTroops,
        stack: Vec<Arc<Troop>>,
        captured: Vec<Arc<Troop>>,
    ) -> Self {
        Self {
            board_troops,
            stack,
            captured,
        }
    }

    pub fn side(&self) -> PlayingSide {
        self.board_troops.playing_side()
    }

    pub fn board_troops(&self) -> &BoardTroops {
        &self.board_troops
    }

    pub fn stack(&self) -> &[Arc<Troop>] {
        &self.stack
    }

    pub fn captured(&self) -> &[Arc<Troop>] {
        &self.captured
    }

    /// Places the first troop of the stack on `target`.
    pub fn place_from_stack(&self, target: impl Into<TilePos>) -> Result<Army, IllegalAction> {
        let target = target
            .into()
            .board_pos()
            .ok_or(IllegalAction::TargetOffBoard)?;
        let (next, rest) = self.stack.split_first().ok_or(IllegalAction::StackEmpty)?;
        if self.board_troops.at(target).is_some() {
            return Err(IllegalAction::PlacementOnOccupied { pos: target });
        }

        Ok(Army {
            board_troops: self.board_troops.place_troop(Arc::clone(next), target)?,
            stack: rest.to_vec(),
            captured: self.captured.clone(),
        })
    }

    pub fn troop_step(&self, origin: BoardPos, target: BoardPos) -> Result<Army, IllegalAction> {
        Ok(self.with_board_troops(self.board_troops.troop_step(origin, target)?))
    }

    pub fn troop_flip(&self, origin: BoardPos) -> Result<Army, IllegalAction> {
        Ok(self.with_board_troops(self.board_troops.troop_flip(origin)?))
    }

    pub fn remove_troop(&self, target: BoardPos) -> Result<Army, IllegalAction> {
        Ok(self.with_board_troops(self.board_troops.remove_troop(target)?))
    }

    /// Records an enemy troop this army has taken off the board.
    pub fn capture(&self, troop: Arc<Troop>) -> Army {
        let mut captured = self.captured.clone();
        captured.push(troop);
        Army {
            board_troops: self.board_troops.clone(),
            stack: self.stack.clone(),
            captured,
        }
    }

    fn with_board_troops(&self, board_troops: BoardTroops) -> Army {
        Army {
            board_troops,
            stack: self.stack.clone(),
            captured: self.captured.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, PlacementPhase, PositionFactory};

    fn troops(names: &[&str]) -> Vec<Arc<Troop>> {
        names
            .iter()
            .map(|name| Arc::new(Troop::with_default_pivot(*name, vec![], vec![])))
            .collect()
    }

    #[test]
    fn place_from_stack_in_order() {
        let factory = PositionFactory::new(4);
        let stack = troops(&["Drake", "Clubman", "Spearman", "Monk"]);
        let army = Army::new(PlayingSide::Blue, stack.clone());

        let army = army.place_from_stack(factory.pos_at('b', 1)).unwrap();
        assert_eq!(army.board_troops().leader_position(), factory.pos_at('b', 1));
        assert!(Arc::ptr_eq(
            army.board_troops().at(factory.pos_at('b', 1)).unwrap().troop(),
            &stack[0]
        ));
        assert_eq!(army.stack().len(), 3);
        assert!(Arc::ptr_eq(&army.stack()[0], &stack[1]));

        let army = army
            .place_from_stack(factory.pos_at('a', 1))
            .unwrap()
            .place_from_stack(factory.pos_at('c', 1))
            .unwrap();
        assert_eq!(army.board_troops().phase(), PlacementPhase::Open);
        assert_eq!(army.stack().len(), 1);
    }

    #[test]
    fn place_from_stack_errors() {
        let factory = PositionFactory::new(4);
        let army = Army::new(PlayingSide::Blue, troops(&["Drake", "Clubman"]));
        assert_eq!(
            army.place_from_stack(TilePos::OffBoard),
            Err(IllegalAction::TargetOffBoard)
        );
        assert_eq!(
            army.place_from_stack(TilePos::OffBoard).unwrap_err().kind(),
            ErrorKind::Argument
        );

        let army = army.place_from_stack(factory.pos_at('b', 1)).unwrap();
        let err = army.place_from_stack(factory.pos_at('b', 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);

        let army = army.place_from_stack(factory.pos_at('a', 1)).unwrap();
        assert_eq!(
            army.place_from_stack(factory.pos_at('c', 1)),
            Err(IllegalAction::StackEmpty)
        );
    }

    #[test]
    fn small_stacks_need_fewer_guards() {
        let factory = PositionFactory::new(4);
        let lone = Army::new(PlayingSide::Blue, troops(&["Drake"]))
            .place_from_stack(factory.pos_at('b', 1))
            .unwrap();
        assert_eq!(lone.board_troops().phase(), PlacementPhase::Open);

        let pair = Army::new(PlayingSide::Blue, troops(&["Drake", "Clubman"]))
            .place_from_stack(factory.pos_at('b', 1))
            .unwrap();
        assert_eq!(pair.board_troops().phase(), PlacementPhase::PlacingGuards);
        let pair = pair.place_from_stack(factory.pos_at('c', 1)).unwrap();
        assert_eq!(pair.board_troops().phase(), PlacementPhase::Open);
        assert_eq!(pair.board_troops().guards(), 1);
    }

    #[test]
    fn pass_through_keeps_stack_and_captured() {
        let factory = PositionFactory::new(4);
        let enemy = troops(&["Archer"]).remove(0);
        let army = Army::new(PlayingSide::Blue, troops(&["Drake", "Clubman", "Spearman", "Monk"]))
            .place_from_stack(factory.pos_at('b', 1))
            .unwrap()
            .place_from_stack(factory.pos_at('a', 1))
            .unwrap()
            .place_from_stack(factory.pos_at('c', 1))
            .unwrap()
            .capture(Arc::clone(&enemy));

        let stepped = army
            .troop_step(factory.pos_at('b', 1), factory.pos_at('b', 2))
            .unwrap();
        assert_eq!(stepped.stack(), army.stack());
        assert_eq!(stepped.captured(), army.captured());

        let flipped = stepped.troop_flip(factory.pos_at('a', 1)).unwrap();
        let removed = flipped.remove_troop(factory.pos_at('c', 1)).unwrap();
        assert_eq!(removed.board_troops().len(), 2);
        assert_eq!(removed.stack().len(), 1);
        assert!(Arc::ptr_eq(&removed.captured()[0], &enemy));
    }

    #[test]
    fn capture_appends() {
        let captured = troops(&["Archer", "Monk"]);
        let army = Army::new(PlayingSide::Orange, troops(&["Drake"]))
            .capture(Arc::clone(&captured[0]))
            .capture(Arc::clone(&captured[1]));
        let names: Vec<&str> = army.captured().iter().map(|troop| troop.name()).collect();
        assert_eq!(names, ["Archer", "Monk"]);
        assert_eq!(army.stack().len(), 1);
    }

    #[test]
    fn serialize() {
        let factory = PositionFactory::new(4);
        let army = Army::new(PlayingSide::Blue, troops(&["Drake", "Clubman"]))
            .place_from_stack(factory.pos_at('a', 1))
            .unwrap()
            .capture(troops(&["Monk"]).remove(0));
        assert_eq!(
            serde_json::to_string(&army).unwrap(),
            concat!(
                r#"{"boardTroops":{"side":"BLUE","leaderPosition":"a1","guards":0,"#,
                r#""troopMap":{"a1":{"troop":"Drake","side":"BLUE","face":"AVERS"}}},"#,
                r#""stack":["Clubman"],"captured":["Monk"]}"#
            )
        );
    }
}
