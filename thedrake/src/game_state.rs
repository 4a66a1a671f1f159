use std::sync::Arc;

use serde::Serialize;

use crate::{Army, Board, BoardPos, IllegalAction, PlayingSide, Tile, TilePos, Troop};

/// Whether the game is still going, and if not, how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    Victory,
    Draw,
    InPlay,
}

/// The complete state of a game.
///
/// Game states are never modified. Every action returns a new state, so older
/// states stay valid and can be kept around, e.g. for history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    result: GameResult,
    board: Arc<Board>,
    blue_army: Army,
    orange_army: Army,
    #[serde(skip)]
    side_on_turn: PlayingSide,
}

// !!!!!! NOTE: Keep `can_*` in sync with the transitions below !!!!!!
impl GameState {
    /// A fresh game, with blue on turn.
    pub fn new(board: Board, blue_army: Army, orange_army: Army) -> Self {
        Self::from_parts(
            Arc::new(board),
            blue_army,
            orange_army,
            PlayingSide::Blue,
            GameResult::InPlay,
        )
    }

    pub fn from_parts(
        board: Arc<Board>,
        blue_army: Army,
        orange_army: Army,
        side_on_turn: PlayingSide,
        result: GameResult,
    ) -> Self {
        debug_assert_eq!(blue_army.side(), PlayingSide::Blue);
        debug_assert_eq!(orange_army.side(), PlayingSide::Orange);
        Self {
            result,
            board,
            blue_army,
            orange_army,
            side_on_turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_on_turn(&self) -> PlayingSide {
        self.side_on_turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn army(&self, side: PlayingSide) -> &Army {
        match side {
            PlayingSide::Blue => &self.blue_army,
            PlayingSide::Orange => &self.orange_army,
        }
    }

    pub fn army_on_turn(&self) -> &Army {
        self.army(self.side_on_turn)
    }

    pub fn army_not_on_turn(&self) -> &Army {
        self.army(self.side_on_turn.opponent())
    }

    /// The troop on `pos` if there is one, otherwise the terrain.
    ///
    /// `None` if `pos` is not on the board.
    pub fn tile_at(&self, pos: impl Into<TilePos>) -> Option<Tile> {
        let pos = pos.into();
        let troop = self
            .orange_army
            .board_troops()
            .at(pos)
            .or_else(|| self.blue_army.board_troops().at(pos));
        match troop {
            Some(tile) => Some(Tile::Troop(tile.clone())),
            None => self.board.at(pos).map(Tile::Board),
        }
    }

    /// The side that won, once the result is a [`GameResult::Victory`].
    ///
    /// After a capture the winner is the only side that still has its leader.
    /// After a resignation both leaders may still stand, and the winner is the
    /// side on turn, since resigning passes the turn.
    pub fn winner(&self) -> Option<PlayingSide> {
        if self.result != GameResult::Victory {
            return None;
        }
        let blue_leader = self.blue_army.board_troops().is_leader_placed();
        let orange_leader = self.orange_army.board_troops().is_leader_placed();
        match (blue_leader, orange_leader) {
            (true, false) => Some(PlayingSide::Blue),
            (false, true) => Some(PlayingSide::Orange),
            _ => Some(self.side_on_turn),
        }
    }

    fn in_play(&self) -> bool {
        self.result == GameResult::InPlay
    }

    /// Nobody moves while either side is still placing guards.
    fn can_step_from(&self, origin: TilePos) -> bool {
        if !self.in_play()
            || origin.is_off_board()
            || self.blue_army.board_troops().is_placing_guards()
            || self.orange_army.board_troops().is_placing_guards()
        {
            return false;
        }
        self.army_on_turn().board_troops().at(origin).is_some()
    }

    fn can_step_to(&self, target: TilePos) -> bool {
        self.in_play()
            && self
                .tile_at(target)
                .map_or(false, |tile| tile.can_step_on())
    }

    fn can_capture_on(&self, target: TilePos) -> bool {
        self.in_play() && self.army_not_on_turn().board_troops().at(target).is_some()
    }

    pub fn can_step(&self, origin: impl Into<TilePos>, target: impl Into<TilePos>) -> bool {
        self.can_step_from(origin.into()) && self.can_step_to(target.into())
    }

    pub fn can_capture(&self, origin: impl Into<TilePos>, target: impl Into<TilePos>) -> bool {
        self.can_step_from(origin.into()) && self.can_capture_on(target.into())
    }

    /// Can the side on turn put its next stack troop on `target`?
    ///
    /// The leader goes on the side's home row, the guards next to the leader,
    /// and every later troop next to any troop of the same side.
    pub fn can_place_from_stack(&self, target: impl Into<TilePos>) -> bool {
        let target = target.into();
        let Some(pos) = target.board_pos() else {
            return false;
        };
        let army = self.army_on_turn();
        if !self.in_play() || army.stack().is_empty() || !self.can_step_to(target) {
            return false;
        }

        let troops = army.board_troops();
        if !troops.is_leader_placed() {
            pos.row() == self.home_row(self.side_on_turn)
        } else if troops.is_placing_guards() {
            pos.is_next_to(troops.leader_position())
        } else {
            pos.neighbours()
                .into_iter()
                .any(|neighbour| troops.at(neighbour).is_some())
        }
    }

    /// The 1-based row on which `side` places its leader.
    pub fn home_row(&self, side: PlayingSide) -> i32 {
        match side {
            PlayingSide::Blue => 1,
            PlayingSide::Orange => self.board.dimension(),
        }
    }

    /// Moves a troop of the side on turn to an empty square.
    pub fn step_only(&self, origin: BoardPos, target: BoardPos) -> Result<GameState, IllegalAction> {
        if !self.can_step(origin, target) {
            return Err(IllegalAction::CannotStep { origin, target });
        }
        Ok(self.create_new_game_state(
            self.army_not_on_turn().clone(),
            self.army_on_turn().troop_step(origin, target)?,
            GameResult::InPlay,
        ))
    }

    /// Moves a troop of the side on turn onto an enemy troop, capturing it.
    pub fn step_and_capture(
        &self,
        origin: BoardPos,
        target: BoardPos,
    ) -> Result<GameState, IllegalAction> {
        if !self.can_capture(origin, target) {
            return Err(IllegalAction::CannotCapture { origin, target });
        }
        let (opponent, captured, result) = self.capture_on(target)?;
        let mover = self.army_on_turn().troop_step(origin, target)?;
        Ok(self.create_new_game_state(opponent, mover.capture(captured), result))
    }

    /// Captures the enemy troop on `target`; the troop on `origin` stays
    /// where it is and is flipped.
    pub fn capture_only(
        &self,
        origin: BoardPos,
        target: BoardPos,
    ) -> Result<GameState, IllegalAction> {
        if !self.can_capture(origin, target) {
            return Err(IllegalAction::CannotCapture { origin, target });
        }
        let (opponent, captured, result) = self.capture_on(target)?;
        let mover = self.army_on_turn().troop_flip(origin)?;
        Ok(self.create_new_game_state(opponent, mover.capture(captured), result))
    }

    pub fn place_from_stack(&self, target: BoardPos) -> Result<GameState, IllegalAction> {
        if !self.can_place_from_stack(target) {
            return Err(IllegalAction::CannotPlace { target });
        }
        Ok(self.create_new_game_state(
            self.army_not_on_turn().clone(),
            self.army_on_turn().place_from_stack(target)?,
            GameResult::InPlay,
        ))
    }

    /// The side on turn gives up. The turn passes to the winner.
    pub fn resign(&self) -> GameState {
        self.create_new_game_state(
            self.army_not_on_turn().clone(),
            self.army_on_turn().clone(),
            GameResult::Victory,
        )
    }

    /// The game ends in a draw. The turn stays where it is.
    pub fn draw(&self) -> GameState {
        self.create_new_game_state(
            self.army_on_turn().clone(),
            self.army_not_on_turn().clone(),
            GameResult::Draw,
        )
    }

    // Removes the opponent's troop on `target`, returning the opponent's new
    // army, the troop taken and the resulting game result.
    fn capture_on(
        &self,
        target: BoardPos,
    ) -> Result<(Army, Arc<Troop>, GameResult), IllegalAction> {
        let opponent = self.army_not_on_turn();
        let captured = opponent
            .board_troops()
            .at(target)
            .ok_or(IllegalAction::EmptyPosition { pos: target })?
            .troop()
            .clone();
        let result = if opponent.board_troops().leader_position() == target {
            GameResult::Victory
        } else {
            GameResult::InPlay
        };
        Ok((opponent.remove_troop(target)?, captured, result))
    }

    // `army_on_turn` is the army of the side on turn in the new state.
    fn create_new_game_state(
        &self,
        army_on_turn: Army,
        army_not_on_turn: Army,
        result: GameResult,
    ) -> GameState {
        let side_on_turn = army_on_turn.side();
        let (blue_army, orange_army) = match side_on_turn {
            PlayingSide::Blue => (army_on_turn, army_not_on_turn),
            PlayingSide::Orange => (army_not_on_turn, army_on_turn),
        };
        GameState {
            result,
            board: Arc::clone(&self.board),
            blue_army,
            orange_army,
            side_on_turn,
        }
    }
}
