use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thedrake::{visualize, GameResult, GameState, Move, PlayingSide, TilePos, ValidMoves};
use tracing::{debug, trace};

use crate::error::InvariantViolation;

#[derive(Debug)]
pub enum GameOutcome {
    Won {
        side: PlayingSide,
        by_resignation: bool,
    },
    /// The turn limit was reached. The final state is declared a draw.
    Unfinished,
    InvariantViolated {
        err: InvariantViolation,
    },
}

#[derive(Debug)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub outcome: GameOutcome,
}

/// Plays one game from `initial`, both sides picking uniformly among their
/// valid moves.
///
/// A side without any valid move resigns. After `max_turns` moves the game
/// is stopped.
pub fn play_game(rng: &mut StdRng, initial: &GameState, max_turns: usize) -> GameRecord {
    let mut state = initial.clone();
    let mut moves = Vec::new();

    let outcome = loop {
        if let Err(err) = check_invariants(&state) {
            break GameOutcome::InvariantViolated { err };
        }
        if state.result() != GameResult::InPlay {
            break won(&state, false);
        }
        if moves.len() >= max_turns {
            debug!(max_turns, "Turn limit reached");
            state = state.draw();
            break GameOutcome::Unfinished;
        }

        let valid_moves = ValidMoves::new(&state).all_moves();
        let Some(&mv) = valid_moves.choose(rng) else {
            debug!(side = %state.side_on_turn(), "No valid move, resigning");
            state = state.resign();
            break won(&state, true);
        };
        trace!(side = %state.side_on_turn(), %mv, num_choices = valid_moves.len());
        match mv.execute(&state) {
            Ok(next) => state = next,
            Err(err) => break GameOutcome::InvariantViolated {
                err: InvariantViolation::RejectedMove { mv, err },
            },
        }
        moves.push(mv);
        trace!("\n{}", visualize(&state));
    };

    GameRecord {
        moves,
        final_state: state,
        outcome,
    }
}

fn won(state: &GameState, by_resignation: bool) -> GameOutcome {
    match state.winner() {
        Some(side) => GameOutcome::Won {
            side,
            by_resignation,
        },
        None => GameOutcome::Unfinished,
    }
}

/// Checks the rules that must hold after every move.
pub fn check_invariants(state: &GameState) -> Result<(), InvariantViolation> {
    let blue = state.army(PlayingSide::Blue).board_troops();
    let orange = state.army(PlayingSide::Orange).board_troops();
    if let Some(pos) = blue.troop_positions().find(|&pos| orange.at(pos).is_some()) {
        return Err(InvariantViolation::OverlappingArmies { pos });
    }

    for side in [PlayingSide::Blue, PlayingSide::Orange] {
        let troops = state.army(side).board_troops();
        let leader = troops.leader_position();
        if leader != TilePos::OffBoard && troops.at(leader).map(|tile| tile.side()) != Some(side) {
            return Err(InvariantViolation::LeaderMissing { side });
        }
        if troops.guards() > troops.required_guards() {
            return Err(InvariantViolation::TooManyGuards {
                side,
                guards: troops.guards(),
            });
        }
    }
    Ok(())
}
