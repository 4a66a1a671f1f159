use std::sync::Arc;

use crate::{Army, Board, BoardPos, GameState, Offset2D, PlayingSide, Troop, TroopAction, ValidMoves};

impl quickcheck::Arbitrary for BoardPos {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let dimension = i32::from(u8::arbitrary(g) % 12) + 1;
        let i = i32::from(u8::arbitrary(g)) % dimension;
        let j = i32::from(u8::arbitrary(g)) % dimension;
        BoardPos::new(dimension, i, j)
    }
}

fn orthogonal(action: fn(Offset2D) -> TroopAction) -> Vec<TroopAction> {
    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .into_iter()
        .map(|(x, y)| action(Offset2D::new(x, y)))
        .collect()
}

fn diagonal(action: fn(Offset2D) -> TroopAction) -> Vec<TroopAction> {
    [(1, 1), (-1, 1), (1, -1), (-1, -1)]
        .into_iter()
        .map(|(x, y)| action(Offset2D::new(x, y)))
        .collect()
}

/// A small mix of troops exercising every kind of action.
pub fn test_troops() -> Vec<Arc<Troop>> {
    let drake = Troop::with_default_pivot(
        "Drake",
        vec![
            TroopAction::Slide(Offset2D::new(1, 0)),
            TroopAction::Slide(Offset2D::new(-1, 0)),
        ],
        vec![
            TroopAction::Slide(Offset2D::new(0, 1)),
            TroopAction::Slide(Offset2D::new(0, -1)),
        ],
    );
    let clubman = Troop::with_default_pivot(
        "Clubman",
        orthogonal(TroopAction::Shift),
        diagonal(TroopAction::Shift),
    );
    let monk = Troop::with_default_pivot(
        "Monk",
        diagonal(TroopAction::Slide),
        orthogonal(TroopAction::Shift),
    );
    let spearman = Troop::with_pivot(
        "Spearman",
        Offset2D::new(1, 2),
        vec![
            TroopAction::Shift(Offset2D::new(0, 1)),
            TroopAction::Strike(Offset2D::new(-1, 2)),
            TroopAction::Strike(Offset2D::new(1, 2)),
        ],
        vec![
            TroopAction::Shift(Offset2D::new(1, 1)),
            TroopAction::Shift(Offset2D::new(-1, 1)),
            TroopAction::Shift(Offset2D::new(0, -1)),
        ],
    );
    [drake, clubman, monk, spearman]
        .into_iter()
        .map(Arc::new)
        .collect()
}

/// A fresh game on an empty board where both sides hold [`test_troops()`].
pub fn drake_setup(dimension: i32) -> GameState {
    let troops = test_troops();
    GameState::new(
        Board::new(dimension),
        Army::new(PlayingSide::Blue, troops.clone()),
        Army::new(PlayingSide::Orange, troops),
    )
}

/// A fresh 4x4 game with one drake per side. The drake slides forward on its
/// avers face and strikes diagonally forward on its revers face.
pub fn single_drake_setup() -> GameState {
    let drake = Arc::new(Troop::with_default_pivot(
        "Drake",
        vec![TroopAction::Slide(Offset2D::new(0, 1))],
        vec![TroopAction::Strike(Offset2D::new(1, 1))],
    ));
    GameState::new(
        Board::new(4),
        Army::new(PlayingSide::Blue, vec![Arc::clone(&drake)]),
        Army::new(PlayingSide::Orange, vec![drake]),
    )
}

/// Plays one valid move per choice, stopping early when no move is left.
///
/// The returned states start with `initial`.
pub fn play_random_moves(initial: GameState, choices: &[u16]) -> Vec<GameState> {
    let mut states = vec![initial];
    for &choice in choices {
        let state = states.last().unwrap();
        let moves = ValidMoves::new(state).all_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[usize::from(choice) % moves.len()];
        let next = mv.execute(state).unwrap();
        states.push(next);
    }
    states
}
