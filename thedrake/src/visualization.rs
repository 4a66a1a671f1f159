use crate::{BoardTile, GameState, PlayingSide, Tile};

/// Draws the board with the highest row on top.
///
/// Troops are shown by the first letter of their name, uppercase for blue and
/// lowercase for orange. Empty tiles are `.`, mountains `^`.
pub fn visualize(state: &GameState) -> String {
    let factory = state.board().position_factory();
    let dimension = factory.dimension();

    // Draw the top of the box
    let mut result = String::from("     ");
    for i in 0..dimension {
        result += &format!("{} ", column_letter(i));
    }
    result += "\n    ╭";
    for _ in 0..dimension {
        result += "──";
    }
    result += "─╮\n";

    for j in (0..dimension).rev() {
        result += &format!("{:>3} │ ", j + 1);
        for i in 0..dimension {
            let symbol = match state.tile_at(factory.pos(i, j)) {
                Some(Tile::Troop(tile)) => troop_symbol(tile.troop().name(), tile.side()),
                Some(Tile::Board(BoardTile::Mountain)) => '^',
                Some(Tile::Board(BoardTile::Empty)) | None => '.',
            };
            result.push(symbol);
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..dimension {
        result += "──";
    }
    result += "─╯";
    result
}

fn column_letter(i: i32) -> char {
    char::from_u32('a' as u32 + i as u32).unwrap_or('?')
}

fn troop_symbol(name: &str, side: PlayingSide) -> char {
    let initial = name.chars().next().unwrap_or('?');
    match side {
        PlayingSide::Blue => initial.to_ascii_uppercase(),
        PlayingSide::Orange => initial.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::drake_setup;
    use crate::{BoardTile, TileAt};

    #[test]
    fn draws_troops_and_mountains() {
        let state = drake_setup(3);
        let factory = state.board().position_factory();
        let state = state
            .place_from_stack(factory.pos_at('a', 1))
            .unwrap()
            .place_from_stack(factory.pos_at('c', 3))
            .unwrap();
        let board = state
            .board()
            .with_tiles(&[TileAt::new(factory.pos_at('b', 2), BoardTile::Mountain)]);
        let state = GameState::new(
            board,
            state.army(PlayingSide::Blue).clone(),
            state.army(PlayingSide::Orange).clone(),
        );
        assert_eq!(
            visualize(&state),
            [
                "     a b c ",
                "    ╭───────╮",
                "  3 │ . . d │",
                "  2 │ . ^ . │",
                "  1 │ D . . │",
                "    ╰───────╯",
            ]
            .join("\n")
        );
    }
}
