pub use actions::*;
pub use army::*;
pub use board::*;
pub use board_troops::*;
pub use errors::*;
pub use game_state::*;
pub use moves::*;
pub use position::*;
pub use position_factory::*;
pub use side::*;
pub use troop::*;
pub use troop_tile::*;
pub use valid_moves::*;
pub use visualization::*;

mod actions;
#[cfg(test)]
mod arbitrary;
mod army;
mod board;
mod board_troops;
mod errors;
mod game_state;
mod moves;
mod position;
mod position_factory;
mod side;
mod troop;
mod troop_tile;
mod valid_moves;
mod visualization;
