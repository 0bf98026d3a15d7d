//! Rules of chess for a two-player, same-process game.
//!
//! Given a position and a proposed move this crate decides legality, applies
//! the move, and detects checkmate, stalemate and the draw rules. Rendering
//! and input handling belong to the driver (see the `local_play` crate).

pub mod apply;
pub mod attacks;
pub mod board;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod terminal;
pub mod types;

pub use attacks::{attacks, in_check, is_square_attacked};
pub use board::*;
pub use game::*;
pub use legality::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use terminal::*;
pub use types::*;
