//! Game-state engine for tic-tac-toe against a one-ply heuristic opponent.
//!
//! The crate holds no rendering code. A front end feeds cell indices into a [`Session`] and
//! reads back the board, the side to move, the outcome and the win tally.

#![no_std]

pub use advisor::*;
pub use board::*;
pub use cell::*;
pub use error::*;
pub use rules::*;
pub use session::*;
pub use tally::*;
pub use types::*;
pub use view::*;

mod advisor;
mod board;
mod cell;
mod error;
mod rules;
mod session;
mod tally;
mod types;
mod view;
