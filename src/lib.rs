pub mod ack;
pub mod coins;
pub mod error;
mod mod_arith;

pub use crate::error::{PuzzleError, Result};
