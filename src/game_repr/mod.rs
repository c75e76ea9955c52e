mod square;
mod moves;
mod piece;
mod position;
mod piece_moves;
mod snapshot;
mod fen;

#[cfg(test)]
mod tests;

pub use square::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use snapshot::*;
