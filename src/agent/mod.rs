pub mod player;
pub use player::*;

pub mod config;
pub use config::*;

pub mod ai;

pub mod negamax_player;
pub use negamax_player::NegamaxPlayer;

pub mod random_player;
pub use random_player::RandomPlayer;
