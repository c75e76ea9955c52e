//! RandomPlayer - picks a uniformly random legal move
//!
//! Baseline opponent for self-play and tests. Seedable so games are
//! reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::error::EngineResult;
use crate::game_repr::{ChosenMove, Position, TurnSnapshot};

pub struct RandomPlayer {
    name: String,
    rng: StdRng,
    board: Position,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Same seed, same moves
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            name: "Random".to_string(),
            rng,
            board: Position::default(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, snapshot: &TurnSnapshot) -> EngineResult<Option<ChosenMove>> {
        self.board.rebuild(snapshot)?;
        let side = self.board.side_to_move();
        let moves = self.board.moves(side, true);
        Ok(moves.choose(&mut self.rng).map(|&mv| ChosenMove::from(mv)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
