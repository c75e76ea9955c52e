pub mod agent;
pub mod error;
pub mod game_repr;

pub use error::{EngineError, EngineResult};
