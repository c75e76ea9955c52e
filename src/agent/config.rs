// Engine configuration: search depth, time-pressure override, pondering.

/// AI difficulty levels that map to search depth
///
/// Higher difficulty levels produce stronger play but take longer to compute moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 2. Makes basic tactical moves but misses deeper combinations.
    Easy,

    /// Depth 4. Sees 2 moves ahead and plays solidly.
    #[default]
    Medium,

    /// Depth 6. Sees 3 moves ahead with good tactics.
    Hard,

    /// Depth 8. Relies on the time budget to stay playable.
    Expert,
}

impl Difficulty {
    /// Maximum search depth in plies
    pub fn max_depth(&self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Depth searched when the clock is nearly out
pub const DEFAULT_PRESSURE_DEPTH: u32 = 2;

/// Everything the engine can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest iteration of iterative deepening
    pub max_depth: u32,
    /// Fixed depth used instead of the time budget when the clock is low
    pub pressure_depth: u32,
    /// Keep searching on the opponent's time
    pub ponder: bool,
}

impl EngineConfig {
    pub fn with_ponder(mut self, ponder: bool) -> Self {
        self.ponder = ponder;
        self
    }
}

impl From<Difficulty> for EngineConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            max_depth: difficulty.max_depth(),
            pressure_depth: DEFAULT_PRESSURE_DEPTH.min(difficulty.max_depth()),
            ponder: false,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Difficulty::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 4);
        assert_eq!(Difficulty::Hard.max_depth(), 6);
        assert_eq!(Difficulty::Expert.max_depth(), 8);
    }

    #[test]
    fn test_default_config_is_medium_without_pondering() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.pressure_depth, DEFAULT_PRESSURE_DEPTH);
        assert!(!config.ponder);
        assert!(config.with_ponder(true).ponder);
    }
}
