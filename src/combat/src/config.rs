//! Battle configuration
//!
//! Loaded from the `[battle]` table of the simulator's TOML config; every
//! field falls back to its default when omitted.

use serde::{Deserialize, Serialize};

/// Rounds played before a battle is called off
pub const DEFAULT_MAX_ROUNDS: u32 = 20;
/// Experience granted to each surviving winner
pub const DEFAULT_VICTORY_XP: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// The battle ends in a draw once the round counter exceeds this value
    pub max_rounds: u32,
    pub victory_xp: u32,
    /// Seed for damage rolls and target selection; random when absent
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            victory_xp: DEFAULT_VICTORY_XP,
            seed: None,
        }
    }
}

impl BattleConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
