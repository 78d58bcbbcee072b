use combat::BattleOutcome;
use serde::Serialize;
use units::Unit;

/// Final state of a battle, printed by the binary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub rounds: u32,
    pub seed: u64,
    pub units: Vec<Unit>,
}

impl BattleReport {
    pub fn summary_lines(&self) -> Vec<String> {
        self.units.iter().map(Unit::describe).collect()
    }
}
