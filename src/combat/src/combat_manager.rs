//! Battle manager for alternating team turns
use serde::{Deserialize, Serialize};

use crate::{BattleConfig, BattleRng, Combatant};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Team A eliminated every defender
    TeamA,
    /// Team B eliminated every defender
    TeamB,
    /// Both rosters died
    Draw,
    /// Round cap reached with both sides standing
    RoundLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    InProgress,
    Over(BattleOutcome),
}

/// Drives combat between two rosters until one side falls or the round cap is hit.
///
/// The manager never owns units; it borrows both rosters for the length of a
/// round and mutates them in place. Once `Over`, it stays over.
pub struct BattleManager {
    config: BattleConfig,
    rng: BattleRng,
    turn: u32,
    state: BattleState,
    log: Vec<String>,
}

impl BattleManager {
    pub fn new(config: BattleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => BattleRng::new(seed),
            None => BattleRng::from_entropy(),
        };
        Self {
            config,
            rng,
            turn: 0,
            state: BattleState::InProgress,
            log: Vec::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(BattleConfig::default().with_seed(seed))
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, BattleState::Over(_))
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state {
            BattleState::Over(outcome) => Some(outcome),
            BattleState::InProgress => None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Narration accumulated so far
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Run rounds until the battle is over
    pub fn run<C: Combatant>(&mut self, team_a: &mut [C], team_b: &mut [C]) -> BattleOutcome {
        if let BattleState::Over(outcome) = self.state {
            return outcome;
        }

        tracing::info!(
            team_a = team_a.len(),
            team_b = team_b.len(),
            seed = self.rng.seed(),
            "battle started"
        );
        self.note("BATTLE STARTED".to_string());

        loop {
            if let BattleState::Over(outcome) = self.play_round(team_a, team_b) {
                return outcome;
            }
        }
    }

    /// Play a single round: team A acts, then team B, checking for a winner after each.
    pub fn play_round<C: Combatant>(&mut self, team_a: &mut [C], team_b: &mut [C]) -> BattleState {
        if self.is_over() {
            return self.state;
        }

        self.turn += 1;
        self.note(format!("--- Round {} ---", self.turn));
        tracing::debug!(round = self.turn, "round started");

        self.process_team_turn(team_a, team_b);
        if let Some(outcome) = self.check_win(team_a, team_b) {
            return self.finish(outcome);
        }

        self.process_team_turn(team_b, team_a);
        if let Some(outcome) = self.check_win(team_a, team_b) {
            return self.finish(outcome);
        }

        if self.turn > self.config.max_rounds {
            self.note("Battle took too long. Draw.".to_string());
            return self.finish(BattleOutcome::RoundLimit);
        }

        self.state
    }

    /// Each living attacker, in roster order, strikes a random living defender.
    /// Stops early once no defender is left standing.
    fn process_team_turn<C: Combatant>(&mut self, attackers: &mut [C], defenders: &mut [C]) {
        for attacker in attackers.iter_mut() {
            if !attacker.is_alive() {
                continue;
            }

            let live_targets: Vec<usize> = defenders
                .iter()
                .enumerate()
                .filter(|(_, d)| d.is_alive())
                .map(|(idx, _)| idx)
                .collect();
            let Some(&target) = self.rng.choose(&live_targets) else {
                return;
            };

            let result = attacker.attack(&mut defenders[target], &mut self.rng);
            self.log.extend(result.logs);
        }
    }

    fn check_win<C: Combatant>(
        &mut self,
        team_a: &mut [C],
        team_b: &mut [C],
    ) -> Option<BattleOutcome> {
        let alive_a = team_a.iter().any(|u| u.is_alive());
        let alive_b = team_b.iter().any(|u| u.is_alive());

        match (alive_a, alive_b) {
            (false, false) => {
                self.note("Everyone died".to_string());
                Some(BattleOutcome::Draw)
            }
            (true, false) => {
                self.note("Team A WON!".to_string());
                self.distribute_xp(team_a);
                Some(BattleOutcome::TeamA)
            }
            (false, true) => {
                self.note("Team B WON!".to_string());
                self.distribute_xp(team_b);
                Some(BattleOutcome::TeamB)
            }
            (true, true) => None,
        }
    }

    fn distribute_xp<C: Combatant>(&mut self, winners: &mut [C]) {
        let xp = self.config.victory_xp;
        for unit in winners.iter_mut().filter(|u| u.is_alive()) {
            if unit.gain_xp(xp) {
                self.note(format!("*** {} leveled up! ***", unit.name()));
            }
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleState {
        self.state = BattleState::Over(outcome);
        tracing::info!(?outcome, rounds = self.turn, "battle over");
        self.state
    }

    fn note(&mut self, message: String) {
        self.log.push(message);
    }
}
