// src/combat/src/lib.rs

pub mod combat_manager;
pub mod combatant;
pub mod config;
pub mod rng;

pub use crate::combat_manager::{BattleManager, BattleOutcome, BattleState};
pub use crate::combatant::Combatant;
pub use crate::config::BattleConfig;
pub use crate::rng::BattleRng;

/// Damage resolution shared by every attack
pub struct Combat;

/// Combat configuration constants
pub mod constants {
    pub const DEFENSE_FACTOR: f64 = 0.5; // Each defense point mitigates half a point of damage
    pub const MITIGATION_CAP: f64 = 0.8; // Mitigation never exceeds 80% of incoming damage
    pub const MIN_DAMAGE: u32 = 1; // Minimum damage dealt
}

impl Combat {
    /// Damage actually landed after the defender's mitigation.
    ///
    /// `mitigation = min(defense * 0.5, amount * 0.8)`, and the result is
    /// `max(1, amount - mitigation)` truncated toward zero.
    pub fn mitigated_damage(amount: u32, defense: u32) -> u32 {
        let raw = amount as f64;
        let mitigation =
            (defense as f64 * constants::DEFENSE_FACTOR).min(raw * constants::MITIGATION_CAP);
        (raw - mitigation).max(constants::MIN_DAMAGE as f64) as u32
    }

    /// Land `raw_damage` on `defender` and narrate it
    pub fn strike(attacker: &str, defender: &mut dyn Combatant, raw_damage: u32) -> CombatResult {
        let mut result = CombatResult::new();

        let dealt = defender.take_damage(raw_damage);
        result.damage = dealt;
        result.log(format!("   -> Dealt {} damage to {}.", dealt, defender.name()));
        tracing::debug!(attacker, defender = defender.name(), raw_damage, dealt, "strike");

        if !defender.is_alive() {
            result.log(format!("{} defeated {}!", attacker, defender.name()));
            result.defeated = true;
        }

        result
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Combat messages for narration
    pub damage: u32,       // Damage actually landed
    pub defeated: bool,    // Whether target was defeated
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.logs.extend(other.logs);
        self.damage += other.damage;
        self.defeated = self.defeated || other.defeated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_warrior_takes_fourteen_from_twenty() {
        // 12 defense mitigates 6 of a 20 point hit
        assert_eq!(Combat::mitigated_damage(20, 12), 14);
    }

    #[test]
    fn test_fractional_mitigation_truncates() {
        // 20 - 6.5 = 13.5
        assert_eq!(Combat::mitigated_damage(20, 13), 13);
    }

    #[test]
    fn test_mitigation_capped_at_eighty_percent() {
        assert_eq!(Combat::mitigated_damage(50, 1000), 10);
        assert_eq!(Combat::mitigated_damage(3, 3), 1);
    }

    #[test]
    fn test_minimum_damage_always_lands() {
        assert_eq!(Combat::mitigated_damage(0, 0), 1);
        assert_eq!(Combat::mitigated_damage(1, 500), 1);
    }

    #[test]
    fn test_combine_accumulates() {
        let mut a = CombatResult::new();
        a.log("first".into());
        a.damage = 4;
        let mut b = CombatResult::new();
        b.log("second".into());
        b.damage = 6;
        b.defeated = true;

        a.combine(b);
        assert_eq!(a.logs, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(a.damage, 10);
        assert!(a.defeated);
    }

    proptest! {
        #[test]
        fn prop_damage_at_least_one_and_at_most_amount(
            amount in 1u32..10_000,
            defense in 0u32..10_000,
        ) {
            let dealt = Combat::mitigated_damage(amount, defense);
            prop_assert!(dealt >= 1);
            prop_assert!(dealt <= amount);
        }

        #[test]
        fn prop_mitigation_never_exceeds_cap(amount in 5u32..10_000, defense in 0u32..10_000) {
            let dealt = Combat::mitigated_damage(amount, defense);
            // roughly 20% of the raw hit always lands
            prop_assert!(dealt + 1 >= (amount as f64 * 0.2) as u32);
        }
    }
}
