// src/units/src/class/warrior.rs
use combat::{BattleRng, Combat, CombatResult, Combatant};

use crate::{Class, Unit};

pub const BASE_DAMAGE_MIN: u32 = 15;
pub const BASE_DAMAGE_MAX: u32 = 25;
/// 每 3 点怒气额外 1 点伤害
pub const RAGE_DIVISOR: u32 = 3;
pub const RAGE_PER_ATTACK: u32 = 20;
pub const HEAVY_SLAM_COST: u32 = 40;
pub const HEAVY_SLAM_DAMAGE: u32 = 50;

impl Unit {
    /// 普通攻击：基础伤害 + 怒气加成，攻击后积累怒气
    pub(crate) fn warrior_attack(
        &mut self,
        target: &mut dyn Combatant,
        rng: &mut BattleRng,
    ) -> CombatResult {
        let mut result = CombatResult::new();

        let base = rng.random_range(BASE_DAMAGE_MIN..=BASE_DAMAGE_MAX);
        let rage_bonus = self.resource.current() / RAGE_DIVISOR;
        result.log(format!(
            "{} slashes {} (Rage Bonus: +{})!",
            self.name(),
            target.name(),
            rage_bonus
        ));
        result.combine(Combat::strike(self.name(), target, base + rage_bonus));

        self.resource.gain(RAGE_PER_ATTACK);
        result.log(format!("   -> Rage: {}", self.resource.current()));
        result
    }

    /// 重击：消耗 40 怒气造成 50 点原始伤害。
    ///
    /// 非战士或怒气不足时返回 `None`，状态不变。
    pub fn heavy_slam(&mut self, target: &mut dyn Combatant) -> Option<CombatResult> {
        if self.class != Class::Warrior || !self.resource.spend(HEAVY_SLAM_COST) {
            tracing::warn!(
                unit = self.name(),
                rage = self.resource.current(),
                "heavy slam declined"
            );
            return None;
        }

        let mut result = CombatResult::new();
        result.log(format!("{} uses heavy slam!", self.name()));
        result.combine(Combat::strike(self.name(), target, HEAVY_SLAM_DAMAGE));
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_builds_rage_and_adds_bonus() {
        let mut warrior = Unit::warrior("Warrior1");
        let mut dummy = Unit::mage("Dummy");
        let mut rng = BattleRng::new(17);

        warrior.attack(&mut dummy, &mut rng);
        assert_eq!(warrior.rage(), Some(20));
        let after_first = dummy.hp();
        // mage defense 3 mitigates 1.5 of a 15..=25 roll
        assert!((90 - 24..=90 - 13).contains(&after_first));

        warrior.set_rage(99);
        let mut fresh = Unit::mage("Fresh");
        warrior.attack(&mut fresh, &mut rng);
        // 33 rage bonus on top of the roll
        assert!(fresh.hp() <= 90 - 46);
        assert_eq!(warrior.rage(), Some(100));
    }

    #[test]
    fn test_rage_caps_at_hundred() {
        let mut warrior = Unit::warrior("Warrior1");
        let mut rng = BattleRng::new(3);
        for _ in 0..10 {
            let mut target = Unit::warrior("Target");
            warrior.attack(&mut target, &mut rng);
        }
        assert_eq!(warrior.rage(), Some(100));
    }

    #[test]
    fn test_heavy_slam_spends_rage() {
        let mut warrior = Unit::warrior("Warrior1");
        let mut enemy = Unit::warrior("Warrior2");
        warrior.set_rage(50);

        let result = warrior.heavy_slam(&mut enemy).expect("enough rage");
        assert_eq!(warrior.rage(), Some(10));
        // 50 raw against 12 defense
        assert_eq!(result.damage, 44);
        assert_eq!(enemy.hp(), 106);
    }

    #[test]
    fn test_heavy_slam_without_rage_changes_nothing() {
        let mut warrior = Unit::warrior("Warrior1");
        let mut enemy = Unit::warrior("Warrior2");
        warrior.set_rage(39);

        assert!(warrior.heavy_slam(&mut enemy).is_none());
        assert_eq!(warrior.rage(), Some(39));
        assert_eq!(enemy.hp(), 150);
    }

    #[test]
    fn test_mage_cannot_heavy_slam() {
        let mut mage = Unit::mage("Mage1");
        let mut enemy = Unit::warrior("Warrior2");

        assert!(mage.heavy_slam(&mut enemy).is_none());
        assert_eq!(mage.mana(), Some(100));
        assert_eq!(enemy.hp(), 150);
    }
}
