// src/units/src/class/mage.rs
use combat::{BattleRng, Combat, CombatResult, Combatant};

use crate::{Class, Unit};

pub const SPELL_COST: u32 = 15;
pub const SPELL_DAMAGE_MIN: u32 = 20;
pub const SPELL_DAMAGE_MAX: u32 = 35;
/// 法力不足时的法杖伤害
pub const STAFF_DAMAGE: u32 = 3;
pub const MANA_REGEN: u32 = 20;

impl Unit {
    /// 法力充足时施放闪电箭，否则用法杖敲击并冥想回复法力
    pub(crate) fn mage_attack(
        &mut self,
        target: &mut dyn Combatant,
        rng: &mut BattleRng,
    ) -> CombatResult {
        let mut result = CombatResult::new();

        if self.resource.spend(SPELL_COST) {
            let damage = rng.random_range(SPELL_DAMAGE_MIN..=SPELL_DAMAGE_MAX);
            result.log(format!(
                "{} casts Lightning Bolt at {}!",
                self.name(),
                target.name()
            ));
            result.combine(Combat::strike(self.name(), target, damage));
        } else {
            result.log(format!("{} hits with staff (Out of Mana)!", self.name()));
            result.combine(Combat::strike(self.name(), target, STAFF_DAMAGE));
            let restored = self.resource.gain(MANA_REGEN);
            result.log(format!(
                "   -> {} meditates and restores {} Mana.",
                self.name(),
                restored
            ));
        }

        result
    }

    /// 恢复法力（封顶 100），返回实际恢复量；非法师返回 `None`
    pub fn restore_mana(&mut self, amount: u32) -> Option<u32> {
        if self.class != Class::Mage {
            return None;
        }
        Some(self.resource.gain(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_spends_mana() {
        let mut mage = Unit::mage("Mage1");
        let mut target = Unit::warrior("Target");
        let mut rng = BattleRng::new(8);

        let result = mage.attack(&mut target, &mut rng);
        assert_eq!(mage.mana(), Some(85));
        // 20..=35 raw against 12 defense
        assert!((14..=29).contains(&result.damage));
        assert_eq!(target.hp(), 150 - result.damage);
    }

    #[test]
    fn test_out_of_mana_falls_back_to_staff() {
        let mut mage = Unit::mage("Mage1");
        let mut target = Unit::mage("Target");
        let mut rng = BattleRng::new(8);
        mage.set_mana(10);

        let result = mage.attack(&mut target, &mut rng);
        assert_eq!(mage.mana(), Some(30));
        // 3 raw against 3 defense: 1.5 mitigated
        assert_eq!(result.damage, 1);
        assert_eq!(target.hp(), 89);
    }

    #[test]
    fn test_regen_capped_at_hundred() {
        let mut mage = Unit::mage("Mage1");
        let mut target = Unit::warrior("Target");
        let mut rng = BattleRng::new(8);
        // 14 is below the spell cost
        mage.set_mana(14);
        mage.attack(&mut target, &mut rng);
        assert_eq!(mage.mana(), Some(34));
    }

    #[test]
    fn test_exactly_spell_cost_casts() {
        let mut mage = Unit::mage("Mage1");
        let mut target = Unit::warrior("Target");
        let mut rng = BattleRng::new(8);
        mage.set_mana(15);
        mage.attack(&mut target, &mut rng);
        assert_eq!(mage.mana(), Some(0));
    }

    #[test]
    fn test_restore_mana() {
        let mut mage = Unit::mage("Mage1");
        mage.set_mana(70);
        assert_eq!(mage.restore_mana(50), Some(30));
        assert_eq!(mage.mana(), Some(100));

        let mut warrior = Unit::warrior("Warrior1");
        assert_eq!(warrior.restore_mana(50), None);
        assert_eq!(warrior.rage(), Some(0));
    }
}
