//src/items/src/weapon.rs
use serde::{Deserialize, Serialize};

use crate::UseOutcome;

/// 武器耐久上限
pub const MAX_DURABILITY: u8 = 100;

/// 每点伤害对应的价格
const PRICE_PER_DAMAGE: u32 = 10;

/// 武器数据结构
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: u32, // 伤害评级
    pub durability: u8, // 耐久度 0-100
}

impl Weapon {
    pub fn new(damage: u32) -> Self {
        Self {
            damage,
            durability: MAX_DURABILITY,
        }
    }

    /// 武器价值（伤害 × 10）
    pub fn value(&self) -> u32 {
        self.damage.saturating_mul(PRICE_PER_DAMAGE)
    }

    /// 装备武器。装备不改变任何属性，仅产生叙述。
    pub fn equip(&self) -> UseOutcome {
        UseOutcome::Equipped
    }

    /// 磨损武器，耐久最低为 0
    pub fn wear(&mut self, amount: u8) {
        self.durability = self.durability.saturating_sub(amount);
    }

    /// 修复武器，返回恢复的耐久；已满耐久时返回 `None`
    pub fn repair(&mut self) -> Option<u8> {
        if self.durability >= MAX_DURABILITY {
            tracing::debug!("weapon is in perfect condition");
            return None;
        }
        let restored = MAX_DURABILITY - self.durability;
        self.durability = MAX_DURABILITY;
        tracing::debug!(restored, "weapon repaired");
        Some(restored)
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_weapon_is_pristine() {
        let w = Weapon::new(20);
        assert_eq!(w.durability, MAX_DURABILITY);
        assert_eq!(w.value(), 200);
    }

    #[test]
    fn test_repair_reports_restored_amount() {
        let mut w = Weapon::new(20);
        w.wear(35);
        assert_eq!(w.durability, 65);
        assert_eq!(w.repair(), Some(35));
        assert_eq!(w.durability, MAX_DURABILITY);
    }

    #[test]
    fn test_repair_full_weapon_is_noop() {
        let mut w = Weapon::new(20);
        assert_eq!(w.repair(), None);
        assert_eq!(w.durability, MAX_DURABILITY);
    }

    #[test]
    fn test_wear_floors_at_zero() {
        let mut w = Weapon::new(5);
        w.wear(250);
        assert!(w.is_broken());
        assert_eq!(w.repair(), Some(100));
    }
}
