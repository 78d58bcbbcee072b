// src/combat/src/combatant.rs

use crate::{BattleRng, CombatResult};

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值
    fn hp(&self) -> u32;

    /// 获取最大生命值
    fn max_hp(&self) -> u32;

    /// 获取防御力
    fn defense(&self) -> u32;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// 承受伤害（经过减伤），返回实际伤害
    fn take_damage(&mut self, amount: u32) -> u32;

    /// 攻击目标，各职业行为不同
    fn attack(&mut self, target: &mut dyn Combatant, rng: &mut BattleRng) -> CombatResult;

    /// 获得经验，升级时返回 true
    fn gain_xp(&mut self, amount: u32) -> bool;

    /// 状态描述
    fn describe(&self) -> String;
}
