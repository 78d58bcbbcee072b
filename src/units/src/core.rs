// src/units/src/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use combat::{BattleRng, Combat, CombatResult, Combatant};
use items::{ItemTarget, Valued};

use crate::{Class, Entity, Pool, Position};

/// 每级所需经验系数（阈值 = 等级 × 100）
pub const XP_PER_LEVEL: u32 = 100;
/// 升级时最大生命值增长
pub const HP_PER_LEVEL: u32 = 20;
/// 升级时防御增长
pub const DEFENSE_PER_LEVEL: u32 = 2;

/// 战斗单位核心数据结构
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    entity: Entity,
    pub(crate) class: Class,

    // 基础属性
    hp: u32,
    max_hp: u32,
    defense: u32,

    // 成长系统
    level: u32,
    xp: u32,

    // 职业资源（战士为怒气，法师为法力）
    pub(crate) resource: Pool,
}

impl Unit {
    /// 按职业基础属性创建单位，位于原点
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        Self {
            entity: Entity::new(name, 0, 0),
            class,
            hp: class.base_hp(),
            max_hp: class.base_hp(),
            defense: class.base_defense(),
            level: 1,
            xp: 0,
            resource: Pool::new(class.starting_resource()),
        }
    }

    pub fn warrior(name: impl Into<String>) -> Self {
        Self::new(name, Class::Warrior)
    }

    pub fn mage(name: impl Into<String>) -> Self {
        Self::new(name, Class::Mage)
    }

    /// 放置到指定坐标
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.entity.relocate(Position::new(x, y));
        self
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn position(&self) -> Position {
        self.entity.position()
    }

    pub fn is_active(&self) -> bool {
        self.entity.is_active()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn distance_to(&self, other: &Unit) -> u32 {
        self.entity.distance_to(&other.entity)
    }

    /// 当前怒气；非战士返回 `None`
    pub fn rage(&self) -> Option<u32> {
        (self.class == Class::Warrior).then(|| self.resource.current())
    }

    /// 当前法力；非法师返回 `None`
    pub fn mana(&self) -> Option<u32> {
        (self.class == Class::Mage).then(|| self.resource.current())
    }

    pub fn has_mana(&self) -> bool {
        self.mana().is_some()
    }

    /// 承受伤害，返回减伤后的实际伤害。生命归零时单位失去活动状态。
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = Combat::mitigated_damage(amount, self.defense);
        self.hp = self.hp.saturating_sub(actual);
        if self.hp == 0 {
            self.entity.deactivate();
            tracing::debug!(unit = self.name(), "unit fell");
        }
        actual
    }

    /// 治疗，返回实际恢复量。死亡单位无法被治疗。
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            tracing::warn!(unit = self.name(), "dead unit cannot be healed");
            return 0;
        }
        let old_hp = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - old_hp
    }

    /// 获得经验。达到阈值时升级一次（单次调用最多升一级），返回是否升级。
    pub fn gain_xp(&mut self, amount: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= self.level * XP_PER_LEVEL {
            self.level_up();
            return true;
        }
        false
    }

    /// 升级系统
    fn level_up(&mut self) {
        self.level += 1;
        self.xp = 0;
        self.max_hp += HP_PER_LEVEL;
        self.hp = self.max_hp;
        self.defense += DEFENSE_PER_LEVEL;
        tracing::info!(unit = self.name(), level = self.level, "level up");
    }

    pub fn describe(&self) -> String {
        format!(
            "[{}] {} | HP: {}/{} | {}: {}",
            self.class.label(),
            self.name(),
            self.hp,
            self.max_hp,
            self.class.resource_label(),
            self.resource.current()
        )
    }

    /// 直接设定生命值（封顶最大生命值），用于构造场景。
    /// 死亡单位不能借此复活，返回 false。
    pub fn set_hp(&mut self, hp: u32) -> bool {
        if !self.is_alive() {
            tracing::warn!(unit = self.name(), "dead unit hp cannot be set");
            return false;
        }
        self.hp = hp.min(self.max_hp);
        if self.hp == 0 {
            self.entity.deactivate();
        }
        true
    }

    /// 设定怒气；非战士返回 false
    pub fn set_rage(&mut self, rage: u32) -> bool {
        if self.class != Class::Warrior {
            return false;
        }
        self.resource.set(rage);
        true
    }

    /// 设定法力；非法师返回 false
    pub fn set_mana(&mut self, mana: u32) -> bool {
        if self.class != Class::Mage {
            return false;
        }
        self.resource.set(mana);
        true
    }
}

impl Combatant for Unit {
    fn name(&self) -> &str {
        Unit::name(self)
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn is_alive(&self) -> bool {
        Unit::is_alive(self)
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        Unit::take_damage(self, amount)
    }

    fn attack(&mut self, target: &mut dyn Combatant, rng: &mut BattleRng) -> CombatResult {
        match self.class {
            Class::Warrior => self.warrior_attack(target, rng),
            Class::Mage => self.mage_attack(target, rng),
        }
    }

    fn gain_xp(&mut self, amount: u32) -> bool {
        Unit::gain_xp(self, amount)
    }

    fn describe(&self) -> String {
        Unit::describe(self)
    }
}

impl ItemTarget for Unit {
    fn target_name(&self) -> &str {
        self.name()
    }

    fn receive_heal(&mut self, amount: u32) -> u32 {
        self.heal(amount)
    }

    fn receive_mana(&mut self, amount: u32) -> Option<u32> {
        self.restore_mana(amount)
    }
}

// 单位没有价格，估价时跳过
impl Valued for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}
