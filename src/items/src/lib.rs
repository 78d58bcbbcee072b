//src/items/src/lib.rs

use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::consumable::Consumable;
pub use crate::weapon::Weapon;

pub mod consumable;
pub mod weapon;

/// 基础物品结构
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub weight: f32,
    pub price: u32, // 由具体类型推导，构造后不再变化
    pub kind: ItemKind,
}

/// 物品类型枚举
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(Weapon),         // 武器（被动物品）
    Consumable(Consumable), // 一次性消耗品
}

impl Item {
    pub fn new(kind: ItemKind, name: &str, weight: f32) -> Self {
        let price = match &kind {
            ItemKind::Weapon(w) => w.value(),
            ItemKind::Consumable(c) => c.value(),
        };

        Self {
            name: name.to_string(),
            weight: weight.max(0.0),
            price,
            kind,
        }
    }

    /// 创建武器
    pub fn weapon(name: &str, damage: u32, weight: f32) -> Self {
        Self::new(ItemKind::Weapon(Weapon::new(damage)), name, weight)
    }

    /// 创建消耗品（`is_mana` 为真时恢复法力，否则恢复生命）
    pub fn consumable(name: &str, weight: f32, effect_value: u32, is_mana: bool) -> Self {
        Self::new(
            ItemKind::Consumable(Consumable::new(effect_value, is_mana)),
            name,
            weight,
        )
    }

    /// 对目标使用物品
    pub fn use_on(&mut self, target: &mut dyn ItemTarget) -> UseOutcome {
        let outcome = match &mut self.kind {
            ItemKind::Weapon(w) => w.equip(),
            ItemKind::Consumable(c) => c.consume(target),
        };
        tracing::debug!(
            item = %self.name,
            unit = target.target_name(),
            ?outcome,
            "item used"
        );
        outcome
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable(_))
    }

    /// 消耗品是否已用尽；武器永远返回 false
    pub fn is_consumed(&self) -> bool {
        match &self.kind {
            ItemKind::Consumable(c) => c.is_consumed(),
            ItemKind::Weapon(_) => false,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(w) => Some(w),
            ItemKind::Consumable(_) => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

/// 可估价的对象。没有价格的类型保持默认实现，估价时会被跳过。
pub trait Valued {
    fn price(&self) -> Option<u32> {
        None
    }
}

impl Valued for Item {
    fn price(&self) -> Option<u32> {
        Some(self.price)
    }
}

impl<T: Valued> Valued for &T {
    fn price(&self) -> Option<u32> {
        (**self).price()
    }
}

/// 物品作用对象的能力接口
///
/// 消耗品只关心目标“能否回血”和“有没有法力池”，不关心目标的具体职业。
pub trait ItemTarget {
    fn target_name(&self) -> &str;

    /// 治疗目标，返回实际恢复的生命值（目标已死亡时为 0）
    fn receive_heal(&mut self, amount: u32) -> u32;

    /// 恢复法力，返回实际恢复量；目标没有法力池时返回 `None`
    fn receive_mana(&mut self, amount: u32) -> Option<u32>;
}

/// 使用物品的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseOutcome {
    /// 武器被装备（不改变属性）
    Equipped,
    /// 生命恢复，数值为实际恢复量
    Healed(u32),
    /// 法力恢复，数值为实际恢复量
    ManaRestored(u32),
    /// 法力药剂用在了没有法力的目标上，物品照样被消耗
    Wasted,
    /// 物品此前已经用尽，无任何效果
    AlreadyConsumed,
}

impl UseOutcome {
    /// 生成叙述文本
    pub fn message(&self, item: &str, target: &str) -> String {
        match self {
            UseOutcome::Equipped => format!("{} equips {}. It is a passive item.", target, item),
            UseOutcome::Healed(amount) => {
                format!("{} consumes {} and heals for {} HP.", target, item, amount)
            }
            UseOutcome::ManaRestored(amount) => {
                format!("{} consumes {}. Mana restored (+{}).", target, item, amount)
            }
            UseOutcome::Wasted => format!(
                "{} consumes {}. Nothing happened, {} has no mana.",
                target, item, target
            ),
            UseOutcome::AlreadyConsumed => format!("{} is empty!", item),
        }
    }
}
