// src/units/src/class.rs

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

pub mod mage;
pub mod warrior;

/// 职业枚举
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Class {
    #[default]
    Warrior, // 战士（高生命值、高防御，怒气驱动）

    Mage, // 法师（低生命值，法力驱动的高伤害法术）
}

impl Class {
    /// 获取职业的基础生命值
    pub fn base_hp(&self) -> u32 {
        match self {
            Class::Warrior => 150,
            Class::Mage => 90,
        }
    }

    /// 获取职业的基础防御
    pub fn base_defense(&self) -> u32 {
        match self {
            Class::Warrior => 12,
            Class::Mage => 3,
        }
    }

    /// 初始资源：战士怒气为 0，法师法力满值
    pub fn starting_resource(&self) -> u32 {
        match self {
            Class::Warrior => 0,
            Class::Mage => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Mage => "Mage",
        }
    }

    /// 资源名称（用于描述）
    pub fn resource_label(&self) -> &'static str {
        match self {
            Class::Warrior => "Rage",
            Class::Mage => "Mana",
        }
    }
}
