// src/units/src/lib.rs

// 核心模块
mod bag;
mod core;
mod entity;
mod resource;

// 子模块
pub mod class;

// 重新导出主要类型
pub use self::{
    bag::{Inventory, InventoryError},
    core::Unit,
    entity::{Entity, Position},
    resource::Pool,
};

pub use crate::class::Class;
pub use combat::Combatant;
