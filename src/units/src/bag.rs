// src/units/src/bag.rs

// 子模块定义
pub mod inventory; // 通用库存

pub use inventory::{Inventory, InventoryError};
