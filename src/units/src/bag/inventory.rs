// src/units/src/bag/inventory.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use items::Valued;

/// 库存系统错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },
    #[error("item not found")]
    NotFound,
}

/// 通用有序库存（容量固定，保持插入顺序，允许重复物品）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inventory<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Inventory<T> {
    /// 创建新库存
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 添加物品，已满时返回错误且内容不变
    pub fn try_add(&mut self, item: T) -> Result<(), InventoryError> {
        if self.items.len() >= self.capacity {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// 添加物品，返回是否成功
    pub fn add(&mut self, item: T) -> bool {
        match self.try_add(item) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%e, "inventory add rejected");
                false
            }
        }
    }

    /// 按条件筛选物品（保持原顺序，不修改库存）
    pub fn filter_items<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|&item| predicate(item)).collect()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// 当前物品数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// 获取容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: PartialEq> Inventory<T> {
    /// 移除第一个相等的物品并返回它
    pub fn try_remove(&mut self, item: &T) -> Result<T, InventoryError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing == item)
            .ok_or(InventoryError::NotFound)?;
        Ok(self.items.remove(index))
    }

    /// 移除第一个相等的物品，返回是否找到
    pub fn remove(&mut self, item: &T) -> bool {
        match self.try_remove(item) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(%e, "inventory remove declined");
                false
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Valued> Inventory<T> {
    /// 计算总价值（没有价格的物品被跳过），每次调用重新计算
    pub fn calculate_total_value(&self) -> u32 {
        self.items.iter().filter_map(|item| item.price()).sum()
    }
}

impl<T: fmt::Display> Inventory<T> {
    /// 内容与容量占用概览
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for Inventory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contents ({}/{}): [", self.items.len(), self.capacity)?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<'a, T> IntoIterator for &'a Inventory<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
