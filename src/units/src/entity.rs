// src/units/src/entity.rs
use serde::{Deserialize, Serialize};

/// 网格坐标
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 曼哈顿距离
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// 场上实体：名称与位置在构造后不再改变
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    position: Position,
    active: bool,
}

impl Entity {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    pub fn distance_to(&self, other: &Entity) -> u32 {
        self.position.manhattan(&other.position)
    }
}
