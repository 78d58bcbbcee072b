//src/items/src/consumable.rs
use serde::{Deserialize, Serialize};

use crate::{ItemTarget, UseOutcome};

/// 一次性消耗品（生命药剂或法力药剂）
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Consumable {
    pub effect_value: u32,
    pub is_mana: bool,
    consumed: bool,
}

impl Consumable {
    pub fn new(effect_value: u32, is_mana: bool) -> Self {
        Self {
            effect_value,
            is_mana,
            consumed: false,
        }
    }

    /// 消耗品价值（效果 × 2）
    pub fn value(&self) -> u32 {
        self.effect_value.saturating_mul(2)
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// 对目标使用。只生效一次；法力药剂用在没有法力池的目标上同样会被消耗。
    pub fn consume(&mut self, target: &mut dyn ItemTarget) -> UseOutcome {
        if self.consumed {
            tracing::warn!(unit = target.target_name(), "consumable already used");
            return UseOutcome::AlreadyConsumed;
        }

        let outcome = if self.is_mana {
            match target.receive_mana(self.effect_value) {
                Some(restored) => UseOutcome::ManaRestored(restored),
                None => UseOutcome::Wasted,
            }
        } else {
            UseOutcome::Healed(target.receive_heal(self.effect_value))
        };

        self.consumed = true;
        outcome
    }
}
