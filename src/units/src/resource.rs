// src/units/src/resource.rs
use serde::{Deserialize, Serialize};

/// 职业资源池（怒气或法力），取值范围 [0, 100]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    current: u32,
}

impl Pool {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Self {
        Self {
            current: value.min(Self::MAX),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// 增加资源（封顶 100），返回实际增加量
    pub fn gain(&mut self, amount: u32) -> u32 {
        let old = self.current;
        self.current = self.current.saturating_add(amount).min(Self::MAX);
        self.current - old
    }

    /// 资源足够时扣除并返回 true，否则不变
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    pub fn set(&mut self, value: u32) {
        self.current = value.min(Self::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spend_requires_enough() {
        let mut pool = Pool::new(30);
        assert!(!pool.spend(40));
        assert_eq!(pool.current(), 30);
        assert!(pool.spend(30));
        assert_eq!(pool.current(), 0);
    }

    #[test]
    fn test_gain_reports_applied_amount() {
        let mut pool = Pool::new(90);
        assert_eq!(pool.gain(20), 10);
        assert_eq!(pool.current(), Pool::MAX);
    }

    proptest! {
        #[test]
        fn prop_pool_stays_in_range(
            start in 0u32..500,
            ops in prop::collection::vec((any::<bool>(), 0u32..200), 0..50),
        ) {
            let mut pool = Pool::new(start);
            for (gain, amount) in ops {
                if gain {
                    pool.gain(amount);
                } else {
                    pool.spend(amount);
                }
                prop_assert!(pool.current() <= Pool::MAX);
            }
        }
    }
}
