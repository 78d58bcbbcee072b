//src/combat/src/rng.rs
use rand::{
    distr::uniform,
    {Rng, SeedableRng},
};
use rand_pcg::Pcg32;

/// 战斗专用的确定性RNG（伤害掷骰与目标选择）
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: Pcg32,
    seed: u64,
}

impl BattleRng {
    /// 使用指定种子创建RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 使用随机种子创建RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// 获取当前种子值
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 从列表中均匀随机选择
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.random_range(0..items.len());
            Some(&items[idx])
        }
    }

    /// 生成指定范围内的随机值
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}
