//! 随机数来源
//!
//! 生成逻辑只依赖 [`RandomSource`]，测试可以注入固定序列来断言精确的数量和位置。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机数来源
pub trait RandomSource {
    /// `[0, 1)` 上的均匀分布
    fn next_unit(&mut self) -> f32;

    /// `[lo, hi)` 上的均匀分布
    ///
    /// `f32` 乘加在单位值接近 1 时会舍入到 `hi`，结果钳制到 `hi` 之下。
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        let value = lo + self.next_unit() * (hi - lo);
        if value < hi || hi <= lo {
            value
        } else {
            below(hi)
        }
    }

    /// 以概率 `p` 返回 `true`
    fn chance(&mut self, p: f32) -> bool {
        self.next_unit() < p
    }
}

/// 严格小于 `x` 的最大 `f32`
fn below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        -f32::from_bits(1)
    }
}

/// 基于 `StdRng` 的随机数来源
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 有种子用种子，否则使用系统熵
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// 循环回放固定序列的随机数来源
///
/// 序列中的值会被钳制到 `[0, 1)`。
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(mut values: Vec<f32>) -> Self {
        if values.is_empty() {
            values.push(0.0);
        }
        for value in &mut values {
            *value = value.clamp(0.0, 1.0 - f32::EPSILON);
        }
        Self { values, cursor: 0 }
    }

    /// 每次都返回同一个值
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// 已经取出的数量
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_range_maps_unit_interval() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!((rng.range(10.0, 20.0) - 15.0).abs() < 1e-6);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(rng.range(-40.0, 100.0), -40.0);
    }

    /// `StdRng` 能给出的最大单位值
    struct Ceiling;

    impl RandomSource for Ceiling {
        fn next_unit(&mut self) -> f32 {
            1.0 - f32::EPSILON / 2.0
        }
    }

    #[test]
    fn test_range_excludes_upper_bound() {
        let mut rng = Ceiling;
        assert!(rng.range(180.0, 380.0) < 380.0);
        assert!(rng.range(26.0, 50.0) < 50.0);
        assert!(rng.range(-1.2, 0.0) < 0.0);
        assert!(rng.range(-40.0, -20.0) < -20.0);
        assert_eq!(rng.range(5.0, 5.0), 5.0);
    }

    #[test]
    fn test_ceiling_draws_keep_lifetimes_in_range() {
        use crate::render::particles::{Ember, Spark};
        use crate::render::surface::Viewport;

        let viewport = Viewport::new(1280.0, 720.0, 1.0, 2.0);
        let spark = Spark::spawn(&mut Ceiling, &viewport);
        let ember = Ember::spawn(&mut Ceiling, &viewport);
        assert_eq!(spark.life, 49);
        assert!(spark.hue < 300.0);
        assert_eq!(ember.life, 379);
    }

    #[test]
    fn test_chance_bounds() {
        let mut rng = ScriptedRandom::constant(0.99);
        assert!(rng.chance(1.0));
        assert!(!rng.chance(0.0));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..16 {
            let value = a.next_unit();
            assert_eq!(value, b.next_unit());
            assert!((0.0..1.0).contains(&value));
        }
    }
}
