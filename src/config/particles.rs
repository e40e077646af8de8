use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::platform::DeviceClass;
use serde::{Deserialize, Serialize};

/// 粒子配置
///
/// 数值按页面视觉效果调出，调整前先确认整体密度仍然合适。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// 火花
    pub sparks: SparkConfig,

    /// 余烬
    pub embers: EmberConfig,
}

impl_default!(ParticleConfig {
    sparks: SparkConfig::default(),
    embers: EmberConfig::default(),
});

impl ParticleConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.sparks.validate()?;
        self.embers.validate()?;
        Ok(())
    }
}

/// 火花配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    /// 每个tick尝试生成的概率
    pub spawn_chance: f32,

    /// 桌面端每次最多生成数量
    pub per_tick_desktop: u32,

    /// 移动端每次最多生成数量
    pub per_tick_mobile: u32,

    /// 每tick竖直速度增量
    pub gravity: f32,

    /// 每tick透明度乘数
    pub alpha_decay: f32,

    /// 拖尾长度（速度的倍数）
    pub trail_length: f32,

    /// 右侧和底部的剔除边距
    pub cull_margin: f32,
}

impl_default!(SparkConfig {
    spawn_chance: 0.45,
    per_tick_desktop: 4,
    per_tick_mobile: 2,
    gravity: 0.03,
    alpha_decay: 0.985,
    trail_length: 2.2,
    cull_margin: 80.0,
});

impl SparkConfig {
    /// 按设备类型取每tick最大生成数
    pub fn per_tick(&self, device: DeviceClass) -> u32 {
        match device {
            DeviceClass::Mobile => self.per_tick_mobile,
            DeviceClass::Desktop => self.per_tick_desktop,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::ValidationError(
                "Spark spawn chance must be within [0, 1]".to_string(),
            ));
        }
        if self.per_tick_desktop == 0 || self.per_tick_mobile == 0 {
            return Err(ConfigError::ValidationError(
                "Sparks per tick must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.alpha_decay) {
            return Err(ConfigError::ValidationError(
                "Spark alpha decay must be within [0, 1]".to_string(),
            ));
        }
        if self.cull_margin < 0.0 {
            return Err(ConfigError::ValidationError(
                "Spark cull margin must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// 余烬配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmberConfig {
    /// 桌面端目标数量
    pub target_desktop: u32,

    /// 移动端目标数量
    pub target_mobile: u32,

    /// 渲染透明度下限
    pub alpha_min: f32,

    /// 渲染透明度上限
    pub alpha_max: f32,

    /// 指针吸引强度
    pub pull_strength: f32,

    /// 吸引距离下限，避免奇点
    pub pull_min_distance: f32,

    /// 水平吸引缩放
    pub pull_scale_x: f32,

    /// 竖直吸引缩放
    pub pull_scale_y: f32,

    /// 水平摆动幅度
    pub sway_amplitude: f32,

    /// 摆动相位随时间的推进速度（每毫秒）
    pub sway_speed: f32,

    /// 顶部剔除边距
    pub top_margin: f32,

    /// 左右剔除边距
    pub side_margin: f32,
}

impl_default!(EmberConfig {
    target_desktop: 95,
    target_mobile: 55,
    alpha_min: 0.05,
    alpha_max: 0.42,
    pull_strength: 24.0,
    pull_min_distance: 80.0,
    pull_scale_x: 0.0025,
    pull_scale_y: 0.001,
    sway_amplitude: 0.25,
    sway_speed: 0.06,
    top_margin: 60.0,
    side_margin: 80.0,
});

impl EmberConfig {
    /// 按设备类型取目标数量
    pub fn target(&self, device: DeviceClass) -> u32 {
        match device {
            DeviceClass::Mobile => self.target_mobile,
            DeviceClass::Desktop => self.target_desktop,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.target_desktop == 0 || self.target_mobile == 0 {
            return Err(ConfigError::ValidationError(
                "Ember target must be positive".to_string(),
            ));
        }
        if self.alpha_min < 0.0 || self.alpha_max > 1.0 || self.alpha_min > self.alpha_max {
            return Err(ConfigError::ValidationError(
                "Ember alpha clamp must satisfy 0 <= min <= max <= 1".to_string(),
            ));
        }
        if self.pull_min_distance <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Ember pull distance floor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_by_device() {
        let config = ParticleConfig::default();
        assert_eq!(config.sparks.per_tick(DeviceClass::Desktop), 4);
        assert_eq!(config.sparks.per_tick(DeviceClass::Mobile), 2);
        assert_eq!(config.embers.target(DeviceClass::Desktop), 95);
        assert_eq!(config.embers.target(DeviceClass::Mobile), 55);
    }

    #[test]
    fn test_rejects_bad_spawn_chance() {
        let mut config = SparkConfig::default();
        config.spawn_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_alpha_clamp() {
        let mut config = EmberConfig::default();
        config.alpha_min = 0.5;
        config.alpha_max = 0.2;
        assert!(config.validate().is_err());
    }
}
