use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 显示配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 设备像素比上限
    pub max_pixel_ratio: f32,

    /// 首次指针事件之前的默认指针位置（视口比例）
    pub pointer_origin: [f32; 2],

    /// 无界面运行时的视口尺寸
    pub headless_width: f32,
    pub headless_height: f32,

    /// 无界面运行的帧数
    pub headless_frames: u32,

    /// 无界面运行时的帧间隔（毫秒）
    pub frame_interval_ms: f64,

    /// 随机种子，未设置时使用系统熵
    pub seed: Option<u64>,
}

impl_default!(DisplayConfig {
    max_pixel_ratio: 2.0,
    pointer_origin: [0.5, 0.7],
    headless_width: 1280.0,
    headless_height: 720.0,
    headless_frames: 600,
    frame_interval_ms: 1000.0 / 60.0,
    seed: None,
});

impl DisplayConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_pixel_ratio <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Max pixel ratio must be positive".to_string(),
            ));
        }
        if self.headless_width <= 0.0 || self.headless_height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Invalid headless viewport".to_string(),
            ));
        }
        if self.frame_interval_ms <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Frame interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
