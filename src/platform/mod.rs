//! 平台环境探测
//!
//! 页面启动时只读取一次的环境输入：设备类型、减少动态效果偏好和视口。
//! 浏览器中由 `web` 模块填充，原生环境使用配置中的无界面视口。

use crate::config::DisplayConfig;
use crate::render::surface::Viewport;
use serde::{Deserialize, Serialize};

/// 粗粒度设备类型，只用于选择粒子密度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// 根据 user agent 判断设备类型
    ///
    /// 包含 `Mobi` 或 `Android`（不区分大小写）即视为移动端。
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("mobi") || ua.contains("android") {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// 启动时的环境快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub viewport: Viewport,
    pub device: DeviceClass,
    /// 用户请求减少动态效果
    pub reduced_motion: bool,
}

impl Environment {
    pub fn new(viewport: Viewport, device: DeviceClass, reduced_motion: bool) -> Self {
        Self {
            viewport,
            device,
            reduced_motion,
        }
    }

    /// 无界面运行使用的环境
    pub fn headless(display: &DisplayConfig) -> Self {
        Self {
            viewport: Viewport::new(
                display.headless_width,
                display.headless_height,
                1.0,
                display.max_pixel_ratio,
            ),
            device: DeviceClass::Desktop,
            reduced_motion: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.device = device;
        self
    }
}
