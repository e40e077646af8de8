//! 渲染表面抽象
//!
//! 粒子场只需要四个绘制原语：调整尺寸、清屏、描线、填充圆。
//! 所有坐标都是 CSS 像素，表面自己负责按设备像素比缩放。

use glam::Vec2;
use std::fmt;

/// 视口
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// CSS 像素宽度
    pub width: f32,
    /// CSS 像素高度
    pub height: f32,
    /// 设备像素比（已钳制）
    pub pixel_ratio: f32,
}

impl Viewport {
    /// 创建视口
    ///
    /// 设备像素比钳制到 `(0, max_pixel_ratio]`，无效值按 1 处理。
    pub fn new(width: f32, height: f32, pixel_ratio: f32, max_pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: pixel_ratio.min(max_pixel_ratio),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// 后备缓冲区尺寸（设备像素）
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).floor() as u32,
            (self.height * self.pixel_ratio).floor() as u32,
        )
    }

    /// 视口上按比例取点
    pub fn point_at(&self, fraction: [f32; 2]) -> Vec2 {
        Vec2::new(self.width * fraction[0], self.height * fraction[1])
    }
}

/// HSLA 颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// 色相（度）
    pub hue: f32,
    /// 饱和度（百分比）
    pub saturation: f32,
    /// 亮度（百分比）
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    /// CSS 颜色字符串
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// 渲染表面
pub trait RenderSurface {
    /// 按视口调整后备缓冲区并重置缩放变换
    fn resize(&mut self, viewport: &Viewport);

    /// 清空整个表面（CSS 像素尺寸）
    fn clear(&mut self, width: f32, height: f32);

    /// 描一条线段
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla);

    /// 填充圆
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// 录制的绘制命令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize {
        backing: (u32, u32),
        scale: f32,
    },
    Clear {
        width: f32,
        height: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Hsla,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
}

/// 录制型表面
///
/// 不产生像素，只记录命令。用于测试、基准和无界面运行。
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    backing: (u32, u32),
    scale: f32,
    draw_calls: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            backing: (0, 0),
            scale: 1.0,
            draw_calls: 0,
        }
    }

    /// 自上次清屏以来的命令
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// 当前后备缓冲区尺寸
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    /// 当前缩放变换
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// 累计绘制调用数（不含清屏）
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// 当前帧内的圆
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Hsla)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// 当前帧内的线段
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Hsla)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line {
                from, to, color, ..
            } => Some((*from, *to, *color)),
            _ => None,
        })
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, viewport: &Viewport) {
        self.backing = viewport.backing_size();
        self.scale = viewport.pixel_ratio;
        self.commands.push(DrawCommand::Resize {
            backing: self.backing,
            scale: self.scale,
        });
    }

    fn clear(&mut self, width: f32, height: f32) {
        // 一帧只保留一帧的命令
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        self.draw_calls += 1;
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.draw_calls += 1;
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_clamps_pixel_ratio() {
        let viewport = Viewport::new(800.0, 600.0, 3.0, 2.0);
        assert_eq!(viewport.pixel_ratio, 2.0);
        assert_eq!(viewport.backing_size(), (1600, 1200));

        let viewport = Viewport::new(800.0, 600.0, f32::NAN, 2.0);
        assert_eq!(viewport.pixel_ratio, 1.0);
    }

    #[test]
    fn test_backing_size_floors() {
        let viewport = Viewport::new(333.0, 100.0, 1.5, 2.0);
        assert_eq!(viewport.backing_size(), (499, 150));
    }

    #[test]
    fn test_hsla_css() {
        let color = Hsla::new(200.0, 100.0, 70.0, 0.5);
        assert_eq!(color.to_string(), "hsla(200, 100%, 70%, 0.5)");
    }

    #[test]
    fn test_recording_surface_clear_resets_frame() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(Vec2::ZERO, 1.0, Hsla::new(0.0, 100.0, 50.0, 1.0));
        surface.clear(10.0, 10.0);
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(surface.circles().count(), 0);
        assert_eq!(surface.draw_calls(), 1);
    }

    #[test]
    fn test_recording_surface_resize() {
        let mut surface = RecordingSurface::new();
        surface.resize(&Viewport::new(100.0, 50.0, 2.0, 2.0));
        assert_eq!(surface.backing_size(), (200, 100));
        assert_eq!(surface.scale(), 2.0);
    }
}
