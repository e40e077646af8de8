//! 火花
//!
//! 从视口左下方的"铁轨"带喷出，向右飞行，受重力下坠并快速衰减。

use super::random::RandomSource;
use crate::config::SparkConfig;
use crate::render::surface::{Hsla, RenderSurface, Viewport};
use glam::Vec2;

/// 单个火花
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub position: Vec2,
    pub velocity: Vec2,
    /// 剩余寿命（tick）
    pub life: u32,
    pub size: f32,
    pub hue: f32,
    pub alpha: f32,
}

impl Spark {
    /// 在视口下部随机生成一个火花
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, viewport: &Viewport) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let y_base = h * rng.range(0.62, 0.86);
        let x = rng.range(-40.0, w * 0.35);
        let y = y_base + rng.range(-20.0, 20.0);
        let vx = rng.range(3.5, 8.5);
        let vy = rng.range(-1.2, 0.9);
        let life = (rng.range(26.0, 50.0) as u32).max(1);
        let size = rng.range(1.2, 2.4);
        // 青 -> 紫 -> 粉
        let hue = rng.range(180.0, 300.0);
        let alpha = rng.range(0.5, 0.95);

        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            life,
            size,
            hue,
            alpha,
        }
    }

    /// 推进一个tick
    pub fn advance(&mut self, config: &SparkConfig) {
        self.position += self.velocity;
        self.velocity.y += config.gravity;
        self.life = self.life.saturating_sub(1);
        self.alpha *= config.alpha_decay;
    }

    /// 寿命耗尽或越过右/下边界
    pub fn is_expired(&self, viewport: &Viewport, config: &SparkConfig) -> bool {
        self.life == 0
            || self.position.x > viewport.width + config.cull_margin
            || self.position.y > viewport.height + config.cull_margin
    }

    /// 拖尾线段加发光点
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, config: &SparkConfig) {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let tail = self.position - self.velocity * config.trail_length;
        surface.stroke_line(
            self.position,
            tail,
            self.size,
            Hsla::new(self.hue, 100.0, 70.0, alpha),
        );
        surface.fill_circle(
            self.position,
            self.size * 1.2,
            Hsla::new(self.hue, 100.0, 75.0, alpha),
        );
    }
}

/// 本次生成的火花数量，`[1, max_per_tick]`
pub fn spawn_count<R: RandomSource + ?Sized>(rng: &mut R, max_per_tick: u32) -> u32 {
    let max = max_per_tick.max(1);
    (rng.range(1.0, max as f32 + 1.0).floor() as u32).clamp(1, max)
}
