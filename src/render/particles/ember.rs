//! 余烬
//!
//! 缓慢上飘的暗淡光点，带正弦摆动和对指针的轻微吸引。

use super::random::RandomSource;
use crate::config::EmberConfig;
use crate::render::surface::{Hsla, RenderSurface, Viewport};
use glam::Vec2;

/// 单个余烬
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ember {
    pub position: Vec2,
    pub velocity: Vec2,
    /// 剩余寿命（tick）
    pub life: u32,
    pub size: f32,
    pub hue: f32,
    /// 基础透明度，渲染时再乘以闪烁项
    pub alpha: f32,
    /// 闪烁频率
    pub twinkle: f32,
}

impl Ember {
    /// 在视口中下部随机生成一个余烬
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, viewport: &Viewport) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let y_base = h * rng.range(0.55, 0.9);
        let x = rng.range(w * 0.05, w * 0.95);
        let y = y_base + rng.range(-20.0, 20.0);
        let vx = rng.range(-0.25, 0.25);
        let vy = rng.range(-0.7, -0.15);
        let life = (rng.range(180.0, 380.0) as u32).max(1);
        let size = rng.range(0.8, 2.2);
        // 琥珀色
        let hue = rng.range(35.0, 60.0);
        let alpha = rng.range(0.12, 0.35);
        let twinkle = rng.range(0.004, 0.014);

        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            life,
            size,
            hue,
            alpha,
            twinkle,
        }
    }

    /// 水平摆动项
    pub fn sway(&self, now_ms: f64, config: &EmberConfig) -> f32 {
        let phase = (self.position.y as f64 + now_ms * config.sway_speed as f64)
            * self.twinkle as f64;
        (phase.sin() as f32) * config.sway_amplitude
    }

    /// 指针吸引位移，与距离成反比
    pub fn pull(&self, pointer: Vec2, config: &EmberConfig) -> Vec2 {
        let delta = pointer - self.position;
        let dist = delta.length().max(config.pull_min_distance);
        let pull = config.pull_strength / dist;
        Vec2::new(
            delta.x * pull * config.pull_scale_x,
            delta.y * pull * config.pull_scale_y,
        )
    }

    /// 推进一个tick
    pub fn advance(&mut self, now_ms: f64, pointer: Vec2, config: &EmberConfig) {
        let sway = self.sway(now_ms, config);
        let pull = self.pull(pointer, config);
        self.position += self.velocity + Vec2::new(sway, 0.0) + pull;
        self.life = self.life.saturating_sub(1);
    }

    /// 渲染透明度，钳制在配置的低区间内
    pub fn render_alpha(&self, now_ms: f64, config: &EmberConfig) -> f32 {
        let flicker = (now_ms * self.twinkle as f64).sin() as f32;
        (self.alpha * (0.6 + 0.4 * flicker)).clamp(config.alpha_min, config.alpha_max)
    }

    /// 寿命耗尽或越过上/左/右边界
    pub fn is_expired(&self, viewport: &Viewport, config: &EmberConfig) -> bool {
        self.life == 0
            || self.position.y < -config.top_margin
            || self.position.x < -config.side_margin
            || self.position.x > viewport.width + config.side_margin
    }

    pub fn draw<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        now_ms: f64,
        config: &EmberConfig,
    ) {
        let alpha = self.render_alpha(now_ms, config);
        surface.fill_circle(
            self.position,
            self.size,
            Hsla::new(self.hue, 100.0, 60.0, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::particles::random::ScriptedRandom;

    fn ember_at(x: f32, y: f32) -> Ember {
        Ember {
            position: Vec2::new(x, y),
            velocity: Vec2::new(0.0, -0.5),
            life: 200,
            size: 1.5,
            hue: 45.0,
            alpha: 0.3,
            twinkle: 0.01,
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let viewport = Viewport::new(1000.0, 800.0, 1.0, 2.0);
        let mut rng = ScriptedRandom::constant(0.0);
        let ember = Ember::spawn(&mut rng, &viewport);
        assert!((ember.position.x - 50.0).abs() < 1e-4);
        assert_eq!(ember.velocity, Vec2::new(-0.25, -0.7));
        assert_eq!(ember.life, 180);
        assert_eq!(ember.hue, 35.0);
        assert!((ember.twinkle - 0.004).abs() < 1e-9);
    }

    #[test]
    fn test_pull_floors_distance() {
        let config = EmberConfig::default();
        let ember = ember_at(100.0, 100.0);
        // 指针与余烬重合时不能出现奇点
        let pull = ember.pull(Vec2::new(100.0, 100.0), &config);
        assert_eq!(pull, Vec2::ZERO);

        let pull = ember.pull(Vec2::new(110.0, 100.0), &config);
        let expected = 10.0 * (24.0 / 80.0) * 0.0025;
        assert!((pull.x - expected).abs() < 1e-6);
        assert_eq!(pull.y, 0.0);
    }

    #[test]
    fn test_pull_is_subtle() {
        let config = EmberConfig::default();
        let ember = ember_at(0.0, 0.0);
        let pull = ember.pull(Vec2::new(5000.0, 5000.0), &config);
        assert!(pull.x.abs() <= config.pull_strength * config.pull_scale_x);
        assert!(pull.y.abs() <= config.pull_strength * config.pull_scale_y);
    }

    #[test]
    fn test_render_alpha_clamped() {
        let config = EmberConfig::default();
        let mut ember = ember_at(0.0, 0.0);
        ember.alpha = 0.01;
        assert_eq!(ember.render_alpha(0.0, &config), 0.05);
        ember.alpha = 1.0;
        // sin(0) = 0 -> 0.6
        assert_eq!(ember.render_alpha(0.0, &config), 0.42);
    }

    #[test]
    fn test_expired_above_top_margin() {
        let config = EmberConfig::default();
        let viewport = Viewport::new(1000.0, 800.0, 1.0, 2.0);
        assert!(ember_at(500.0, -61.0).is_expired(&viewport, &config));
        assert!(!ember_at(500.0, -59.0).is_expired(&viewport, &config));
        assert!(ember_at(-81.0, 400.0).is_expired(&viewport, &config));
        assert!(ember_at(1081.0, 400.0).is_expired(&viewport, &config));
    }

    #[test]
    fn test_advance_decrements_life() {
        let config = EmberConfig::default();
        let mut ember = ember_at(500.0, 400.0);
        ember.advance(1000.0, Vec2::new(500.0, 400.0), &config);
        assert_eq!(ember.life, 199);
        assert!(ember.position.y < 400.0);
    }
}
