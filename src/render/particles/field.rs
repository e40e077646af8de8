//! 粒子场
//!
//! 拥有火花和余烬两个粒子群，每次显示刷新推进一次。
//!
//! ## 生命周期
//!
//! 1. `new`：确定密度常量、记录视口和默认指针位置、检查渲染表面
//! 2. `start`：减少动态效果或没有任何表面时不启动；否则预填充余烬并申请第一帧
//! 3. `tick`：清屏、随机生成火花、更新/绘制/剔除两个粒子群、申请下一帧
//! 4. `stop`：取消待处理的帧请求，之后的 tick 不再生效

use super::ember::Ember;
use super::random::RandomSource;
use super::spark::{spawn_count, Spark};
use crate::config::{FxConfig, ParticleConfig};
use crate::core::scheduler::FrameScheduler;
use crate::platform::{DeviceClass, Environment};
use crate::render::surface::{RenderSurface, Viewport};
use glam::Vec2;

/// 粒子场运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// 已创建，尚未启动
    Idle,
    /// 正在运行
    Running,
    /// 已停止
    Stopped,
    /// 减少动态效果或没有可用表面，永不启动
    Suppressed,
}

/// 粒子场统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldStats {
    /// 已执行的tick数
    pub ticks: u64,
    /// 累计生成的火花数
    pub sparks_spawned: u64,
    /// 累计剔除的火花数
    pub sparks_culled: u64,
    /// 累计生成的余烬数（含预填充）
    pub embers_spawned: u64,
    /// 累计替换的余烬数
    pub embers_respawned: u64,
}

/// 两个渲染表面，缺失的表面对应的粒子群永不绘制
#[derive(Debug, Clone)]
pub struct FieldSurfaces<S> {
    pub sparks: Option<S>,
    pub embers: Option<S>,
}

impl<S> FieldSurfaces<S> {
    pub fn new(sparks: Option<S>, embers: Option<S>) -> Self {
        Self { sparks, embers }
    }

    pub fn both(sparks: S, embers: S) -> Self {
        Self::new(Some(sparks), Some(embers))
    }
}

/// 粒子场
pub struct ParticleField<S: RenderSurface, R: RandomSource> {
    config: ParticleConfig,
    viewport: Viewport,
    device: DeviceClass,
    reduced_motion: bool,
    pointer: Vec2,
    sparks: Vec<Spark>,
    embers: Vec<Ember>,
    spark_surface: Option<S>,
    ember_surface: Option<S>,
    rng: R,
    state: FieldState,
    frame_pending: bool,
    stats: FieldStats,
}

impl<S: RenderSurface, R: RandomSource> ParticleField<S, R> {
    /// 创建粒子场
    ///
    /// 两个粒子群都为空；表面按视口调整尺寸。
    pub fn new(
        config: &FxConfig,
        environment: Environment,
        surfaces: FieldSurfaces<S>,
        rng: R,
    ) -> Self {
        let viewport = environment.viewport;
        let mut field = Self {
            config: config.particles.clone(),
            viewport,
            device: environment.device,
            reduced_motion: environment.reduced_motion,
            pointer: viewport.point_at(config.display.pointer_origin),
            sparks: Vec::new(),
            embers: Vec::new(),
            spark_surface: surfaces.sparks,
            ember_surface: surfaces.embers,
            rng,
            state: FieldState::Idle,
            frame_pending: false,
            stats: FieldStats::default(),
        };
        field.resize_surfaces();
        field
    }

    /// 启动动画
    ///
    /// 返回是否真正启动。减少动态效果时不会申请任何帧，两个粒子群保持为空。
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> bool {
        match self.state {
            FieldState::Running => return true,
            FieldState::Suppressed => return false,
            FieldState::Idle | FieldState::Stopped => {}
        }

        if self.reduced_motion {
            tracing::info!(
                target: "particles",
                "Reduced motion requested, particle field disabled"
            );
            self.state = FieldState::Suppressed;
            return false;
        }

        if self.spark_surface.is_none() && self.ember_surface.is_none() {
            tracing::warn!(
                target: "particles",
                "No render surface available, particle field disabled"
            );
            self.state = FieldState::Suppressed;
            return false;
        }

        if self.ember_surface.is_some() {
            let target = self.ember_target();
            while self.embers.len() < target {
                self.embers.push(Ember::spawn(&mut self.rng, &self.viewport));
                self.stats.embers_spawned += 1;
            }
        }

        tracing::debug!(
            target: "particles",
            device = ?self.device,
            embers = self.embers.len(),
            sparks_per_tick = self.sparks_per_tick(),
            "Particle field started"
        );

        self.state = FieldState::Running;
        self.arm(scheduler);
        true
    }

    /// 停止动画
    pub fn stop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if self.state != FieldState::Running {
            return;
        }
        if self.frame_pending {
            scheduler.cancel_frame();
            self.frame_pending = false;
        }
        self.state = FieldState::Stopped;
        tracing::debug!(target: "particles", ticks = self.stats.ticks, "Particle field stopped");
    }

    /// 执行一个tick
    ///
    /// `now_ms` 是页面的高精度时钟（毫秒），驱动余烬的摆动和闪烁相位。
    pub fn tick<F: FrameScheduler + ?Sized>(&mut self, now_ms: f64, scheduler: &mut F) {
        if self.state != FieldState::Running {
            return;
        }
        self.frame_pending = false;

        let (w, h) = (self.viewport.width, self.viewport.height);
        if let Some(surface) = self.spark_surface.as_mut() {
            surface.clear(w, h);
        }
        if let Some(surface) = self.ember_surface.as_mut() {
            surface.clear(w, h);
        }

        self.update_sparks();
        self.update_embers(now_ms);

        self.stats.ticks += 1;
        tracing::trace!(
            target: "particles",
            tick = self.stats.ticks,
            sparks = self.sparks.len(),
            embers = self.embers.len(),
            "Tick"
        );

        self.arm(scheduler);
    }

    /// 视口或设备像素比变化
    ///
    /// 只调整表面，不重新归一化粒子位置。
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.resize_surfaces();
        tracing::debug!(
            target: "particles",
            width = viewport.width,
            height = viewport.height,
            pixel_ratio = viewport.pixel_ratio,
            "Particle surfaces resized"
        );
    }

    /// 记录最新的指针位置
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// 直接放入一个火花
    pub fn insert_spark(&mut self, spark: Spark) {
        self.sparks.push(spark);
    }

    /// 直接放入一个余烬
    pub fn insert_ember(&mut self, ember: Ember) {
        self.embers.push(ember);
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn spark_surface(&self) -> Option<&S> {
        self.spark_surface.as_ref()
    }

    pub fn ember_surface(&self) -> Option<&S> {
        self.ember_surface.as_ref()
    }

    /// 每tick最多生成的火花数
    pub fn sparks_per_tick(&self) -> u32 {
        self.config.sparks.per_tick(self.device)
    }

    /// 余烬目标数量
    pub fn ember_target(&self) -> usize {
        self.config.embers.target(self.device) as usize
    }

    fn arm<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if !self.frame_pending {
            scheduler.request_frame();
            self.frame_pending = true;
        }
    }

    fn resize_surfaces(&mut self) {
        if let Some(surface) = self.spark_surface.as_mut() {
            surface.resize(&self.viewport);
        }
        if let Some(surface) = self.ember_surface.as_mut() {
            surface.resize(&self.viewport);
        }
    }

    fn update_sparks(&mut self) {
        let Some(surface) = self.spark_surface.as_mut() else {
            return;
        };
        let config = &self.config.sparks;

        if self.rng.chance(config.spawn_chance) {
            let count = spawn_count(&mut self.rng, config.per_tick(self.device));
            for _ in 0..count {
                self.sparks.push(Spark::spawn(&mut self.rng, &self.viewport));
            }
            self.stats.sparks_spawned += u64::from(count);
        }

        let viewport = &self.viewport;
        let mut culled = 0u64;
        self.sparks.retain_mut(|spark| {
            spark.advance(config);
            spark.draw(&mut *surface, config);
            let keep = !spark.is_expired(viewport, config);
            if !keep {
                culled += 1;
            }
            keep
        });
        self.stats.sparks_culled += culled;
    }

    fn update_embers(&mut self, now_ms: f64) {
        let Some(surface) = self.ember_surface.as_mut() else {
            return;
        };
        let config = &self.config.embers;
        let pointer = self.pointer;

        for ember in self.embers.iter_mut() {
            ember.advance(now_ms, pointer, config);
            ember.draw(&mut *surface, now_ms, config);

            if ember.is_expired(&self.viewport, config) {
                *ember = Ember::spawn(&mut self.rng, &self.viewport);
                self.stats.embers_spawned += 1;
                self.stats.embers_respawned += 1;
            }
        }
    }
}
