//! 无界面运行
//!
//! 原生环境没有显示刷新回调，用 [`ManualScheduler`] 按固定帧间隔驱动粒子场，
//! 绘制到录制表面，并输出统计信息。

use super::error::FxResult;
use super::logging::initialize_logging;
use super::scheduler::ManualScheduler;
use crate::config::FxConfig;
use crate::platform::Environment;
use crate::render::particles::{FieldStats, FieldSurfaces, ParticleField, SeededRandom};
use crate::render::surface::RecordingSurface;

/// 一次运行的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 实际执行的帧数
    pub frames: u32,
    pub stats: FieldStats,
    pub sparks_alive: usize,
    pub embers_alive: usize,
    /// 两个表面的累计绘制调用
    pub draw_calls: u64,
}

/// 无界面运行器
pub struct Runner;

impl Runner {
    /// 加载配置、初始化日志并运行
    pub fn run() -> FxResult<RunSummary> {
        let mut config = FxConfig::load_or_default();
        config.apply_env_overrides();
        initialize_logging(&config.logging);
        tracing::info!(target: "runner", "express_fx starting");
        tracing::debug!(target: "config", ?config, "Effective configuration");

        let summary = Self::run_with(&config)?;
        tracing::info!(
            target: "runner",
            frames = summary.frames,
            sparks_spawned = summary.stats.sparks_spawned,
            embers_respawned = summary.stats.embers_respawned,
            draw_calls = summary.draw_calls,
            "express_fx finished"
        );
        Ok(summary)
    }

    /// 使用给定配置运行
    pub fn run_with(config: &FxConfig) -> FxResult<RunSummary> {
        config.validate()?;

        let environment = Environment::headless(&config.display);
        let mut scheduler = ManualScheduler::new();
        let mut field = ParticleField::new(
            config,
            environment,
            FieldSurfaces::both(RecordingSurface::new(), RecordingSurface::new()),
            SeededRandom::from_optional_seed(config.display.seed),
        );

        let mut frames = 0u32;
        if field.start(&mut scheduler) {
            let mut now_ms = 0.0;
            while frames < config.display.headless_frames && scheduler.take_pending() {
                field.tick(now_ms, &mut scheduler);
                frames += 1;
                now_ms += config.display.frame_interval_ms;

                if frames % 120 == 0 {
                    tracing::debug!(
                        target: "runner",
                        frame = frames,
                        sparks = field.sparks().len(),
                        embers = field.embers().len(),
                        "Progress"
                    );
                }
            }
            field.stop(&mut scheduler);
        }

        let draw_calls = field.spark_surface().map_or(0, |s| s.draw_calls())
            + field.ember_surface().map_or(0, |s| s.draw_calls());

        Ok(RunSummary {
            frames,
            stats: field.stats(),
            sparks_alive: field.sparks().len(),
            embers_alive: field.embers().len(),
            draw_calls,
        })
    }
}
