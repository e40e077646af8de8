//! 粒子效果模块
//!
//! 铁轨火花和环境余烬，完全在 CPU 上按帧模拟，通过 [`RenderSurface`] 绘制。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     ParticleField                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Spawn                                                │
//! │     - 火花：每tick按概率生成 1..=N 个                      │
//! │     - 余烬：启动时预填充，过期即原地替换                     │
//! │                                                          │
//! │  2. Simulation                                           │
//! │     - 火花：线性运动 + 重力 + 指数衰减                      │
//! │     - 余烬：线性运动 + 正弦摆动 + 指针吸引                   │
//! │                                                          │
//! │  3. Rendering                                            │
//! │     - 火花表面：拖尾线段 + 发光点                           │
//! │     - 余烬表面：闪烁圆点                                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use express_fx::config::FxConfig;
//! use express_fx::core::scheduler::ManualScheduler;
//! use express_fx::platform::Environment;
//! use express_fx::render::particles::{FieldSurfaces, ParticleField, SeededRandom};
//! use express_fx::render::surface::RecordingSurface;
//!
//! let config = FxConfig::default();
//! let environment = Environment::headless(&config.display);
//! let mut scheduler = ManualScheduler::new();
//! let mut field = ParticleField::new(
//!     &config,
//!     environment,
//!     FieldSurfaces::both(RecordingSurface::new(), RecordingSurface::new()),
//!     SeededRandom::from_seed(1),
//! );
//!
//! assert!(field.start(&mut scheduler));
//! while scheduler.take_pending() && field.stats().ticks < 3 {
//!     field.tick(field.stats().ticks as f64 * 16.0, &mut scheduler);
//! }
//! assert_eq!(field.embers().len(), 95);
//! ```
//!
//! [`RenderSurface`]: crate::render::surface::RenderSurface

pub mod ember;
pub mod field;
pub mod random;
pub mod spark;

pub use ember::Ember;
pub use field::{FieldState, FieldStats, FieldSurfaces, ParticleField};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use spark::Spark;
