//! 渲染模块
//!
//! - `surface` - 渲染表面抽象与录制后端
//! - `particles` - 火花与余烬粒子场

pub mod particles;
pub mod surface;

pub use particles::{FieldState, FieldStats, FieldSurfaces, ParticleField};
pub use surface::{DrawCommand, Hsla, RecordingSurface, RenderSurface, Viewport};
