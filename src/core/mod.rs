//! 核心模块
//!
//! - `error` - 错误类型定义
//! - `scheduler` - 帧调度
//! - `logging` - 日志初始化
//! - `runner` - 无界面运行器

pub mod error;
pub mod logging;
pub mod runner;
pub mod scheduler;
#[macro_use]
pub mod macros;

pub use error::{FxError, FxResult, SurfaceError, SurfaceResult};
pub use logging::initialize_logging;
pub use runner::{RunSummary, Runner};
pub use scheduler::{FrameScheduler, ManualScheduler};
