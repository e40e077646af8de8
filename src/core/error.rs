//! 统一错误处理模块
//!
//! 粒子动画本身是纯计算，没有失败路径；错误只出现在以下边界：
//!
//! - **配置**：文件读取、解析、校验 (`config::ConfigError`)
//! - **渲染表面**：画布元素缺失或无法获取 2D 上下文 (`SurfaceError`)
//! - **平台**：浏览器环境探测失败 (`FxError::Platform`)
//!
//! 页面上的尽力而为操作（音频、剪贴板、分享）有各自的错误类型，
//! 定义在 `hud` 模块中，并且总是被吞掉。

use crate::config::ConfigError;
use thiserror::Error;

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 渲染表面错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Surface element not found: #{0}")]
    NotFound(String),

    #[error("2D context unavailable for #{0}")]
    ContextUnavailable(String),
}

pub type FxResult<T> = Result<T, FxError>;
pub type SurfaceResult<T> = Result<T, SurfaceError>;
