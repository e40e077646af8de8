//! 帧调度
//!
//! 粒子场由显示刷新回调驱动，任意时刻最多只有一个待处理的帧请求，
//! 每个 tick 结束时重新申请下一帧。浏览器中由 `requestAnimationFrame` 实现，
//! 原生环境和测试中由 [`ManualScheduler`] 驱动。

/// 帧调度器
pub trait FrameScheduler {
    /// 申请在下一次显示刷新时调用 tick
    fn request_frame(&mut self);

    /// 取消尚未执行的帧请求
    fn cancel_frame(&mut self);
}

/// 手动驱动的调度器
///
/// 只记录请求，由调用方决定何时执行下一帧。
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: bool,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有待执行的帧
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// 取出待执行的帧请求
    ///
    /// 返回 `true` 表示调用方应当执行一次 tick。
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// 累计帧请求次数
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// 累计取消次数
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requested += 1;
    }

    fn cancel_frame(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_request_and_take() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.is_pending());

        scheduler.request_frame();
        assert!(scheduler.is_pending());
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_cancel_only_counts_pending() {
        let mut scheduler = ManualScheduler::new();
        scheduler.cancel_frame();
        assert_eq!(scheduler.cancelled(), 0);

        scheduler.request_frame();
        scheduler.cancel_frame();
        assert_eq!(scheduler.cancelled(), 1);
        assert!(!scheduler.is_pending());
    }
}
