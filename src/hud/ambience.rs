//! 环境音开关
//!
//! 浏览器的自动播放限制可能拒绝播放，此时保持关闭状态，不报错。
//! 播放是异步的：[`AmbienceToggle::toggle`] 交出播放任务，调用方等待后交给
//! [`AmbienceToggle::settle`]，期间不必持有开关本身。

use std::future::Future;
use thiserror::Error;

/// 环境音音量
pub const AMBIENCE_VOLUME: f32 = 0.45;

/// 播放错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmbienceError {
    #[error("Playback blocked: {0}")]
    Blocked(String),

    #[error("Audio element unavailable")]
    Unavailable,
}

/// 音频播放器
pub trait AmbiencePlayer {
    /// 进行中的播放请求
    type Playback: Future<Output = Result<(), AmbienceError>>;

    fn set_volume(&mut self, volume: f32);
    fn play(&mut self) -> Self::Playback;
    fn pause(&mut self);
    /// 回到开头
    fn rewind(&mut self);
}

/// 环境音开关
#[derive(Debug)]
pub struct AmbienceToggle<P: AmbiencePlayer> {
    player: P,
    on: bool,
}

impl<P: AmbiencePlayer> AmbienceToggle<P> {
    pub fn new(mut player: P) -> Self {
        player.set_volume(AMBIENCE_VOLUME);
        Self { player, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// `aria-pressed` 属性值
    pub fn pressed_attr(&self) -> &'static str {
        if self.on {
            "true"
        } else {
            "false"
        }
    }

    /// 切换
    ///
    /// 关闭是同步的，返回 `None`；打开时返回播放任务，结果交给 [`settle`](Self::settle)。
    pub fn toggle(&mut self) -> Option<P::Playback> {
        if self.on {
            self.switch_off();
            None
        } else {
            Some(self.player.play())
        }
    }

    /// 根据播放结果确定状态，返回实际状态
    pub fn settle(&mut self, result: Result<(), AmbienceError>) -> bool {
        match result {
            Ok(()) => self.on = true,
            Err(e) => {
                tracing::debug!(target: "hud", "Ambience playback refused: {}", e);
                self.on = false;
            }
        }
        self.on
    }

    /// 暂停并回到开头
    pub fn switch_off(&mut self) {
        self.player.pause();
        self.player.rewind();
        self.on = false;
    }

    /// 打开或关闭并等待结果，返回实际状态
    pub async fn set(&mut self, on: bool) -> bool {
        if on {
            let result = self.player.play().await;
            self.settle(result)
        } else {
            self.switch_off();
            false
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}
