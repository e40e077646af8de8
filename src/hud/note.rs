//! 状态提示
//!
//! 闪现一条消息，1400 毫秒后恢复为之前的文本。

/// 提示持续时间（毫秒）
pub const FLASH_DURATION_MS: f64 = 1400.0;

/// 会自动恢复的状态提示
#[derive(Debug, Clone, PartialEq)]
pub struct FlashNote {
    text: String,
    restore: Option<Restore>,
}

#[derive(Debug, Clone, PartialEq)]
struct Restore {
    text: String,
    deadline_ms: f64,
}

impl FlashNote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            restore: None,
        }
    }

    /// 当前显示的文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 是否正在显示临时消息
    pub fn is_flashing(&self) -> bool {
        self.restore.is_some()
    }

    /// 闪现消息
    ///
    /// 连续闪现时恢复目标始终是第一次闪现之前的文本，截止时间顺延。
    pub fn flash(&mut self, message: impl Into<String>, now_ms: f64) {
        let message = message.into();
        tracing::debug!(target: "hud", message = %message, "Flash note");

        let original = match self.restore.take() {
            Some(restore) => restore.text,
            None => std::mem::take(&mut self.text),
        };
        self.restore = Some(Restore {
            text: original,
            deadline_ms: now_ms + FLASH_DURATION_MS,
        });
        self.text = message;
    }

    /// 到期则恢复，返回是否发生了恢复
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let due = matches!(&self.restore, Some(restore) if now_ms >= restore.deadline_ms);
        if !due {
            return false;
        }
        if let Some(restore) = self.restore.take() {
            self.text = restore.text;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverts_after_duration() {
        let mut note = FlashNote::new("Say hello.");
        note.flash("Copied all links.", 1000.0);
        assert_eq!(note.text(), "Copied all links.");

        assert!(!note.poll(2399.0));
        assert_eq!(note.text(), "Copied all links.");

        assert!(note.poll(2400.0));
        assert_eq!(note.text(), "Say hello.");
        assert!(!note.is_flashing());
    }

    #[test]
    fn test_reflash_keeps_original() {
        let mut note = FlashNote::new("idle");
        note.flash("first", 0.0);
        note.flash("second", 1000.0);

        assert!(!note.poll(1400.0));
        assert_eq!(note.text(), "second");
        assert!(note.poll(2400.0));
        assert_eq!(note.text(), "idle");
    }
}
