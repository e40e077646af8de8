//! 仅前端的联系表单
//!
//! 提交只在本地确认并清空表单，不发送任何数据。

use super::note::FlashNote;

/// 提交后显示的提示
pub const CAPTURED_NOTE: &str = "Captured locally - connect this to email/webhook next.";

/// 可重置的表单
pub trait ContactForm {
    fn reset(&mut self);
}

/// 处理提交
pub fn submit_contact<F: ContactForm + ?Sized>(form: &mut F, note: &mut FlashNote, now_ms: f64) {
    note.flash(CAPTURED_NOTE, now_ms);
    form.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Draft {
        message: String,
    }

    impl ContactForm for Draft {
        fn reset(&mut self) {
            self.message.clear();
        }
    }

    #[test]
    fn test_submit_resets_and_flashes() {
        let mut draft = Draft {
            message: "All aboard".to_string(),
        };
        let mut note = FlashNote::new("");
        submit_contact(&mut draft, &mut note, 0.0);

        assert!(draft.message.is_empty());
        assert_eq!(note.text(), CAPTURED_NOTE);
        assert!(note.poll(1400.0));
        assert_eq!(note.text(), "");
    }
}
