//! 页面 HUD 逻辑
//!
//! 时钟、状态提示、环境音开关、分享/复制链接和仅前端的联系表单。
//! 这些都是尽力而为的用户操作：失败被吞掉，最多闪现一条状态提示。
//! DOM 相关的部分通过小 trait 抽象，便于原生测试。

pub mod ambience;
pub mod clock;
pub mod contact;
pub mod note;
pub mod share;

pub use ambience::{AmbienceError, AmbiencePlayer, AmbienceToggle, AMBIENCE_VOLUME};
pub use clock::{format_clock, CLOCK_REFRESH_MS};
pub use contact::{submit_contact, ContactForm};
pub use note::{FlashNote, FLASH_DURATION_MS};
pub use share::{
    collect_links, copy_all_links, share_page, Clipboard, ClipboardError, ShareData, ShareError,
    ShareOutcome, ShareSheet,
};
