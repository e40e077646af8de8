//! 分享与复制链接
//!
//! 有系统分享面板时使用分享面板（失败忽略），否则退化为复制页面地址。
//! 剪贴板和分享面板都是异步的；这里只给出结果，由调用方决定闪现哪条提示。

use super::note::FlashNote;
use std::future::Future;
use thiserror::Error;

pub const PAGE_LINK_COPIED: &str = "Copied page link.";
pub const ALL_LINKS_COPIED: &str = "Copied all links.";
pub const COPY_UNAVAILABLE: &str = "Copy not available.";

/// 剪贴板错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// 分享错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Share dismissed")]
    Dismissed,

    #[error("Share failed: {0}")]
    Failed(String),
}

pub trait Clipboard {
    type Write: Future<Output = Result<(), ClipboardError>>;

    fn write_text(&mut self, text: &str) -> Self::Write;
}

pub trait ShareSheet {
    type Share: Future<Output = Result<(), ShareError>>;

    /// 平台是否提供分享面板
    fn is_available(&self) -> bool;
    fn share(&mut self, data: &ShareData) -> Self::Share;
}

/// 分享内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: "The J3ss Express \u{2014} Link Hub".to_string(),
            url: url.into(),
        }
    }
}

/// 分享/复制结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// 分享面板已打开
    Shared,
    /// 分享面板失败或被关闭，静默忽略
    ShareIgnored,
    /// 已复制页面地址
    PageLinkCopied,
    /// 已复制页面上的全部链接
    AllLinksCopied,
    /// 复制失败
    CopyUnavailable,
}

impl ShareOutcome {
    /// 需要闪现的提示
    pub fn note(self) -> Option<&'static str> {
        match self {
            Self::Shared | Self::ShareIgnored => None,
            Self::PageLinkCopied => Some(PAGE_LINK_COPIED),
            Self::AllLinksCopied => Some(ALL_LINKS_COPIED),
            Self::CopyUnavailable => Some(COPY_UNAVAILABLE),
        }
    }

    /// 把提示闪现到 `note` 上，返回是否闪现
    pub fn flash(self, note: &mut FlashNote, now_ms: f64) -> bool {
        match self.note() {
            Some(message) => {
                note.flash(message, now_ms);
                true
            }
            None => false,
        }
    }
}

/// 分享当前页面
pub async fn share_page<S, C>(data: &ShareData, sheet: &mut S, clipboard: &mut C) -> ShareOutcome
where
    S: ShareSheet + ?Sized,
    C: Clipboard + ?Sized,
{
    if sheet.is_available() {
        return match sheet.share(data).await {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                tracing::debug!(target: "hud", "Share sheet failed: {}", e);
                ShareOutcome::ShareIgnored
            }
        };
    }

    match clipboard.write_text(&data.url).await {
        Ok(()) => ShareOutcome::PageLinkCopied,
        Err(e) => {
            tracing::debug!(target: "hud", "Clipboard write failed: {}", e);
            ShareOutcome::CopyUnavailable
        }
    }
}

/// 收集页面链接
///
/// 跳过空地址和 `javascript:` 伪链接，按行拼接。
pub fn collect_links<'a, I>(hrefs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs
        .into_iter()
        .filter(|href| !href.is_empty() && !href.starts_with("javascript:"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 复制页面上的所有链接
pub async fn copy_all_links<'a, I, C>(hrefs: I, clipboard: &mut C) -> ShareOutcome
where
    I: IntoIterator<Item = &'a str>,
    C: Clipboard + ?Sized,
{
    let text = collect_links(hrefs);
    match clipboard.write_text(&text).await {
        Ok(()) => ShareOutcome::AllLinksCopied,
        Err(e) => {
            tracing::debug!(target: "hud", "Clipboard write failed: {}", e);
            ShareOutcome::CopyUnavailable
        }
    }
}
