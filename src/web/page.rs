//! 页面操作
//!
//! 环境音开关 `#audioToggle` / `#ambience`、分享 `#shareBtn`、复制链接 `#copyBtn`
//! 以及联系表单 `#contactForm`，状态提示写到 `#formNote`。
//! 缺少的元素直接跳过对应功能。

use crate::core::error::{FxError, FxResult};
use crate::hud::{
    copy_all_links, share_page, submit_contact, AmbienceError, AmbiencePlayer, AmbienceToggle,
    Clipboard, ClipboardError, ContactForm, FlashNote, ShareData, ShareError, ShareSheet,
    FLASH_DURATION_MS,
};
use js_sys::{Function, Object, Promise, Reflect};
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, HtmlAnchorElement, HtmlAudioElement, HtmlElement, HtmlFormElement,
    Navigator, Window,
};

/// 浏览器 Promise 包装成的任务
pub type Pending<T> = Pin<Box<dyn Future<Output = T>>>;

/// 安装全部页面操作
pub fn install(window: &Window, document: &Document) -> FxResult<()> {
    let board = NoteBoard::new(window, document);

    install_ambience(document)?;
    install_share(window, document, board.clone())?;
    install_copy(window, document, board.clone())?;
    install_contact(document, board)
}

fn install_ambience(document: &Document) -> FxResult<()> {
    let Some(button) = document.get_element_by_id("audioToggle") else {
        return Ok(());
    };
    let player = match AudioPlayer::from_element_id(document, "ambience") {
        Ok(player) => player,
        Err(e) => {
            tracing::debug!(target: "web", "Ambience disabled: {}", e);
            return Ok(());
        }
    };
    let toggle = Rc::new(RefCell::new(AmbienceToggle::new(player)));

    let target = button.clone();
    listen(&button, "click", move |_event| {
        let playback = toggle.borrow_mut().toggle();
        match playback {
            None => render_toggle(&target, &toggle.borrow()),
            Some(playback) => {
                let toggle = toggle.clone();
                let target = target.clone();
                spawn_local(async move {
                    let result = playback.await;
                    toggle.borrow_mut().settle(result);
                    render_toggle(&target, &toggle.borrow());
                });
            }
        }
    })
}

fn render_toggle(button: &Element, toggle: &AmbienceToggle<AudioPlayer>) {
    if button
        .set_attribute("aria-pressed", toggle.pressed_attr())
        .is_err()
    {
        tracing::debug!(target: "web", "aria-pressed rejected");
    }
    let classes = button.class_list();
    let applied = if toggle.is_on() {
        classes.add_1("is-on")
    } else {
        classes.remove_1("is-on")
    };
    if applied.is_err() {
        tracing::debug!(target: "web", "is-on class rejected");
    }
}

fn install_share(window: &Window, document: &Document, board: NoteBoard) -> FxResult<()> {
    let Some(button) = document.get_element_by_id("shareBtn") else {
        return Ok(());
    };
    let navigator = window.navigator();
    let document = document.clone();

    listen(&button, "click", move |event| {
        event.prevent_default();
        let url = document
            .location()
            .and_then(|location| location.href().ok())
            .unwrap_or_default();
        let data = ShareData::new(document.title(), url);
        let mut sheet = BrowserShareSheet::new(navigator.clone());
        let mut clipboard = BrowserClipboard::new(navigator.clone());
        let board = board.clone();
        spawn_local(async move {
            let outcome = share_page(&data, &mut sheet, &mut clipboard).await;
            if let Some(message) = outcome.note() {
                board.flash(message);
            }
        });
    })
}

fn install_copy(window: &Window, document: &Document, board: NoteBoard) -> FxResult<()> {
    let Some(button) = document.get_element_by_id("copyBtn") else {
        return Ok(());
    };
    let navigator = window.navigator();
    let document = document.clone();

    listen(&button, "click", move |event| {
        event.prevent_default();
        let links = page_links(&document);
        let mut clipboard = BrowserClipboard::new(navigator.clone());
        let board = board.clone();
        spawn_local(async move {
            let outcome = copy_all_links(links.iter().map(String::as_str), &mut clipboard).await;
            if let Some(message) = outcome.note() {
                board.flash(message);
            }
        });
    })
}

fn install_contact(document: &Document, board: NoteBoard) -> FxResult<()> {
    let Some(element) = document.get_element_by_id("contactForm") else {
        return Ok(());
    };
    let Ok(form) = element.clone().dyn_into::<HtmlFormElement>() else {
        return Ok(());
    };
    let mut form = PageForm(form);

    listen(&element, "submit", move |event| {
        event.prevent_default();
        board.update(|note, now_ms| submit_contact(&mut form, note, now_ms));
    })
}

/// 页面上所有 `a[href]` 的绝对地址
fn page_links(document: &Document) -> Vec<String> {
    let Ok(nodes) = document.query_selector_all("a[href]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlAnchorElement>().ok())
        .map(|anchor| anchor.href())
        .collect()
}

fn listen<F>(target: &Element, event: &str, handler: F) -> FxResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| FxError::Platform(format!("{} listener rejected", event)))?;
    closure.forget();
    Ok(())
}

/// `#formNote` 上的状态提示
#[derive(Clone)]
struct NoteBoard {
    window: Window,
    element: Option<HtmlElement>,
    note: Rc<RefCell<FlashNote>>,
}

impl NoteBoard {
    fn new(window: &Window, document: &Document) -> Self {
        let element = document
            .get_element_by_id("formNote")
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let text = element
            .as_ref()
            .and_then(|element| element.text_content())
            .unwrap_or_default();
        Self {
            window: window.clone(),
            element,
            note: Rc::new(RefCell::new(FlashNote::new(text))),
        }
    }

    fn flash(&self, message: &str) {
        self.update(|note, now_ms| note.flash(message, now_ms));
    }

    /// 修改提示后刷新元素，并在到期时恢复
    fn update<F: FnOnce(&mut FlashNote, f64)>(&self, change: F) {
        change(&mut self.note.borrow_mut(), self.now_ms());

        let Some(element) = &self.element else {
            return;
        };
        element.set_text_content(Some(self.note.borrow().text()));
        if element.style().set_property("opacity", "1").is_err() {
            tracing::debug!(target: "web", "Note opacity rejected");
        }

        let board = self.clone();
        let revert = Closure::once_into_js(move || board.revert());
        // 计时器按整毫秒触发，多等 1 毫秒保证已到期
        if self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.unchecked_ref(),
                FLASH_DURATION_MS as i32 + 1,
            )
            .is_err()
        {
            tracing::debug!(target: "web", "Note timer rejected");
        }
    }

    fn revert(&self) {
        if !self.note.borrow_mut().poll(self.now_ms()) {
            return;
        }
        if let Some(element) = &self.element {
            element.set_text_content(Some(self.note.borrow().text()));
        }
    }

    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }
}

/// `<audio>` 元素播放器
pub struct AudioPlayer {
    audio: HtmlAudioElement,
}

impl AudioPlayer {
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, AmbienceError> {
        document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok())
            .map(|audio| Self { audio })
            .ok_or(AmbienceError::Unavailable)
    }
}

impl AmbiencePlayer for AudioPlayer {
    type Playback = Pending<Result<(), AmbienceError>>;

    fn set_volume(&mut self, volume: f32) {
        self.audio.set_volume(f64::from(volume));
    }

    fn play(&mut self) -> Self::Playback {
        let started = self.audio.play();
        Box::pin(async move {
            let promise = started.map_err(|e| AmbienceError::Blocked(describe(&e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| AmbienceError::Blocked(describe(&e)))
        })
    }

    fn pause(&mut self) {
        if self.audio.pause().is_err() {
            tracing::debug!(target: "web", "Ambience pause rejected");
        }
    }

    fn rewind(&mut self) {
        self.audio.set_current_time(0.0);
    }
}

/// `navigator.clipboard`
pub struct BrowserClipboard {
    navigator: Navigator,
}

impl BrowserClipboard {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Clipboard for BrowserClipboard {
    type Write = Pending<Result<(), ClipboardError>>;

    fn write_text(&mut self, text: &str) -> Self::Write {
        let call = property(&self.navigator, "clipboard").and_then(|clipboard| {
            method(&clipboard, "writeText")
                .map(|write| write.call1(&clipboard, &JsValue::from_str(text)))
        });
        Box::pin(async move {
            let call = call.ok_or(ClipboardError::Unavailable)?;
            settle(call)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe(&e)))
        })
    }
}

/// `navigator.share`
pub struct BrowserShareSheet {
    navigator: Navigator,
}

impl BrowserShareSheet {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl ShareSheet for BrowserShareSheet {
    type Share = Pending<Result<(), ShareError>>;

    fn is_available(&self) -> bool {
        method(&self.navigator, "share").is_some()
    }

    fn share(&mut self, data: &ShareData) -> Self::Share {
        let payload = Object::new();
        for (key, value) in [
            ("title", &data.title),
            ("text", &data.text),
            ("url", &data.url),
        ] {
            // 普通对象上的赋值不会失败
            let _ = Reflect::set(&payload, &JsValue::from_str(key), &JsValue::from_str(value));
        }
        let call = method(&self.navigator, "share").map(|share| share.call1(&self.navigator, &payload));

        Box::pin(async move {
            let call = call.ok_or_else(|| ShareError::Failed("share unavailable".to_string()))?;
            settle(call).await.map(|_| ()).map_err(|e| {
                if error_name(&e).as_deref() == Some("AbortError") {
                    ShareError::Dismissed
                } else {
                    ShareError::Failed(describe(&e))
                }
            })
        })
    }
}

/// 表单元素
struct PageForm(HtmlFormElement);

impl ContactForm for PageForm {
    fn reset(&mut self) {
        self.0.reset();
    }
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    property(target, name)?.dyn_into::<Function>().ok()
}

/// 等待调用结果；同步抛出和 Promise 拒绝都归为错误
async fn settle(call: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    let value = call?;
    JsFuture::from(Promise::resolve(&value)).await
}

fn error_name(error: &JsValue) -> Option<String> {
    property(error, "name")?.as_string()
}

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| property(error, "message").and_then(|message| message.as_string()))
        .unwrap_or_else(|| format!("{:?}", error))
}
