//! `requestAnimationFrame` 调度器

use crate::core::scheduler::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// 帧回调槽，回调在启动时写入
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// 浏览器帧调度器
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self {
            window,
            callback,
            handle: None,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.handle = Some(handle),
            Err(_) => super::warn("requestAnimationFrame rejected"),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}
