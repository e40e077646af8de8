//! 浏览器绑定
//!
//! 把粒子场接到页面上：`#sparks` / `#embers` 两个画布、指针移动、窗口尺寸变化，
//! `#year` / `#localTime` 两处文本，以及 [`page`] 中的页面操作。

mod canvas;
mod frame;
pub mod page;

pub use canvas::CanvasSurface;
pub use frame::{FrameCallback, RafScheduler};
pub use page::{AudioPlayer, BrowserClipboard, BrowserShareSheet, Pending};

use crate::config::FxConfig;
use crate::core::error::{FxError, FxResult};
use crate::hud::{format_clock, CLOCK_REFRESH_MS};
use crate::platform::{DeviceClass, Environment};
use crate::render::particles::{FieldSurfaces, ParticleField, SeededRandom};
use crate::render::surface::Viewport;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, PointerEvent, Window};

type WebField = ParticleField<CanvasSurface, SeededRandom>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = start_page() {
        warn(&e.to_string());
    }
}

/// 启动页面效果
pub fn start_page() -> FxResult<()> {
    let window =
        web_sys::window().ok_or_else(|| FxError::Platform("window unavailable".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| FxError::Platform("document unavailable".to_string()))?;

    install_clock(&window, &document);
    if let Err(e) = page::install(&window, &document) {
        warn(&e.to_string());
    }

    let config = FxConfig::default();
    let environment = probe_environment(&window, &config);

    let sparks = CanvasSurface::from_element_id(&document, "sparks")
        .map_err(|e| warn(&e.to_string()))
        .ok();
    let embers = CanvasSurface::from_element_id(&document, "embers")
        .map_err(|e| warn(&e.to_string()))
        .ok();

    let field: Rc<RefCell<WebField>> = Rc::new(RefCell::new(ParticleField::new(
        &config,
        environment,
        FieldSurfaces::new(sparks, embers),
        SeededRandom::from_entropy(),
    )));

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = Rc::new(RefCell::new(RafScheduler::new(
        window.clone(),
        callback.clone(),
    )));

    {
        let field = field.clone();
        let scheduler = scheduler.clone();
        let performance = window.performance();
        // 回调经由调度器持有自身，页面存活期间一直有效
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now_ms = performance.as_ref().map_or(0.0, |p| p.now());
            field.borrow_mut().tick(now_ms, &mut *scheduler.borrow_mut());
        }) as Box<dyn FnMut()>));
    }

    if !field.borrow_mut().start(&mut *scheduler.borrow_mut()) {
        return Ok(());
    }

    install_listeners(&window, field, config.display.max_pixel_ratio)
}

fn probe_environment(window: &Window, config: &FxConfig) -> Environment {
    let reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map_or(false, |query| query.matches());

    let device = window
        .navigator()
        .user_agent()
        .map(|ua| DeviceClass::from_user_agent(&ua))
        .unwrap_or_default();

    Environment::new(
        read_viewport(window, config.display.max_pixel_ratio),
        device,
        reduced_motion,
    )
}

fn read_viewport(window: &Window, max_pixel_ratio: f32) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
        max_pixel_ratio,
    )
}

fn install_listeners(
    window: &Window,
    field: Rc<RefCell<WebField>>,
    max_pixel_ratio: f32,
) -> FxResult<()> {
    let on_pointer = {
        let field = field.clone();
        Closure::wrap(Box::new(move |event: PointerEvent| {
            let position = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            field.borrow_mut().pointer_moved(position);
        }) as Box<dyn FnMut(PointerEvent)>)
    };
    window
        .add_event_listener_with_callback("pointermove", on_pointer.as_ref().unchecked_ref())
        .map_err(|_| FxError::Platform("pointermove listener rejected".to_string()))?;
    on_pointer.forget();

    let on_resize = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let viewport = read_viewport(&window, max_pixel_ratio);
            field.borrow_mut().resize(viewport);
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|_| FxError::Platform("resize listener rejected".to_string()))?;
    on_resize.forget();

    Ok(())
}

fn install_clock(window: &Window, document: &Document) {
    let now = js_sys::Date::new_0();
    if let Some(year) = document.get_element_by_id("year") {
        year.set_text_content(Some(&now.get_full_year().to_string()));
    }

    let Some(time) = document.get_element_by_id("localTime") else {
        return;
    };
    let tick_clock = move || {
        let now = js_sys::Date::new_0();
        time.set_text_content(Some(&format_clock(now.get_hours(), now.get_minutes())));
    };
    tick_clock();

    let interval = Closure::wrap(Box::new(tick_clock) as Box<dyn FnMut()>);
    if window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            interval.as_ref().unchecked_ref(),
            CLOCK_REFRESH_MS as i32,
        )
        .is_ok()
    {
        interval.forget();
    }
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
