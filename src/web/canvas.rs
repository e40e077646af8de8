//! 2D 画布表面

use crate::core::error::{SurfaceError, SurfaceResult};
use crate::render::surface::{Hsla, RenderSurface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// 基于 `<canvas>` 的渲染表面
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// 按元素 id 获取画布和 2D 上下文
    pub fn from_element_id(document: &Document, id: &str) -> SurfaceResult<Self> {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::ContextUnavailable(id.to_string()))?;

        Ok(Self { canvas, context })
    }
}

impl RenderSurface for CanvasSurface {
    fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.backing_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width));
        let _ = style.set_property("height", &format!("{}px", viewport.height));

        let ratio = viewport.pixel_ratio as f64;
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        let context = &self.context;
        context.begin_path();
        context.set_stroke_style_str(&color.to_string());
        context.set_line_width(width as f64);
        context.move_to(from.x as f64, from.y as f64);
        context.line_to(to.x as f64, to.y as f64);
        context.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        let context = &self.context;
        context.begin_path();
        context.set_fill_style_str(&color.to_string());
        // 半径总是正数，arc 不会失败
        let _ = context.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        context.fill();
    }
}
