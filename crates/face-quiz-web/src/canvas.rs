//! Replays a frame's draw list onto a 2D canvas.

use std::collections::HashMap;

use face_quiz::{DrawCommand, DrawList};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Image elements by URL. Pruned to the URLs of the last painted frame.
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images: HashMap::new(),
        })
    }

    pub fn paint(&mut self, list: &DrawList) -> Result<(), JsValue> {
        for command in list.commands() {
            match command {
                DrawCommand::Clear => {
                    self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
                }
                DrawCommand::FillRect { pos, size, color } => {
                    self.ctx.set_fill_style_str(&color.as_css());
                    self.ctx
                        .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::StrokeRect { pos, size, color, line_width } => {
                    self.ctx.set_stroke_style_str(&color.as_css());
                    self.ctx.set_line_width(*line_width as f64);
                    self.ctx
                        .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::Image { url, pos, size } => {
                    let image = self.image(url)?;
                    // Still loading or broken: leave the slot empty this frame.
                    if !image.complete() || image.natural_width() == 0 {
                        continue;
                    }
                    self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        &image,
                        pos.x as f64,
                        pos.y as f64,
                        size.x as f64,
                        size.y as f64,
                    )?;
                }
                DrawCommand::Text { text, pos, style } => {
                    self.ctx.set_font(&style.font());
                    self.ctx.set_fill_style_str(&style.color.as_css());
                    self.ctx.set_text_align(style.align.as_css());
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        self.images
            .retain(|url, _| list.image_urls().any(|used| used == url));
        Ok(())
    }

    /// Cached image element for `url`, created and started loading on first use.
    fn image(&mut self, url: &str) -> Result<HtmlImageElement, JsValue> {
        if let Some(image) = self.images.get(url) {
            return Ok(image.clone());
        }
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        log::debug!("loading image {}", url);
        self.images.insert(url.to_owned(), image.clone());
        Ok(image)
    }
}
