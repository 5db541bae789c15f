//! Canvas 2D surface

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};

/// Canvas 2D context plus the three sprite images
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: [Option<HtmlImageElement>; 3],
}

impl CanvasSurface {
    /// Grab the 2D context and start loading the sprite images
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let images = Sprite::ALL.map(|sprite| {
            let image = HtmlImageElement::new().ok()?;
            image.set_src(sprite.path());
            Some(image)
        });

        Ok(Self { ctx, images })
    }

    fn image(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        let index = match sprite {
            Sprite::Player => 0,
            Sprite::Gift => 1,
            Sprite::Obstacle => 2,
        };
        self.images[index]
            .as_ref()
            // Broken or still-loading images are skipped
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ctx.set_fill_style_str("white");
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        if let Some(image) = self.image(sprite) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image, x as f64, y as f64, w as f64, h as f64,
            );
        }
    }
}
