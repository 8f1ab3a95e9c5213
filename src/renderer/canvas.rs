//! Canvas 2D backend (WASM only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{DrawCmd, Renderer};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprite: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, sprite: None })
    }

    /// Start loading the player sprite; the fallback color is used until it completes
    pub fn load_sprite(&mut self, src: &str) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        self.sprite = Some(image);
        Ok(())
    }

    fn draw(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match *cmd {
            DrawCmd::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
            }
            DrawCmd::FillRect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::StrokeRect { x, y, w, h, color } => {
                ctx.set_stroke_style_str(color);
                ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::Sprite { x, y, w, h, fallback } => match &self.sprite {
                Some(image) if image.complete() && image.natural_width() > 0 => {
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        image, x as f64, y as f64, w as f64, h as f64,
                    )?;
                }
                _ => {
                    ctx.set_fill_style_str(fallback);
                    ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
                }
            },
            DrawCmd::Text { text, x, y, font } => {
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.fill_text(text, x as f64, y as f64)?;
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            if let Err(e) = self.draw(cmd) {
                log::warn!("Draw error: {:?}", e);
            }
        }
    }
}
