//! Browser collaborators: requestAnimationFrame, DOM screens, canvas 2D

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement, Window};

use super::{Display, FrameClock, FrameHandle};
use crate::renderer::{Color, RenderSurface, Sprite};
use crate::sim::Rect;

/// The frame callback shared by every scheduled frame
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame-backed clock
pub struct WebClock {
    window: Window,
    callback: FrameCallback,
}

impl WebClock {
    /// The callback slot is filled after the game exists, since the closure captures it
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameClock for WebClock {
    fn request_frame(&mut self) -> FrameHandle {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before the callback was installed");
            return FrameHandle(-1);
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(i64::from(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                FrameHandle(-1)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Ok(id) = i32::try_from(handle.0) {
            if id >= 0 {
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame({}) failed: {:?}", id, e);
                }
            }
        }
    }
}

fn set_display(element: &Option<HtmlElement>, value: &str) {
    if let Some(el) = element {
        if let Err(e) = el.style().set_property("display", value) {
            log::warn!("Setting display to {} failed: {:?}", value, e);
        }
    }
}

fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// The crash message line, created at the top of the game-over screen if the page lacks one
///
/// Kept apart from the screen's other paragraphs, which may hold `#score-result`.
fn message_element(document: &Document, screen: Option<&HtmlElement>) -> Option<HtmlElement> {
    if let Some(el) = find(document, "#game-over-message") {
        return Some(el);
    }
    let screen = screen?;
    let el = match document.create_element("p") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("Creating game-over message failed: {:?}", e);
            return None;
        }
    };
    el.set_id("game-over-message");
    if let Err(e) = screen.insert_before(&el, screen.first_child().as_ref()) {
        log::warn!("Inserting game-over message failed: {:?}", e);
        return None;
    }
    el.dyn_into::<HtmlElement>().ok()
}

/// Start / game-over screens in the page
pub struct DomDisplay {
    canvas: Option<HtmlElement>,
    start_screen: Option<HtmlElement>,
    game_over_screen: Option<HtmlElement>,
    game_over_message: Option<HtmlElement>,
    score_result: Option<HtmlElement>,
}

impl DomDisplay {
    pub fn new(document: &Document) -> Self {
        let game_over_screen = find(document, ".game-over-screen");
        Self {
            canvas: find(document, "#canvas"),
            start_screen: find(document, ".start-screen"),
            game_over_message: message_element(document, game_over_screen.as_ref()),
            game_over_screen,
            score_result: find(document, "#score-result"),
        }
    }
}

impl Display for DomDisplay {
    fn show_start(&mut self) {
        set_display(&self.start_screen, "block");
        set_display(&self.game_over_screen, "none");
    }

    fn show_running(&mut self) {
        set_display(&self.canvas, "block");
        set_display(&self.start_screen, "none");
        set_display(&self.game_over_screen, "none");
    }

    fn show_game_over(&mut self, score: u64, message: &str) {
        set_display(&self.game_over_screen, "block");
        if let Some(el) = &self.game_over_message {
            el.set_text_content(Some(message));
        }
        if let Some(el) = &self.score_result {
            el.set_text_content(Some(&format!(" {score}")));
        }
    }
}

/// Canvas 2D render surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    player: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Size the canvas to the viewport and start loading sprites
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        // Loading is not awaited; frames skip the sprite until it arrives
        let player = HtmlImageElement::new().ok().map(|img| {
            img.set_src(Sprite::Player.path());
            img
        });

        Ok(Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
            player,
        })
    }

    fn image(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        match sprite {
            Sprite::Player => self.player.as_ref(),
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let Some(img) = self.image(sprite) else {
            return;
        };
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            f64::from(rect.pos.x),
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        ) {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            f64::from(rect.pos.x),
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(font);
        self.ctx.set_text_align("left");
        if let Err(e) = self.ctx.fill_text(text, f64::from(x), f64::from(y)) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
