//! Rendering module
//!
//! The simulation never draws directly. Each frame is submitted to a
//! [`RenderSurface`], which the platform provides (a browser canvas, or a
//! recording [`DrawList`] natively and in tests).

pub mod draw_list;
pub mod frame;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::draw_frame;

use crate::sim::Rect;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS hex form (`#rrggbb`), alpha ignored
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// The flyer
    Player,
}

impl Sprite {
    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Player => "assets/img/Fly.png",
        }
    }
}

/// A 2D drawing target
///
/// Every call is fire-and-forget: a surface that cannot draw something
/// (missing image, lost context) skips it without failing the frame.
pub trait RenderSurface {
    /// Wipe the whole surface
    fn clear(&mut self);
    /// Draw an image stretched to `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Fill `rect` with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw left-aligned text with its baseline at `(x, y)`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}
