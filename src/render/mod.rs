//! Rendering surface abstraction and rasterization primitives.
//!
//! Charts draw through the [`Surface`] trait rather than a concrete pixel
//! buffer, so layout and draw sequencing can be tested without any
//! rendering dependency. [`Framebuffer`](crate::framebuffer::Framebuffer)
//! is the production implementation.

mod primitives;

pub use primitives::draw_line;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::text;

/// A drawing target for chart rendering.
///
/// Coordinates are in pixels with the origin at the top-left; drawing
/// outside the surface bounds is clipped, never an error.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba);

    /// Draw a one-pixel line between two points.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba);

    /// Draw a text string with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba);

    /// Outline an axis-aligned rectangle.
    fn rect_outline(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        if w == 0 || h == 0 {
            return;
        }
        let x1 = x + w as i32 - 1;
        let y1 = y + h as i32 - 1;
        self.draw_line(x, y, x1, y, color);
        self.draw_line(x, y1, x1, y1, color);
        self.draw_line(x, y, x, y1, color);
        self.draw_line(x1, y, x1, y1, color);
    }
}

impl Surface for Framebuffer {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        // Clip negative origins before converting to buffer coordinates
        let (x0, w) = clip_axis(x, w);
        let (y0, h) = clip_axis(y, h);
        Framebuffer::fill_rect(self, x0, y0, w, h, color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        draw_line(self, x0, y0, x1, y1, color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        text::draw_text(self, x, y, text, color);
    }
}

/// Clip one axis of a rectangle against the surface origin.
fn clip_axis(origin: i32, extent: u32) -> (u32, u32) {
    if origin >= 0 {
        (origin as u32, extent)
    } else {
        let cut = origin.unsigned_abs();
        (0, extent.saturating_sub(cut))
    }
}
