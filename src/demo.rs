//! Demo module draws reusable scenes for the demo binary and benchmarks
//!
//! # Examples
//!
//! ```
//! use soft_renderer::config::RenderConfig;
//! use soft_renderer::core::RenderContext;
//! use soft_renderer::demo::draw_shapes;
//!
//! let mut ctx = RenderContext::with_display_size(&RenderConfig::default(), 64, 48).unwrap();
//! draw_shapes(&mut ctx, 0);
//! ```

use crate::core::{Flip, Image, RenderContext};
use crate::math::{
    div_factor, fade, Circle, Color, Line, Point, Rect, Size, BLUE, GREEN, PINK, RED, WHITE, YELLOW,
};

/// Point orbiting the display center, used as a stand-in for the mouse cursor
pub fn orbit_point(ctx: &RenderContext, frame: u64) -> Point {
    let center = ctx.display_center();
    let radius = center.min_element() as f32 * 0.5;
    let angle = frame as f32 * 0.05;

    center + Point::new((angle.cos() * radius) as i32, (angle.sin() * radius) as i32)
}

/// Centered square, a filled circle on the orbit point and lines from each corner to it
pub fn draw_shapes(ctx: &mut RenderContext, frame: u64) {
    let size = ctx.display_size();
    let center = ctx.display_center();
    let target = orbit_point(ctx, frame);
    let quarter = div_factor(size, 4.0);

    ctx.draw_rectangle(Rect::new(center - quarter / 2, quarter), RED);
    ctx.draw_rectangle_lines(Rect::new(center - quarter, quarter * 2), BLUE);

    let radius = (size.min_element() / 10).max(1);
    ctx.draw_circle(Circle::new(target, radius), RED);
    ctx.draw_circle_lines(Circle::new(center, radius * 3), PINK);

    for corner in [Point::ZERO, Point::new(0, size.y), Point::new(size.x, 0), size] {
        ctx.draw_line(Line::new(corner, target), GREEN);
    }

    ctx.draw_bezier(
        Point::new(0, size.y / 2),
        Point::new(size.x, size.y / 2),
        Point::new(size.x / 2, 0),
        32,
        YELLOW,
    );
}

/// Translucent band across the middle, showing the blend rule
pub fn draw_overlay(ctx: &mut RenderContext) {
    let size = ctx.display_size();
    let band = Rect::new(Point::new(0, size.y / 3), Size::new(size.x, size.y / 3));
    ctx.draw_rectangle(band, fade(Color::new(0, 0, 0, 255), 0.25));
}

/// Blit `image` centered on the display
pub fn draw_centered_image(ctx: &mut RenderContext, image: &Image, flip: Flip) {
    let center = ctx.display_center();
    ctx.draw_image_ex(image, center, div_factor(image.size(), 2.0), flip, WHITE);
}

/// One full demo frame
pub fn draw_frame(ctx: &mut RenderContext, clear: Color, frame: u64, image: Option<(&Image, Flip)>) {
    ctx.clear_buffer();
    ctx.clear_buffer_color(clear);
    draw_shapes(ctx, frame);
    draw_overlay(ctx);

    if let Some((image, flip)) = image {
        draw_centered_image(ctx, image, flip);
    }
}
