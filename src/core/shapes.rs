use glam::{DVec2, I64Vec2};

use super::render_context::RenderContext;
use crate::math::{pack, Circle, Color, Line, Pixel, Point, Rect};

/// Shape rasterization, every pixel routed through the compositor.
///
/// Coordinates are widened to `i64` before any offset math and loops are
/// clipped to the active buffer, so shapes reaching past the `i32` range
/// clip like any other off-screen geometry.
impl RenderContext {
    /// Fill `[x, x + w) × [y, y + h)`
    pub fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        let Some(target) = self.target_size() else {
            return;
        };

        let pixel = pack(color);
        let start = rect.position.as_i64vec2();
        let end = start + rect.size.as_i64vec2();
        let (min, max) = (start.max(I64Vec2::ZERO), end.min(target));

        for y in min.y..max.y {
            for x in min.x..max.x {
                self.plot(x, y, pixel);
            }
        }
    }

    /// Outline from `position` to `position + size`; corners are shared by two edges
    pub fn draw_rectangle_lines(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let Some(target) = self.target_size() else {
            return;
        };

        let pixel = pack(color);
        let size = rect.size.as_i64vec2();
        let top_left = rect.position.as_i64vec2();
        let top_right = top_left + I64Vec2::new(size.x, 0);
        let bottom_left = top_left + I64Vec2::new(0, size.y);
        let bottom_right = top_left + size;

        let edges = [
            (top_left, top_right),
            (top_left, bottom_left),
            (top_right, bottom_right),
            (bottom_left, bottom_right),
        ];

        for (a, b) in edges {
            self.rasterize_line(a, b, pixel, target);
        }
    }

    /// Digital differential analyzer; both endpoints are always drawn
    pub fn draw_line(&mut self, line: Line, color: Color) {
        let Some(target) = self.target_size() else {
            return;
        };
        self.rasterize_line(line.a.as_i64vec2(), line.b.as_i64vec2(), pack(color), target);
    }

    /// Quadratic Bézier through `control`, approximated by `resolution` straight segments
    pub fn draw_bezier(&mut self, start: Point, end: Point, control: Point, resolution: u32, color: Color) {
        let Some(target) = self.target_size() else {
            return;
        };

        let pixel = pack(color);
        if resolution == 0 {
            self.rasterize_line(start.as_i64vec2(), end.as_i64vec2(), pixel, target);
            return;
        }

        let (p0, p1, p2) = (start.as_dvec2(), control.as_dvec2(), end.as_dvec2());
        let mut previous = start.as_i64vec2();

        for i in 1..=resolution {
            let t = f64::from(i) / f64::from(resolution);
            let point = quadratic_point(p0, p1, p2, t).round().as_i64vec2();
            self.rasterize_line(previous, point, pixel, target);
            previous = point;
        }
    }

    /// Filled disc: pixels of `[cx - r, cx + r) × [cy - r, cy + r)` within `r` of the center
    pub fn draw_circle(&mut self, circle: Circle, color: Color) {
        let Some(target) = self.target_size() else {
            return;
        };

        let pixel = pack(color);
        let center = circle.center.as_i64vec2();
        let r = i64::from(circle.radius);
        let r_sq = r * r;
        let (min, max) = ((center - r).max(I64Vec2::ZERO), (center + r).min(target));

        for y in min.y..max.y {
            let dy = y - center.y;
            for x in min.x..max.x {
                let dx = x - center.x;
                if dx * dx + dy * dy <= r_sq {
                    self.plot(x, y, pixel);
                }
            }
        }
    }

    /// One pixel wide ring, midpoint algorithm with four-way symmetry.
    ///
    /// A negative radius draws nothing.
    pub fn draw_circle_lines(&mut self, circle: Circle, color: Color) {
        let Some(target) = self.target_size() else {
            return;
        };

        let pixel = pack(color);
        let center = circle.center.as_i64vec2();
        let radius = i64::from(circle.radius);
        if radius < 0 || !ring_crosses(center, radius, target) {
            return;
        }

        let (cx, cy) = (center.x, center.y);
        let mut x = -radius;
        let mut y = 0;
        let mut err = 2 - 2 * radius;

        loop {
            self.plot(cx - x, cy + y, pixel);
            self.plot(cx - y, cy - x, pixel);
            self.plot(cx + x, cy - y, pixel);
            self.plot(cx + y, cy + x, pixel);

            let previous = err;
            if previous <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if previous > x || err > y {
                x += 1;
                err += x * 2 + 1;
            }

            if x >= 0 {
                break;
            }
        }
    }

    /// DDA between widened endpoints.
    ///
    /// The major axis advances exactly one pixel per step, so only the steps
    /// landing inside `target` along it are sampled.
    fn rasterize_line(&mut self, a: I64Vec2, b: I64Vec2, pixel: Pixel, target: I64Vec2) {
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs());

        if steps == 0 {
            self.plot(a.x, a.y, pixel);
            return;
        }

        let (origin, direction, extent) = if delta.x.abs() >= delta.y.abs() {
            (a.x, delta.x.signum(), target.x)
        } else {
            (a.y, delta.y.signum(), target.y)
        };
        let (low, high) = if direction > 0 {
            (-origin, extent - 1 - origin)
        } else {
            (origin - (extent - 1), origin)
        };

        for i in low.max(0)..=high.min(steps) {
            let x = a.x + step_offset(delta.x, i, steps);
            let y = a.y + step_offset(delta.y, i, steps);
            self.plot(x, y, pixel);
        }
    }
}

/// `delta * step / steps` rounded half away from zero, exact for any `i64` inputs
fn step_offset(delta: i64, step: i64, steps: i64) -> i64 {
    let n = i128::from(delta) * i128::from(step);
    let d = i128::from(steps);
    let rounded = (2 * n.abs() + d) / (2 * d);
    (rounded * n.signum()) as i64
}

/// Whether a midpoint ring of `radius` can land on any pixel of a `target`-sized buffer.
///
/// Ring pixels stay within one pixel of the true radius.
fn ring_crosses(center: I64Vec2, radius: i64, target: I64Vec2) -> bool {
    let dist_sq = |v: I64Vec2| {
        let (x, y) = (i128::from(v.x), i128::from(v.y));
        x * x + y * y
    };

    let last = target - 1;
    let near = center.clamp(I64Vec2::ZERO, last) - center;
    let far = center.abs().max((last - center).abs());
    let (inner, outer) = (i128::from((radius - 1).max(0)), i128::from(radius + 1));

    dist_sq(near) <= outer * outer && dist_sq(far) >= inner * inner
}

/// De Casteljau evaluation of a quadratic curve
fn quadratic_point(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    a.lerp(b, t)
}
