use glam::IVec2;

/// Screen-space position, origin top-left, y pointing down
pub type Point = IVec2;

/// Width and height, both expected to be non-negative
pub type Size = IVec2;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Zero-area rectangles draw nothing
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Saturates at the `i32` range for rectangles reaching past it
    pub fn center(&self) -> Point {
        self.position.saturating_add(div_factor(self.size, 2.0))
    }

    /// Half-open containment test, `[x, x + w) × [y, y + h)`
    pub fn contains(&self, point: Point) -> bool {
        let (p, start) = (point.as_i64vec2(), self.position.as_i64vec2());
        let end = start + self.size.as_i64vec2();
        p.x >= start.x && p.x < end.x && p.y >= start.y && p.y < end.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// Segment between two points; `a == b` is a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Divide both components by `factor`, truncating toward zero
pub fn div_factor(v: IVec2, factor: f32) -> IVec2 {
    (v.as_vec2() / factor).as_ivec2()
}
