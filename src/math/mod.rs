mod color;
mod vector;

pub use color::{
    fade, mix, pack, pack_f, pixel_eq, unpack, unpack_f, Color, ColorF, Pixel, BLACK, BLANK, BLUE,
    GREEN, PINK, RED, WHITE, YELLOW,
};
pub use vector::{div_factor, Circle, Line, Point, Rect, Size};
