/// Packed 32-bit pixel: R in the lowest byte, then G, B, and A in the highest.
/// On little-endian targets the bytes sit in memory as R, G, B, A.
pub type Pixel = u32;

/// Unpacked 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color with channels in the `[0.0, 1.0]` range
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const RED: Color = Color::new(255, 0, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0, 255);
pub const BLUE: Color = Color::new(0, 0, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0, 255);
pub const PINK: Color = Color::new(255, 0, 255, 255);
pub const WHITE: Color = Color::new(255, 255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0, 255);
pub const BLANK: Color = Color::new(0, 0, 0, 0);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_f(self) -> ColorF {
        ColorF {
            r: self.r as f32 / 255.0,
            g: self.g as f32 / 255.0,
            b: self.b as f32 / 255.0,
            a: self.a as f32 / 255.0,
        }
    }
}

impl ColorF {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8 bits per channel, clamping out-of-range values
    pub fn to_color(self) -> Color {
        Color {
            r: unit_to_byte(self.r),
            g: unit_to_byte(self.g),
            b: unit_to_byte(self.b),
            a: unit_to_byte(self.a),
        }
    }
}

impl From<Pixel> for Color {
    fn from(pixel: Pixel) -> Self {
        unpack(pixel)
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        pack(color)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

fn unit_to_byte(value: f32) -> u8 {
    // NaN maps to 0 through the saturating cast
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Pack a color into a pixel
#[inline]
pub fn pack(color: Color) -> Pixel {
    u32::from_le_bytes([color.r, color.g, color.b, color.a])
}

/// Unpack a pixel into its channels, the exact inverse of [`pack`]
#[inline]
pub fn unpack(pixel: Pixel) -> Color {
    let [r, g, b, a] = pixel.to_le_bytes();
    Color { r, g, b, a }
}

pub fn pack_f(color: ColorF) -> Pixel {
    pack(color.to_color())
}

pub fn unpack_f(pixel: Pixel) -> ColorF {
    unpack(pixel).to_f()
}

/// Compare two pixels channel by channel
pub fn pixel_eq(a: Pixel, b: Pixel) -> bool {
    unpack(a) == unpack(b)
}

/// Linear interpolation from `base` towards `overlay` by `alpha / 255`.
///
/// The result carries `alpha` as its alpha channel. An opaque alpha returns
/// `overlay` untouched and a zero alpha returns a fully transparent color,
/// both without touching floating point.
pub fn mix(base: Color, overlay: Color, alpha: u8) -> Color {
    match alpha {
        255 => overlay,
        0 => Color { a: 0, ..base },
        _ => {
            let t = alpha as f32 / 255.0;
            let lerp = |from: u8, to: u8| -> u8 {
                let value = from as f32 + (to as f32 - from as f32) * t;
                value.round().clamp(0.0, 255.0) as u8
            };

            Color {
                r: lerp(base.r, overlay.r),
                g: lerp(base.g, overlay.g),
                b: lerp(base.b, overlay.b),
                a: alpha,
            }
        }
    }
}

/// Replace alpha with `factor * 255`, clamped to `[0, 255]`
pub fn fade(color: Color, factor: f32) -> Color {
    Color {
        a: unit_to_byte(factor),
        ..color
    }
}
