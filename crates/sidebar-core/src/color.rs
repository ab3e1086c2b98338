use palette::{LinSrgb, Mix, Srgb};
use thiserror::Error;

/// 8-bit sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Returned when a hex color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ParseColorError {
    pub input: String,
    pub reason: String,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    pub const fn from_rgb_u32(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Parse `#rrggbb`, `rrggbb` or the short `#rgb` form.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let srgb: Srgb<u8> = input.trim().parse().map_err(|e| ParseColorError {
            input: input.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(Self::rgb(srgb.red, srgb.green, srgb.blue))
    }

    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Blend toward `other` by `t` in linear light. Alpha is interpolated directly.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let from: LinSrgb<f32> = Srgb::new(self.r, self.g, self.b).into_linear();
        let to: LinSrgb<f32> = Srgb::new(other.r, other.g, other.b).into_linear();
        let mixed: Srgb<u8> = Srgb::from_linear(from.mix(to, t));
        let a = self.a as f32 + (other.a as f32 - self.a as f32) * t;
        Color::rgba(mixed.red, mixed.green, mixed.blue, a.round() as u8)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_rgba())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Color::rgba(r, g, b, a)
    }
}
