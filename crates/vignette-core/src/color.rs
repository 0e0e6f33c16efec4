//! Color helpers for the sketches.

use ratatui::style::Color;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// A grey with all channels set to `v`.
    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`, so the result is always a displayable
    /// color lying between the two endpoints.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Composite this color with `alpha` (0-255) over `background`.
    pub fn with_alpha(self, alpha: u8, background: Rgb) -> Rgb {
        background.lerp(self, alpha as f32 / 255.0)
    }

    /// Same as [`Rgb::with_alpha`] with a fractional opacity.
    pub fn with_opacity(self, opacity: f32, background: Rgb) -> Rgb {
        background.lerp(self, opacity)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0x1515eb), Rgb::new(0x15, 0x15, 0xeb));
        assert_eq!(Rgb::from_hex(0xffffff), Rgb::WHITE);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(105, 60, 15));
    }

    #[test]
    fn test_lerp_clamps_out_of_range() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, -0.02), a);
        assert_eq!(a.lerp(b, 1.02), b);
        assert_eq!(a.lerp(b, f32::NAN), a);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Rgb::WHITE.with_alpha(255, Rgb::BLACK), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.with_alpha(0, Rgb::BLACK), Rgb::BLACK);
        assert_eq!(Rgb::WHITE.with_alpha(204, Rgb::BLACK), Rgb::grey(204));
    }

    #[test]
    fn test_into_ratatui_color() {
        let color: Color = Rgb::new(1, 2, 3).into();
        assert_eq!(color, Color::Rgb(1, 2, 3));
    }
}
