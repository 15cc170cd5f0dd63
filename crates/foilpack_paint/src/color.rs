//! Color types and utilities

use std::fmt;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from u8 channels with a fractional alpha.
    ///
    /// Foil gradient stops are authored as `rgba(155, 156, 152, 0.5)`,
    /// so the alpha stays an exact f32 and round-trips through `Display`.
    pub fn rgb8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_serialization() {
        let c = Color::rgb8_alpha(155, 156, 152, 0.5);
        assert_eq!(c.to_string(), "rgba(155, 156, 152, 0.5)");

        let opaque = Color::from_rgba8(255, 250, 250, 255);
        assert_eq!(opaque.to_string(), "rgba(255, 250, 250, 1)");
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.7);
        assert_eq!(c.to_string(), "rgba(255, 255, 255, 0.7)");
    }
}
