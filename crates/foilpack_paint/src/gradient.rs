//! Linear gradient descriptors

use crate::color::Color;
use smallvec::SmallVec;
use std::fmt;

/// A gradient stop; `offset` is a percentage (0.0 to 100.0), or `None`
/// to let the renderer distribute the stop automatically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: Option<f32>,
    pub color: Color,
}

/// A directional linear gradient, angle in degrees
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub angle: f32,
    pub stops: SmallVec<[GradientStop; 8]>,
}

impl LinearGradient {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            stops: SmallVec::new(),
        }
    }

    /// Add a stop at an explicit percentage offset
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: Some(offset),
            color,
        });
        self
    }

    /// Add a stop without an explicit offset
    pub fn stop_auto(mut self, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: None,
            color,
        });
        self
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle)?;
        for stop in &self.stops {
            match stop.offset {
                Some(offset) => write!(f, ", {} {}%", stop.color, offset)?,
                None => write!(f, ", {}", stop.color)?,
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let gradient = LinearGradient::new(135.0)
            .stop(50.0, Color::rgb8_alpha(155, 156, 152, 0.5))
            .stop(60.0, Color::rgb8_alpha(255, 250, 250, 0.6));
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(135deg, rgba(155, 156, 152, 0.5) 50%, \
             rgba(255, 250, 250, 0.6) 60%)"
        );
    }

    #[test]
    fn test_auto_stop_omits_offset() {
        let gradient = LinearGradient::new(90.0)
            .stop_auto(Color::WHITE.with_alpha(0.7))
            .stop(100.0, Color::WHITE);
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(90deg, rgba(255, 255, 255, 0.7), \
             rgba(255, 255, 255, 1) 100%)"
        );
    }
}
