//! Geometric primitives and CSS length units

use std::fmt;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Convert a point from the enclosing coordinate space into this
    /// rect's local space (origin at the rect's top-left corner).
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }
}

/// A CSS length: pixels, percent, or a percent+pixel calc expression
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
    /// `calc(<percent>% + <px>px)`; a negative pixel part renders as `-`
    Calc { percent: f32, px: f32 },
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(v) => write!(f, "{v}%"),
            Length::Calc { percent, px } => {
                if *px < 0.0 {
                    write!(f, "calc({percent}% - {}px)", -px)
                } else {
                    write!(f, "calc({percent}% + {px}px)")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_to_local() {
        let rect = Rect::new(100.0, 40.0, 400.0, 560.0);
        let local = rect.to_local(Point::new(400.0, 90.0));
        assert_eq!(local, Point::new(300.0, 50.0));
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(36.0).to_string(), "36px");
        assert_eq!(Length::Percent(-280.0).to_string(), "-280%");
        assert_eq!(
            Length::Calc {
                percent: -50.0,
                px: 4.0
            }
            .to_string(),
            "calc(-50% + 4px)"
        );
        assert_eq!(
            Length::Calc {
                percent: 100.0,
                px: -473.0
            }
            .to_string(),
            "calc(100% - 473px)"
        );
    }
}
