//! Clip-path descriptors

use crate::geometry::Length;
use smallvec::SmallVec;
use std::fmt;

/// A clip-path polygon vertex
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipVertex {
    pub x: Length,
    pub y: Length,
}

impl ClipVertex {
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }
}

/// A clip path: either a polygon or the neutral no-op position
#[derive(Clone, Debug, PartialEq)]
pub enum ClipPath {
    /// The no-op clip, serialized as `50% 50%`
    Neutral,
    Polygon(SmallVec<[ClipVertex; 4]>),
}

impl ClipPath {
    pub fn polygon(vertices: impl IntoIterator<Item = ClipVertex>) -> Self {
        ClipPath::Polygon(vertices.into_iter().collect())
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, ClipPath::Neutral)
    }
}

impl fmt::Display for ClipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipPath::Neutral => write!(f, "50% 50%"),
            ClipPath::Polygon(vertices) => {
                write!(f, "polygon(")?;
                for (i, v) in vertices.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", v.x, v.y)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Length::{Percent, Px};

    #[test]
    fn test_neutral_display() {
        assert_eq!(ClipPath::Neutral.to_string(), "50% 50%");
    }

    #[test]
    fn test_polygon_display() {
        let clip = ClipPath::polygon([
            ClipVertex::new(Px(0.0), Px(21.6)),
            ClipVertex::new(Percent(100.0), Percent(0.0)),
            ClipVertex::new(Percent(100.0), Percent(100.0)),
            ClipVertex::new(Percent(0.0), Percent(100.0)),
        ]);
        assert_eq!(
            clip.to_string(),
            "polygon(0px 21.6px, 100% 0%, 100% 100%, 0% 100%)"
        );
    }
}
