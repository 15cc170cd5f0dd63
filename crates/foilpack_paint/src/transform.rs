//! 2D/3D transform descriptors

use crate::geometry::Length;
use smallvec::SmallVec;
use std::fmt;

/// A single transform function; rotations are in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    TranslateX(Length),
    TranslateY(Length),
    Rotate(f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::TranslateX(len) => write!(f, "translateX({len})"),
            TransformOp::TranslateY(len) => write!(f, "translateY({len})"),
            TransformOp::Rotate(deg) => write!(f, "rotate({deg}deg)"),
            TransformOp::RotateX(deg) => write!(f, "rotateX({deg}deg)"),
            TransformOp::RotateY(deg) => write!(f, "rotateY({deg}deg)"),
            TransformOp::RotateZ(deg) => write!(f, "rotateZ({deg}deg)"),
        }
    }
}

/// An ordered list of transform functions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 4]>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn push(&mut self, op: TransformOp) {
        self.ops.push(op);
    }

    pub fn translate_x(mut self, len: Length) -> Self {
        self.ops.push(TransformOp::TranslateX(len));
        self
    }

    pub fn translate_y(mut self, len: Length) -> Self {
        self.ops.push(TransformOp::TranslateY(len));
        self
    }

    pub fn rotate(mut self, deg: f32) -> Self {
        self.ops.push(TransformOp::Rotate(deg));
        self
    }

    pub fn rotate_x(mut self, deg: f32) -> Self {
        self.ops.push(TransformOp::RotateX(deg));
        self
    }

    pub fn rotate_y(mut self, deg: f32) -> Self {
        self.ops.push(TransformOp::RotateY(deg));
        self
    }

    pub fn rotate_z(mut self, deg: f32) -> Self {
        self.ops.push(TransformOp::RotateZ(deg));
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_transform_display() {
        let transform = Transform::new()
            .translate_x(Length::Calc {
                percent: -50.0,
                px: 4.0,
            })
            .translate_y(Length::Px(44.0))
            .rotate(-1.0);
        assert_eq!(
            transform.to_string(),
            "translateX(calc(-50% + 4px)) translateY(44px) rotate(-1deg)"
        );
    }

    #[test]
    fn test_flap_transform_display() {
        let transform = Transform::new()
            .translate_x(Length::Percent(-100.0))
            .rotate_z(-45.0);
        assert_eq!(
            transform.to_string(),
            "translateX(-100%) rotateZ(-45deg)"
        );
    }

    #[test]
    fn test_identity() {
        assert!(Transform::new().is_identity());
        assert_eq!(Transform::new().to_string(), "");
    }
}
