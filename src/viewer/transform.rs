use super::state::{Point, ViewerState};
use serde::Serialize;
use std::fmt;

/// Affine transform applied to the modal image: translate first, then a
/// uniform scale about the image's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Project viewer state onto a transform
    pub fn from_state(state: &ViewerState) -> Self {
        Self {
            translate_x: state.translate.x,
            translate_y: state.translate.y,
            scale: state.scale,
        }
    }

    /// Row-major 3x3 matrix of the composed transform
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.scale, 0.0, self.translate_x],
            [0.0, self.scale, self.translate_y],
            [0.0, 0.0, 1.0],
        ]
    }

    /// Map an image-local point (unscaled pixels from the image's top-left)
    /// to viewport coordinates, given the image's untransformed layout origin.
    pub fn apply(&self, origin: Point, local: Point) -> Point {
        Point::new(
            origin.x + self.translate_x + self.scale * local.x,
            origin.y + self.translate_y + self.scale * local.y,
        )
    }

    /// Inverse of [`Transform::apply`]
    pub fn to_local(&self, origin: Point, screen: Point) -> Point {
        Point::new(
            (screen.x - origin.x - self.translate_x) / self.scale,
            (screen.y - origin.y - self.translate_y) / self.scale,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// CSS `transform` value
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
