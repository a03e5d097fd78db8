//! Control-point types for color and opacity curves.

use crate::interp;
use serde::{Deserialize, Serialize};

/// A point on a sorted control curve over [0, 1].
///
/// Implementors carry a curve position plus one or more value channels.
/// The trait is the seam that lets position search and interpolation work
/// over color and opacity sequences alike.
pub trait ControlPoint: Copy + PartialEq {
    /// Curve position in [0, 1].
    fn position(&self) -> f32;

    /// The same point relocated to `position`.
    fn at_position(self, position: f32) -> Self;

    /// The same point with every value channel clamped to [0, 1].
    fn clamped(self) -> Self;

    /// A new point at `position` whose value channels are interpolated
    /// between `left` and `right` (anchored at their own positions).
    fn between(left: Self, right: Self, position: f32) -> Self;
}

/// An RGB color anchored at a curve position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPoint {
    pub position: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorPoint {
    /// Create a color point. Position and channels are clamped to [0, 1].
    pub fn new(position: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            r,
            g,
            b,
        }
        .clamped()
    }

    pub fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl ControlPoint for ColorPoint {
    fn position(&self) -> f32 {
        self.position
    }

    fn at_position(self, position: f32) -> Self {
        Self { position, ..self }
    }

    fn clamped(self) -> Self {
        Self {
            position: self.position,
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    fn between(left: Self, right: Self, position: f32) -> Self {
        let (lp, rp) = (left.position, right.position);
        Self {
            position,
            r: interp::lerp(left.r, right.r, lp, rp, position),
            g: interp::lerp(left.g, right.g, lp, rp, position),
            b: interp::lerp(left.b, right.b, lp, rp, position),
        }
    }
}

/// An opacity value anchored at a curve position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpacityPoint {
    pub position: f32,
    pub opacity: f32,
}

impl OpacityPoint {
    /// Create an opacity point. Position and opacity are clamped to [0, 1].
    pub fn new(position: f32, opacity: f32) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            opacity,
        }
        .clamped()
    }
}

impl ControlPoint for OpacityPoint {
    fn position(&self) -> f32 {
        self.position
    }

    fn at_position(self, position: f32) -> Self {
        Self { position, ..self }
    }

    fn clamped(self) -> Self {
        Self {
            position: self.position,
            opacity: self.opacity.clamp(0.0, 1.0),
        }
    }

    fn between(left: Self, right: Self, position: f32) -> Self {
        Self {
            position,
            opacity: interp::lerp(
                left.opacity,
                right.opacity,
                left.position,
                right.position,
                position,
            ),
        }
    }
}
