// SPDX-License-Identifier: MPL-2.0
//! Transform applied to the displayed image: scale, pan offset and rotation.

use super::rotation::RotationAngle;
use super::zoom::{ZoomScale, ZoomStep};
use iced::Vector;

/// View transform, applied in the order translate, scale, rotate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: ZoomScale,
    pub offset: Vector,
    pub rotation: RotationAngle,
}

impl Transform {
    /// Scale 1, offset (0, 0), rotation 0.
    pub const IDENTITY: Self = Self {
        scale: ZoomScale::IDENTITY,
        offset: Vector::ZERO,
        rotation: RotationAngle::ZERO,
    };

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn zoom_in(&mut self, step: ZoomStep) {
        self.scale = self.scale.zoom_in(step);
    }

    pub fn zoom_out(&mut self, step: ZoomStep) {
        self.scale = self.scale.zoom_out(step);
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.quarter_turn();
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_identity() {
        let mut transform = Transform::default();
        transform.zoom_in(ZoomStep::default());
        transform.rotate();
        transform.offset = Vector::new(12.0, -3.0);
        assert!(!transform.is_identity());

        transform.reset();
        assert!(transform.is_identity());
        assert_eq!(transform.scale.as_factor(), 1.0);
        assert_eq!(transform.offset, Vector::ZERO);
        assert_eq!(transform.rotation.degrees(), 0);
    }

    #[test]
    fn default_equals_identity() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }
}
