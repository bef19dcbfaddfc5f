// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn rotation of the displayed image.

/// Rotation angle in 90° increments: 0°, 90°, 180° or 270°.
///
/// # Example
///
/// ```
/// use iced_lightbox::ui::state::RotationAngle;
///
/// let angle = RotationAngle::default().quarter_turn();
/// assert_eq!(angle.degrees(), 90);
///
/// let full = angle.quarter_turn().quarter_turn().quarter_turn();
/// assert_eq!(full, RotationAngle::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    pub const ZERO: Self = Self(0);

    /// Snaps `degrees` down to a multiple of 90 and wraps it into 0–270.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self((degrees / 90 * 90) % 360)
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    /// Adds 90° clockwise, modulo 360.
    #[must_use]
    pub fn quarter_turn(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }
}
