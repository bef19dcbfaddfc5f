// SPDX-License-Identifier: MPL-2.0
//! Zoom scale and zoom step value types.
//!
//! Both are stored as whole percentages so repeated steps stay exact:
//! five steps of 10% from 100% land on 150%, not 150.00002%.

pub use crate::config::{
    DEFAULT_ZOOM_PERCENT, DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_PERCENT, MAX_ZOOM_STEP_PERCENT,
    MIN_ZOOM_PERCENT, MIN_ZOOM_STEP_PERCENT,
};

/// Image scale, guaranteed to be within 50%–400% (0.5–4.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Identity scale (1.0).
    pub const IDENTITY: Self = Self(DEFAULT_ZOOM_PERCENT);

    /// Creates a scale from a percentage, clamping to the valid range.
    /// A non-finite input yields the identity scale.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if !percent.is_finite() {
            return Self::IDENTITY;
        }
        Self(percent.round().clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g., 150% → 1.5).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_PERCENT
    }

    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 + step.percent())
    }

    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 - step.percent())
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom step percentage, guaranteed to be within 1%–100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if !percent.is_finite() {
            return Self::default();
        }
        Self(percent.round().clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT))
    }

    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_steps_in_reach_one_and_a_half_exactly() {
        let step = ZoomStep::default();
        let mut scale = ZoomScale::default();
        for _ in 0..5 {
            scale = scale.zoom_in(step);
        }
        assert_eq!(scale.as_factor(), 1.5);
    }

    #[test]
    fn repeated_zoom_in_caps_at_four() {
        let step = ZoomStep::default();
        let mut scale = ZoomScale::default();
        for _ in 0..40 {
            scale = scale.zoom_in(step);
            assert!(scale.as_factor() <= 4.0);
        }
        assert_eq!(scale.as_factor(), 4.0);
        assert!(scale.is_max());
    }

    #[test]
    fn repeated_zoom_out_floors_at_half() {
        let step = ZoomStep::default();
        let mut scale = ZoomScale::default();
        for _ in 0..40 {
            scale = scale.zoom_out(step);
            assert!(scale.as_factor() >= 0.5);
        }
        assert_eq!(scale.as_factor(), 0.5);
        assert!(scale.is_min());
    }

    #[test]
    fn new_clamps_out_of_range_percentages() {
        assert_eq!(ZoomScale::new(5.0).percent(), MIN_ZOOM_PERCENT);
        assert_eq!(ZoomScale::new(9000.0).percent(), MAX_ZOOM_PERCENT);
        assert_eq!(ZoomStep::new(0.0).percent(), MIN_ZOOM_STEP_PERCENT);
        assert_eq!(ZoomStep::new(250.0).percent(), MAX_ZOOM_STEP_PERCENT);
    }

    #[test]
    fn non_finite_percentages_fall_back_to_defaults() {
        assert_eq!(ZoomScale::new(f32::NAN), ZoomScale::IDENTITY);
        assert_eq!(ZoomScale::new(f32::INFINITY), ZoomScale::IDENTITY);
        assert_eq!(ZoomStep::new(f32::NAN), ZoomStep::default());
        assert_eq!(ZoomStep::new(f32::NEG_INFINITY), ZoomStep::default());
    }

    #[test]
    fn identity_is_default() {
        assert_eq!(ZoomScale::default(), ZoomScale::IDENTITY);
        assert_eq!(ZoomScale::IDENTITY.as_factor(), 1.0);
    }
}
